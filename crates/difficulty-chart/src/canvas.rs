//! Drawing surface backed by a tiny-skia pixmap.

use tiny_skia::{
    FillRule, LineCap, Paint, PathBuilder, Pixmap, PremultipliedColorU8, Stroke, StrokeDash,
    Transform,
};

use crate::error::{ChartError, ChartResult};
use crate::pixels::ChannelOrder;
use crate::taxonomy::Rgb;

/// Cubic bezier handle length for a quarter circle.
const KAPPA: f32 = 0.552_284_8;

/// An RGBA color with straight alpha in 0.0-1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 1.0);

    pub const fn new(r: u8, g: u8, b: u8, alpha: f32) -> Self {
        Self { r, g, b, alpha }
    }

    pub const fn opaque(rgb: Rgb) -> Self {
        Self::new(rgb.r, rgb.g, rgb.b, 1.0)
    }

    pub const fn black(alpha: f32) -> Self {
        Self::new(0, 0, 0, alpha)
    }

    fn paint(&self) -> Paint<'static> {
        let mut paint = Paint::default();
        let a = (self.alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        paint.set_color_rgba8(self.r, self.g, self.b, a);
        paint.anti_alias = true;
        paint
    }
}

/// A fixed-size pixel buffer that chart elements are drawn into.
///
/// Created per render and never shared.
pub struct Canvas {
    pixmap: Pixmap,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> ChartResult<Self> {
        let pixmap = Pixmap::new(width, height).ok_or(ChartError::Canvas { width, height })?;
        Ok(Self { pixmap })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Raw pixel bytes in [`Canvas::channel_order`].
    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }

    /// Byte order of each pixel in [`Canvas::data`].
    ///
    /// Always [`ChannelOrder::Rgba`]: tiny-skia stores pixels as RGBA.
    pub fn channel_order(&self) -> ChannelOrder {
        ChannelOrder::Rgba
    }

    /// Color at a pixel, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.pixmap
            .pixel(x, y)
            .map(|p| [p.red(), p.green(), p.blue(), p.alpha()])
    }

    /// Fill the whole canvas with an opaque color.
    pub fn fill(&mut self, color: Rgb) {
        self.pixmap
            .fill(tiny_skia::Color::from_rgba8(color.r, color.g, color.b, 255));
    }

    /// Straight line segment.
    pub fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, width: f32, color: Rgba) {
        let stroke = Stroke {
            width,
            ..Stroke::default()
        };
        self.stroke_segment(x1, y1, x2, y2, &stroke, color);
    }

    /// Dashed line segment; `dash` alternates on and off lengths.
    pub fn dashed_line(
        &mut self,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        width: f32,
        dash: &[f32],
        color: Rgba,
    ) {
        let stroke = Stroke {
            width,
            dash: StrokeDash::new(dash.to_vec(), 0.0),
            ..Stroke::default()
        };
        self.stroke_segment(x1, y1, x2, y2, &stroke, color);
    }

    /// Open polyline with round caps and joins, used for stroke glyphs.
    pub fn polyline(&mut self, points: &[(f32, f32)], width: f32, color: Rgba) {
        let Some((&(x0, y0), rest)) = points.split_first() else {
            return;
        };
        let mut pb = PathBuilder::new();
        pb.move_to(x0, y0);
        if rest.is_empty() {
            // Single point: a zero-length segment still gets round caps.
            pb.line_to(x0, y0 + 0.01);
        }
        for &(x, y) in rest {
            pb.line_to(x, y);
        }

        let stroke = Stroke {
            width,
            line_cap: LineCap::Round,
            line_join: tiny_skia::LineJoin::Round,
            ..Stroke::default()
        };
        if let Some(path) = pb.finish() {
            self.pixmap
                .stroke_path(&path, &color.paint(), &stroke, Transform::identity(), None);
        }
    }

    /// Rectangle with rounded top corners and square bottom corners.
    ///
    /// The radius is clamped to the rectangle height and to half its width.
    pub fn rounded_top_rect(&mut self, x: f32, y: f32, w: f32, h: f32, radius: f32, color: Rgba) {
        if w <= 0.0 || h <= 0.0 {
            return;
        }
        let r = radius.min(h).min(w / 2.0).max(0.0);
        let k = r * KAPPA;

        let mut pb = PathBuilder::new();
        pb.move_to(x, y + h);
        pb.line_to(x, y + r);
        pb.cubic_to(x, y + r - k, x + r - k, y, x + r, y);
        pb.line_to(x + w - r, y);
        pb.cubic_to(x + w - r + k, y, x + w, y + r - k, x + w, y + r);
        pb.line_to(x + w, y + h);
        pb.close();

        if let Some(path) = pb.finish() {
            self.pixmap.fill_path(
                &path,
                &color.paint(),
                FillRule::Winding,
                Transform::identity(),
                None,
            );
        }
    }

    /// Blend a single pixel with partial coverage (source-over).
    ///
    /// Used for rasterized TrueType glyphs. Out-of-bounds pixels are ignored.
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Rgba, coverage: f32) {
        if x < 0 || y < 0 || x as u32 >= self.width() || y as u32 >= self.height() {
            return;
        }
        let alpha = (color.alpha * coverage).clamp(0.0, 1.0);
        if alpha <= 0.0 {
            return;
        }

        let idx = y as usize * self.width() as usize + x as usize;
        let pixels = self.pixmap.pixels_mut();
        let dst = pixels[idx];
        let inv = 1.0 - alpha;
        let mix = |src: u8, dst: u8| (src as f32 * alpha + dst as f32 * inv).round() as u8;

        let blended = PremultipliedColorU8::from_rgba(
            mix(color.r, dst.red()),
            mix(color.g, dst.green()),
            mix(color.b, dst.blue()),
            (255.0 * alpha + dst.alpha() as f32 * inv).round() as u8,
        );
        if let Some(blended) = blended {
            pixels[idx] = blended;
        }
    }

    fn stroke_segment(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, stroke: &Stroke, color: Rgba) {
        let mut pb = PathBuilder::new();
        pb.move_to(x1, y1);
        pb.line_to(x2, y2);
        if let Some(path) = pb.finish() {
            self.pixmap
                .stroke_path(&path, &color.paint(), stroke, Transform::identity(), None);
        }
    }
}
