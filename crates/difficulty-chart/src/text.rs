//! Text measurement and drawing.
//!
//! Labels are drawn either with a TrueType font loaded through rusttype or,
//! when no font file is configured, with the built-in stroke glyphs.

use std::path::Path;

use rusttype::{point, Font, Scale};

use crate::canvas::{Canvas, Rgba};
use crate::error::{ChartError, ChartResult};
use crate::glyphs;

/// Cap height as a fraction of the font size.
const CAP_HEIGHT_RATIO: f32 = 0.72;

/// Offset of the text drop shadow in pixels.
const SHADOW_OFFSET: (f32, f32) = (1.5, 1.5);

/// Drop shadow color.
const SHADOW_COLOR: Rgba = Rgba::black(0.5);

/// Foreground text color.
const TEXT_COLOR: Rgba = Rgba::WHITE;

/// Font weight of a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Weight {
    #[default]
    Normal,
    Bold,
}

/// Size and weight of a piece of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub weight: Weight,
}

impl TextStyle {
    pub fn normal(size: f32) -> Self {
        Self {
            size,
            weight: Weight::Normal,
        }
    }

    pub fn bold(size: f32) -> Self {
        Self {
            size,
            weight: Weight::Bold,
        }
    }
}

/// Ink extents of a string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextExtents {
    pub width: f32,
    /// Height above the baseline.
    pub height: f32,
}

enum Face {
    Stroke,
    TrueType(Font<'static>),
}

/// Draws label text onto a canvas.
pub struct TextRenderer {
    face: Face,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::builtin()
    }
}

impl std::fmt::Debug for TextRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let face = match self.face {
            Face::Stroke => "stroke",
            Face::TrueType(_) => "truetype",
        };
        f.debug_struct("TextRenderer").field("face", &face).finish()
    }
}

impl TextRenderer {
    /// Renderer using the built-in stroke glyphs.
    pub fn builtin() -> Self {
        Self { face: Face::Stroke }
    }

    /// Renderer using a TrueType font held in memory.
    pub fn from_font_bytes(data: Vec<u8>) -> ChartResult<Self> {
        let font = Font::try_from_vec(data)
            .ok_or_else(|| ChartError::Font("not a valid TrueType font".to_string()))?;
        Ok(Self {
            face: Face::TrueType(font),
        })
    }

    /// Renderer using a TrueType font file.
    pub fn from_font_file(path: impl AsRef<Path>) -> ChartResult<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path)
            .map_err(|e| ChartError::Font(format!("failed to read {}: {}", path.display(), e)))?;
        let renderer = Self::from_font_bytes(data)?;
        tracing::info!(path = %path.display(), "Loaded label font");
        Ok(renderer)
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self.face, Face::Stroke)
    }

    /// Measure a string at the given style.
    pub fn measure(&self, text: &str, style: TextStyle) -> TextExtents {
        let width = match &self.face {
            Face::Stroke => {
                let unit = stroke_unit(style.size);
                let advance: f32 = text.chars().map(glyphs::advance).sum();
                // Trailing tracking is not ink.
                (advance - glyphs::TRACKING).max(0.0) * unit
            }
            Face::TrueType(font) => {
                let scale = Scale::uniform(style.size);
                font.layout(text, scale, point(0.0, 0.0))
                    .last()
                    .map(|g| g.position().x + g.unpositioned().h_metrics().advance_width)
                    .unwrap_or(0.0)
            }
        };

        TextExtents {
            width,
            height: style.size * CAP_HEIGHT_RATIO,
        }
    }

    /// Draw a string with its left edge at `x` and baseline at `y`.
    pub fn draw(
        &self,
        canvas: &mut Canvas,
        text: &str,
        x: f32,
        y: f32,
        style: TextStyle,
        color: Rgba,
    ) {
        match &self.face {
            Face::Stroke => draw_stroke_text(canvas, text, x, y, style, color),
            Face::TrueType(font) => draw_truetype_text(canvas, font, text, x, y, style, color),
        }
    }

    /// Draw a string twice: a soft black shadow, then white on top.
    pub fn draw_with_shadow(
        &self,
        canvas: &mut Canvas,
        text: &str,
        x: f32,
        y: f32,
        style: TextStyle,
    ) {
        self.draw(
            canvas,
            text,
            x + SHADOW_OFFSET.0,
            y + SHADOW_OFFSET.1,
            style,
            SHADOW_COLOR,
        );
        self.draw(canvas, text, x, y, style, TEXT_COLOR);
    }
}

/// Pixel size of one glyph grid unit.
fn stroke_unit(size: f32) -> f32 {
    size * CAP_HEIGHT_RATIO / glyphs::GRID_HEIGHT
}

fn draw_stroke_text(
    canvas: &mut Canvas,
    text: &str,
    x: f32,
    y: f32,
    style: TextStyle,
    color: Rgba,
) {
    let unit = stroke_unit(style.size);
    let top = y - glyphs::GRID_HEIGHT * unit;
    let line_width = match style.weight {
        Weight::Normal => style.size * 0.09,
        Weight::Bold => style.size * 0.13,
    };

    let mut pen_x = x;
    let mut points = Vec::new();
    for ch in text.chars() {
        if let Some(glyph) = glyphs::lookup(ch) {
            for stroke in glyph.strokes {
                points.clear();
                points.extend(stroke.iter().map(|&(gx, gy)| (pen_x + gx * unit, top + gy * unit)));
                canvas.polyline(&points, line_width, color);
            }
        }
        pen_x += glyphs::advance(ch) * unit;
    }
}

fn draw_truetype_text(
    canvas: &mut Canvas,
    font: &Font<'static>,
    text: &str,
    x: f32,
    y: f32,
    style: TextStyle,
    color: Rgba,
) {
    let scale = Scale::uniform(style.size);
    for glyph in font.layout(text, scale, point(x, y)) {
        if let Some(bb) = glyph.pixel_bounding_box() {
            glyph.draw(|gx, gy, coverage| {
                canvas.blend_pixel(bb.min.x + gx as i32, bb.min.y + gy as i32, color, coverage);
            });
        }
    }
}
