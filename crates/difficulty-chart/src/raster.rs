//! Rasterization of a computed chart layout.
//!
//! Draw order is fixed: background, gridlines, bar shadows, bars, category
//! labels, tick labels, vote counts, average marker, average label.

use crate::canvas::{Canvas, Rgba};
use crate::config::ChartConfig;
use crate::error::ChartResult;
use crate::layout::ChartLayout;
use crate::taxonomy::Rgb;
use crate::text::{TextRenderer, TextStyle};

/// Chart background (#2b2d31).
pub const BACKGROUND: Rgb = Rgb::new(0x2b, 0x2d, 0x31);

const GRID_COLOR: Rgba = Rgba::new(255, 255, 255, 0.15);
const GRID_WIDTH: f32 = 1.0;

const BAR_SHADOW_OFFSET: (f32, f32) = (3.0, 3.0);
const BAR_SHADOW_COLOR: Rgba = Rgba::black(0.3);

const MARKER_WIDTH: f32 = 2.0;
const MARKER_DASH: [f32; 2] = [8.0, 5.0];

/// Distance from the chart baseline down to the category label baseline.
const CATEGORY_LABEL_OFFSET: f32 = 30.0;
/// Gap between a tick label and the chart's left edge.
const TICK_LABEL_GAP: f32 = 10.0;
/// Distance from a bar top up to its vote-count baseline.
const COUNT_LABEL_OFFSET: f32 = 15.0;
/// Distance from the top margin up to the average label baseline.
const AVERAGE_LABEL_OFFSET: f32 = 45.0;

/// What the average marker says.
#[derive(Debug, Clone, PartialEq)]
pub struct AverageLabel<'a> {
    pub value: &'a str,
    pub difficulty: &'a str,
}

impl AverageLabel<'_> {
    pub fn text(&self) -> String {
        format!("AVG: {} ({})", self.value, self.difficulty.to_uppercase())
    }
}

/// Draw a complete chart onto a new canvas.
pub fn rasterize(
    config: &ChartConfig,
    layout: &ChartLayout,
    average: &AverageLabel<'_>,
    text: &TextRenderer,
) -> ChartResult<Canvas> {
    let mut canvas = Canvas::new(config.width, config.height)?;

    canvas.fill(BACKGROUND);
    draw_gridlines(&mut canvas, layout);
    draw_bar_shadows(&mut canvas, config, layout);
    draw_bars(&mut canvas, config, layout);
    draw_category_labels(&mut canvas, config, layout, text);
    draw_tick_labels(&mut canvas, config, layout, text);
    draw_vote_counts(&mut canvas, config, layout, text);
    draw_average_marker(&mut canvas, layout);
    draw_average_label(&mut canvas, config, layout, average, text);

    Ok(canvas)
}

fn draw_gridlines(canvas: &mut Canvas, layout: &ChartLayout) {
    for tick in &layout.ticks {
        canvas.line(
            layout.chart_left,
            tick.y,
            layout.chart_right(),
            tick.y,
            GRID_WIDTH,
            GRID_COLOR,
        );
    }
}

fn draw_bar_shadows(canvas: &mut Canvas, config: &ChartConfig, layout: &ChartLayout) {
    for bar in layout.bars.iter().filter(|bar| bar.has_votes()) {
        canvas.rounded_top_rect(
            bar.x + BAR_SHADOW_OFFSET.0,
            bar.y + BAR_SHADOW_OFFSET.1,
            bar.width,
            bar.height,
            config.bar_radius,
            BAR_SHADOW_COLOR,
        );
    }
}

fn draw_bars(canvas: &mut Canvas, config: &ChartConfig, layout: &ChartLayout) {
    for bar in &layout.bars {
        canvas.rounded_top_rect(
            bar.x,
            bar.y,
            bar.width,
            bar.height,
            config.bar_radius,
            Rgba::opaque(bar.level.color()),
        );
    }
}

fn draw_category_labels(
    canvas: &mut Canvas,
    config: &ChartConfig,
    layout: &ChartLayout,
    text: &TextRenderer,
) {
    let style = TextStyle::normal(config.category_font_size);
    let y = config.height as f32 - config.bottom_margin + CATEGORY_LABEL_OFFSET;

    for bar in &layout.bars {
        let label = bar.level.name.to_uppercase();
        let extents = text.measure(&label, style);
        text.draw_with_shadow(canvas, &label, bar.center_x() - extents.width / 2.0, y, style);
    }
}

fn draw_tick_labels(
    canvas: &mut Canvas,
    config: &ChartConfig,
    layout: &ChartLayout,
    text: &TextRenderer,
) {
    let style = TextStyle::normal(config.tick_font_size);

    for tick in &layout.ticks {
        let label = tick.value.to_string();
        let extents = text.measure(&label, style);
        let x = layout.chart_left - extents.width - TICK_LABEL_GAP;
        text.draw_with_shadow(canvas, &label, x, tick.y + extents.height / 2.0, style);
    }
}

fn draw_vote_counts(
    canvas: &mut Canvas,
    config: &ChartConfig,
    layout: &ChartLayout,
    text: &TextRenderer,
) {
    let style = TextStyle::bold(config.value_font_size);

    for bar in layout.bars.iter().filter(|bar| bar.has_votes()) {
        let label = bar.count.to_string();
        let extents = text.measure(&label, style);
        text.draw_with_shadow(
            canvas,
            &label,
            bar.center_x() - extents.width / 2.0,
            bar.y - COUNT_LABEL_OFFSET,
            style,
        );
    }
}

fn draw_average_marker(canvas: &mut Canvas, layout: &ChartLayout) {
    let marker = &layout.marker;
    canvas.dashed_line(
        marker.x,
        marker.top,
        marker.x,
        marker.bottom,
        MARKER_WIDTH,
        &MARKER_DASH,
        Rgba::WHITE,
    );
}

fn draw_average_label(
    canvas: &mut Canvas,
    config: &ChartConfig,
    layout: &ChartLayout,
    average: &AverageLabel<'_>,
    text: &TextRenderer,
) {
    let style = TextStyle::bold(config.value_font_size);
    let label = average.text();
    let extents = text.measure(&label, style);
    let x = layout.marker.label_x(extents.width);
    let y = config.top_margin - AVERAGE_LABEL_OFFSET;
    text.draw_with_shadow(canvas, &label, x, y, style);
}
