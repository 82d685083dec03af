//! Chart geometry: bar rectangles, axis ticks and the average marker.
//!
//! All coordinates are canvas pixels with the origin at the top-left corner.

use crate::config::ChartConfig;
use crate::taxonomy::{self, DifficultyLevel};
use crate::votes::VoteHistogram;
use crate::window::Window;

/// Number of y-axis ticks, including zero and the maximum.
pub const TICK_COUNT: u64 = 5;

/// Position and size of one bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarGeometry {
    pub level: &'static DifficultyLevel,
    pub count: u64,
    pub x: f32,
    /// Top edge of the bar. Equal to the baseline for empty bars.
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl BarGeometry {
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn has_votes(&self) -> bool {
        self.count > 0
    }
}

/// One y-axis tick and its gridline position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisTick {
    pub value: u64,
    pub y: f32,
}

/// Vertical marker for the weighted average.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AverageMarker {
    pub x: f32,
    pub top: f32,
    pub bottom: f32,
    /// Left and right limits the marker label must stay within.
    pub label_min_x: f32,
    pub label_max_x: f32,
}

impl AverageMarker {
    /// Left edge of a label of the given width, centered on the marker and
    /// pushed back inside the margins when it would cross them.
    pub fn label_x(&self, text_width: f32) -> f32 {
        let mut x = self.x - text_width / 2.0;
        if x < self.label_min_x {
            x = self.label_min_x;
        }
        if x + text_width > self.label_max_x {
            x = self.label_max_x - text_width;
        }
        x
    }
}

/// Everything the rasterizer needs to place chart elements.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub chart_left: f32,
    pub chart_top: f32,
    pub chart_width: f32,
    pub chart_height: f32,
    pub bar_width: f32,
    /// Largest count among visible levels, at least 1.
    pub max_visible_count: u64,
    pub bars: Vec<BarGeometry>,
    pub ticks: Vec<AxisTick>,
    pub marker: AverageMarker,
}

impl ChartLayout {
    pub fn compute(
        config: &ChartConfig,
        window: Window,
        votes: &VoteHistogram,
        average: f64,
    ) -> Self {
        let chart_left = config.left_margin;
        let chart_top = config.top_margin;
        let chart_width = config.chart_width();
        let chart_height = config.chart_height();
        let baseline = chart_top + chart_height;

        let num_bars = window.width() as f32;
        let bar_width = (chart_width - (num_bars - 1.0) * config.bar_gap) / num_bars;

        let levels = &taxonomy::levels()[window.indices()];

        let max_visible_count = levels
            .iter()
            .map(|level| votes.count_for(level))
            .max()
            .unwrap_or(0)
            .max(1);

        let scale = |value: u64| (value as f32 / max_visible_count as f32) * chart_height;

        let bars = levels
            .iter()
            .map(|level| {
                let count = votes.count_for(level);
                let height = scale(count);
                let slot = (level.index - window.min) as f32;
                BarGeometry {
                    level,
                    count,
                    x: chart_left + slot * (bar_width + config.bar_gap),
                    y: baseline - height,
                    width: bar_width,
                    height,
                }
            })
            .collect();

        let ticks = (0..TICK_COUNT)
            .map(|i| {
                // Widened so the largest counts cannot overflow.
                let wide = max_visible_count as u128 * i as u128 / (TICK_COUNT - 1) as u128;
                let value = wide as u64;
                AxisTick {
                    value,
                    y: baseline - scale(value),
                }
            })
            .collect();

        let marker = AverageMarker {
            x: average_x(average, window, chart_left, chart_width),
            top: chart_top,
            bottom: baseline,
            label_min_x: config.left_margin,
            label_max_x: config.width as f32 - config.right_margin,
        };

        Self {
            chart_left,
            chart_top,
            chart_width,
            chart_height,
            bar_width,
            max_visible_count,
            bars,
            ticks,
            marker,
        }
    }

    pub fn chart_right(&self) -> f32 {
        self.chart_left + self.chart_width
    }

    pub fn baseline(&self) -> f32 {
        self.chart_top + self.chart_height
    }
}

/// Map an average onto the horizontal extent of the window.
///
/// The window spans from the lower bound of its first level to the upper
/// bound of its last level. Averages outside that span land outside the
/// chart area.
fn average_x(average: f64, window: Window, chart_left: f32, chart_width: f32) -> f32 {
    let levels = taxonomy::levels();
    let min_value = levels[window.min].range.lower;
    let max_value = levels[window.max].range.upper;
    let ratio = (average - min_value) / (max_value - min_value);
    chart_left + ratio as f32 * chart_width
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_bar_width_fills_chart_area() {
        let config = ChartConfig::compact();
        let window = Window::new(3, 7);
        let layout = ChartLayout::compute(&config, window, &VoteHistogram::new(), 0.0);

        assert_eq!(layout.bars.len(), 5);
        assert!(approx(layout.bar_width, (895.0 - 4.0 * 9.0) / 5.0));

        let last = layout.bars.last().unwrap();
        assert!(approx(last.x + last.width, layout.chart_right()));
    }

    #[test]
    fn test_empty_window_uses_unit_scale() {
        let config = ChartConfig::compact();
        let layout = ChartLayout::compute(&config, Window::new(0, 4), &VoteHistogram::new(), 0.0);

        assert_eq!(layout.max_visible_count, 1);
        assert!(layout.bars.iter().all(|bar| bar.height == 0.0));
        assert!(layout.bars.iter().all(|bar| approx(bar.y, layout.baseline())));
    }

    #[test]
    fn test_tallest_bar_reaches_top_margin() {
        let config = ChartConfig::compact();
        let votes = VoteHistogram::from([("Medium", 8), ("Medium +", 4)]);
        let layout = ChartLayout::compute(&config, Window::new(3, 7), &votes, 3.5);

        let medium = layout.bars.iter().find(|b| b.level.name == "Medium").unwrap();
        let plus = layout.bars.iter().find(|b| b.level.name == "Medium +").unwrap();
        assert!(approx(medium.y, config.top_margin));
        assert!(approx(plus.height, layout.chart_height / 2.0));
    }

    #[test]
    fn test_ticks_use_integer_quarters() {
        let config = ChartConfig::compact();
        let votes = VoteHistogram::from([("Hard", 10)]);
        let layout = ChartLayout::compute(&config, Window::new(5, 9), &votes, 5.0);

        let values: Vec<u64> = layout.ticks.iter().map(|t| t.value).collect();
        assert_eq!(values, vec![0, 2, 5, 7, 10]);
        assert!(approx(layout.ticks[0].y, layout.baseline()));
        assert!(approx(layout.ticks[4].y, layout.chart_top));
    }

    #[test]
    fn test_ticks_for_largest_counts() {
        let config = ChartConfig::compact();
        let max = i64::MAX as u64;
        let votes = VoteHistogram::from([("Hell", max)]);
        let layout = ChartLayout::compute(&config, Window::new(11, 15), &votes, 9.71);

        let values: Vec<u64> = layout.ticks.iter().map(|t| t.value).collect();
        assert_eq!(
            values,
            vec![
                0,
                2_305_843_009_213_693_951,
                4_611_686_018_427_387_903,
                6_917_529_027_641_081_855,
                max,
            ]
        );
        assert!(approx(layout.ticks[4].y, layout.chart_top));

        let votes = VoteHistogram::from([("Hell", u64::MAX)]);
        let layout = ChartLayout::compute(&config, Window::new(11, 15), &votes, 9.71);
        assert_eq!(layout.ticks[4].value, u64::MAX);
    }

    #[test]
    fn test_votes_outside_window_do_not_scale() {
        let config = ChartConfig::compact();
        let votes = VoteHistogram::from([("Easy -", 100), ("Hard", 4)]);
        let layout = ChartLayout::compute(&config, Window::new(5, 9), &votes, 5.0);
        assert_eq!(layout.max_visible_count, 4);
    }

    #[test]
    fn test_average_marker_interpolates_window_span() {
        let config = ChartConfig::compact();
        // Window 3..=7 spans 2.35..5.29.
        let layout = ChartLayout::compute(&config, Window::new(3, 7), &VoteHistogram::new(), 2.35);
        assert!(approx(layout.marker.x, config.left_margin));

        let layout = ChartLayout::compute(&config, Window::new(3, 7), &VoteHistogram::new(), 5.29);
        assert!(approx(layout.marker.x, layout.chart_right()));
    }

    #[test]
    fn test_marker_label_is_clamped() {
        let marker = AverageMarker {
            x: 62.0,
            top: 75.0,
            bottom: 430.0,
            label_min_x: 60.0,
            label_max_x: 955.0,
        };
        assert_eq!(marker.label_x(100.0), 60.0);

        let marker = AverageMarker { x: 950.0, ..marker };
        assert_eq!(marker.label_x(100.0), 855.0);

        let marker = AverageMarker { x: 500.0, ..marker };
        assert_eq!(marker.label_x(100.0), 450.0);
    }
}
