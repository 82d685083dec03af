//! End-to-end chart rendering: votes in, WebP bytes out.

use std::sync::Arc;
use std::time::Instant;

use tracing::debug;

use crate::aggregate::{format_average, label_for_average, weighted_average};
use crate::canvas::Canvas;
use crate::config::ChartConfig;
use crate::encode::WebpEncoder;
use crate::error::ChartResult;
use crate::layout::ChartLayout;
use crate::pixels::to_rgba;
use crate::raster::{rasterize, AverageLabel};
use crate::text::TextRenderer;
use crate::votes::VoteHistogram;
use crate::window::{select_window, Window};

/// Statistics shown on a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSummary {
    pub average: f64,
    pub label: &'static str,
    pub window: Window,
}

/// Renders charts for one layout profile.
///
/// Holds no per-render state; a single renderer can be shared between
/// threads and every call produces an independent image.
#[derive(Debug, Clone)]
pub struct ChartRenderer {
    config: ChartConfig,
    text: Arc<TextRenderer>,
    encoder: WebpEncoder,
}

impl ChartRenderer {
    /// Renderer with the built-in label glyphs.
    pub fn new(config: ChartConfig) -> ChartResult<Self> {
        Self::with_text(config, Arc::new(TextRenderer::builtin()))
    }

    /// Renderer drawing labels with the given text renderer.
    ///
    /// Fails when the profile is unusable or the encoder rejects its quality.
    pub fn with_text(config: ChartConfig, text: Arc<TextRenderer>) -> ChartResult<Self> {
        config.validate()?;
        let encoder = WebpEncoder::lossy(config.quality)?;
        Ok(Self {
            config,
            text,
            encoder,
        })
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn summarize(&self, votes: &VoteHistogram) -> ChartSummary {
        let average = weighted_average(votes);
        ChartSummary {
            average,
            label: label_for_average(average),
            window: select_window(votes),
        }
    }

    /// Draw the chart without encoding it.
    pub fn rasterize(&self, votes: &VoteHistogram) -> ChartResult<Canvas> {
        let summary = self.summarize(votes);
        let layout = ChartLayout::compute(&self.config, summary.window, votes, summary.average);
        let value = format_average(summary.average);
        let label = AverageLabel {
            value: &value,
            difficulty: summary.label,
        };
        rasterize(&self.config, &layout, &label, &self.text)
    }

    /// Render a vote histogram into a WebP image.
    pub fn render(&self, votes: &VoteHistogram) -> ChartResult<Vec<u8>> {
        let start = Instant::now();

        let canvas = self.rasterize(votes)?;
        let image = to_rgba(
            canvas.data(),
            canvas.width(),
            canvas.height(),
            canvas.channel_order(),
        )?;
        let data = self.encoder.encode(&image)?;

        debug!(
            width = canvas.width(),
            height = canvas.height(),
            bytes = data.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Rendered difficulty chart"
        );

        Ok(data)
    }
}
