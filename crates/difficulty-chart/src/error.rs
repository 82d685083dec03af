//! Error types for chart rendering.

use thiserror::Error;

/// Result type alias using ChartError.
pub type ChartResult<T> = Result<T, ChartError>;

/// Errors produced by the chart pipeline.
///
/// Unrecognized level names and malformed colors are not errors: they are
/// tolerated where they occur.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("Failed to allocate {width}x{height} canvas")]
    Canvas { width: u32, height: u32 },

    #[error("Pixel buffer has {actual} bytes, expected {expected}")]
    PixelBuffer { expected: usize, actual: usize },

    #[error("Invalid encoder configuration: {0}")]
    EncoderConfig(String),

    #[error("WebP encoding failed: {0}")]
    Encode(String),

    #[error("Font error: {0}")]
    Font(String),

    #[error("Invalid chart configuration: {0}")]
    Config(String),
}

impl From<std::io::Error> for ChartError {
    fn from(err: std::io::Error) -> Self {
        ChartError::Config(err.to_string())
    }
}

impl From<serde_yaml::Error> for ChartError {
    fn from(err: serde_yaml::Error) -> Self {
        ChartError::Config(format!("YAML error: {}", err))
    }
}
