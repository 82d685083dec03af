//! Lossy WebP encoding.

use image::RgbaImage;

use crate::error::{ChartError, ChartResult};

/// WebP encoder with a fixed quality.
///
/// Built once per chart profile; every encode uses the same settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WebpEncoder {
    quality: f32,
}

impl WebpEncoder {
    /// Create a lossy encoder. Quality must be within 0-100.
    pub fn lossy(quality: f32) -> ChartResult<Self> {
        if !quality.is_finite() || !(0.0..=100.0).contains(&quality) {
            return Err(ChartError::EncoderConfig(format!(
                "quality {} is outside 0-100",
                quality
            )));
        }
        Ok(Self { quality })
    }

    pub fn quality(&self) -> f32 {
        self.quality
    }

    /// Encode an RGBA image into a RIFF/WebP byte stream.
    pub fn encode(&self, image: &RgbaImage) -> ChartResult<Vec<u8>> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(ChartError::Encode(format!(
                "cannot encode empty {}x{} image",
                width, height
            )));
        }

        let encoder = webp::Encoder::from_rgba(image.as_raw(), width, height);
        let webp_data = encoder
            .encode_simple(false, self.quality)
            .map_err(|e| ChartError::Encode(format!("{:?}", e)))?;

        Ok(webp_data.to_vec())
    }
}
