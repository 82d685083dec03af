//! Conversion of canvas pixels into the RGBA layout the encoder expects.

use image::RgbaImage;

use crate::error::{ChartError, ChartResult};

/// Byte order of the four channels of a pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelOrder {
    /// Blue, green, red, alpha: 32-bit ARGB words stored little-endian.
    Bgra,
    /// Red, green, blue, alpha.
    Rgba,
}

impl ChannelOrder {
    /// Source byte offset of R, G, B and A within a pixel.
    fn rgba_offsets(self) -> [usize; 4] {
        match self {
            ChannelOrder::Bgra => [2, 1, 0, 3],
            ChannelOrder::Rgba => [0, 1, 2, 3],
        }
    }
}

/// Reorder a `width * height` pixel buffer into RGBA.
///
/// Pure byte permutation: values are copied unchanged, no blending or
/// alpha handling.
pub fn to_rgba(
    data: &[u8],
    width: u32,
    height: u32,
    order: ChannelOrder,
) -> ChartResult<RgbaImage> {
    let expected = width as usize * height as usize * 4;
    if data.len() != expected {
        return Err(ChartError::PixelBuffer {
            expected,
            actual: data.len(),
        });
    }

    let [r, g, b, a] = order.rgba_offsets();
    let mut out = vec![0u8; expected];
    for (dst, src) in out.chunks_exact_mut(4).zip(data.chunks_exact(4)) {
        dst[0] = src[r];
        dst[1] = src[g];
        dst[2] = src[b];
        dst[3] = src[a];
    }

    RgbaImage::from_raw(width, height, out).ok_or(ChartError::PixelBuffer {
        expected,
        actual: data.len(),
    })
}
