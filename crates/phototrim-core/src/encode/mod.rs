//! Export encoding for cropped images.
//!
//! - JPEG for the plain square crop (RGB)
//! - PNG for the circular crop, which needs an alpha channel (RGBA)
//!
//! # Examples
//!
//! ```ignore
//! use phototrim_core::encode::{encode_jpeg, encode_png};
//!
//! let jpeg = encode_jpeg(&cropped.pixels, cropped.width, cropped.height, 90)?;
//! let round = apply_circular_mask(&cropped);
//! let png = encode_png(round.as_raw(), round.width(), round.height())?;
//! ```

use thiserror::Error;

mod jpeg;
mod png;

pub use jpeg::encode_jpeg;
pub use png::encode_png;

/// Errors that can occur while encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes, got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The underlying encoder failed
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),
}

/// Check dimensions and buffer length before handing pixels to an encoder.
pub(crate) fn validate(
    pixels: &[u8],
    width: u32,
    height: u32,
    channels: usize,
) -> Result<(), EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }
    let expected = (width as usize) * (height as usize) * channels;
    if pixels.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: pixels.len(),
        });
    }
    Ok(())
}
