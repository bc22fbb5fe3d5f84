//! PNG encoding for RGBA output.

use std::io::Cursor;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use super::{validate, EncodeError};

/// Encode RGBA pixel data (4 bytes per pixel, row-major) to PNG bytes.
pub fn encode_png(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, EncodeError> {
    validate(pixels, width, height, 4)?;

    let mut buffer = Cursor::new(Vec::new());
    PngEncoder::new(&mut buffer)
        .write_image(pixels, width, height, ExtendedColorType::Rgba8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitmap::Bitmap;
    use crate::transform::apply_circular_mask;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_encode_png_signature() {
        let pixels = vec![255u8; 4 * 4 * 4];
        let png = encode_png(&pixels, 4, 4).unwrap();
        assert_eq!(&png[..8], &PNG_SIGNATURE);
    }

    #[test]
    fn test_encode_png_rejects_rgb_buffer() {
        let result = encode_png(&[0u8; 4 * 4 * 3], 4, 4);
        assert!(matches!(
            result,
            Err(EncodeError::InvalidPixelData {
                expected: 64,
                actual: 48
            })
        ));
    }

    #[test]
    fn test_circular_crop_round_trips_alpha() {
        let masked = apply_circular_mask(&Bitmap::filled(32, 32, [10, 20, 30]));
        let png = encode_png(masked.as_raw(), 32, 32).unwrap();

        let decoded = image::load_from_memory(&png).unwrap().into_rgba8();
        assert_eq!(decoded.get_pixel(0, 0)[3], 0);
        assert_eq!(decoded.get_pixel(16, 16)[3], 255);
    }
}
