//! Decode JPEG/PNG bytes into an upright `Bitmap`.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::{DynamicImage, ImageReader};

use super::{Bitmap, DecodeError, Orientation};

/// Decode an encoded image, applying EXIF orientation correction.
///
/// Gestures and cropping operate on what the user sees, so the bitmap must
/// already be upright when it reaches the trimmer.
///
/// # Errors
///
/// - `DecodeError::InvalidFormat` if the format cannot be guessed
/// - `DecodeError::CorruptedFile` if decoding fails
/// - `DecodeError::EmptyImage` for a zero-sized result
pub fn decode_image(bytes: &[u8]) -> Result<Bitmap, DecodeError> {
    let orientation = read_orientation(bytes);

    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;
    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let bitmap = Bitmap::from_rgb_image(apply_orientation(img, orientation).into_rgb8());
    if bitmap.is_empty() {
        return Err(DecodeError::EmptyImage {
            width: bitmap.width,
            height: bitmap.height,
        });
    }

    log::debug!(
        "decoded {}x{} bitmap (orientation {:?})",
        bitmap.width,
        bitmap.height,
        orientation
    );
    Ok(bitmap)
}

/// EXIF orientation, or `Normal` when absent or unreadable.
pub fn read_orientation(bytes: &[u8]) -> Orientation {
    let mut cursor = Cursor::new(bytes);
    Reader::new()
        .read_from_container(&mut cursor)
        .ok()
        .and_then(|exif| {
            exif.get_field(Tag::Orientation, In::PRIMARY)
                .and_then(|field| field.value.get_uint(0))
        })
        .map(Orientation::from)
        .unwrap_or_default()
}

fn apply_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => img.fliph(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::FlipVertical => img.flipv(),
        Orientation::Transpose => img.rotate90().fliph(),
        Orientation::Rotate90CW => img.rotate90(),
        Orientation::Transverse => img.rotate270().fliph(),
        Orientation::Rotate270CW => img.rotate270(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, RgbImage};

    fn encode_png(width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::from_fn(width, height, |x, y| {
            image::Rgb([(x * 10) as u8, (y * 10) as u8, 0])
        });
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, ImageFormat::Png).unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_decode_png() {
        let bytes = encode_png(8, 4);
        let bmp = decode_image(&bytes).unwrap();
        assert_eq!((bmp.width, bmp.height), (8, 4));
        assert_eq!(bmp.pixel(2, 3), Some([20, 30, 0]));
    }

    #[test]
    fn test_decode_garbage() {
        let result = decode_image(&[0x00, 0x01, 0x02, 0x03]);
        assert!(matches!(result, Err(DecodeError::InvalidFormat)));
    }

    #[test]
    fn test_decode_truncated_png() {
        let bytes = encode_png(16, 16);
        let result = decode_image(&bytes[..40]);
        assert!(matches!(result, Err(DecodeError::CorruptedFile(_))));
    }

    #[test]
    fn test_png_without_exif_is_normal() {
        assert_eq!(read_orientation(&encode_png(2, 2)), Orientation::Normal);
    }

    #[test]
    fn test_apply_orientation_swaps_for_rotation() {
        let img = DynamicImage::ImageRgb8(RgbImage::new(6, 3));
        let rotated = apply_orientation(img, Orientation::Rotate90CW);
        assert_eq!((rotated.width(), rotated.height()), (3, 6));
    }
}
