//! Map an on-screen crop window back to source pixels and extract it.
//!
//! The displayed image is drawn scaled, aspect ratio preserved, somewhere on
//! screen. Given its frame and the crop window's frame (both in view space),
//! the crop window's position relative to the image's top-left corner is
//! scaled by `pixels per view unit` to find the source rectangle.
//!
//! # Example
//!
//! ```ignore
//! // 1000x2000 image shown at (0, 0, 100, 200): 10 pixels per view unit
//! let out = crop(Some(&image), Rect::new(10.0, 20.0, 50.0, 50.0), Rect::new(0.0, 0.0, 100.0, 200.0))?;
//! assert_eq!((out.width, out.height), (500, 500));
//! ```

use thiserror::Error;

use crate::bitmap::Bitmap;
use crate::geometry::{Rect, Size};

/// Reasons a crop produced no bitmap.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CropError {
    /// Crop attempted before any image was loaded.
    #[error("No image loaded")]
    NoImage,

    /// The mapped pixel rectangle has no area after clamping to the bitmap.
    #[error("Crop region does not overlap the image")]
    EmptyCrop,

    /// The pixel rectangle could not be extracted from the bitmap.
    #[error("Crop extraction failed: {0}")]
    ExtractionFailed(String),
}

/// Integer crop rectangle in source pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Compute the pixel rectangle covered by `crop_region`.
///
/// The scale ratio is taken from the horizontal axis only and applied to both
/// axes; the display frame is expected to preserve the image aspect ratio.
/// Each edge is clamped to the bitmap and then rounded to the nearest pixel.
///
/// # Errors
///
/// - `CropError::ExtractionFailed` when `display_frame` has no width or the
///   mapped coordinates are not finite
/// - `CropError::EmptyCrop` when nothing remains after clamping
pub fn pixel_rect(
    image_size: Size,
    crop_region: Rect,
    display_frame: Rect,
) -> Result<PixelRect, CropError> {
    if !(display_frame.width > 0.0) {
        return Err(CropError::ExtractionFailed(format!(
            "display frame width must be positive, got {}",
            display_frame.width
        )));
    }

    let local_x = crop_region.min_x() - display_frame.min_x();
    let local_y = crop_region.min_y() - display_frame.min_y();
    let scale_ratio = image_size.width / display_frame.width;

    let scaled = Rect::new(
        local_x * scale_ratio,
        local_y * scale_ratio,
        crop_region.width * scale_ratio,
        crop_region.height * scale_ratio,
    );
    if !scaled.is_finite() {
        return Err(CropError::ExtractionFailed(format!(
            "non-finite pixel rectangle {:?}",
            scaled
        )));
    }

    let bounds = Rect::new(0.0, 0.0, image_size.width, image_size.height);
    let clamped = scaled.clamped_to(&bounds);
    if clamped.is_empty() {
        return Err(CropError::EmptyCrop);
    }

    let left = clamped.min_x().round() as u32;
    let top = clamped.min_y().round() as u32;
    let right = clamped.max_x().round() as u32;
    let bottom = clamped.max_y().round() as u32;

    // Sub-pixel slivers round away to nothing.
    if right <= left || bottom <= top {
        return Err(CropError::EmptyCrop);
    }

    Ok(PixelRect {
        x: left,
        y: top,
        width: right - left,
        height: bottom - top,
    })
}

/// Crop the part of `image` visible through `crop_region`.
///
/// # Arguments
///
/// * `image` - Source bitmap, `None` when nothing is loaded
/// * `crop_region` - Crop window frame in view space
/// * `display_frame` - On-screen frame of the displayed image in view space
///
/// # Errors
///
/// See [`CropError`]. Calling again with the same inputs yields the same
/// result.
pub fn crop(
    image: Option<&Bitmap>,
    crop_region: Rect,
    display_frame: Rect,
) -> Result<Bitmap, CropError> {
    let image = image.ok_or(CropError::NoImage)?;
    let rect = pixel_rect(image.size(), crop_region, display_frame)?;
    extract(image, rect)
}

/// Copy `rect` out of `image`.
pub fn extract(image: &Bitmap, rect: PixelRect) -> Result<Bitmap, CropError> {
    let fits_x = rect.x.checked_add(rect.width).is_some_and(|r| r <= image.width);
    let fits_y = rect.y.checked_add(rect.height).is_some_and(|b| b <= image.height);
    if !fits_x || !fits_y {
        return Err(CropError::ExtractionFailed(format!(
            "{:?} outside {}x{} bitmap",
            rect, image.width, image.height
        )));
    }

    let src_stride = image.width as usize * 3;
    if image.pixels.len() != src_stride * image.height as usize {
        return Err(CropError::ExtractionFailed(
            "pixel buffer does not match dimensions".to_string(),
        ));
    }

    let row_len = rect.width as usize * 3;
    let mut output = Vec::with_capacity(row_len * rect.height as usize);

    // Copy pixel data row by row
    for y in rect.y..rect.y + rect.height {
        let start = y as usize * src_stride + rect.x as usize * 3;
        output.extend_from_slice(&image.pixels[start..start + row_len]);
    }

    Ok(Bitmap::new(rect.width, rect.height, output))
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: a crop window inside the display frame yields
        /// round(size * ratio) pixels, within one pixel of rounding.
        #[test]
        fn prop_output_matches_scaled_region(
            (img_w, img_h) in (20u32..=300, 20u32..=300),
            display_w in 10.0f64..=600.0,
            (origin_x, origin_y) in (-200.0f64..=200.0, -200.0f64..=200.0),
            (fx, fy) in (0.0f64..=0.5, 0.0f64..=0.5),
            (fw, fh) in (0.1f64..=0.5, 0.1f64..=0.5),
        ) {
            let display_h = display_w * img_h as f64 / img_w as f64;
            let display = Rect::new(origin_x, origin_y, display_w, display_h);
            let region = Rect::new(
                origin_x + fx * display_w,
                origin_y + fy * display_h,
                fw * display_w,
                fh * display_h,
            );
            let ratio = img_w as f64 / display_w;
            let expected_w = (region.width * ratio).round() as i64;
            let expected_h = (region.height * ratio).round() as i64;

            let img = Bitmap::filled(img_w, img_h, [7, 7, 7]);
            match crop(Some(&img), region, display) {
                Ok(out) => {
                    prop_assert!((out.width as i64 - expected_w).abs() <= 1);
                    prop_assert!((out.height as i64 - expected_h).abs() <= 1);
                    prop_assert_eq!(out.pixels.len(), (out.width * out.height * 3) as usize);
                }
                // Only a region that rounds below one pixel may fail.
                Err(e) => {
                    prop_assert_eq!(e, CropError::EmptyCrop);
                    prop_assert!(expected_w <= 1 || expected_h <= 1);
                }
            }
        }

        /// Property: output never exceeds the source bitmap.
        #[test]
        fn prop_output_bounded_by_source(
            (img_w, img_h) in (4u32..=100, 4u32..=100),
            (x, y, w, h) in (-100.0f64..=200.0, -100.0f64..=200.0, 0.0f64..=300.0, 0.0f64..=300.0),
            display_w in 1.0f64..=300.0,
        ) {
            let img = Bitmap::filled(img_w, img_h, [0, 0, 0]);
            let display = Rect::new(0.0, 0.0, display_w, display_w * img_h as f64 / img_w as f64);
            if let Ok(out) = crop(Some(&img), Rect::new(x, y, w, h), display) {
                prop_assert!(out.width >= 1 && out.width <= img_w);
                prop_assert!(out.height >= 1 && out.height <= img_h);
            }
        }

        /// Property: a crop window entirely right of or below the display
        /// frame is always EmptyCrop.
        #[test]
        fn prop_disjoint_region_is_empty(
            gap in 0.0f64..=500.0,
            below in any::<bool>(),
        ) {
            let img = Bitmap::filled(50, 50, [0, 0, 0]);
            let display = Rect::new(0.0, 0.0, 100.0, 100.0);
            let region = if below {
                Rect::new(0.0, 100.0 + gap, 40.0, 40.0)
            } else {
                Rect::new(100.0 + gap, 0.0, 40.0, 40.0)
            };
            prop_assert_eq!(crop(Some(&img), region, display), Err(CropError::EmptyCrop));
        }
    }
}
