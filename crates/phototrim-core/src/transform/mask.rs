//! Circular crop window.
//!
//! The visible crop window is the circle inscribed in the crop square. The
//! same circle is used to cut an avatar-style RGBA image out of a square crop,
//! with everything outside the circle made transparent.
//!
//! ## Algorithm
//!
//! Coverage is evaluated at each pixel center. Within one pixel of the circle
//! boundary the coverage falls off with [`smootherstep`], which hides the
//! stair-stepping a hard threshold would leave.

use image::{Rgba, RgbaImage};

use crate::bitmap::Bitmap;

/// Smootherstep interpolation function.
///
/// Formula: `6t^5 - 15t^4 + 10t^3`, input clamped to 0.0-1.0.
#[inline]
pub fn smootherstep(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Coverage of pixel `(x, y)` by the circle inscribed in a `width` x `height`
/// box. Returns 1.0 fully inside, 0.0 fully outside.
///
/// The circle's diameter is the shorter side, centered in the box.
pub fn circle_coverage(x: u32, y: u32, width: u32, height: u32) -> f32 {
    if width == 0 || height == 0 {
        return 0.0;
    }
    let radius = width.min(height) as f32 / 2.0;
    let dx = x as f32 + 0.5 - width as f32 / 2.0;
    let dy = y as f32 + 0.5 - height as f32 / 2.0;
    let distance = (dx * dx + dy * dy).sqrt();

    // Signed distance to the boundary, negative inside.
    smootherstep(0.5 - (distance - radius))
}

/// Cut the inscribed circle out of `bitmap` as RGBA.
///
/// Pixels outside the circle get alpha 0; the RGB channels are kept so the
/// result composites cleanly on any background.
pub fn apply_circular_mask(bitmap: &Bitmap) -> RgbaImage {
    let (w, h) = (bitmap.width, bitmap.height);
    RgbaImage::from_fn(w, h, |x, y| {
        let [r, g, b] = bitmap.pixel(x, y).unwrap_or([0, 0, 0]);
        let alpha = (circle_coverage(x, y, w, h) * 255.0).round() as u8;
        Rgba([r, g, b, alpha])
    })
}
