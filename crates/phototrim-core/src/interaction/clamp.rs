//! Clamp passes run when a gesture ends.
//!
//! - **Zoom clamp** keeps the scale inside the configured range. Below the
//!   minimum it resets to identity (1.0) rather than to the minimum itself.
//! - **Bounds clamp** pulls the image back so it covers the crop window.
//!
//! Both return `None` when nothing needs to change, so callers can skip the
//! correction animation.

use crate::geometry::Rect;

/// Corrected scale, or `None` when `scale` is already acceptable.
///
/// With the default range `[1.0, 3.0]` the lower reset and the minimum
/// coincide. With a custom minimum above 1.0, a pinch below it still lands
/// on 1.0, outside the range.
pub fn zoom_clamp(scale: f64, minimum: f64, maximum: f64) -> Option<f64> {
    let mut corrected = None;
    if scale < minimum {
        corrected = Some(1.0);
    }
    let current = corrected.unwrap_or(scale);
    if current > maximum {
        corrected = Some(maximum);
    }
    corrected
}

/// Corrected image frame, or `None` when `image_rect` already covers
/// `crop_rect`.
///
/// Every rule reads the original `image_rect`. When both rules of one axis
/// fire (image shorter than the crop window on that axis), the later one
/// wins and the opposite edge stays uncovered.
pub fn bounds_clamp(image_rect: Rect, crop_rect: Rect) -> Option<Rect> {
    let mut origin = image_rect.origin();

    if image_rect.min_y() > crop_rect.min_y() {
        origin.y = crop_rect.min_y();
    }
    if image_rect.max_y() < crop_rect.max_y() {
        origin.y = crop_rect.max_y() - image_rect.height;
    }
    if image_rect.min_x() > crop_rect.min_x() {
        origin.x = crop_rect.min_x();
    }
    if image_rect.max_x() < crop_rect.max_x() {
        origin.x = crop_rect.max_x() - image_rect.width;
    }

    if origin == image_rect.origin() {
        None
    } else {
        Some(image_rect.with_origin(origin))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_in_range_unchanged() {
        assert_eq!(zoom_clamp(1.0, 1.0, 3.0), None);
        assert_eq!(zoom_clamp(2.2, 1.0, 3.0), None);
        assert_eq!(zoom_clamp(3.0, 1.0, 3.0), None);
    }

    #[test]
    fn test_zoom_above_max_clamps_to_max() {
        assert_eq!(zoom_clamp(4.5, 1.0, 3.0), Some(3.0));
    }

    #[test]
    fn test_zoom_below_min_resets_to_identity() {
        assert_eq!(zoom_clamp(0.4, 1.0, 3.0), Some(1.0));
    }

    /// Documented quirk: the lower reset goes to identity, not to the minimum.
    #[test]
    fn test_zoom_below_custom_min_resets_to_identity_not_min() {
        assert_eq!(zoom_clamp(1.2, 1.5, 3.0), Some(1.0));
    }

    #[test]
    fn test_zoom_identity_above_custom_max() {
        // Reset to 1.0 then still above a max below 1.0.
        assert_eq!(zoom_clamp(0.1, 0.2, 0.8), Some(0.8));
    }

    #[test]
    fn test_bounds_in_bounds_is_noop() {
        let crop = Rect::new(30.0, 30.0, 240.0, 240.0);
        let image = Rect::new(-150.0, 0.0, 600.0, 300.0);
        assert_eq!(bounds_clamp(image, crop), None);
    }

    #[test]
    fn test_bounds_top_gap() {
        let crop = Rect::new(30.0, 30.0, 240.0, 240.0);
        let image = Rect::new(0.0, 50.0, 300.0, 300.0);
        assert_eq!(
            bounds_clamp(image, crop),
            Some(Rect::new(0.0, 30.0, 300.0, 300.0))
        );
    }

    #[test]
    fn test_bounds_bottom_and_right_gap() {
        let crop = Rect::new(30.0, 30.0, 240.0, 240.0);
        let image = Rect::new(-100.0, -100.0, 300.0, 300.0);
        // bottom 200 < 270, right 200 < 270
        assert_eq!(
            bounds_clamp(image, crop),
            Some(Rect::new(-30.0, -30.0, 300.0, 300.0))
        );
    }

    #[test]
    fn test_bounds_left_gap() {
        let crop = Rect::new(30.0, 30.0, 240.0, 240.0);
        let image = Rect::new(40.0, 0.0, 300.0, 300.0);
        assert_eq!(
            bounds_clamp(image, crop),
            Some(Rect::new(30.0, 0.0, 300.0, 300.0))
        );
    }

    /// Undersized axis: both vertical rules fire, the bottom rule wins and
    /// the top edge is left uncovered.
    #[test]
    fn test_bounds_undersized_axis_bottom_wins() {
        let crop = Rect::new(0.0, 0.0, 100.0, 100.0);
        let image = Rect::new(0.0, 10.0, 100.0, 50.0);
        let corrected = bounds_clamp(image, crop).unwrap();
        assert_eq!(corrected.max_y(), crop.max_y());
        assert!(corrected.min_y() > crop.min_y());
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: after the zoom clamp the scale lies in [min, max] for
        /// ranges that include identity.
        #[test]
        fn prop_zoom_result_in_range(
            scale in 0.01f64..=20.0,
            min in 0.1f64..=1.0,
            max in 1.0f64..=10.0,
        ) {
            let result = zoom_clamp(scale, min, max).unwrap_or(scale);
            prop_assert!(result >= min && result <= max, "{} not in [{}, {}]", result, min, max);
        }

        /// Property: below the minimum the result is exactly identity.
        #[test]
        fn prop_zoom_below_min_is_identity(
            min in 0.5f64..=2.0,
            fraction in 0.01f64..0.99,
        ) {
            prop_assert_eq!(zoom_clamp(min * fraction, min, 3.0), Some(1.0));
        }

        /// Property: a frame that contains the crop window is left alone.
        #[test]
        fn prop_bounds_idempotent(
            // Whole units keep the edge sums exact.
            (cx, cy, cw, ch) in (-100i32..=100, -100i32..=100, 10i32..=200, 10i32..=200),
            (left, top, right, bottom) in (0i32..=100, 0i32..=100, 0i32..=100, 0i32..=100),
        ) {
            let crop = Rect::new(cx as f64, cy as f64, cw as f64, ch as f64);
            let image = Rect::new(
                (cx - left) as f64,
                (cy - top) as f64,
                (cw + left + right) as f64,
                (ch + top + bottom) as f64,
            );
            prop_assert_eq!(bounds_clamp(image, crop), None);
        }

        /// Property: an image at least as large as the crop window, offset
        /// anywhere, covers it after one pass.
        #[test]
        fn prop_bounds_converges_in_one_pass(
            (cx, cy, cw, ch) in (-100.0f64..=100.0, -100.0f64..=100.0, 10.0f64..=200.0, 10.0f64..=200.0),
            (extra_w, extra_h) in (0.0f64..=300.0, 0.0f64..=300.0),
            (ix, iy) in (-600.0f64..=600.0, -600.0f64..=600.0),
        ) {
            let crop = Rect::new(cx, cy, cw, ch);
            let image = Rect::new(ix, iy, cw + extra_w, ch + extra_h);
            let corrected = bounds_clamp(image, crop).unwrap_or(image);

            let eps = 1e-9;
            prop_assert!(corrected.min_y() <= crop.min_y() + eps);
            prop_assert!(corrected.max_y() >= crop.max_y() - eps);
            prop_assert!(corrected.min_x() <= crop.min_x() + eps);
            prop_assert!(corrected.max_x() >= crop.max_x() - eps);
            prop_assert_eq!(corrected.size(), image.size());

            // A second pass has nothing left to do beyond rounding noise.
            if let Some(again) = bounds_clamp(corrected, crop) {
                prop_assert!((again.x - corrected.x).abs() < 1e-6);
                prop_assert!((again.y - corrected.y).abs() < 1e-6);
            }
        }
    }
}
