//! Layout of the crop window and the initial image placement.

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Rect, Size};
use crate::interaction::DisplayPlacement;

/// Crop window: a square centered in `container`, its side a fraction of the
/// container width.
pub fn crop_region(container: Rect, width_fraction: f64) -> Rect {
    let side = container.width * width_fraction;
    Rect::from_center(container.center(), Size::new(side, side))
}

/// Placement for a freshly loaded image.
///
/// Compares aspect ratios to decide which side the container width drives:
/// when the crop window is relatively wider than the image, the image width
/// becomes the container width and the height follows from the aspect ratio;
/// otherwise the image height becomes the container width. The image is
/// centered on the container at identity scale.
///
/// Returns `None` when either the image or the crop window has no height.
pub fn initial_placement(
    image_size: Size,
    crop_region: Rect,
    container: Rect,
) -> Option<DisplayPlacement> {
    let image_ratio = image_size.aspect_ratio()?;
    let crop_ratio = crop_region.size().aspect_ratio()?;
    if !(image_ratio > 0.0) {
        return None;
    }

    let fill = container.width;
    let base_size = if crop_ratio > image_ratio {
        Size::new(fill, fill / image_ratio)
    } else {
        Size::new(fill * image_ratio, fill)
    };

    Some(DisplayPlacement::new(base_size, container.center()))
}

/// A straight line segment in view space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

/// Rule-of-thirds lines across the crop window: two vertical, then two
/// horizontal.
pub fn guide_lines(crop_region: Rect) -> [Segment; 4] {
    let third_w = crop_region.width / 3.0;
    let third_h = crop_region.height / 3.0;
    let vertical = |i: f64| {
        let x = crop_region.min_x() + third_w * i;
        Segment {
            start: Point::new(x, crop_region.min_y()),
            end: Point::new(x, crop_region.max_y()),
        }
    };
    let horizontal = |i: f64| {
        let y = crop_region.min_y() + third_h * i;
        Segment {
            start: Point::new(crop_region.min_x(), y),
            end: Point::new(crop_region.max_x(), y),
        }
    };
    [vertical(1.0), vertical(2.0), horizontal(1.0), horizontal(2.0)]
}
