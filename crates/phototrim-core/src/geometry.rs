//! Plane geometry shared by the crop and interaction modules.
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner, y grows downward
//! - View space uses logical units as laid out on screen
//! - Pixel space uses native bitmap resolution
//!
//! All types are small `Copy` values; every operation returns a new value.

use serde::{Deserialize, Serialize};

/// A point or a displacement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Translate by a displacement.
    pub fn offset(self, delta: Point) -> Self {
        Self::new(self.x + delta.x, self.y + delta.y)
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width divided by height. Returns `None` for a zero height.
    pub fn aspect_ratio(self) -> Option<f64> {
        if self.height > 0.0 {
            Some(self.width / self.height)
        } else {
            None
        }
    }

    pub fn scaled(self, factor: f64) -> Self {
        Self::new(self.width * factor, self.height * factor)
    }
}

/// An axis-aligned rectangle `(x, y, width, height)`.
///
/// Negative sizes are clamped to zero on construction, so `width >= 0` and
/// `height >= 0` always hold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Negative sizes collapse to zero. NaN is kept so callers can reject it.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        let non_negative = |v: f64| if v < 0.0 { 0.0 } else { v };
        Self {
            x,
            y,
            width: non_negative(width),
            height: non_negative(height),
        }
    }

    /// Build a rectangle of `size` centered on `center`.
    pub fn from_center(center: Point, size: Size) -> Self {
        Self::new(
            center.x - size.width / 2.0,
            center.y - size.height / 2.0,
            size.width,
            size.height,
        )
    }

    #[inline]
    pub fn min_x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn min_y(&self) -> f64 {
        self.y
    }

    #[inline]
    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    #[inline]
    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Same size, new origin.
    pub fn with_origin(&self, origin: Point) -> Self {
        Self::new(origin.x, origin.y, self.width, self.height)
    }

    /// True if `other` lies entirely inside this rectangle (edges may touch).
    pub fn contains_rect(&self, other: &Rect) -> bool {
        self.min_x() <= other.min_x()
            && self.min_y() <= other.min_y()
            && self.max_x() >= other.max_x()
            && self.max_y() >= other.max_y()
    }

    /// Clamp this rectangle to `bounds`. The result has zero area when the
    /// two do not overlap.
    pub fn clamped_to(&self, bounds: &Rect) -> Self {
        let left = self.min_x().max(bounds.min_x());
        let top = self.min_y().max(bounds.min_y());
        let right = self.max_x().min(bounds.max_x());
        let bottom = self.max_y().min(bounds.max_y());
        Self::new(left, top, right - left, bottom - top)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }
}
