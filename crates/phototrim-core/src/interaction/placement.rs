//! Where the displayed image sits on screen.

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Rect, Size};

/// Position, size and zoom of the displayed image, in view space.
///
/// The image is laid out at `base_size` around `center`, then scaled
/// uniformly about its center by `scale`. The on-screen frame is derived from
/// these three values. A placement is never edited in place; every gesture
/// sample produces a new one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayPlacement {
    /// Unscaled layout size.
    pub base_size: Size,
    /// Center point of the image.
    pub center: Point,
    /// Uniform zoom factor, 1.0 is identity.
    pub scale: f64,
}

impl DisplayPlacement {
    /// Placement at identity scale.
    pub fn new(base_size: Size, center: Point) -> Self {
        Self {
            base_size,
            center,
            scale: 1.0,
        }
    }

    /// Current on-screen frame.
    pub fn frame(&self) -> Rect {
        Rect::from_center(self.center, self.base_size.scaled(self.scale))
    }

    pub fn with_scale(self, scale: f64) -> Self {
        Self { scale, ..self }
    }

    pub fn with_center(self, center: Point) -> Self {
        Self { center, ..self }
    }

    /// Move so the frame's top-left corner lands on `origin`. Size is kept.
    pub fn with_frame_origin(self, origin: Point) -> Self {
        let frame = self.frame().with_origin(origin);
        self.with_center(frame.center())
    }
}
