//! Bitmap transforms: the crop itself and the circular mask.
//!
//! # Coordinate System
//!
//! - Crop inputs are view-space rectangles (logical on-screen units)
//! - Crop outputs are pixel-space rectangles in the source bitmap
//! - Origin is top-left corner

mod crop;
mod mask;

pub use crop::{crop, extract, pixel_rect, CropError, PixelRect};
pub use mask::{apply_circular_mask, circle_coverage, smootherstep};
