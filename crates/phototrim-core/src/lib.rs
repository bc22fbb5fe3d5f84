//! PhotoTrim Core - crop geometry for a circular photo cropper
//!
//! This crate holds everything below the host view layer: mapping the crop
//! window back to source pixels, the pinch/pan reconciliation that keeps the
//! image covering the crop window, layout of the crop window, the circular
//! mask, and decode/encode at the edges.
//!
//! # Data Flow
//!
//! 1. `set_image` places the bitmap so it covers the crop window
//! 2. Gesture samples update the placement; clamp passes run on gesture end
//! 3. `cropped_image` maps the crop window through the current frame and
//!    extracts the pixels

pub mod bitmap;
pub mod config;
pub mod encode;
pub mod geometry;
pub mod interaction;
pub mod layout;
pub mod transform;
mod trimmer;

pub use bitmap::{decode_image, Bitmap, DecodeError};
pub use config::{ConfigError, TrimConfig};
pub use geometry::{Point, Rect, Size};
pub use interaction::{
    Animation, DisplayPlacement, GestureEvent, GesturePhase, PanEvent, PinchEvent,
};
pub use transform::{crop, CropError};
pub use trimmer::PhotoTrimmer;
