//! Pinch/pan handling for the displayed image.
//!
//! Two independent gesture streams drive one [`DisplayPlacement`]:
//!
//! - **Pinch** multiplies the scale by each sample's factor and runs the zoom
//!   clamp when the gesture ends
//! - **Pan** moves the center by each sample's translation and runs the bounds
//!   clamp when the gesture ends
//!
//! Cancellation counts as ending. After every finished gesture the image covers
//! the crop window and its scale is inside the configured range, provided the
//! image is at least as large as the crop window at identity scale.

mod clamp;
mod gesture;
mod placement;
mod reconciler;

pub use clamp::{bounds_clamp, zoom_clamp};
pub use gesture::{GestureEvent, GesturePhase, GestureState, PanEvent, PinchEvent};
pub use placement::DisplayPlacement;
pub use reconciler::{reduce, Animation, InteractionState, Transition};
