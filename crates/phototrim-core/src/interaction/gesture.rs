//! Gesture events fed into the reconciler.
//!
//! Each event carries the delta reported since the previous sample of the same
//! gesture. The reconciler applies it exactly once; the host recognizer must
//! reset its own delta (scale to 1.0, translation to zero) after forwarding a
//! sample, otherwise the same movement is applied twice.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Lifecycle phase of a continuous gesture sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GesturePhase {
    Began,
    Changed,
    Ended,
    /// Treated like `Ended`: the clamp pass still runs.
    Cancelled,
}

impl GesturePhase {
    /// True for the phases that finish a gesture.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, GesturePhase::Ended | GesturePhase::Cancelled)
    }
}

/// Whether a gesture stream is currently in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GestureState {
    #[default]
    Idle,
    Active,
}

impl GestureState {
    /// State after a sample in `phase`.
    pub fn after(self, phase: GesturePhase) -> Self {
        if phase.is_terminal() {
            GestureState::Idle
        } else {
            GestureState::Active
        }
    }
}

/// Pinch sample: multiplicative scale change since the last sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PinchEvent {
    pub scale: f64,
    pub phase: GesturePhase,
}

impl PinchEvent {
    pub fn new(scale: f64, phase: GesturePhase) -> Self {
        Self { scale, phase }
    }
}

/// Pan sample: translation since the last sample, in view units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanEvent {
    pub translation: Point,
    pub phase: GesturePhase,
}

impl PanEvent {
    pub fn new(dx: f64, dy: f64, phase: GesturePhase) -> Self {
        Self {
            translation: Point::new(dx, dy),
            phase,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GestureEvent {
    Pinch(PinchEvent),
    Pan(PanEvent),
}

impl From<PinchEvent> for GestureEvent {
    fn from(event: PinchEvent) -> Self {
        GestureEvent::Pinch(event)
    }
}

impl From<PanEvent> for GestureEvent {
    fn from(event: PanEvent) -> Self {
        GestureEvent::Pan(event)
    }
}
