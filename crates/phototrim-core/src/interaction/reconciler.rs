//! Fold gesture samples into a new placement.
//!
//! `reduce(state, event) -> transition` is pure: the caller owns the state and
//! replaces it with `transition.state` after every sample. Clamp corrections
//! are applied to the returned placement immediately; the optional
//! [`Animation`] only tells the host how to present the jump.

use serde::{Deserialize, Serialize};

use super::clamp::{bounds_clamp, zoom_clamp};
use super::gesture::{GestureEvent, GestureState, PanEvent, PinchEvent};
use super::placement::DisplayPlacement;
use crate::config::TrimConfig;
use crate::geometry::Rect;

/// Presentation hint for a clamp correction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animation {
    pub duration_ms: u32,
}

/// Placement plus the progress of each gesture stream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InteractionState {
    pub placement: DisplayPlacement,
    pub pinch: GestureState,
    pub pan: GestureState,
}

impl InteractionState {
    pub fn new(placement: DisplayPlacement) -> Self {
        Self {
            placement,
            pinch: GestureState::Idle,
            pan: GestureState::Idle,
        }
    }
}

/// Result of one [`reduce`] step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub state: InteractionState,
    /// Set when a clamp pass changed the placement.
    pub animation: Option<Animation>,
}

/// Apply one gesture sample.
///
/// `crop_region` is the crop window frame in the same space as the placement.
/// Non-finite or non-positive deltas are dropped.
pub fn reduce(
    state: InteractionState,
    event: GestureEvent,
    crop_region: Rect,
    config: &TrimConfig,
) -> Transition {
    match event {
        GestureEvent::Pinch(pinch) => reduce_pinch(state, pinch, crop_region, config),
        GestureEvent::Pan(pan) => reduce_pan(state, pan, crop_region, config),
    }
}

fn reduce_pinch(
    state: InteractionState,
    event: PinchEvent,
    crop_region: Rect,
    config: &TrimConfig,
) -> Transition {
    let mut next = state;
    next.pinch = state.pinch.after(event.phase);

    if event.phase.is_terminal() {
        let mut corrected = false;
        if let Some(scale) = zoom_clamp(
            state.placement.scale,
            config.minimum_zoom_scale,
            config.maximum_zoom_scale,
        ) {
            log::debug!("zoom clamp: {} -> {}", state.placement.scale, scale);
            next.placement = state.placement.with_scale(scale);
            corrected = true;
        }
        // Zooming out around the center can uncover the crop window after a pan.
        if let Some(placement) = cover(next.placement, crop_region) {
            next.placement = placement;
            corrected = true;
        }
        return settle(next, corrected, config);
    }

    if event.scale.is_finite() && event.scale > 0.0 {
        next.placement = state.placement.with_scale(state.placement.scale * event.scale);
        log::trace!("pinch x{} -> scale {}", event.scale, next.placement.scale);
    } else {
        log::warn!("ignoring pinch sample with scale {}", event.scale);
    }

    settle(next, false, config)
}

fn reduce_pan(
    state: InteractionState,
    event: PanEvent,
    crop_region: Rect,
    config: &TrimConfig,
) -> Transition {
    let mut next = state;
    next.pan = state.pan.after(event.phase);

    // Translation applies on every phase, including the final sample.
    let delta = event.translation;
    if delta.x.is_finite() && delta.y.is_finite() {
        next.placement = state.placement.with_center(state.placement.center.offset(delta));
        log::trace!("pan by ({}, {})", delta.x, delta.y);
    } else {
        log::warn!("ignoring pan sample with translation {:?}", delta);
    }

    if !event.phase.is_terminal() {
        return settle(next, false, config);
    }

    match cover(next.placement, crop_region) {
        Some(placement) => {
            next.placement = placement;
            settle(next, true, config)
        }
        None => settle(next, false, config),
    }
}

/// Bounds clamp pass over a placement, `None` when nothing moved.
fn cover(placement: DisplayPlacement, crop_region: Rect) -> Option<DisplayPlacement> {
    let image_rect = placement.frame();
    let corrected = bounds_clamp(image_rect, crop_region)?;
    log::debug!("bounds clamp: {:?} -> {:?}", image_rect, corrected);
    Some(placement.with_frame_origin(corrected.origin()))
}

fn settle(state: InteractionState, corrected: bool, config: &TrimConfig) -> Transition {
    Transition {
        state,
        animation: corrected.then_some(Animation {
            duration_ms: config.clamp_animation_ms,
        }),
    }
}
