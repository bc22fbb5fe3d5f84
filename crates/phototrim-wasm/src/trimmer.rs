//! WASM bindings for the trimming session.
//!
//! The host page owns the DOM: it draws the image at `display_frame()`, draws
//! the circular overlay over `crop_region()`, and forwards pointer gestures.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! const trimmer = new PhotoTrimmer(container.clientWidth, container.clientHeight);
//! trimmer.set_image(decode_image(bytes));
//!
//! // Pinch: incremental factor since the last sample, then reset it.
//! const ms = trimmer.pinch(event.scale / lastScale, PHASE_CHANGED);
//! if (ms > 0) img.style.transition = `transform ${ms}ms`;
//!
//! const cropped = trimmer.cropped_image(); // undefined on failure
//! ```

use phototrim_core::{encode, PanEvent, PhotoTrimmer, PinchEvent, Rect, TrimConfig};
use wasm_bindgen::prelude::*;

use crate::types::{phase_from_u8, rect_values, JsBitmap};

/// A trimming session bound to one container element.
#[wasm_bindgen(js_name = PhotoTrimmer)]
pub struct JsPhotoTrimmer {
    inner: PhotoTrimmer,
}

#[wasm_bindgen(js_class = PhotoTrimmer)]
impl JsPhotoTrimmer {
    /// Create a session for a container of the given size with default
    /// configuration.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64) -> Result<JsPhotoTrimmer, JsValue> {
        let inner = PhotoTrimmer::new(Rect::new(0.0, 0.0, width, height), TrimConfig::default())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(JsPhotoTrimmer { inner })
    }

    /// Current configuration as a plain object (camelCase keys).
    pub fn config(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.inner.config()).map_err(JsValue::from)
    }

    /// Replace the configuration. Missing keys take their defaults.
    pub fn set_config(&mut self, config: JsValue) -> Result<(), JsValue> {
        let config: TrimConfig = serde_wasm_bindgen::from_value(config)?;
        self.inner
            .set_config(config)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn set_minimum_zoom_scale(&mut self, scale: f64) -> Result<(), JsValue> {
        self.inner
            .set_minimum_zoom_scale(scale)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn set_maximum_zoom_scale(&mut self, scale: f64) -> Result<(), JsValue> {
        self.inner
            .set_maximum_zoom_scale(scale)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Update the container size after a layout change.
    pub fn set_container(&mut self, width: f64, height: f64) {
        self.inner.set_container(Rect::new(0.0, 0.0, width, height));
    }

    /// Load an image and reset the placement.
    pub fn set_image(&mut self, image: &JsBitmap) {
        self.inner.set_image(image.to_bitmap());
    }

    /// Feed a pinch sample.
    ///
    /// # Arguments
    ///
    /// * `scale` - Scale factor since the previous sample
    /// * `phase` - 0 = began, 1 = changed, 2 = ended, 3 = cancelled
    ///
    /// # Returns
    ///
    /// Milliseconds to animate the correction over, 0 for none.
    pub fn pinch(&mut self, scale: f64, phase: u8) -> u32 {
        let animation = self
            .inner
            .handle(PinchEvent::new(scale, phase_from_u8(phase)));
        animation.map_or(0, |a| a.duration_ms)
    }

    /// Feed a pan sample with the translation since the previous sample.
    /// Returns animation milliseconds like [`pinch`](Self::pinch).
    pub fn pan(&mut self, dx: f64, dy: f64, phase: u8) -> u32 {
        let animation = self
            .inner
            .handle(PanEvent::new(dx, dy, phase_from_u8(phase)));
        animation.map_or(0, |a| a.duration_ms)
    }

    /// Image frame as `[x, y, width, height]`, undefined when nothing is
    /// placed.
    pub fn display_frame(&self) -> Option<js_sys::Float64Array> {
        self.inner
            .display_frame()
            .map(|r| js_sys::Float64Array::from(&rect_values(r)[..]))
    }

    /// Current zoom factor, 1.0 when nothing is placed.
    pub fn scale(&self) -> f64 {
        self.inner.placement().map_or(1.0, |p| p.scale)
    }

    /// Crop window as `[x, y, width, height]`.
    pub fn crop_region(&self) -> js_sys::Float64Array {
        js_sys::Float64Array::from(&rect_values(self.inner.crop_region())[..])
    }

    /// Guide line segments flattened as `[x1, y1, x2, y2, ...]`.
    pub fn guide_lines(&self) -> js_sys::Float64Array {
        let flat: Vec<f64> = self
            .inner
            .guide_lines()
            .iter()
            .flat_map(|s| [s.start.x, s.start.y, s.end.x, s.end.y])
            .collect();
        js_sys::Float64Array::from(flat.as_slice())
    }

    /// The cropped image, or undefined if no crop could be produced.
    pub fn cropped_image(&self) -> Option<JsBitmap> {
        self.inner.cropped_image().ok().map(JsBitmap::from_bitmap)
    }

    /// The circular crop as PNG bytes, or undefined if no crop could be
    /// produced.
    pub fn cropped_circle_png(&self) -> Option<Vec<u8>> {
        let round = self.inner.circular_cropped_image().ok()?;
        encode::encode_png(round.as_raw(), round.width(), round.height())
            .inspect_err(|e| log::warn!("circle export failed: {e}"))
            .ok()
    }
}
