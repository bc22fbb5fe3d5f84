//! WASM-compatible wrapper types.
//!
//! Converts between the core PhotoTrim types and JavaScript-friendly shapes:
//! bitmaps as width/height plus a byte buffer, rectangles as flat `[x, y,
//! width, height]` arrays, gesture phases as small integers.

use phototrim_core::{Bitmap, GesturePhase, Rect};
use wasm_bindgen::prelude::*;

/// An RGB bitmap for JavaScript.
///
/// # Memory Management
///
/// The pixel data lives in WASM memory. `pixels()` copies it out to a
/// `Uint8Array`; keep the bitmap in WASM memory until you actually need the
/// bytes.
#[wasm_bindgen]
pub struct JsBitmap {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsBitmap {
    /// Create a bitmap from dimensions and RGB pixel data (3 bytes per pixel,
    /// row-major order).
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<JsBitmap, JsValue> {
        let expected = (width as usize) * (height as usize) * 3;
        if pixels.len() != expected {
            return Err(JsValue::from_str(&format!(
                "expected {expected} bytes for {width}x{height} RGB, got {}",
                pixels.len()
            )));
        }
        Ok(JsBitmap {
            width,
            height,
            pixels,
        })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns RGB pixel data as Uint8Array (a copy).
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }
}

impl JsBitmap {
    pub(crate) fn from_bitmap(bitmap: Bitmap) -> Self {
        Self {
            width: bitmap.width,
            height: bitmap.height,
            pixels: bitmap.pixels,
        }
    }

    /// Note: This clones the pixel data.
    pub(crate) fn to_bitmap(&self) -> Bitmap {
        Bitmap::new(self.width, self.height, self.pixels.clone())
    }
}

/// Convert a u8 phase value to the core GesturePhase.
///
/// Values:
/// - 0 = Began
/// - 1 = Changed
/// - 2 = Ended
/// - 3 = Cancelled
///
/// Any other value is treated as Cancelled so the clamp pass still runs.
pub(crate) fn phase_from_u8(value: u8) -> GesturePhase {
    match value {
        0 => GesturePhase::Began,
        1 => GesturePhase::Changed,
        2 => GesturePhase::Ended,
        _ => GesturePhase::Cancelled,
    }
}

pub(crate) fn rect_values(rect: Rect) -> [f64; 4] {
    [rect.x, rect.y, rect.width, rect.height]
}
