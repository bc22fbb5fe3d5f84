//! Decode/encode WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! import { decode_image, encode_jpeg } from '@phototrim/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode_image(bytes); // EXIF orientation applied
//!
//! const cropped = trimmer.cropped_image();
//! if (cropped) {
//!   const jpeg = encode_jpeg(cropped, 90);
//! }
//! ```

use phototrim_core::{bitmap, encode};
use wasm_bindgen::prelude::*;

use crate::types::JsBitmap;

/// Decode JPEG or PNG bytes, applying EXIF orientation correction.
///
/// # Errors
///
/// Returns an error if the bytes are not a supported image or are corrupted.
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsBitmap, JsValue> {
    bitmap::decode_image(bytes)
        .map(JsBitmap::from_bitmap)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode a bitmap to JPEG bytes.
///
/// * `quality` - JPEG quality (1-100, recommended: 90)
#[wasm_bindgen]
pub fn encode_jpeg(image: &JsBitmap, quality: u8) -> Result<Vec<u8>, JsValue> {
    let bitmap = image.to_bitmap();
    encode::encode_jpeg(&bitmap.pixels, bitmap.width, bitmap.height, quality)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
