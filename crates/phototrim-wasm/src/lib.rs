//! PhotoTrim WASM - WebAssembly bindings for PhotoTrim
//!
//! Exposes the phototrim-core session to a browser host that renders the
//! image and the circular crop overlay itself.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types (bitmaps, phases, rectangles)
//! - `trimmer` - The pinch/pan trimming session
//! - `codec` - Image decoding and JPEG export
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_image, PhotoTrimmer } from '@phototrim/wasm';
//!
//! await init();
//!
//! const trimmer = new PhotoTrimmer(320, 480);
//! trimmer.set_image(decode_image(new Uint8Array(await file.arrayBuffer())));
//! ```

use wasm_bindgen::prelude::*;

mod codec;
mod trimmer;
mod types;

pub use codec::{decode_image, encode_jpeg};
pub use trimmer::JsPhotoTrimmer;
pub use types::JsBitmap;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    // Fails only if a logger is already installed, which is fine on re-init.
    if console_log::init_with_level(log::Level::Info).is_ok() {
        log::info!("PhotoTrim WASM {} initialized", version());
    }
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
