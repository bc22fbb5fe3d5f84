//! In-memory bitmaps and decoding.
//!
//! A [`Bitmap`] is the unit the trimmer works on: one upright RGB image held
//! in memory. [`decode_image`] produces one from JPEG or PNG bytes, applying
//! EXIF orientation first.

mod decode;
mod types;

pub use decode::{decode_image, read_orientation};
pub use types::{Bitmap, DecodeError, Orientation};
