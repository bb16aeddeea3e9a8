//! Bitmap Decoder
//!
//! Reads 24-bit uncompressed bitmaps into top-down RGB buffers. Row order
//! and BGR byte order are resolved here so nothing downstream sees them.

pub mod bitmap_data;
pub mod bitmap_operations;

pub use bitmap_data::{BitmapHeader, DecodedImage, RGB_CHANNELS};
pub use bitmap_operations::{decode_bitmap, decode_bitmap_bytes, parse_bitmap_header, row_stride};
