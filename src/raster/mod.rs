//! Raster Encoder
//!
//! Minimal PNG writer: signature, IHDR, zlib-compressed IDAT chunks with
//! unfiltered scanlines, IEND. No ancillary chunks.

pub mod raster_data;
pub mod raster_operations;

pub use raster_data::{ColorMode, PngHeader};
pub use raster_operations::{chunk_crc, encode_atlas, encode_png, scanlines};
