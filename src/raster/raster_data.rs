//! Raster Data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in raster_operations.rs

/// PNG color mode of the encoded image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Rgb,
    Rgba,
}

/// IHDR contents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PngHeader {
    pub width: u32,
    pub height: u32,
    pub bit_depth: u8,
    pub color_type: u8,
}
