//! Bitmap Data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in bitmap_operations.rs

/// Bytes per decoded texel
pub const RGB_CHANNELS: usize = 3;

/// Decoded sprite, row 0 is the visual top
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    /// `width * height` RGB texels, row-major
    pub pixels: Vec<u8>,
}

/// Fields of the file and info headers that decoding depends on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapHeader {
    pub data_offset: u32,
    pub info_header_size: u32,
    pub width: i32,
    /// Positive means rows are stored bottom-up
    pub height: i32,
    pub planes: u16,
    pub bits_per_pixel: u16,
    pub compression: u32,
}
