//! Shared constants for atlas building
//!
//! Grid geometry values here are part of the on-disk manifest contract
//! consumed by the renderer. Changing them changes every terrain atlas.

/// Terrain grid is always 16 columns wide
pub const TERRAIN_COLUMNS: u32 = 16;

/// Terrain grid is always 16 rows tall, covering palette indices 0..256
pub const TERRAIN_ROWS: u32 = 16;

/// Fixed terrain cell height. Leaves headroom above a 64x32 footprint for
/// tall structures.
pub const TERRAIN_CELL_HEIGHT: u32 = 96;

/// Nominal footprint of a standard tile
pub const STANDARD_TILE_WIDTH: u32 = 64;
pub const STANDARD_TILE_HEIGHT: u32 = 32;

/// Largest atlas edge in pixels, the common GPU 2D texture limit
pub const MAX_ATLAS_DIMENSION: u32 = 16384;

/// Manifest schema version
pub const MANIFEST_VERSION: u32 = 1;

/// Extension of source sprite files
pub const BITMAP_EXTENSION: &str = "bmp";

/// Bitmap file header constants
pub mod bitmap {
    pub const SIGNATURE: [u8; 2] = *b"BM";
    pub const FILE_HEADER_SIZE: usize = 14;
    pub const INFO_HEADER_SIZE: usize = 40;
    pub const SUPPORTED_BITS_PER_PIXEL: u16 = 24;
    pub const COMPRESSION_NONE: u32 = 0;
    /// Rows are padded to this many bytes
    pub const ROW_ALIGNMENT: usize = 4;
}

/// PNG container constants
pub mod raster {
    pub const SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];
    pub const BIT_DEPTH: u8 = 8;
    pub const COLOR_TYPE_RGB: u8 = 2;
    pub const COLOR_TYPE_RGBA: u8 = 6;
    pub const FILTER_NONE: u8 = 0;
    /// Upper bound for a single IDAT payload
    pub const MAX_DATA_CHUNK: usize = 1 << 16;
}
