// Sprite Atlas - Data-Oriented Programming (DOP) Architecture
//
// Each component keeps plain data in *_data.rs and pure transformations in
// *_operations.rs. Only the builder and persistence modules touch the
// filesystem.
//
// Pipeline:
// - bitmap: 24-bit BMP -> top-down RGB
// - layout: terrain grid / object grid placement
// - compositor: tiles -> RGBA atlas buffer
// - raster: atlas buffer -> PNG bytes
// - manifest: layout -> JSON sidecar
// - builder: orchestrators returning BuildResult

pub mod constants;

// Core modules
pub mod config;
pub mod error;

// Pipeline stages
pub mod bitmap;
pub mod compositor;
pub mod layout;
pub mod manifest;
pub mod raster;

// Output and orchestration
pub mod builder;
pub mod persistence;

#[cfg(test)]
mod testing;

pub use bitmap::{decode_bitmap, decode_bitmap_bytes, DecodedImage};
pub use builder::{
    build_object_atlas, build_object_atlas_with_config, build_terrain_atlas,
    build_terrain_atlas_with_config, discover_object_tiles, discover_terrain_tiles,
    palette_index_from_file_name, terrain_output_paths, BuildResult, ObjectTile, SourceTile,
    TerrainTile,
};
pub use compositor::{composite_atlas, uv_rect, AtlasBuffer, AtlasUV};
pub use config::{load_config, parse_config, validate_config, AtlasConfig};
pub use error::{AtlasError, AtlasResult, DecodeError};
pub use layout::{
    plan_object_layout, plan_terrain_layout, LayoutPlan, LayoutPolicy, Placement, TileSize,
};
pub use manifest::{build_manifest, read_manifest, AtlasManifest, ManifestTile, Provenance};
pub use raster::{encode_atlas, encode_png, ColorMode};
