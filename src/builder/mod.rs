//! Atlas Orchestrators
//!
//! Ties decoding, layout, compositing, encoding and manifest writing
//! together. Failures never escape as `Err`; they end up in `BuildResult`.

pub mod build_data;
pub mod build_operations;
pub mod discovery_operations;

pub use build_data::{BuildResult, ObjectTile, SourceTile, TerrainTile};
pub use build_operations::{
    build_object_atlas, build_object_atlas_with_config, build_terrain_atlas,
    build_terrain_atlas_with_config, decode_tiles, terrain_output_paths,
};
pub use discovery_operations::{
    discover_object_tiles, discover_terrain_tiles, palette_index_from_file_name,
};
