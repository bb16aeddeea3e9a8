//! Manifest Builder
//!
//! JSON sidecar describing grid geometry and one rectangle per tile. Field
//! names are read by the renderer and must not change.

pub mod manifest_data;
pub mod manifest_operations;

pub use manifest_data::{AtlasManifest, ManifestTile, Provenance};
pub use manifest_operations::{
    build_manifest, manifest_to_json, manifest_uv, parse_manifest, read_manifest, write_manifest,
};
