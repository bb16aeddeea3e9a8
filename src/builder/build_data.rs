//! Build Data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in build_operations.rs

use std::path::PathBuf;

use serde::Serialize;

/// One sprite file before decoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceTile<K> {
    pub key: K,
    pub file_path: PathBuf,
}

/// Terrain sprites are keyed by palette index
pub type TerrainTile = SourceTile<u32>;

/// Road, concrete and other object sprites are keyed by name
pub type ObjectTile = SourceTile<String>;

/// Outcome of one orchestrator call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildResult {
    pub success: bool,
    pub tile_count: u32,
    pub atlas_width: u32,
    pub atlas_height: u32,
    /// Fatal and per-tile messages in the order they occurred
    pub errors: Vec<String>,
}
