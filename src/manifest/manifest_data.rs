//! Manifest Data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in manifest_operations.rs

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Where an atlas came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Provenance {
    Terrain {
        #[serde(rename = "terrainType")]
        terrain_type: String,
        season: String,
    },
    Object {
        category: String,
    },
}

/// One tile rectangle in atlas pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestTile {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// On-disk manifest. Tile keys are always strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtlasManifest {
    pub version: u32,
    #[serde(flatten)]
    pub provenance: Provenance,
    pub tile_width: u32,
    pub tile_height: u32,
    pub cell_width: u32,
    pub cell_height: u32,
    pub columns: u32,
    pub rows: u32,
    pub atlas_width: u32,
    pub atlas_height: u32,
    pub tiles: BTreeMap<String, ManifestTile>,
}
