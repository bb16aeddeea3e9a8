//! Layout Data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in layout_operations.rs

use std::collections::BTreeMap;

/// Which grid policy produced a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutPolicy {
    Terrain,
    Object,
}

/// Decoded dimensions of one tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileSize {
    pub width: u32,
    pub height: u32,
}

/// Tile rectangle in atlas pixel coordinates. Size always equals the
/// decoded tile size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Terrain grid geometry, fixed regardless of how many tiles exist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerrainGrid {
    pub columns: u32,
    pub rows: u32,
    pub cell_width: u32,
    pub cell_height: u32,
    /// Nominal tile footprint reported in the manifest
    pub tile_width: u32,
    pub tile_height: u32,
}

/// Atlas geometry plus one placement per key
///
/// Keys stay typed (palette index or name) until the manifest is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutPlan<K> {
    pub policy: LayoutPolicy,
    pub atlas_width: u32,
    pub atlas_height: u32,
    pub cell_width: u32,
    pub cell_height: u32,
    pub columns: u32,
    pub rows: u32,
    pub tile_width: u32,
    pub tile_height: u32,
    pub placements: BTreeMap<K, Placement>,
}

/// A tile the planner refused to place
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedTile<K> {
    pub key: K,
    pub reason: String,
}

/// Plan plus the tiles left out of it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutOutcome<K> {
    pub plan: LayoutPlan<K>,
    pub rejected: Vec<RejectedTile<K>>,
}
