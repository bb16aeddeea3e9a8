//! Grid Layout Planner
//!
//! Two policies: a fixed 16x16 terrain grid indexed by palette index, and a
//! square-ish object grid sized to the largest tile. Both bottom-align tiles
//! inside their cells.

pub mod layout_data;
pub mod layout_operations;

pub use layout_data::{
    LayoutOutcome, LayoutPlan, LayoutPolicy, Placement, RejectedTile, TerrainGrid, TileSize,
};
pub use layout_operations::{
    object_grid_dimensions, plan_object_layout, plan_terrain_layout, terrain_grid,
};
