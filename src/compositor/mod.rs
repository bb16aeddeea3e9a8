//! Atlas Compositor
//!
//! Copies decoded tiles into one `RgbaImage` at their planned rectangles,
//! and converts placements into renderer UV rectangles.

pub mod atlas_data;
pub mod atlas_operations;

pub use atlas_data::{AtlasBuffer, AtlasUV};
pub use atlas_operations::{blit_tile, composite_atlas, create_atlas_buffer, uv_rect};
