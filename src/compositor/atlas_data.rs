//! Texture Atlas Data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in atlas_operations.rs

use image::RgbaImage;

/// Composited atlas pixels, RGBA, row-major, top-down
pub type AtlasBuffer = RgbaImage;

/// Normalised sub-rectangle of the atlas as the renderer samples it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtlasUV {
    pub u: f32,
    pub v: f32,
    pub width: f32,
    pub height: f32,
}
