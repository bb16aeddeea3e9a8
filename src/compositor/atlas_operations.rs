//! Texture Atlas Operations - Pure DOP Functions
//!
//! All functions are pure: take data, return results, no side effects.
//! No methods, no self, just transformations.

use std::collections::BTreeMap;

use image::{Rgba, RgbaImage};

use super::atlas_data::{AtlasBuffer, AtlasUV};
use crate::bitmap::{DecodedImage, RGB_CHANNELS};
use crate::layout::{LayoutPlan, Placement};

/// Allocate a fully transparent atlas
pub fn create_atlas_buffer(width: u32, height: u32) -> AtlasBuffer {
    RgbaImage::new(width, height)
}

/// Copy a tile into the atlas with its top-left corner at (x, y)
///
/// Plain texel copy, no blending. Copied texels become opaque. Anything
/// past the atlas edge is clipped.
pub fn blit_tile(atlas: &mut AtlasBuffer, image: &DecodedImage, x: u32, y: u32) {
    if x >= atlas.width() || y >= atlas.height() {
        return;
    }

    let copy_width = image.width.min(atlas.width() - x);
    let copy_height = image.height.min(atlas.height() - y);
    let src_stride = image.width as usize * RGB_CHANNELS;

    for row in 0..copy_height {
        let src_start = row as usize * src_stride;
        let src = &image.pixels[src_start..src_start + copy_width as usize * RGB_CHANNELS];

        for (col, rgb) in (0..copy_width).zip(src.chunks_exact(RGB_CHANNELS)) {
            atlas.put_pixel(x + col, y + row, Rgba([rgb[0], rgb[1], rgb[2], 0xff]));
        }
    }
}

/// Build the atlas buffer for a plan
///
/// Every placement with a matching decoded image is copied in. Placements
/// without an image are left transparent.
pub fn composite_atlas<K: Ord + std::fmt::Debug>(
    plan: &LayoutPlan<K>,
    images: &BTreeMap<K, DecodedImage>,
) -> AtlasBuffer {
    let mut atlas = create_atlas_buffer(plan.atlas_width, plan.atlas_height);

    for (key, placement) in &plan.placements {
        let Some(image) = images.get(key) else {
            log::warn!("[atlas_operations::composite_atlas] No pixels for tile {:?}", key);
            continue;
        };
        debug_assert_eq!(
            (image.width, image.height),
            (placement.width, placement.height),
            "placement must match decoded size"
        );
        blit_tile(&mut atlas, image, placement.x, placement.y);
    }

    log::debug!(
        "[atlas_operations::composite_atlas] Composited {} tiles into {}x{}",
        plan.placements.len(),
        atlas.width(),
        atlas.height()
    );
    atlas
}

/// Normalised UV rectangle of a placement:
/// `(x / atlas_width, y / atlas_height, width / atlas_width, height / atlas_height)`
pub fn uv_rect(placement: &Placement, atlas_width: u32, atlas_height: u32) -> AtlasUV {
    let aw = atlas_width.max(1) as f32;
    let ah = atlas_height.max(1) as f32;
    AtlasUV {
        u: placement.x as f32 / aw,
        v: placement.y as f32 / ah,
        width: placement.width as f32 / aw,
        height: placement.height as f32 / ah,
    }
}
