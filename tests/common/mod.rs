//! Shared fixtures for integration tests

use std::path::Path;

use sprite_atlas::TerrainTile;

#[allow(dead_code)]
#[path = "../../src/testing.rs"]
mod fixtures;

pub use fixtures::write_bitmap;

/// Terrain tiles named `tile.<index>.bmp`
pub fn terrain_tiles(dir: &Path, tiles: &[(u32, u32, u32)]) -> Vec<TerrainTile> {
    tiles
        .iter()
        .map(|&(key, width, height)| TerrainTile {
            key,
            file_path: write_bitmap(
                dir,
                &format!("tile.{}.bmp", key),
                width,
                height,
                [200, 100, 50],
            ),
        })
        .collect()
}
