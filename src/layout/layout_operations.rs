//! Layout Operations - Pure DOP Functions
//!
//! All functions are pure: take data, return results, no side effects.
//! No methods, no self, just transformations.

use std::collections::BTreeMap;

use super::layout_data::{
    LayoutOutcome, LayoutPlan, LayoutPolicy, Placement, RejectedTile, TerrainGrid, TileSize,
};
use crate::config::AtlasConfig;

/// Terrain grid geometry from configuration
///
/// The nominal tile size reported in terrain manifests is the configured
/// standard footprint, never the size of the first decoded tile.
pub fn terrain_grid(config: &AtlasConfig) -> TerrainGrid {
    TerrainGrid {
        columns: config.terrain_columns,
        rows: config.terrain_rows,
        cell_width: config.tile_width,
        cell_height: config.terrain_cell_height,
        tile_width: config.tile_width,
        tile_height: config.tile_height,
    }
}

/// Bottom-aligned placement of a tile in grid cell (col, row). Saturates
/// instead of wrapping so oversized grids are caught by the atlas size check.
fn place_in_cell(
    col: u32,
    row: u32,
    cell_width: u32,
    cell_height: u32,
    size: TileSize,
) -> Placement {
    let y_offset = cell_height.saturating_sub(size.height);
    Placement {
        x: col.saturating_mul(cell_width),
        y: row.saturating_mul(cell_height).saturating_add(y_offset),
        width: size.width,
        height: size.height,
    }
}

/// Plan the fixed terrain grid
///
/// Palette index `k` goes to column `k % columns`, row `k / columns`. The
/// atlas always covers the full grid, so an empty tile set still yields
/// `columns * cell_width` by `rows * cell_height`.
pub fn plan_terrain_layout(
    grid: &TerrainGrid,
    tiles: impl IntoIterator<Item = (u32, TileSize)>,
) -> LayoutOutcome<u32> {
    let capacity = grid.columns.saturating_mul(grid.rows);
    let mut placements = BTreeMap::new();
    let mut rejected = Vec::new();

    for (key, size) in tiles {
        let reason = if key >= capacity {
            Some(format!(
                "palette index {} outside the {}x{} grid",
                key, grid.columns, grid.rows
            ))
        } else if size.width > grid.cell_width || size.height > grid.cell_height {
            Some(format!(
                "{}x{} tile does not fit a {}x{} cell",
                size.width, size.height, grid.cell_width, grid.cell_height
            ))
        } else if placements.contains_key(&key) {
            Some(format!("duplicate palette index {}", key))
        } else {
            None
        };

        if let Some(reason) = reason {
            log::warn!(
                "[layout_operations::plan_terrain_layout] Rejected tile {}: {}",
                key,
                reason
            );
            rejected.push(RejectedTile { key, reason });
            continue;
        }

        let placement = place_in_cell(
            key % grid.columns,
            key / grid.columns,
            grid.cell_width,
            grid.cell_height,
            size,
        );
        log::debug!(
            "[layout_operations::plan_terrain_layout] Tile {} at ({}, {}) {}x{}",
            key,
            placement.x,
            placement.y,
            placement.width,
            placement.height
        );
        placements.insert(key, placement);
    }

    LayoutOutcome {
        plan: LayoutPlan {
            policy: LayoutPolicy::Terrain,
            atlas_width: grid.columns.saturating_mul(grid.cell_width),
            atlas_height: grid.rows.saturating_mul(grid.cell_height),
            cell_width: grid.cell_width,
            cell_height: grid.cell_height,
            columns: grid.columns,
            rows: grid.rows,
            tile_width: grid.tile_width,
            tile_height: grid.tile_height,
            placements,
        },
        rejected,
    }
}

/// Columns and rows for `n` tiles: `ceil(sqrt(n))` columns, as many rows as
/// needed. Zero tiles give a 0x0 grid.
pub fn object_grid_dimensions(n: u32) -> (u32, u32) {
    if n == 0 {
        return (0, 0);
    }

    // Integer ceil(sqrt(n)); float sqrt alone can be off by one for large n
    let mut columns = (n as f64).sqrt() as u32;
    while columns * columns < n {
        columns += 1;
    }
    while columns > 1 && (columns - 1) * (columns - 1) >= n {
        columns -= 1;
    }

    (columns, n.div_ceil(columns))
}

/// Plan the count-driven object grid
///
/// Cells are sized to the largest decoded width and height. Tiles are laid
/// out row-major in lexicographic key order, independent of input order.
/// Zero tiles produce a 1x1 atlas with no placements so the output image is
/// still well-formed.
pub fn plan_object_layout(
    tiles: impl IntoIterator<Item = (String, TileSize)>,
) -> LayoutOutcome<String> {
    let mut sorted: BTreeMap<String, TileSize> = BTreeMap::new();
    let mut rejected = Vec::new();

    for (key, size) in tiles {
        if sorted.contains_key(&key) {
            let reason = format!("duplicate tile name {}", key);
            log::warn!("[layout_operations::plan_object_layout] Rejected tile: {}", reason);
            rejected.push(RejectedTile { key, reason });
        } else {
            sorted.insert(key, size);
        }
    }

    let n = sorted.len() as u32;
    let (columns, rows) = object_grid_dimensions(n);
    let cell_width = sorted.values().map(|s| s.width).max().unwrap_or(0);
    let cell_height = sorted.values().map(|s| s.height).max().unwrap_or(0);
    let nominal = sorted.values().next().copied().unwrap_or(TileSize {
        width: 0,
        height: 0,
    });

    let placements = sorted
        .into_iter()
        .enumerate()
        .map(|(i, (key, size))| {
            let i = i as u32;
            let placement =
                place_in_cell(i % columns, i / columns, cell_width, cell_height, size);
            (key, placement)
        })
        .collect();

    let (atlas_width, atlas_height) = if n == 0 {
        (1, 1)
    } else {
        (
            columns.saturating_mul(cell_width),
            rows.saturating_mul(cell_height),
        )
    };

    LayoutOutcome {
        plan: LayoutPlan {
            policy: LayoutPolicy::Object,
            atlas_width,
            atlas_height,
            cell_width,
            cell_height,
            columns,
            rows,
            tile_width: nominal.width,
            tile_height: nominal.height,
            placements,
        },
        rejected,
    }
}
