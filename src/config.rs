//! Atlas build configuration
//!
//! Defaults reproduce the legacy sprite conventions: 64x32 footprints in a
//! 16x16 terrain grid with 96 pixel tall cells.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{
    BITMAP_EXTENSION, MAX_ATLAS_DIMENSION, STANDARD_TILE_HEIGHT, STANDARD_TILE_WIDTH,
    TERRAIN_CELL_HEIGHT, TERRAIN_COLUMNS, TERRAIN_ROWS,
};
use crate::error::{AtlasError, AtlasResult, ErrorContext};

/// Configuration shared by both atlas builders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtlasConfig {
    /// Declared standard tile width, also the terrain cell width
    pub tile_width: u32,
    /// Declared standard tile height, reported as the nominal terrain height
    pub tile_height: u32,
    pub terrain_columns: u32,
    pub terrain_rows: u32,
    /// Fixed terrain cell height, not derived from tile heights
    pub terrain_cell_height: u32,
    /// Extension (without dot) of source sprite files
    pub bitmap_extension: String,
    /// Decode tiles on the rayon pool
    pub parallel_decode: bool,
    /// Indent manifest JSON
    pub pretty_manifest: bool,
}

impl Default for AtlasConfig {
    fn default() -> Self {
        Self {
            tile_width: STANDARD_TILE_WIDTH,
            tile_height: STANDARD_TILE_HEIGHT,
            terrain_columns: TERRAIN_COLUMNS,
            terrain_rows: TERRAIN_ROWS,
            terrain_cell_height: TERRAIN_CELL_HEIGHT,
            bitmap_extension: BITMAP_EXTENSION.to_string(),
            parallel_decode: true,
            pretty_manifest: true,
        }
    }
}

/// Parse configuration from TOML text
pub fn parse_config(text: &str) -> AtlasResult<AtlasConfig> {
    let config: AtlasConfig =
        toml::from_str(text).map_err(|e| AtlasError::Config(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> AtlasResult<AtlasConfig> {
    let text = std::fs::read_to_string(path).io_context(path)?;
    let config = parse_config(&text)?;
    log::info!("[config::load_config] Loaded atlas config from {}", path.display());
    Ok(config)
}

/// Terrain atlas edge `count * cell` if it fits within `MAX_ATLAS_DIMENSION`
fn terrain_extent(field: &str, count: u32, cell: u32) -> AtlasResult<u32> {
    count
        .checked_mul(cell)
        .filter(|&extent| extent <= MAX_ATLAS_DIMENSION)
        .ok_or_else(|| {
            AtlasError::Config(format!(
                "terrain {} of {} x {} exceeds {} pixels",
                field, count, cell, MAX_ATLAS_DIMENSION
            ))
        })
}

/// Reject geometry that cannot produce a grid or whose terrain atlas would
/// exceed `MAX_ATLAS_DIMENSION`
pub fn validate_config(config: &AtlasConfig) -> AtlasResult<()> {
    let fields = [
        ("tile_width", config.tile_width),
        ("terrain_columns", config.terrain_columns),
        ("terrain_rows", config.terrain_rows),
        ("terrain_cell_height", config.terrain_cell_height),
    ];
    for (field, value) in fields {
        if value == 0 {
            return Err(AtlasError::Config(format!("{} must be positive", field)));
        }
    }

    terrain_extent("width", config.terrain_columns, config.tile_width)?;
    terrain_extent("height", config.terrain_rows, config.terrain_cell_height)?;
    if config.tile_height > config.terrain_cell_height {
        return Err(AtlasError::Config(format!(
            "tile_height {} exceeds terrain_cell_height {}",
            config.tile_height, config.terrain_cell_height
        )));
    }

    if config.bitmap_extension.is_empty() || config.bitmap_extension.starts_with('.') {
        return Err(AtlasError::Config(format!(
            "bitmap_extension '{}' must be a bare extension",
            config.bitmap_extension
        )));
    }

    Ok(())
}
