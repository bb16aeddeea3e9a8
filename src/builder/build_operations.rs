//! Build Operations
//!
//! Entry points that run the whole pipeline for one atlas:
//! decode -> plan -> composite -> encode -> write image and manifest.

use std::collections::BTreeMap;
use std::fmt::{Debug, Display};
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use super::build_data::{BuildResult, ObjectTile, SourceTile, TerrainTile};
use super::discovery_operations::discover_object_tiles;
use crate::bitmap::{decode_bitmap, DecodedImage};
use crate::compositor::composite_atlas;
use crate::config::{validate_config, AtlasConfig};
use crate::constants::MAX_ATLAS_DIMENSION;
use crate::error::{AtlasError, AtlasResult};
use crate::layout::{
    plan_object_layout, plan_terrain_layout, terrain_grid, LayoutOutcome, LayoutPlan, TileSize,
};
use crate::manifest::{build_manifest, write_manifest, Provenance};
use crate::persistence::write_atomic;
use crate::raster::encode_atlas;

/// Decode every source tile
///
/// Successes come back in input order regardless of which thread finished
/// first. Failures become non-fatal `AtlasError::Decode` entries.
pub fn decode_tiles<K>(
    tiles: &[SourceTile<K>],
    parallel: bool,
) -> (Vec<(K, DecodedImage)>, Vec<AtlasError>)
where
    K: Clone + Send + Sync,
{
    let decode = |tile: &SourceTile<K>| {
        decode_bitmap(&tile.file_path)
            .map(|image| (tile.key.clone(), image))
            .map_err(|source| AtlasError::Decode {
                path: tile.file_path.display().to_string(),
                source,
            })
    };

    let results: Vec<AtlasResult<(K, DecodedImage)>> = if parallel {
        tiles.par_iter().map(decode).collect()
    } else {
        tiles.iter().map(decode).collect()
    };

    let mut decoded = Vec::with_capacity(results.len());
    let mut errors = Vec::new();
    for result in results {
        match result {
            Ok(entry) => decoded.push(entry),
            Err(e) => {
                log::warn!("[build_operations::decode_tiles] {}", e);
                errors.push(e);
            }
        }
    }
    (decoded, errors)
}

/// Image and manifest paths for a terrain atlas inside `output_dir`
pub fn terrain_output_paths(
    output_dir: &Path,
    terrain_type: &str,
    season: &str,
) -> (PathBuf, PathBuf) {
    let stem = format!("terrain_{}_{}", terrain_type, season).to_lowercase();
    (
        output_dir.join(format!("{}.png", stem)),
        output_dir.join(format!("{}.json", stem)),
    )
}

fn failed(errors: Vec<String>) -> BuildResult {
    BuildResult {
        success: false,
        errors,
        ..Default::default()
    }
}

/// Reject plans whose atlas cannot be allocated as one texture
fn check_atlas_size<K>(plan: &LayoutPlan<K>) -> AtlasResult<()> {
    if plan.atlas_width > MAX_ATLAS_DIMENSION || plan.atlas_height > MAX_ATLAS_DIMENSION {
        return Err(AtlasError::AtlasTooLarge {
            width: plan.atlas_width,
            height: plan.atlas_height,
            max: MAX_ATLAS_DIMENSION,
        });
    }
    Ok(())
}

/// Shared tail of both builders: composite, encode, write both files
fn finish_build<K>(
    outcome: LayoutOutcome<K>,
    decoded: Vec<(K, DecodedImage)>,
    provenance: Provenance,
    atlas_path: &Path,
    manifest_path: &Path,
    config: &AtlasConfig,
    mut errors: Vec<String>,
) -> BuildResult
where
    K: Ord + Display + Debug,
{
    let LayoutOutcome { plan, rejected } = outcome;
    if let Err(e) = check_atlas_size(&plan) {
        log::warn!("[build_operations::finish_build] {}", e);
        errors.push(e.to_string());
        return failed(errors);
    }

    for r in rejected {
        errors.push(
            AtlasError::TileRejected {
                key: r.key.to_string(),
                reason: r.reason,
            }
            .to_string(),
        );
    }

    // First decoded image wins for a key, matching the planner
    let mut images: BTreeMap<K, DecodedImage> = BTreeMap::new();
    for (key, image) in decoded {
        if plan.placements.contains_key(&key) {
            images.entry(key).or_insert(image);
        }
    }

    let atlas = composite_atlas(&plan, &images);
    let written = encode_atlas(&atlas)
        .and_then(|png| write_atomic(atlas_path, &png))
        .and_then(|_| {
            let manifest = build_manifest(&plan, provenance);
            write_manifest(manifest_path, &manifest, config.pretty_manifest)
        });

    if let Err(e) = written {
        log::warn!("[build_operations::finish_build] {}", e);
        errors.push(e.to_string());
        return failed(errors);
    }

    let result = BuildResult {
        success: true,
        tile_count: plan.placements.len() as u32,
        atlas_width: plan.atlas_width,
        atlas_height: plan.atlas_height,
        errors,
    };
    log::info!(
        "[build_operations::finish_build] Wrote {} ({} tiles, {}x{}, {} errors)",
        atlas_path.display(),
        result.tile_count,
        result.atlas_width,
        result.atlas_height,
        result.errors.len()
    );
    result
}

fn tile_sizes<K: Clone>(decoded: &[(K, DecodedImage)]) -> Vec<(K, TileSize)> {
    decoded
        .iter()
        .map(|(key, image)| {
            (
                key.clone(),
                TileSize {
                    width: image.width,
                    height: image.height,
                },
            )
        })
        .collect()
}

/// Build a terrain atlas with default configuration
pub fn build_terrain_atlas(
    tiles: &[TerrainTile],
    output_dir: &Path,
    terrain_type: &str,
    season: &str,
) -> BuildResult {
    build_terrain_atlas_with_config(
        tiles,
        output_dir,
        terrain_type,
        season,
        &AtlasConfig::default(),
    )
}

/// Build a terrain atlas on the fixed palette-index grid
///
/// Missing or invalid tiles are dropped and reported. The build still
/// succeeds with zero valid tiles and writes an empty full-size atlas.
pub fn build_terrain_atlas_with_config(
    tiles: &[TerrainTile],
    output_dir: &Path,
    terrain_type: &str,
    season: &str,
    config: &AtlasConfig,
) -> BuildResult {
    if let Err(e) = validate_config(config) {
        log::warn!("[build_operations::build_terrain_atlas] {}", e);
        return failed(vec![e.to_string()]);
    }
    log::info!(
        "[build_operations::build_terrain_atlas] {} {}: {} source tiles",
        terrain_type,
        season,
        tiles.len()
    );

    let (decoded, decode_errors) = decode_tiles(tiles, config.parallel_decode);
    let errors = decode_errors.iter().map(ToString::to_string).collect();

    let outcome = plan_terrain_layout(&terrain_grid(config), tile_sizes(&decoded));
    let (atlas_path, manifest_path) = terrain_output_paths(output_dir, terrain_type, season);
    let provenance = Provenance::Terrain {
        terrain_type: terrain_type.to_string(),
        season: season.to_string(),
    };

    finish_build(
        outcome,
        decoded,
        provenance,
        &atlas_path,
        &manifest_path,
        config,
        errors,
    )
}

/// Build an object atlas with default configuration
pub fn build_object_atlas(
    source_dir: &Path,
    atlas_path: &Path,
    manifest_path: &Path,
    category: &str,
) -> BuildResult {
    build_object_atlas_with_config(
        source_dir,
        atlas_path,
        manifest_path,
        category,
        &AtlasConfig::default(),
    )
}

fn discover_for_build(source_dir: &Path, config: &AtlasConfig) -> AtlasResult<Vec<ObjectTile>> {
    if !source_dir.is_dir() {
        return Err(AtlasError::SourceNotFound {
            path: source_dir.display().to_string(),
        });
    }

    let tiles = discover_object_tiles(source_dir, &config.bitmap_extension)?;
    if tiles.is_empty() {
        return Err(AtlasError::NoMatchingFiles {
            path: source_dir.display().to_string(),
            extension: config.bitmap_extension.clone(),
        });
    }
    Ok(tiles)
}

/// Build an object atlas from every bitmap in `source_dir`
///
/// Fails without writing anything when the directory is missing or holds no
/// bitmaps. Tiles are placed in lexicographic name order.
pub fn build_object_atlas_with_config(
    source_dir: &Path,
    atlas_path: &Path,
    manifest_path: &Path,
    category: &str,
    config: &AtlasConfig,
) -> BuildResult {
    if let Err(e) = validate_config(config) {
        log::warn!("[build_operations::build_object_atlas] {}", e);
        return failed(vec![e.to_string()]);
    }
    let tiles = match discover_for_build(source_dir, config) {
        Ok(tiles) => tiles,
        Err(e) => {
            log::warn!("[build_operations::build_object_atlas] {}: {}", category, e);
            return failed(vec![e.to_string()]);
        }
    };
    log::info!(
        "[build_operations::build_object_atlas] {}: {} source tiles",
        category,
        tiles.len()
    );

    let (decoded, decode_errors) = decode_tiles(&tiles, config.parallel_decode);
    let errors = decode_errors.iter().map(ToString::to_string).collect();

    let outcome = plan_object_layout(tile_sizes(&decoded));
    let provenance = Provenance::Object {
        category: category.to_string(),
    };

    finish_build(
        outcome,
        decoded,
        provenance,
        atlas_path,
        manifest_path,
        config,
        errors,
    )
}
