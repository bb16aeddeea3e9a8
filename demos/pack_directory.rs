//! Packs a directory of bitmaps into an atlas
//!
//! Usage:
//!   cargo run --example pack_directory -- <source_dir> <output_dir> [category] [config.toml]
//!   cargo run --example pack_directory -- --terrain <type> <season> <source_dir> <output_dir>

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use sprite_atlas::{
    build_object_atlas_with_config, build_terrain_atlas_with_config, discover_terrain_tiles,
    load_config, AtlasConfig, BuildResult,
};

const USAGE: &str = concat!(
    "usage: pack_directory <source_dir> <output_dir> [category] [config.toml]\n",
    "       pack_directory --terrain <type> <season> <source_dir> <output_dir> [config.toml]",
);

fn config_from(path: Option<String>) -> Result<AtlasConfig> {
    match path {
        Some(path) => load_config(Path::new(&path)).context("Failed to load config"),
        None => Ok(AtlasConfig::default()),
    }
}

fn pack_terrain(mut args: impl Iterator<Item = String>) -> Result<BuildResult> {
    let (Some(terrain_type), Some(season), Some(source_dir), Some(output_dir)) =
        (args.next(), args.next(), args.next(), args.next())
    else {
        bail!(USAGE);
    };
    let config = config_from(args.next())?;

    let tiles = discover_terrain_tiles(Path::new(&source_dir), &config.bitmap_extension)
        .context("Failed to scan terrain directory")?;
    Ok(build_terrain_atlas_with_config(
        &tiles,
        Path::new(&output_dir),
        &terrain_type,
        &season,
        &config,
    ))
}

fn pack_objects(mut args: impl Iterator<Item = String>) -> Result<BuildResult> {
    let (Some(source_dir), Some(output_dir)) = (args.next(), args.next()) else {
        bail!(USAGE);
    };
    let category = args.next().unwrap_or_else(|| "objects".to_string());
    let config = config_from(args.next())?;

    let output_dir = PathBuf::from(output_dir);
    Ok(build_object_atlas_with_config(
        Path::new(&source_dir),
        &output_dir.join(format!("{}.png", category)),
        &output_dir.join(format!("{}.json", category)),
        &category,
        &config,
    ))
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let mut args = std::env::args().skip(1).peekable();
    let result = if args.peek().map(String::as_str) == Some("--terrain") {
        args.next();
        pack_terrain(args)?
    } else {
        pack_objects(args)?
    };
    println!("{}", serde_json::to_string_pretty(&result)?);

    if !result.success {
        bail!("atlas build failed: {}", result.errors.join("; "));
    }
    Ok(())
}
