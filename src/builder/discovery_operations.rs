//! Discovery Operations
//!
//! Turns a directory of already-extracted sprite files into `SourceTile`s.

use std::path::{Path, PathBuf};

use super::build_data::{ObjectTile, SourceTile, TerrainTile};
use crate::error::{AtlasResult, ErrorContext};

/// Palette index embedded in a file name as a dot-delimited numeric token,
/// e.g. `terrain.042.bmp` -> 42
pub fn palette_index_from_file_name(name: &str) -> Option<u32> {
    name.split('.')
        .find(|token| !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|token| token.parse().ok())
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(extension))
}

/// Regular files in `dir` with the given extension, sorted by path
fn list_bitmaps(dir: &Path, extension: &str) -> AtlasResult<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir).io_context(dir)? {
        let path = entry.io_context(dir)?.path();
        if path.is_file() && has_extension(&path, extension) {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

/// Object tiles keyed by file stem, in lexicographic key order
pub fn discover_object_tiles(dir: &Path, extension: &str) -> AtlasResult<Vec<ObjectTile>> {
    let mut tiles: Vec<ObjectTile> = list_bitmaps(dir, extension)?
        .into_iter()
        .filter_map(|path| {
            let key = path.file_stem()?.to_string_lossy().into_owned();
            Some(SourceTile {
                key,
                file_path: path,
            })
        })
        .collect();
    tiles.sort_by(|a, b| a.key.cmp(&b.key).then_with(|| a.file_path.cmp(&b.file_path)));

    log::debug!(
        "[discovery_operations::discover_object_tiles] {} tiles in {}",
        tiles.len(),
        dir.display()
    );
    Ok(tiles)
}

/// Terrain tiles keyed by the palette index in their file name. Files
/// without an index are skipped.
pub fn discover_terrain_tiles(dir: &Path, extension: &str) -> AtlasResult<Vec<TerrainTile>> {
    let mut tiles = Vec::new();
    for path in list_bitmaps(dir, extension)? {
        let index = path
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(palette_index_from_file_name);
        match index {
            Some(key) => tiles.push(SourceTile {
                key,
                file_path: path,
            }),
            None => log::warn!(
                "[discovery_operations::discover_terrain_tiles] No palette index in {}",
                path.display()
            ),
        }
    }
    tiles.sort_by(|a, b| a.key.cmp(&b.key).then_with(|| a.file_path.cmp(&b.file_path)));
    Ok(tiles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::write_bitmap;
    use tempfile::TempDir;

    #[test]
    fn test_palette_index_from_file_name() {
        assert_eq!(palette_index_from_file_name("terrain.042.bmp"), Some(42));
        assert_eq!(palette_index_from_file_name("earth.summer.7.bmp"), Some(7));
        assert_eq!(palette_index_from_file_name("0.bmp"), Some(0));
        assert_eq!(palette_index_from_file_name("tile42.bmp"), None);
        assert_eq!(palette_index_from_file_name("road.bmp"), None);
        assert_eq!(palette_index_from_file_name("big.99999999999.bmp"), None);
    }

    #[test]
    fn test_discover_object_tiles_sorted() {
        let dir = TempDir::new().expect("Failed to create temporary directory");
        write_bitmap(dir.path(), "road_ns.bmp", 4, 4, [1, 1, 1]);
        write_bitmap(dir.path(), "concrete.BMP", 4, 4, [1, 1, 1]);
        write_bitmap(dir.path(), "road_ew.bmp", 4, 4, [1, 1, 1]);
        std::fs::write(dir.path().join("readme.txt"), b"not a sprite").expect("Failed to write");
        std::fs::create_dir(dir.path().join("nested.bmp")).expect("Failed to create dir");

        let tiles = discover_object_tiles(dir.path(), "bmp").expect("Failed to discover tiles");
        let keys: Vec<&str> = tiles.iter().map(|t| t.key.as_str()).collect();
        assert_eq!(keys, vec!["concrete", "road_ew", "road_ns"]);
    }

    #[test]
    fn test_discover_terrain_tiles() {
        let dir = TempDir::new().expect("Failed to create temporary directory");
        write_bitmap(dir.path(), "terrain.16.bmp", 4, 4, [1, 1, 1]);
        write_bitmap(dir.path(), "terrain.2.bmp", 4, 4, [1, 1, 1]);
        write_bitmap(dir.path(), "terrain.bmp", 4, 4, [1, 1, 1]);

        let tiles = discover_terrain_tiles(dir.path(), "bmp").expect("Failed to discover tiles");
        let keys: Vec<u32> = tiles.iter().map(|t| t.key).collect();
        assert_eq!(keys, vec![2, 16]);
    }

    #[test]
    fn test_discover_missing_dir() {
        let dir = TempDir::new().expect("Failed to create temporary directory");
        assert!(discover_object_tiles(&dir.path().join("nope"), "bmp").is_err());
    }
}
