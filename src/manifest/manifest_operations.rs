//! Manifest Operations - Pure DOP Functions
//!
//! Conversion from typed layout plans to the string-keyed manifest, plus
//! JSON (de)serialization and file access.

use std::fmt::Display;
use std::path::Path;

use super::manifest_data::{AtlasManifest, ManifestTile, Provenance};
use crate::compositor::{uv_rect, AtlasUV};
use crate::constants::MANIFEST_VERSION;
use crate::error::{AtlasError, AtlasResult, ErrorContext};
use crate::layout::{LayoutPlan, Placement};
use crate::persistence::write_atomic;

/// Build a manifest from a plan. Keys are stringified here and nowhere else.
pub fn build_manifest<K: Display>(plan: &LayoutPlan<K>, provenance: Provenance) -> AtlasManifest {
    let tiles = plan
        .placements
        .iter()
        .map(|(key, p)| {
            (
                key.to_string(),
                ManifestTile {
                    x: p.x,
                    y: p.y,
                    width: p.width,
                    height: p.height,
                },
            )
        })
        .collect();

    AtlasManifest {
        version: MANIFEST_VERSION,
        provenance,
        tile_width: plan.tile_width,
        tile_height: plan.tile_height,
        cell_width: plan.cell_width,
        cell_height: plan.cell_height,
        columns: plan.columns,
        rows: plan.rows,
        atlas_width: plan.atlas_width,
        atlas_height: plan.atlas_height,
        tiles,
    }
}

/// Serialize to JSON text
pub fn manifest_to_json(manifest: &AtlasManifest, pretty: bool) -> AtlasResult<String> {
    let result = if pretty {
        serde_json::to_string_pretty(manifest)
    } else {
        serde_json::to_string(manifest)
    };
    result.map_err(|e| AtlasError::Manifest {
        path: String::new(),
        error: e.to_string(),
    })
}

/// Serialize and persist a manifest
pub fn write_manifest(path: &Path, manifest: &AtlasManifest, pretty: bool) -> AtlasResult<()> {
    let json = manifest_to_json(manifest, pretty).map_err(|e| match e {
        AtlasError::Manifest { error, .. } => AtlasError::Manifest {
            path: path.display().to_string(),
            error,
        },
        other => other,
    })?;
    write_atomic(path, json.as_bytes())
}

/// Parse manifest JSON text
pub fn parse_manifest(text: &str) -> AtlasResult<AtlasManifest> {
    serde_json::from_str(text).map_err(|e| AtlasError::Manifest {
        path: String::new(),
        error: e.to_string(),
    })
}

/// Load a manifest written by `write_manifest`
pub fn read_manifest(path: &Path) -> AtlasResult<AtlasManifest> {
    let text = std::fs::read_to_string(path).io_context(path)?;
    serde_json::from_str(&text).map_err(|e| AtlasError::Manifest {
        path: path.display().to_string(),
        error: e.to_string(),
    })
}

/// Renderer UV rectangle for a tile key
pub fn manifest_uv(manifest: &AtlasManifest, key: &str) -> Option<AtlasUV> {
    let tile = manifest.tiles.get(key)?;
    let placement = Placement {
        x: tile.x,
        y: tile.y,
        width: tile.width,
        height: tile.height,
    };
    Some(uv_rect(&placement, manifest.atlas_width, manifest.atlas_height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AtlasConfig;
    use crate::layout::{plan_object_layout, plan_terrain_layout, terrain_grid, TileSize};

    fn terrain_manifest() -> AtlasManifest {
        let outcome = plan_terrain_layout(
            &terrain_grid(&AtlasConfig::default()),
            [0, 15, 16, 42].map(|k| {
                (
                    k,
                    TileSize {
                        width: 64,
                        height: 32,
                    },
                )
            }),
        );
        build_manifest(
            &outcome.plan,
            Provenance::Terrain {
                terrain_type: "Earth".to_string(),
                season: "Summer".to_string(),
            },
        )
    }

    #[test]
    fn test_terrain_keys_stringified() {
        let manifest = terrain_manifest();
        assert_eq!(manifest.version, MANIFEST_VERSION);
        assert_eq!(manifest.tiles.len(), 4);
        assert_eq!(
            manifest.tiles["16"],
            ManifestTile {
                x: 0,
                y: 160,
                width: 64,
                height: 32
            }
        );
        assert!(manifest.tiles.contains_key("42"));
        assert_eq!((manifest.cell_width, manifest.cell_height), (64, 96));
        assert_eq!((manifest.columns, manifest.rows), (16, 16));
    }

    #[test]
    fn test_terrain_json_field_names() {
        let json = manifest_to_json(&terrain_manifest(), false).expect("Failed to serialize");
        let value: serde_json::Value = serde_json::from_str(&json).expect("Invalid JSON");

        assert_eq!(value["version"], 1);
        assert_eq!(value["terrainType"], "Earth");
        assert_eq!(value["season"], "Summer");
        assert_eq!(value["tileWidth"], 64);
        assert_eq!(value["tileHeight"], 32);
        assert_eq!(value["cellWidth"], 64);
        assert_eq!(value["cellHeight"], 96);
        assert_eq!(value["columns"], 16);
        assert_eq!(value["rows"], 16);
        assert_eq!(value["atlasWidth"], 1024);
        assert_eq!(value["atlasHeight"], 1536);
        assert_eq!(value["tiles"]["15"]["x"], 960);
        assert_eq!(value["tiles"]["15"]["y"], 64);
        assert!(value.get("category").is_none());
    }

    #[test]
    fn test_object_json_field_names() {
        let outcome = plan_object_layout([(
            "road_ns".to_string(),
            TileSize {
                width: 64,
                height: 49,
            },
        )]);
        let manifest = build_manifest(
            &outcome.plan,
            Provenance::Object {
                category: "roads".to_string(),
            },
        );
        let json = manifest_to_json(&manifest, true).expect("Failed to serialize");
        let value: serde_json::Value = serde_json::from_str(&json).expect("Invalid JSON");

        assert_eq!(value["category"], "roads");
        assert!(value.get("terrainType").is_none());
        assert_eq!(value["tiles"]["road_ns"]["height"], 49);
    }

    #[test]
    fn test_parse_back() {
        let manifest = terrain_manifest();
        let json = manifest_to_json(&manifest, true).expect("Failed to serialize");
        assert_eq!(parse_manifest(&json).expect("Failed to parse"), manifest);

        let object = AtlasManifest {
            provenance: Provenance::Object {
                category: "concrete".to_string(),
            },
            ..manifest
        };
        let json = manifest_to_json(&object, false).expect("Failed to serialize");
        assert_eq!(
            parse_manifest(&json).expect("Failed to parse").provenance,
            object.provenance
        );

        assert!(matches!(parse_manifest("{\"version\": 1}"), Err(AtlasError::Manifest { .. })));
    }

    #[test]
    fn test_write_and_read_manifest() {
        let dir = tempfile::TempDir::new().expect("Failed to create temporary directory");
        let path = dir.path().join("terrain.json");
        let manifest = terrain_manifest();

        write_manifest(&path, &manifest, true).expect("Failed to write manifest");
        assert_eq!(read_manifest(&path).expect("Failed to read manifest"), manifest);
    }

    #[test]
    fn test_manifest_uv() {
        let manifest = terrain_manifest();
        let uv = manifest_uv(&manifest, "15").expect("Missing tile 15");
        assert_eq!(uv.u, 960.0 / 1024.0);
        assert_eq!(uv.width, 64.0 / 1024.0);
        assert!((uv.v - 64.0 / 1536.0).abs() < f32::EPSILON);
        assert!(manifest_uv(&manifest, "99").is_none());
    }
}
