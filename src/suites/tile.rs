//! TILE module regression checks: initialization, data processing, integration.

use anyhow::{ensure, Context};

use crate::fixtures::{self, MockResponse, TileModule};
use crate::harness::Suite;

pub fn suite() -> Suite {
    Suite::new("tile")
        .case("tile_module_initialization", || {
            let tile = fixtures::sample_tile_module();
            ensure!(tile.module_id == "TILE_001", "unexpected module id: {}", tile.module_id);
            ensure!(tile.status == "active", "module not active: {}", tile.status);
            Ok(())
        })
        .case("tile_version_compliance", || {
            let tile = fixtures::sample_tile_module();
            ensure!(!tile.version.is_empty(), "version is empty");
            // Semantic versioning: major.minor.patch
            let parts: Vec<_> = tile.version.split('.').collect();
            ensure!(parts.len() == 3, "version {} is not semver", tile.version);
            for part in parts {
                part.parse::<u32>()
                    .with_context(|| format!("non-numeric version component {part:?}"))?;
            }
            Ok(())
        })
        .case("tile_data_structure", || {
            let value = serde_json::to_value(fixtures::sample_tile_module())?;
            for field in ["module_id", "name", "version", "status", "data"] {
                ensure!(value.get(field).is_some(), "missing required field: {field}");
            }
            Ok(())
        })
        .case("tile_grid_configuration", || {
            let tile = fixtures::sample_tile_module();
            ensure!(tile.data.grid_size == 1024, "unexpected grid size: {}", tile.data.grid_size);
            Ok(())
        })
        .case("tile_resolution_accuracy", || {
            let tile = fixtures::sample_tile_module();
            ensure!(tile.data.resolution > 0.0, "resolution must be positive");
            ensure!(tile.data.resolution <= 1.0, "resolution must be <= 1.0");
            Ok(())
        })
        .case("tile_region_count", || {
            let tile = fixtures::sample_tile_module();
            ensure!(tile.data.regions > 0, "must have at least 1 region");
            Ok(())
        })
        .case("tile_quality_metrics", || {
            let metrics = fixtures::sample_tile_module().data.quality_metrics;
            ensure!(metrics.coverage >= 95.0, "coverage must be >= 95%");
            ensure!(metrics.accuracy >= 95.0, "accuracy must be >= 95%");
            Ok(())
        })
        .case("tile_module_response", || {
            let response = MockResponse::ok(fixtures::sample_tile_module());
            ensure!(response.success, "response not successful");
            ensure!(response.data.is_some(), "response carries no data");
            Ok(())
        })
        .case("tile_error_handling", || {
            let response: MockResponse<TileModule> = MockResponse::err("Grid initialization failed");
            ensure!(!response.success, "error response marked successful");
            ensure!(!response.error.is_empty(), "error response has no message");
            Ok(())
        })
        .case("tile_timestamp_validity", || {
            let tile = fixtures::sample_tile_module();
            ensure!(!tile.timestamp.to_rfc3339().is_empty(), "timestamp missing");
            Ok(())
        })
        .case("tile_data_serialization", || {
            let tile = fixtures::sample_tile_module();
            let json = serde_json::to_string(&tile)?;
            let restored: TileModule = serde_json::from_str(&json)?;
            ensure!(
                restored.module_id == tile.module_id,
                "module id changed across serialization"
            );
            Ok(())
        })
        .case("tile_data_validation", || {
            let value = serde_json::to_value(fixtures::sample_tile_module())?;
            let data = value.get("data").context("missing data section")?;
            ensure!(data.is_object(), "data section is not an object");
            let metrics = data
                .get("quality_metrics")
                .context("missing quality metrics")?;
            ensure!(metrics.is_object(), "quality metrics is not an object");
            Ok(())
        })
}
