//! EMQuest GPS regression checks: fix quality, accuracy, Android integration.

use anyhow::ensure;
use tracing::info;

use crate::fixtures::{self, GpsReading, MockResponse};
use crate::harness::Suite;

const VALID_FIX_QUALITIES: [&str; 4] = ["RTK Fixed", "RTK Float", "DGPS", "GPS"];

pub fn suite() -> Suite {
    Suite::new("gps")
        .case("gps_device_initialization", || {
            let gps = fixtures::sample_gps_reading();
            ensure!(gps.device_id == "EMQ_GPS_001", "unexpected device id: {}", gps.device_id);
            Ok(())
        })
        .case("gps_location_structure", || {
            let value = serde_json::to_value(fixtures::sample_gps_reading())?;
            let location = &value["location"];
            for field in ["latitude", "longitude", "accuracy", "altitude"] {
                ensure!(location.get(field).is_some(), "missing location field: {field}");
            }
            Ok(())
        })
        .case("gps_coordinate_validity", || {
            let location = fixtures::sample_gps_reading().location;
            ensure!(
                (-90.0..=90.0).contains(&location.latitude),
                "invalid latitude {}",
                location.latitude
            );
            ensure!(
                (-180.0..=180.0).contains(&location.longitude),
                "invalid longitude {}",
                location.longitude
            );
            Ok(())
        })
        .case("gps_accuracy_threshold", || {
            let accuracy = fixtures::sample_gps_reading().location.accuracy;
            ensure!(accuracy > 0.0, "accuracy must be positive");
            ensure!(accuracy <= 100.0, "accuracy should be <= 100m, got {accuracy}");
            Ok(())
        })
        .case("gps_signal_strength", || {
            let signal = fixtures::sample_gps_reading().signal_strength;
            ensure!(signal <= 100, "signal must be <= 100, got {signal}");
            ensure!(signal >= 50, "signal strength should be >= 50%, got {signal}");
            Ok(())
        })
        .case("gps_satellite_count", || {
            let satellites = fixtures::sample_gps_reading().satellites;
            ensure!(satellites >= 4, "need at least 4 satellites for a 3D fix, got {satellites}");
            Ok(())
        })
        .case("gps_fix_quality", || {
            let fix = fixtures::sample_gps_reading().fix_quality;
            ensure!(
                VALID_FIX_QUALITIES.contains(&fix.as_str()),
                "invalid fix quality: {fix}"
            );
            Ok(())
        })
        .case("gps_response_format", || {
            let response = MockResponse::ok(fixtures::sample_gps_reading());
            ensure!(response.success, "response not successful");
            let reading = response.data.as_ref();
            ensure!(reading.is_some_and(|r| r.location.accuracy > 0.0), "location missing");
            Ok(())
        })
        .case("gps_error_recovery", || {
            let response: MockResponse<GpsReading> = MockResponse::err("GPS signal lost");
            ensure!(!response.success, "error response marked successful");
            ensure!(response.error.contains("GPS"), "error should mention GPS");
            Ok(())
        })
        .case("android_location_provider", || {
            // Android Location API needs at least these fields
            let value = serde_json::to_value(fixtures::sample_gps_reading())?;
            let location = &value["location"];
            for field in ["latitude", "longitude", "accuracy"] {
                ensure!(location.get(field).is_some(), "missing provider field: {field}");
            }
            Ok(())
        })
        .case("android_permission_compliance", || {
            let accuracy = fixtures::sample_gps_reading().location.accuracy;
            if accuracy < 100.0 {
                info!("Fine location permission required (accuracy {accuracy}m)");
            }
            ensure!(accuracy > 0.0, "accuracy must be positive");
            Ok(())
        })
        .case("android_manifest_fields", || {
            let value = serde_json::to_value(fixtures::sample_gps_reading())?;
            for field in ["device_id", "location", "signal_strength", "fix_quality"] {
                ensure!(
                    value.get(field).is_some(),
                    "missing Android manifest field: {field}"
                );
            }
            Ok(())
        })
}
