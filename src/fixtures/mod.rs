//! Synthetic subsystem fixtures -- the "system under test" is this data.
//!
//! Each sample constructor returns a fixed-shape record with known values;
//! the regression suites assert against those values. Timestamps are taken
//! at construction so serialized fixtures carry a plausible capture time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Standard mock response wrapper used by every subsystem suite.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MockResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: String,
    pub timestamp: DateTime<Utc>,
}

impl<T> MockResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: String::new(),
            timestamp: Utc::now(),
        }
    }

    pub fn err(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: error.into(),
            timestamp: Utc::now(),
        }
    }
}

// --- TILE tiling module ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileModule {
    pub module_id: String,
    pub name: String,
    pub version: String,
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub data: TileData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileData {
    pub grid_size: u32,
    pub resolution: f64,
    pub regions: u32,
    pub quality_metrics: TileQualityMetrics,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileQualityMetrics {
    pub coverage: f64,
    pub accuracy: f64,
}

pub fn sample_tile_module() -> TileModule {
    TileModule {
        module_id: "TILE_001".to_string(),
        name: "Tile Test Module".to_string(),
        version: "2.1.0".to_string(),
        status: "active".to_string(),
        timestamp: Utc::now(),
        data: TileData {
            grid_size: 1024,
            resolution: 0.1,
            regions: 4,
            quality_metrics: TileQualityMetrics {
                coverage: 99.5,
                accuracy: 98.7,
            },
        },
    }
}

// --- EMQuest GPS integration ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GpsReading {
    pub device_id: String,
    pub location: GpsLocation,
    /// Percentage, 0-100.
    pub signal_strength: u8,
    pub satellites: u8,
    pub fix_quality: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GpsLocation {
    pub latitude: f64,
    pub longitude: f64,
    /// Horizontal accuracy in meters.
    pub accuracy: f64,
    pub altitude: f64,
}

pub fn sample_gps_reading() -> GpsReading {
    GpsReading {
        device_id: "EMQ_GPS_001".to_string(),
        location: GpsLocation {
            latitude: 30.2672,
            longitude: -97.7431,
            accuracy: 5.0,
            altitude: 250.5,
        },
        signal_strength: 85,
        satellites: 12,
        fix_quality: "RTK Fixed".to_string(),
        timestamp: Utc::now(),
    }
}

// --- Spectra Python integration layer ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpectraIntegration {
    pub integration_id: String,
    pub system: String,
    pub language: String,
    pub version: String,
    pub modules: Vec<String>,
    pub status: String,
    pub configuration: SpectraConfig,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpectraConfig {
    pub timeout: u32,
    pub retry_attempts: u32,
    pub log_level: String,
}

pub fn sample_spectra_integration() -> SpectraIntegration {
    SpectraIntegration {
        integration_id: "SPEC_PY_001".to_string(),
        system: "Spectra".to_string(),
        language: "Python".to_string(),
        version: "3.9+".to_string(),
        modules: vec![
            "core".to_string(),
            "analytics".to_string(),
            "visualization".to_string(),
        ],
        status: "initialized".to_string(),
        configuration: SpectraConfig {
            timeout: 30,
            retry_attempts: 3,
            log_level: "INFO".to_string(),
        },
        timestamp: Utc::now(),
    }
}

// --- Aurora system ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuroraSystem {
    pub system_id: String,
    pub name: String,
    pub components: Vec<String>,
    pub status: String,
    pub uptime_seconds: u64,
    pub metrics: AuroraMetrics,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuroraMetrics {
    pub cpu_usage: f64,
    pub memory_usage: f64,
    pub network_latency: f64,
}

pub fn sample_aurora_system() -> AuroraSystem {
    AuroraSystem {
        system_id: "AURORA_001".to_string(),
        name: "Aurora Integration Test".to_string(),
        components: vec![
            "core".to_string(),
            "services".to_string(),
            "analytics".to_string(),
        ],
        status: "operational".to_string(),
        uptime_seconds: 3600,
        metrics: AuroraMetrics {
            cpu_usage: 45.2,
            memory_usage: 62.1,
            network_latency: 12.5,
        },
        timestamp: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_response_constructors() {
        let ok: MockResponse<u32> = MockResponse::ok(7);
        assert!(ok.success);
        assert_eq!(ok.data, Some(7));
        assert!(ok.error.is_empty());

        let err: MockResponse<u32> = MockResponse::err("GPS signal lost");
        assert!(!err.success);
        assert!(err.data.is_none());
        assert_eq!(err.error, "GPS signal lost");
    }

    #[test]
    fn test_samples_serialize_round_trip() {
        let tile = sample_tile_module();
        let json = serde_json::to_string(&tile).unwrap();
        let back: TileModule = serde_json::from_str(&json).unwrap();
        assert_eq!(back.module_id, "TILE_001");
        assert_eq!(back.data.grid_size, 1024);

        let gps = sample_gps_reading();
        let json = serde_json::to_string(&gps).unwrap();
        let back: GpsReading = serde_json::from_str(&json).unwrap();
        assert_eq!(back.location.latitude, 30.2672);
        assert_eq!(back.satellites, 12);
    }
}
