//! Spectra Python-integration regression checks: modules, configuration,
//! ancillary states.

use anyhow::{ensure, Context};
use tracing::info;

use crate::fixtures::{self, MockResponse, SpectraIntegration};
use crate::harness::Suite;

const ANCILLARY_STATES: [&str; 4] = ["initialized", "running", "paused", "stopped"];

pub fn suite() -> Suite {
    Suite::new("spectra")
        .case("spectra_module_initialization", || {
            let spectra = fixtures::sample_spectra_integration();
            ensure!(
                spectra.integration_id == "SPEC_PY_001",
                "unexpected integration id: {}",
                spectra.integration_id
            );
            ensure!(spectra.system == "Spectra", "unexpected system: {}", spectra.system);
            ensure!(spectra.language == "Python", "unexpected language: {}", spectra.language);
            Ok(())
        })
        .case("spectra_python_version", || {
            let version = fixtures::sample_spectra_integration().version;
            ensure!(
                ["3.9", "3.10", "3.11"].iter().any(|v| version.contains(v)),
                "unsupported Python version: {version}"
            );
            Ok(())
        })
        .case("spectra_module_structure", || {
            let modules = fixtures::sample_spectra_integration().modules;
            ensure!(!modules.is_empty(), "no modules configured");
            ensure!(modules.iter().any(|m| m == "core"), "core module missing");
            Ok(())
        })
        .case("spectra_core_module_state", || {
            let spectra = fixtures::sample_spectra_integration();
            ensure!(spectra.modules.iter().any(|m| m == "core"), "core module missing");
            ensure!(
                spectra.status == "initialized",
                "unexpected status: {}",
                spectra.status
            );
            Ok(())
        })
        .case("spectra_configuration_state", || {
            let config = fixtures::sample_spectra_integration().configuration;
            ensure!(config.timeout > 0, "timeout must be positive");
            ensure!(config.retry_attempts > 0, "retry attempts must be positive");
            Ok(())
        })
        .case("spectra_analytics_module", || {
            let modules = fixtures::sample_spectra_integration().modules;
            ensure!(modules.iter().any(|m| m == "analytics"), "analytics module missing");
            Ok(())
        })
        .case("spectra_visualization_module", || {
            let modules = fixtures::sample_spectra_integration().modules;
            ensure!(
                modules.iter().any(|m| m == "visualization"),
                "visualization module missing"
            );
            Ok(())
        })
        .case("spectra_module_imports", || {
            for module in fixtures::sample_spectra_integration().modules {
                ensure!(!module.is_empty(), "empty module name");
                info!("Testing module import: {module}");
            }
            Ok(())
        })
        .case("spectra_configuration_values", || {
            let config = fixtures::sample_spectra_integration().configuration;
            ensure!(config.log_level == "INFO", "unexpected log level: {}", config.log_level);
            ensure!(config.timeout == 30, "unexpected timeout: {}", config.timeout);
            ensure!(
                config.retry_attempts == 3,
                "unexpected retry attempts: {}",
                config.retry_attempts
            );
            Ok(())
        })
        .case("spectra_error_handling", || {
            let response: MockResponse<SpectraIntegration> =
                MockResponse::err("Python integration failed");
            ensure!(!response.success, "error response marked successful");
            Ok(())
        })
        .case("spectra_response_validation", || {
            let response = MockResponse::ok(fixtures::sample_spectra_integration());
            ensure!(response.success, "response not successful");
            ensure!(response.data.is_some(), "response carries no data");
            Ok(())
        })
        .case("ancillary_state_transitions", || {
            let status = fixtures::sample_spectra_integration().status;
            ensure!(
                ANCILLARY_STATES.contains(&status.as_str()),
                "unknown ancillary state: {status}"
            );
            Ok(())
        })
        .case("ancillary_data_persistence", || {
            let spectra = fixtures::sample_spectra_integration();
            let json = serde_json::to_string(&spectra).context("data persistence failed")?;
            let restored: SpectraIntegration =
                serde_json::from_str(&json).context("data persistence failed")?;
            ensure!(
                restored.integration_id == spectra.integration_id,
                "integration id changed across serialization"
            );
            Ok(())
        })
        .case("ancillary_state_recovery", || {
            let recovery = MockResponse::ok(serde_json::json!({
                "state": "recovered",
                "timestamp": fixtures::sample_spectra_integration().timestamp,
            }));
            ensure!(recovery.success, "recovery response not successful");
            Ok(())
        })
}
