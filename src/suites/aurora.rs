//! Aurora system regression checks: components, metrics, health.

use anyhow::ensure;
use tracing::info;

use crate::fixtures::{self, AuroraSystem, MockResponse};
use crate::harness::Suite;

const VALID_STATUSES: [&str; 4] = ["operational", "degraded", "maintenance", "error"];

pub fn suite() -> Suite {
    Suite::new("aurora")
        .case("aurora_system_initialization", || {
            let aurora = fixtures::sample_aurora_system();
            ensure!(
                aurora.system_id == "AURORA_001",
                "unexpected system id: {}",
                aurora.system_id
            );
            ensure!(
                aurora.status == "operational",
                "system not operational: {}",
                aurora.status
            );
            Ok(())
        })
        .case("aurora_component_structure", || {
            let components = fixtures::sample_aurora_system().components;
            ensure!(components.len() == 3, "expected 3 components, got {}", components.len());
            for name in ["core", "services", "analytics"] {
                ensure!(components.iter().any(|c| c == name), "missing component: {name}");
            }
            Ok(())
        })
        .case("aurora_cpu_metrics", || {
            let cpu = fixtures::sample_aurora_system().metrics.cpu_usage;
            ensure!((0.0..=100.0).contains(&cpu), "CPU usage out of range: {cpu}");
            info!("CPU Usage: {cpu}%");
            Ok(())
        })
        .case("aurora_memory_metrics", || {
            let memory = fixtures::sample_aurora_system().metrics.memory_usage;
            ensure!((0.0..=100.0).contains(&memory), "memory usage out of range: {memory}");
            info!("Memory Usage: {memory}%");
            Ok(())
        })
        .case("aurora_network_latency", || {
            let latency = fixtures::sample_aurora_system().metrics.network_latency;
            ensure!(latency > 0.0, "latency must be positive");
            ensure!(latency < 1000.0, "latency should be < 1000ms, got {latency}");
            Ok(())
        })
        .case("aurora_uptime", || {
            let uptime = fixtures::sample_aurora_system().uptime_seconds;
            ensure!(uptime > 0, "uptime not tracked");
            Ok(())
        })
        .case("aurora_core_component", || {
            let components = fixtures::sample_aurora_system().components;
            ensure!(components.iter().any(|c| c == "core"), "core component missing");
            Ok(())
        })
        .case("aurora_services_component", || {
            let components = fixtures::sample_aurora_system().components;
            ensure!(components.iter().any(|c| c == "services"), "services component missing");
            Ok(())
        })
        .case("aurora_analytics_component", || {
            let components = fixtures::sample_aurora_system().components;
            ensure!(
                components.iter().any(|c| c == "analytics"),
                "analytics component missing"
            );
            Ok(())
        })
        .case("aurora_component_communication", || {
            let response = MockResponse::ok(fixtures::sample_aurora_system());
            ensure!(response.success, "response not successful");
            let has_components = response
                .data
                .as_ref()
                .is_some_and(|s| !s.components.is_empty());
            ensure!(has_components, "response carries no components");
            Ok(())
        })
        .case("aurora_operational_status", || {
            let status = fixtures::sample_aurora_system().status;
            ensure!(
                VALID_STATUSES.contains(&status.as_str()),
                "unknown status: {status}"
            );
            ensure!(status == "operational", "expected operational, got {status}");
            Ok(())
        })
        .case("aurora_metric_health", || {
            let metrics = fixtures::sample_aurora_system().metrics;
            ensure!(metrics.cpu_usage < 90.0, "CPU usage critical");
            ensure!(metrics.memory_usage < 90.0, "memory usage critical");
            Ok(())
        })
        .case("aurora_recovery_capability", || {
            let response: MockResponse<AuroraSystem> =
                MockResponse::err("Component failure detected");
            ensure!(!response.success, "error response marked successful");
            ensure!(!response.error.is_empty(), "failure carries no message");
            Ok(())
        })
}
