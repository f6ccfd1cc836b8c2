//! RegressKit -- fixture-driven regression harness with JSON/HTML run reports.
//!
//! This crate provides the core library for recording test outcomes,
//! computing run summaries, rendering report artifacts, and driving the
//! built-in subsystem regression suites.

pub mod fixtures;
pub mod harness;
pub mod report;
pub mod suites;

use std::path::Path;

use anyhow::Result;

use report::render::{ReportRenderer, DEFAULT_HTML_FILENAME, DEFAULT_JSON_FILENAME};
use report::{ResultRecorder, StructuredReport};

/// Run the given suites against a single recorder and persist both report
/// artifacts under `output_dir`. Returns the structured report that was
/// written.
pub fn run_suites(suites: &[harness::Suite], output_dir: &Path) -> Result<StructuredReport> {
    let mut recorder = ResultRecorder::new();
    for suite in suites {
        suite.run(&mut recorder);
    }

    let renderer = ReportRenderer::new(output_dir);
    let json_path = renderer.save_json_report(&recorder, DEFAULT_JSON_FILENAME)?;
    let html_path = renderer.save_html_report(&recorder, DEFAULT_HTML_FILENAME)?;
    tracing::info!(
        json = %json_path.display(),
        html = %html_path.display(),
        "Reports written"
    );

    let results = recorder.outcomes();
    let summary = renderer.compute_summary(&results);
    Ok(StructuredReport { summary, results })
}
