//! Summary computation and JSON/HTML report emission.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;

use super::{ReportError, ResultRecorder, RunSummary, StructuredReport, TestOutcome};

pub const DEFAULT_OUTPUT_DIR: &str = "reports";
pub const DEFAULT_JSON_FILENAME: &str = "test_report.json";
pub const DEFAULT_HTML_FILENAME: &str = "test_report.html";

/// Renders run reports and persists them under an output directory.
///
/// Stateless apart from the target directory; every render reads the outcome
/// log it is handed, so it is safe to call mid-run.
#[derive(Debug, Clone)]
pub struct ReportRenderer {
    output_dir: PathBuf,
}

impl Default for ReportRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_DIR)
    }
}

impl ReportRenderer {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Derive aggregate statistics from the outcome log.
    ///
    /// Pure over its input; only the `timestamp` differs between calls.
    pub fn compute_summary(&self, outcomes: &[TestOutcome]) -> RunSummary {
        let total = outcomes.len();
        let passed = outcomes.iter().filter(|o| o.passed).count();
        let failed = total - passed;
        let total_duration: f64 = outcomes.iter().map(|o| o.duration).sum();

        let pass_rate = if total > 0 {
            passed as f64 / total as f64 * 100.0
        } else {
            0.0
        };

        RunSummary {
            total_tests: total,
            passed,
            failed,
            pass_rate,
            total_duration,
            timestamp: Utc::now(),
        }
    }

    /// Serialize the canonical machine-readable report.
    pub fn render_json(
        &self,
        summary: &RunSummary,
        outcomes: &[TestOutcome],
    ) -> Result<String, ReportError> {
        let report = StructuredReport {
            summary: summary.clone(),
            results: outcomes.to_vec(),
        };
        Ok(serde_json::to_string_pretty(&report)?)
    }

    /// Render a self-contained HTML document: summary block plus one table
    /// row per outcome. Inline styling only, so the artifact is portable.
    pub fn render_html(&self, summary: &RunSummary, outcomes: &[TestOutcome]) -> String {
        let mut html = format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <title>Regression Test Report</title>
    <style>
        body {{ font-family: Arial, sans-serif; margin: 20px; }}
        .summary {{ background: #f0f0f0; padding: 15px; border-radius: 5px; }}
        .passed {{ color: green; }}
        .failed {{ color: red; }}
        table {{ border-collapse: collapse; width: 100%; margin-top: 20px; }}
        th, td {{ border: 1px solid #ddd; padding: 10px; text-align: left; }}
        th {{ background-color: #4CAF50; color: white; }}
    </style>
</head>
<body>
    <h1>Regression Test Report</h1>
    <div class="summary">
        <h2>Summary</h2>
        <p>Total Tests: {total}</p>
        <p class="passed">Passed: {passed}</p>
        <p class="failed">Failed: {failed}</p>
        <p>Pass Rate: {rate:.1}%</p>
        <p>Total Duration: {duration:.2}s</p>
    </div>
    <h2>Test Results</h2>
    <table>
        <tr>
            <th>Test Name</th>
            <th>Status</th>
            <th>Duration (s)</th>
        </tr>
"#,
            total = summary.total_tests,
            passed = summary.passed,
            failed = summary.failed,
            rate = summary.pass_rate,
            duration = summary.total_duration,
        );

        for outcome in outcomes {
            let (status, class) = if outcome.passed {
                ("PASSED", "passed")
            } else {
                ("FAILED", "failed")
            };
            // Infallible for String targets
            let _ = writeln!(
                html,
                "        <tr>\n            <td>{}</td>\n            <td class=\"{}\">{}</td>\n            <td>{:.3}</td>\n        </tr>",
                outcome.test_name, class, status, outcome.duration
            );
        }

        html.push_str("    </table>\n</body>\n</html>\n");
        html
    }

    /// Write `content` to `target`, creating the parent directory if absent.
    ///
    /// Truncating overwrite; the file handle is released on every exit path.
    /// Two concurrent writers to the same path race last-writer-wins -- no
    /// cross-process locking is attempted.
    pub fn persist(&self, content: &str, target: &Path) -> Result<PathBuf, ReportError> {
        if let Some(parent) = target.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| ReportError::CreateDir {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        fs::write(target, content).map_err(|source| ReportError::WriteFile {
            path: target.to_path_buf(),
            source,
        })?;

        Ok(target.to_path_buf())
    }

    /// Compute the summary and persist the structured report under the
    /// output directory. Returns the written path.
    pub fn save_json_report(
        &self,
        recorder: &ResultRecorder,
        filename: &str,
    ) -> Result<PathBuf, ReportError> {
        let outcomes = recorder.outcomes();
        let summary = self.compute_summary(&outcomes);
        let json = self.render_json(&summary, &outcomes)?;
        self.persist(&json, &self.output_dir.join(filename))
    }

    /// Compute the summary and persist the HTML report under the output
    /// directory. Returns the written path.
    pub fn save_html_report(
        &self,
        recorder: &ResultRecorder,
        filename: &str,
    ) -> Result<PathBuf, ReportError> {
        let outcomes = recorder.outcomes();
        let summary = self.compute_summary(&outcomes);
        let html = self.render_html(&summary, &outcomes);
        self.persist(&html, &self.output_dir.join(filename))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder_with(outcomes: &[(&str, bool, f64, &str)]) -> ResultRecorder {
        let mut rec = ResultRecorder::new();
        for (name, passed, duration, error) in outcomes {
            rec.record(name, *passed, *duration, error);
        }
        rec
    }

    #[test]
    fn test_summary_counts_add_up() {
        let rec = recorder_with(&[
            ("a", true, 0.5, ""),
            ("b", false, 0.25, "oops"),
            ("c", true, 0.25, ""),
        ]);
        let renderer = ReportRenderer::default();
        let summary = renderer.compute_summary(&rec.outcomes());

        assert_eq!(summary.total_tests, 3);
        assert_eq!(summary.passed + summary.failed, 3);
        assert_eq!(summary.passed, 2);
        assert!((summary.pass_rate - 200.0 / 3.0).abs() < 1e-9);
        assert!((summary.total_duration - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_summary_of_empty_log() {
        let renderer = ReportRenderer::default();
        let summary = renderer.compute_summary(&[]);

        assert_eq!(summary.total_tests, 0);
        assert_eq!(summary.passed, 0);
        assert_eq!(summary.failed, 0);
        assert_eq!(summary.pass_rate, 0.0);
        assert_eq!(summary.total_duration, 0.0);
    }

    #[test]
    fn test_summary_handles_zero_durations() {
        let rec = recorder_with(&[("a", true, 0.0, ""), ("b", true, 0.0, "")]);
        let renderer = ReportRenderer::default();
        let summary = renderer.compute_summary(&rec.outcomes());
        assert_eq!(summary.total_duration, 0.0);
    }

    #[test]
    fn test_html_contains_summary_and_rows() {
        let rec = recorder_with(&[
            ("gps_fix", true, 0.045, ""),
            ("gps_signal", false, 0.012, "signal lost"),
        ]);
        let renderer = ReportRenderer::default();
        let outcomes = rec.outcomes();
        let summary = renderer.compute_summary(&outcomes);
        let html = renderer.render_html(&summary, &outcomes);

        assert!(html.contains("Pass Rate: 50.0%"));
        assert!(html.contains("<td>gps_fix</td>"));
        assert!(html.contains("PASSED"));
        assert!(html.contains("FAILED"));
        // Durations rendered to 3 decimal places
        assert!(html.contains("0.045"));
        assert!(html.contains("0.012"));
        // Self-contained: no external resources
        assert!(!html.contains("http://"));
        assert!(!html.contains("https://"));
    }
}
