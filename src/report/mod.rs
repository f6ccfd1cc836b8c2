//! Run reporting -- outcome log, summary model, JSON/HTML artifacts.

pub mod render;

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to create report directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write report file {path}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode structured report")]
    Encode(#[from] serde_json::Error),
}

/// One recorded result of a single test execution.
///
/// Immutable once appended; the log keeps insertion order because report
/// rows are displayed in the order tests ran.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestOutcome {
    pub test_name: String,
    pub passed: bool,
    /// Caller-supplied wall time in seconds; not measured here.
    pub duration: f64,
    /// Empty when `passed` is true.
    pub error: String,
    pub timestamp: DateTime<Utc>,
}

/// Aggregate statistics derived from a set of outcomes.
///
/// Recomputed on demand, never stored alongside the log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub total_tests: usize,
    pub passed: usize,
    pub failed: usize,
    /// Percentage in [0, 100]; 0 when no outcomes were recorded.
    pub pass_rate: f64,
    pub total_duration: f64,
    pub timestamp: DateTime<Utc>,
}

/// Canonical machine-readable report: summary plus the ordered outcome list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredReport {
    pub summary: RunSummary,
    pub results: Vec<TestOutcome>,
}

/// Append-only log of test outcomes for one run.
///
/// One recorder per run, passed explicitly to whoever records or reads
/// results. Not internally synchronized: `record` takes `&mut self`, so
/// sharing a recorder across threads needs an external `Mutex`, or give each
/// thread its own recorder and merge afterward.
#[derive(Debug, Default)]
pub struct ResultRecorder {
    outcomes: Vec<TestOutcome>,
}

impl ResultRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one outcome, stamped with the current time.
    ///
    /// No validation: a negative duration or empty name is appended as-is,
    /// and duplicate names are allowed.
    pub fn record(&mut self, name: &str, passed: bool, duration: f64, error: &str) {
        self.outcomes.push(TestOutcome {
            test_name: name.to_string(),
            passed,
            duration,
            error: error.to_string(),
            timestamp: Utc::now(),
        });
    }

    /// Snapshot of the full log in insertion order.
    pub fn outcomes(&self) -> Vec<TestOutcome> {
        self.outcomes.clone()
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_preserves_insertion_order() {
        let mut rec = ResultRecorder::new();
        rec.record("first", true, 0.1, "");
        rec.record("second", false, 0.2, "boom");
        rec.record("first", true, 0.3, "");

        let outcomes = rec.outcomes();
        assert_eq!(outcomes.len(), 3);
        assert_eq!(outcomes[0].test_name, "first");
        assert_eq!(outcomes[1].test_name, "second");
        assert_eq!(outcomes[1].error, "boom");
        // Duplicates are simply appended
        assert_eq!(outcomes[2].test_name, "first");
    }

    #[test]
    fn test_record_is_permissive() {
        let mut rec = ResultRecorder::new();
        rec.record("", true, -1.5, "");
        assert_eq!(rec.len(), 1);
        assert_eq!(rec.outcomes()[0].duration, -1.5);
    }

    #[test]
    fn test_outcomes_returns_a_copy() {
        let mut rec = ResultRecorder::new();
        rec.record("only", true, 0.0, "");

        let mut snapshot = rec.outcomes();
        snapshot[0].test_name = "mutated".to_string();
        snapshot.clear();

        assert_eq!(rec.outcomes()[0].test_name, "only");
    }
}
