//! End-to-end runs of the built-in suites against the shipped fixtures.

use regresskit::report::{ResultRecorder, StructuredReport};
use regresskit::suites;

#[test]
fn test_all_builtin_suites_pass() {
    let mut rec = ResultRecorder::new();
    let mut passed = 0;
    let mut failed = 0;
    let mut expected_total = 0;

    for suite in suites::all() {
        expected_total += suite.case_count();
        let stats = suite.run(&mut rec);
        passed += stats.passed;
        failed += stats.failed;
    }

    assert_eq!(failed, 0, "failing outcomes: {:?}", failing_names(&rec));
    assert_eq!(passed, expected_total);
    assert_eq!(rec.len(), expected_total);
}

fn failing_names(rec: &ResultRecorder) -> Vec<String> {
    rec.outcomes()
        .into_iter()
        .filter(|o| !o.passed)
        .map(|o| format!("{}: {}", o.test_name, o.error))
        .collect()
}

#[test]
fn test_outcomes_follow_registration_order() {
    let mut rec = ResultRecorder::new();
    suites::find("tile").unwrap().run(&mut rec);

    let outcomes = rec.outcomes();
    assert_eq!(outcomes[0].test_name, "tile_module_initialization");
    assert!(outcomes
        .iter()
        .all(|o| o.duration >= 0.0 && o.error.is_empty()));
}

#[test]
fn test_run_suites_writes_both_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let selected = vec![suites::find("gps").unwrap()];

    let report = regresskit::run_suites(&selected, dir.path()).unwrap();
    assert_eq!(report.summary.failed, 0);
    assert_eq!(report.results.len(), selected[0].case_count());

    let json = std::fs::read_to_string(dir.path().join("test_report.json")).unwrap();
    let on_disk: StructuredReport = serde_json::from_str(&json).unwrap();
    assert_eq!(on_disk.summary.total_tests, report.summary.total_tests);
    assert_eq!(on_disk.results.len(), report.results.len());

    let html = std::fs::read_to_string(dir.path().join("test_report.html")).unwrap();
    assert!(html.contains("Regression Test Report"));
    assert!(html.contains("gps_fix_quality"));
}
