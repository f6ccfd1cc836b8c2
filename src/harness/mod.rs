//! Suite execution -- explicit case registration, lifecycle hooks, timing.
//!
//! A [`Suite`] is built once with `case`/`before_each`/`after_each` and then
//! driven against a [`ResultRecorder`]. Checks return `anyhow::Result` so
//! `ensure!`/`bail!` messages flow straight into the recorded outcome.

use std::time::Instant;

use anyhow::Result;
use tracing::{debug, error, info};

use crate::report::ResultRecorder;

type Hook = Box<dyn Fn()>;
type CheckFn = Box<dyn Fn() -> Result<()>>;

struct TestCase {
    name: String,
    check: CheckFn,
}

/// Pass/fail tally for one suite run, for exit-status decisions.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SuiteStats {
    pub passed: usize,
    pub failed: usize,
}

impl SuiteStats {
    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    pub fn merge(&mut self, other: SuiteStats) {
        self.passed += other.passed;
        self.failed += other.failed;
    }
}

/// A named group of registered checks with optional per-case hooks.
pub struct Suite {
    name: String,
    before_each: Option<Hook>,
    after_each: Option<Hook>,
    cases: Vec<TestCase>,
}

impl Suite {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            before_each: None,
            after_each: None,
            cases: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn case_count(&self) -> usize {
        self.cases.len()
    }

    /// Hook run before every case. Replaces any previously registered hook.
    pub fn before_each(mut self, hook: impl Fn() + 'static) -> Self {
        self.before_each = Some(Box::new(hook));
        self
    }

    /// Hook run after every case, passing or failing.
    pub fn after_each(mut self, hook: impl Fn() + 'static) -> Self {
        self.after_each = Some(Box::new(hook));
        self
    }

    /// Register a check. Cases run in registration order.
    pub fn case(mut self, name: impl Into<String>, check: impl Fn() -> Result<()> + 'static) -> Self {
        self.cases.push(TestCase {
            name: name.into(),
            check: Box::new(check),
        });
        self
    }

    /// Run every case sequentially, appending one outcome per case.
    ///
    /// Durations are measured around the check itself (hooks excluded) and
    /// handed to the recorder; failures record the full `anyhow` chain as
    /// the error text.
    pub fn run(&self, recorder: &mut ResultRecorder) -> SuiteStats {
        info!(suite = %self.name, cases = self.cases.len(), "Starting suite");
        let suite_started = Instant::now();
        let mut stats = SuiteStats::default();

        for case in &self.cases {
            let _guard = CaseGuard::start(&self.name, &case.name);

            if let Some(hook) = &self.before_each {
                hook();
            }

            let started = Instant::now();
            let result = (case.check)();
            let duration = started.elapsed().as_secs_f64();

            match result {
                Ok(()) => {
                    stats.passed += 1;
                    recorder.record(&case.name, true, duration, "");
                }
                Err(e) => {
                    stats.failed += 1;
                    let message = format!("{e:#}");
                    error!(suite = %self.name, case = %case.name, "Check failed: {message}");
                    recorder.record(&case.name, false, duration, &message);
                }
            }

            if let Some(hook) = &self.after_each {
                hook();
            }
        }

        info!(
            suite = %self.name,
            passed = stats.passed,
            failed = stats.failed,
            "Suite complete ({:.2}s)",
            suite_started.elapsed().as_secs_f64()
        );
        stats
    }
}

/// Scoped per-case logger: start on construction, completion on drop, so the
/// completion line fires on every exit path.
struct CaseGuard<'a> {
    suite: &'a str,
    case: &'a str,
    started: Instant,
}

impl<'a> CaseGuard<'a> {
    fn start(suite: &'a str, case: &'a str) -> Self {
        debug!(suite, case, "Running case");
        Self {
            suite,
            case,
            started: Instant::now(),
        }
    }
}

impl Drop for CaseGuard<'_> {
    fn drop(&mut self) {
        debug!(
            suite = self.suite,
            case = self.case,
            "Completed case ({:.3}s)",
            self.started.elapsed().as_secs_f64()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_cases_run_in_registration_order() {
        let suite = Suite::new("demo")
            .case("one", || Ok(()))
            .case("two", || anyhow::bail!("broken"))
            .case("three", || Ok(()));

        let mut rec = ResultRecorder::new();
        let stats = suite.run(&mut rec);

        assert_eq!(stats.passed, 2);
        assert_eq!(stats.failed, 1);
        assert_eq!(stats.total(), 3);

        let outcomes = rec.outcomes();
        let names: Vec<_> = outcomes.iter().map(|o| o.test_name.as_str()).collect();
        assert_eq!(names, ["one", "two", "three"]);
        assert!(outcomes[0].passed);
        assert!(!outcomes[1].passed);
        assert_eq!(outcomes[1].error, "broken");
        assert!(outcomes[2].error.is_empty());
    }

    #[test]
    fn test_hooks_fire_once_per_case_including_failures() {
        let before = Rc::new(Cell::new(0u32));
        let after = Rc::new(Cell::new(0u32));
        let (b, a) = (Rc::clone(&before), Rc::clone(&after));

        let suite = Suite::new("hooks")
            .before_each(move || b.set(b.get() + 1))
            .after_each(move || a.set(a.get() + 1))
            .case("ok", || Ok(()))
            .case("bad", || anyhow::bail!("nope"));

        let mut rec = ResultRecorder::new();
        suite.run(&mut rec);

        assert_eq!(before.get(), 2);
        assert_eq!(after.get(), 2);
    }

    #[test]
    fn test_error_chain_is_flattened_into_message() {
        use anyhow::Context;

        let suite = Suite::new("chain").case("nested", || {
            Err(anyhow::anyhow!("signal lost")).context("gps probe")
        });

        let mut rec = ResultRecorder::new();
        suite.run(&mut rec);

        let outcomes = rec.outcomes();
        assert!(outcomes[0].error.contains("gps probe"));
        assert!(outcomes[0].error.contains("signal lost"));
    }

    #[test]
    fn test_empty_suite_records_nothing() {
        let suite = Suite::new("empty");
        let mut rec = ResultRecorder::new();
        let stats = suite.run(&mut rec);
        assert_eq!(stats.total(), 0);
        assert!(rec.is_empty());
    }
}
