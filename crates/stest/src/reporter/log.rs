use super::Reporter;
use crate::{
    report::{Assertion, Summary, TestId},
    test::Suite,
};

/// A reporter that forwards every event to the `log` facade.
#[derive(Debug, Clone)]
pub struct LogReporter {
    _p: (),
}

impl LogReporter {
    #[allow(missing_docs)]
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self { _p: () }
    }
}

impl Reporter for LogReporter {
    fn run_starting(&self, suites: &[Suite]) {
        let suffix = match suites.len() {
            1 => "",
            _ => "s",
        };
        log::info!("running {} suite{}", suites.len(), suffix);
    }

    fn run_ended(&self, summary: &Summary) {
        if summary.is_passed() {
            log::info!("test status: ok ({} passed)", summary.passed());
        } else {
            log::error!(
                "test status: FAILED ({} passed, {} failed)",
                summary.passed(),
                summary.failed()
            );
        }
    }

    fn test_starting(&self, test: TestId<'_>) {
        log::info!("start: {}", test);
    }

    fn assertion_recorded(&self, test: TestId<'_>, assertion: &Assertion) {
        if assertion.passed {
            log::info!("{}: ok at {}", test, assertion.location);
        } else {
            log::error!(
                "{}: FAILED at {} in {}: {}",
                test,
                assertion.location,
                assertion.function,
                assertion.expr
            );
        }
    }
}
