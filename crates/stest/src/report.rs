use crate::{exit_status::ExitStatus, test::Location};
use std::fmt;

/// The identity of the running test case.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TestId<'a> {
    /// The name of the enclosing suite.
    pub suite: &'a str,
    /// The name of the test case.
    pub test: &'a str,
}

impl fmt::Display for TestId<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.suite, self.test)
    }
}

/// The source text of a checked expression.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A boolean condition.
    Condition(&'static str),
    /// Two compared operands.
    Equality {
        #[allow(missing_docs)]
        left: &'static str,
        #[allow(missing_docs)]
        right: &'static str,
    },
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Condition(expr) => write!(f, "`{}`", expr),
            Expr::Equality { left, right } => write!(f, "left: `{}`, right: `{}`", left, right),
        }
    }
}

/// A single evaluated check.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Assertion {
    /// Whether the check held.
    pub passed: bool,
    /// The source text of the checked expression.
    pub expr: Expr,
    /// Where the check was written.
    pub location: &'static Location,
    /// The path of the function containing the check.
    pub function: &'static str,
}

/// A failed check, together with the test case that made it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    #[allow(missing_docs)]
    pub suite: String,
    #[allow(missing_docs)]
    pub test: String,
    #[allow(missing_docs)]
    pub assertion: Assertion,
}

impl Failure {
    #[allow(missing_docs)]
    pub fn test_id(&self) -> TestId<'_> {
        TestId {
            suite: &self.suite,
            test: &self.test,
        }
    }
}

/// The aggregated result of a run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Summary {
    pub(crate) passed: usize,
    pub(crate) failed: usize,
    pub(crate) tests: usize,
    pub(crate) failures: Vec<Failure>,
}

impl Summary {
    /// The number of checks that held.
    #[inline]
    pub fn passed(&self) -> usize {
        self.passed
    }

    /// The number of checks that did not hold.
    #[inline]
    pub fn failed(&self) -> usize {
        self.failed
    }

    /// The number of test cases that were invoked.
    #[inline]
    pub fn tests(&self) -> usize {
        self.tests
    }

    /// The failed checks, in the order they were recorded.
    #[inline]
    pub fn failures(&self) -> &[Failure] {
        &self.failures[..]
    }

    #[allow(missing_docs)]
    #[inline]
    pub fn is_passed(&self) -> bool {
        self.failed == 0
    }

    /// Return the exit status a test process should report for this run.
    pub fn exit_status(&self) -> ExitStatus {
        if self.is_passed() {
            ExitStatus::OK
        } else {
            ExitStatus::FAILED
        }
    }

    pub(crate) fn append(&mut self, test: TestId<'_>, assertion: Assertion) {
        if assertion.passed {
            self.passed += 1;
        } else {
            self.failed += 1;
            self.failures.push(Failure {
                suite: test.suite.to_owned(),
                test: test.test.to_owned(),
                assertion,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOCATION: Location = Location {
        file: "tests/math.rs",
        line: 3,
        column: 5,
    };

    fn assertion(passed: bool) -> Assertion {
        Assertion {
            passed,
            expr: Expr::Condition("x > 0"),
            location: &LOCATION,
            function: "math::positive",
        }
    }

    #[test]
    fn append_counts_each_outcome() {
        let id = TestId {
            suite: "math",
            test: "positive",
        };
        let mut summary = Summary::default();
        summary.append(id, assertion(true));
        summary.append(id, assertion(false));
        summary.append(id, assertion(true));

        assert_eq!(summary.passed(), 2);
        assert_eq!(summary.failed(), 1);
        assert_eq!(summary.failures().len(), 1);
        assert_eq!(summary.failures()[0].test_id(), id);
        assert_eq!(summary.exit_status(), ExitStatus::FAILED);
    }

    #[test]
    fn empty_summary_is_passed() {
        let summary = Summary::default();
        assert!(summary.is_passed());
        assert_eq!(summary.exit_status(), ExitStatus::OK);
    }

    #[test]
    fn expr_display() {
        assert_eq!(Expr::Condition("a && b").to_string(), "`a && b`");
        assert_eq!(
            Expr::Equality {
                left: "2 + 2",
                right: "4"
            }
            .to_string(),
            "left: `2 + 2`, right: `4`"
        );
        assert_eq!(
            TestId {
                suite: "math",
                test: "add"
            }
            .to_string(),
            "math::add"
        );
    }
}
