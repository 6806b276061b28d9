mod console;
mod log;

pub use self::{console::ConsoleReporter, log::LogReporter};

use crate::{
    report::{Assertion, Summary, TestId},
    test::Suite,
};

/// Receiver of the events emitted while running the registered suites.
///
/// Every callback is invoked synchronously on the thread running the tests,
/// so implementations should write their output right away.
pub trait Reporter {
    /// Called once before the first test case is invoked.
    fn run_starting(&self, suites: &[Suite]);

    /// Called once after the last test case has returned.
    fn run_ended(&self, summary: &Summary);

    /// Called right before a test case is invoked.
    fn test_starting(&self, test: TestId<'_>);

    /// Called for every check made by the running test case, passed or not.
    fn assertion_recorded(&self, test: TestId<'_>, assertion: &Assertion);
}

macro_rules! impl_reporter_body {
    () => {
        fn run_starting(&self, suites: &[Suite]) {
            (**self).run_starting(suites)
        }

        fn run_ended(&self, summary: &Summary) {
            (**self).run_ended(summary)
        }

        fn test_starting(&self, test: TestId<'_>) {
            (**self).test_starting(test)
        }

        fn assertion_recorded(&self, test: TestId<'_>, assertion: &Assertion) {
            (**self).assertion_recorded(test, assertion)
        }
    };
}

impl<R: ?Sized> Reporter for &R
where
    R: Reporter,
{
    impl_reporter_body!();
}

impl<R: ?Sized> Reporter for Box<R>
where
    R: Reporter,
{
    impl_reporter_body!();
}

impl<R: ?Sized> Reporter for std::rc::Rc<R>
where
    R: Reporter,
{
    impl_reporter_body!();
}

impl<R: ?Sized> Reporter for std::sync::Arc<R>
where
    R: Reporter,
{
    impl_reporter_body!();
}
