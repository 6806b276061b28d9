use crate::{
    context::{detached, Context},
    registry::{try_push, RegistryError},
    report::Summary,
    reporter::Reporter,
    test::Suite,
};

/// The owner of all registered suites.
///
/// A suite is moved into the runner on registration, so it can neither be
/// registered twice nor released behind the runner's back. Dropping the
/// runner releases every suite and test case it owns.
#[derive(Debug, Default)]
pub struct Runner {
    suites: Vec<Suite>,
}

impl Runner {
    /// Create a runner without any suites.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the registered suites, in registration order.
    #[inline]
    pub fn suites(&self) -> &[Suite] {
        &self.suites[..]
    }

    /// Register a suite.
    ///
    /// If the storage cannot grow, the previously registered suites are left
    /// untouched and an error is returned.
    pub fn add_suite(&mut self, suite: Suite) -> Result<(), RegistryError> {
        try_push(&mut self.suites, suite)
    }

    /// Register a sequence of suites, in order.
    ///
    /// Stops at the first failed registration; suites registered before the
    /// failure stay.
    pub fn add_suites<I>(&mut self, suites: I) -> Result<(), RegistryError>
    where
        I: IntoIterator<Item = Suite>,
    {
        for suite in suites {
            self.add_suite(suite)?;
        }
        Ok(())
    }

    /// Run every test case of every suite, in registration order.
    ///
    /// Each check made by a test case is forwarded to `reporter` as soon as
    /// it is recorded. The counters start from zero on every call, so running
    /// the same runner twice yields the same summary.
    pub fn run<R>(&self, reporter: R) -> Summary
    where
        R: Reporter,
    {
        let reporter: &dyn Reporter = &reporter;
        detached(|| reporter.run_starting(&self.suites));
        log::debug!("running {} suites", self.suites.len());

        let mut ctx = Context::new(reporter);
        for suite in &self.suites {
            log::debug!("suite {}: {} tests", suite.name(), suite.len());
            for test in suite.tests() {
                log::debug!("test {}::{}", suite.name(), test.name());
                ctx.enter_test(suite.name(), test.name());
                ctx.scope(|| test.invoke());
                ctx.leave_test();
            }
        }

        let summary = ctx.finish();
        log::debug!(
            "run finished: {} passed, {} failed",
            summary.passed(),
            summary.failed()
        );
        detached(|| reporter.run_ended(&summary));
        summary
    }
}
