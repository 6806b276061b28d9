use crate::{
    args::Args, exit_status::ExitStatus, reporter::ConsoleReporter, runner::Runner,
    termination::Termination,
};

/// Build a runner with `setup`, run it and terminate the process.
///
/// The process exits with status 101 if `setup` returns an error (which is
/// printed to the standard error) or if any check failed, and with status 0
/// otherwise.
pub fn run_main<F, T>(setup: F) -> !
where
    F: FnOnce(&mut Runner) -> T,
    T: Termination,
{
    let status = match Args::from_env() {
        Ok(args) => run_main_inner(&args, setup),
        Err(status) => status,
    };
    status.exit();
}

fn run_main_inner<F, T>(args: &Args, setup: F) -> ExitStatus
where
    F: FnOnce(&mut Runner) -> T,
    T: Termination,
{
    let mut runner = Runner::new();
    if let Err(err) = setup(&mut runner).into_result() {
        eprintln!("registry error: {:#}", err);
        return ExitStatus::FAILED;
    }

    let reporter = ConsoleReporter::new(args);
    runner.run(&reporter).exit_status()
}

/// Generate the main function for running a test application.
///
/// The argument is a function taking `&mut Runner` that registers the
/// suites, returning either `()` or a `Result<(), E>`.
#[macro_export]
macro_rules! test_main {
    ( $setup:expr $(,)? ) => {
        fn main() {
            $crate::run_main($setup)
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{args::ColorConfig, registry::RegistryError, test::Suite};

    fn args() -> Args {
        Args {
            color: ColorConfig::Never,
        }
    }

    fn passing() {
        crate::check_eq!(2 + 2, 4);
    }

    fn failing() {
        crate::check_str_eq!("a", "b");
    }

    #[test]
    fn setup_error_fails_without_running() {
        let status = run_main_inner(&args(), |runner| -> Result<(), RegistryError> {
            runner.add_suite(Suite::new("")?)?;
            Ok(())
        });
        assert_eq!(status, ExitStatus::FAILED);
    }

    #[test]
    fn status_follows_the_checks() {
        let status = run_main_inner(&args(), |runner| -> Result<(), RegistryError> {
            let mut suite = Suite::new("ok")?;
            crate::add_test!(suite, passing)?;
            runner.add_suite(suite)
        });
        assert_eq!(status, ExitStatus::OK);

        let status = run_main_inner(&args(), |runner| -> anyhow::Result<()> {
            let mut suite = Suite::new("ng")?;
            crate::add_test!(suite, passing)?;
            crate::add_test!(suite, failing)?;
            runner.add_suite(suite)?;
            Ok(())
        });
        assert_eq!(status, ExitStatus::FAILED);
    }

    #[test]
    fn unit_setup() {
        let status = run_main_inner(&args(), |_: &mut Runner| ());
        assert_eq!(status, ExitStatus::OK);
    }
}
