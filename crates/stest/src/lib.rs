/*!
A minimal unit testing harness.

Test cases are plain functions taking no arguments. They are grouped into
named [`Suite`]s, which are moved into a [`Runner`]. The runner invokes every
test case in registration order and reports each check as it is made.

```
use stest::{check, check_eq, check_str_eq, Runner, Suite};

fn addition() {
    check_eq!(2 + 2, 4);
    check!(1 < 2);
}

fn strings() {
    check_str_eq!(String::from("abc"), "abc");
}

# fn main() -> Result<(), stest::RegistryError> {
let mut math = Suite::new("math")?;
stest::add_test!(math, addition)?;
stest::add_test!(math, strings)?;

let mut runner = Runner::new();
runner.add_suite(math)?;

let summary = runner.run(stest::LogReporter::new());
assert_eq!(summary.passed(), 3);
assert_eq!(summary.failed(), 0);
# Ok(())
# }
```

Checks never stop a test case: a failed check is recorded and the rest of
the test body keeps running. A test binary built with `harness = false` can
use [`test_main!`] to run its suites and exit with a status reflecting the
outcome.
!*/

#![doc(html_root_url = "https://docs.rs/stest/0.1.0-dev")]
#![deny(missing_docs)]
#![forbid(clippy::unimplemented, clippy::todo)]

#[macro_use]
mod macros;
mod args;
mod assertion;
mod context;
mod exit_status;
mod harness;
mod registry;
mod report;
mod reporter;
mod runner;
mod termination;

pub use crate::{
    args::{Args, ColorConfig},
    assertion::{record_condition, record_equality},
    exit_status::ExitStatus,
    harness::run_main,
    registry::RegistryError,
    report::{Assertion, Expr, Failure, Summary, TestId},
    reporter::{ConsoleReporter, LogReporter, Reporter},
    runner::Runner,
    termination::Termination,
    test::{Location, Suite, TestCase},
};

hidden_item! {
    /// Re-exported items for the check macros.
    pub mod _internal {
        pub use crate::{
            __function as function, //
            __location as location,
            assertion::{function_name, record_condition, record_equality, str_eq, type_name_of},
            test::Location,
        };
        pub use std::{column, file, line, stringify};
    }
}
