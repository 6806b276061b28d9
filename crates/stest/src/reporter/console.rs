use super::Reporter;
use crate::{
    args::{Args, ColorConfig},
    report::{Assertion, Summary, TestId},
    test::Suite,
};
use std::{
    fmt,
    io::{self, Write as _},
};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

struct Colored<T> {
    val: T,
    spec: Option<ColorSpec>,
}

impl<T> Colored<T> {
    fn fg(mut self, color: Color) -> Self {
        self.spec
            .get_or_insert_with(ColorSpec::new)
            .set_fg(Some(color));
        self
    }

    fn fmt_colored<W: ?Sized>(&self, w: &mut W) -> io::Result<()>
    where
        T: fmt::Display,
        W: WriteColor,
    {
        if let Some(ref spec) = self.spec {
            w.set_color(spec)?;
        }
        write!(w, "{}", &self.val)?;
        if let Some(..) = self.spec {
            w.reset()?;
        }
        Ok(())
    }
}

fn colored<T>(val: T) -> Colored<T> {
    Colored { val, spec: None }
}

fn plural_suffix(n: usize) -> &'static str {
    match n {
        1 => "",
        _ => "s",
    }
}

/// A reporter that writes a human-readable report to the standard output.
pub struct ConsoleReporter {
    stream: StandardStream,
}

impl ConsoleReporter {
    #[allow(missing_docs)]
    pub fn new(args: &Args) -> Self {
        Self {
            stream: StandardStream::stdout(color_choice(
                args.color,
                atty::is(atty::Stream::Stdout),
            )),
        }
    }
}

fn color_choice(color: ColorConfig, is_tty: bool) -> ColorChoice {
    match color {
        ColorConfig::Auto if is_tty => ColorChoice::Auto,
        ColorConfig::Auto => ColorChoice::Never,
        ColorConfig::Always => ColorChoice::Always,
        ColorConfig::Never => ColorChoice::Never,
    }
}

impl Reporter for ConsoleReporter {
    fn run_starting(&self, suites: &[Suite]) {
        let mut w = self.stream.lock();
        let _ = print_run_starting(&mut w, suites);
    }

    fn run_ended(&self, summary: &Summary) {
        let mut w = self.stream.lock();
        let _ = print_summary(&mut w, summary);
    }

    fn test_starting(&self, _: TestId<'_>) {}

    fn assertion_recorded(&self, test: TestId<'_>, assertion: &Assertion) {
        let mut w = self.stream.lock();
        let _ = print_assertion(&mut w, test, assertion);
        let _ = w.flush();
    }
}

fn print_run_starting<W: ?Sized>(w: &mut W, suites: &[Suite]) -> io::Result<()>
where
    W: WriteColor,
{
    let num_tests: usize = suites.iter().map(Suite::len).sum();
    writeln!(
        w,
        "running {} test{} in {} suite{}",
        num_tests,
        plural_suffix(num_tests),
        suites.len(),
        plural_suffix(suites.len()),
    )
}

fn print_assertion<W: ?Sized>(w: &mut W, test: TestId<'_>, assertion: &Assertion) -> io::Result<()>
where
    W: WriteColor,
{
    let status = if assertion.passed {
        colored("PASS").fg(Color::Green)
    } else {
        colored("FAIL").fg(Color::Red)
    };
    status.fmt_colored(w)?;
    writeln!(
        w,
        " {} at {} in {}: {}",
        test, assertion.location, assertion.function, assertion.expr
    )
}

fn print_summary<W: ?Sized>(w: &mut W, summary: &Summary) -> io::Result<()>
where
    W: WriteColor,
{
    if !summary.failures().is_empty() {
        writeln!(w)?;
        writeln!(w, "failures:")?;
        for failure in summary.failures() {
            let assertion = &failure.assertion;
            writeln!(
                w,
                "    {} at {}: {}",
                failure.test_id(),
                assertion.location,
                assertion.expr
            )?;
        }
    }

    let status = if summary.is_passed() {
        colored("ok").fg(Color::Green)
    } else {
        colored("FAILED").fg(Color::Red)
    };
    writeln!(w)?;
    write!(w, "test result: ")?;
    status.fmt_colored(w)?;
    write!(w, ".")?;
    writeln!(
        w,
        " {passed} passed; {failed} failed; {tests} test{suffix} run",
        passed = summary.passed(),
        failed = summary.failed(),
        tests = summary.tests(),
        suffix = plural_suffix(summary.tests()),
    )?;

    Ok(())
}
