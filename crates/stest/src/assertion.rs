use crate::{
    context::try_with_tls_context,
    report::{Assertion, Expr},
    test::Location,
};
use std::any;

/// Record the outcome of a comparison between two operands.
///
/// `result` is the already-evaluated comparison; `left` and `right` are the
/// source text of the operands and are only used for the report. The check
/// is attributed to the test case currently run by a [`Runner`](crate::Runner)
/// on this thread. A failed check never stops the test case.
///
/// Returns `result`.
pub fn record_equality(
    result: bool,
    left: &'static str,
    right: &'static str,
    location: &'static Location,
    function: &'static str,
) -> bool {
    record(Assertion {
        passed: result,
        expr: Expr::Equality { left, right },
        location,
        function,
    })
}

/// Record the outcome of a boolean condition.
///
/// See [`record_equality`] for the attribution rules.
pub fn record_condition(
    result: bool,
    expr: &'static str,
    location: &'static Location,
    function: &'static str,
) -> bool {
    record(Assertion {
        passed: result,
        expr: Expr::Condition(expr),
        location,
        function,
    })
}

fn record(assertion: Assertion) -> bool {
    if try_with_tls_context(|ctx| ctx.record(assertion)).is_none() {
        log::warn!(
            "check at {} was made outside of a running test case: {}",
            assertion.location,
            assertion.expr
        );
    }
    assertion.passed
}

hidden_item! {
    /// Compare two strings byte by byte.
    pub fn str_eq<L: ?Sized, R: ?Sized>(left: &L, right: &R) -> bool
    where
        L: AsRef<str>,
        R: AsRef<str>,
    {
        left.as_ref().as_bytes().cmp(right.as_ref().as_bytes()).is_eq()
    }

    pub fn type_name_of<T>(_: T) -> &'static str {
        any::type_name::<T>()
    }

    /// Strip the marker item and closure segments from a path produced by `__function!()`.
    pub fn function_name(raw: &'static str) -> &'static str {
        let mut name = raw.strip_suffix("::__stest_fn").unwrap_or(raw);
        while let Some(stripped) = name.strip_suffix("::{{closure}}") {
            name = stripped;
        }
        name
    }
}
