macro_rules! hidden_item {
    ( $( $item:item )* ) => {
        $(
            #[doc(hidden)]
            $item
        )*
    };
}

/// Check that a boolean condition holds.
///
/// The outcome is recorded for the running test case together with the
/// condition text, the source location and the enclosing function. A failed
/// check does not stop the test case. Evaluates to the condition.
#[macro_export]
macro_rules! check {
    ( $cond:expr $(,)? ) => {{
        use $crate::_internal as __stest;
        const LOCATION: __stest::Location = __stest::location!();
        __stest::record_condition(
            $cond,
            __stest::stringify!($cond),
            &LOCATION,
            __stest::function!(),
        )
    }};
}

/// Check that two expressions are equal (using `PartialEq`).
#[macro_export]
macro_rules! check_eq {
    ( $left:expr, $right:expr $(,)? ) => {{
        use $crate::_internal as __stest;
        const LOCATION: __stest::Location = __stest::location!();
        __stest::record_equality(
            ($left) == ($right),
            __stest::stringify!($left),
            __stest::stringify!($right),
            &LOCATION,
            __stest::function!(),
        )
    }};
}

/// Check that two expressions are not equal (using `PartialEq`).
#[macro_export]
macro_rules! check_ne {
    ( $left:expr, $right:expr $(,)? ) => {{
        use $crate::_internal as __stest;
        const LOCATION: __stest::Location = __stest::location!();
        __stest::record_equality(
            ($left) != ($right),
            __stest::stringify!($left),
            __stest::stringify!($right),
            &LOCATION,
            __stest::function!(),
        )
    }};
}

/// Check that two strings have the same bytes.
#[macro_export]
macro_rules! check_str_eq {
    ( $left:expr, $right:expr $(,)? ) => {{
        use $crate::_internal as __stest;
        const LOCATION: __stest::Location = __stest::location!();
        __stest::record_equality(
            __stest::str_eq(&$left, &$right),
            __stest::stringify!($left),
            __stest::stringify!($right),
            &LOCATION,
            __stest::function!(),
        )
    }};
}

/// Check that two strings differ.
#[macro_export]
macro_rules! check_str_ne {
    ( $left:expr, $right:expr $(,)? ) => {{
        use $crate::_internal as __stest;
        const LOCATION: __stest::Location = __stest::location!();
        __stest::record_equality(
            !__stest::str_eq(&$left, &$right),
            __stest::stringify!($left),
            __stest::stringify!($right),
            &LOCATION,
            __stest::function!(),
        )
    }};
}

/// Append a test function to a suite, named after its path.
///
/// Evaluates to the `Result` returned by [`Suite::add_test`](crate::Suite::add_test).
#[macro_export]
macro_rules! add_test {
    ( $suite:expr, $test_fn:path $(,)? ) => {
        $suite.add_test($crate::_internal::stringify!($test_fn), $test_fn)
    };
}

/// Mark a function as a test case.
///
/// This is only a marker for the reader; the function is emitted unchanged
/// and still has to be registered with [`add_test!`].
#[macro_export]
macro_rules! test_case {
    ( $(#[$attr:meta])* $vis:vis fn $name:ident () $body:block ) => {
        $(#[$attr])*
        $vis fn $name() $body
    };
}

#[doc(hidden)] // private API
#[macro_export]
macro_rules! __location {
    () => {{
        use $crate::_internal as __stest;
        __stest::Location {
            file: __stest::file!(),
            line: __stest::line!(),
            column: __stest::column!(),
        }
    }};
}

#[doc(hidden)] // private API
#[macro_export]
macro_rules! __function {
    () => {{
        fn __stest_fn() {}
        $crate::_internal::function_name($crate::_internal::type_name_of(__stest_fn))
    }};
}
