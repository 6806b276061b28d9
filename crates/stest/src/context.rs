use crate::{
    report::{Assertion, Summary, TestId},
    reporter::Reporter,
};
use std::{cell::Cell, marker::PhantomData, mem, ptr::NonNull};

/// Run-scoped state consulted by every check.
pub(crate) struct Context<'a> {
    reporter: &'a dyn Reporter,
    current: Option<TestId<'a>>,
    summary: Summary,
    _marker: PhantomData<fn(&'a ()) -> &'a ()>,
}

impl<'a> Context<'a> {
    pub(crate) fn new(reporter: &'a dyn Reporter) -> Self {
        Self {
            reporter,
            current: None,
            summary: Summary::default(),
            _marker: PhantomData,
        }
    }

    pub(crate) fn enter_test(&mut self, suite: &'a str, test: &'a str) {
        let id = TestId { suite, test };
        self.current.replace(id);
        self.summary.tests += 1;
        let reporter = self.reporter;
        detached(|| reporter.test_starting(id));
    }

    pub(crate) fn leave_test(&mut self) {
        self.current.take();
    }

    pub(crate) fn record(&mut self, assertion: Assertion) {
        debug_assert!(
            self.current.is_some(),
            "the context is published outside of a test case"
        );
        if let Some(id) = self.current {
            self.summary.append(id, assertion);
            self.reporter.assertion_recorded(id, &assertion);
        }
    }

    pub(crate) fn finish(self) -> Summary {
        self.summary
    }
}

// ==== TLS ====

thread_local! {
    static TLS_CTX: Cell<Option<NonNull<Context<'static>>>> = Cell::new(None);
}

struct Guard(Option<NonNull<Context<'static>>>);

impl Drop for Guard {
    fn drop(&mut self) {
        TLS_CTX.with(|tls| tls.set(self.0.take()));
    }
}

/// Call `f` with the context of the running test, if any.
///
/// The context is detached from the thread while `f` runs, so a check made
/// from inside a reporter callback observes no context.
pub(crate) fn try_with_tls_context<F, R>(f: F) -> Option<R>
where
    F: FnOnce(&mut Context<'_>) -> R,
{
    let ctx_ptr = TLS_CTX.with(|tls| tls.take());
    let _guard = Guard(ctx_ptr);
    let mut ctx_ptr = ctx_ptr?;
    Some(unsafe { f(ctx_ptr.as_mut()) })
}

/// Call `f` with no context published on the current thread.
///
/// Reporter callbacks run inside this, so a check made from a reporter is
/// never attributed to a test case of an enclosing run.
pub(crate) fn detached<F, R>(f: F) -> R
where
    F: FnOnce() -> R,
{
    let prev = TLS_CTX.with(|tls| tls.take());
    let _guard = Guard(prev);
    f()
}

impl Context<'_> {
    /// Publish this context to the checks made by `f` on the current thread.
    ///
    /// The previously published context, if any, is restored on return.
    pub(crate) fn scope<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        let prev = TLS_CTX.with(|tls| unsafe {
            let ctx_ptr = mem::transmute::<&mut Self, &mut Context<'static>>(self);
            tls.replace(Some(NonNull::from(ctx_ptr)))
        });
        let _guard = Guard(prev);
        f()
    }
}
