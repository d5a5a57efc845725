//! The single place failures are raised from.
//!
//! A failure is a panic whose payload is an [`AssertionError`]. The first
//! failure installs a panic hook that prints such payloads the way the
//! default hook prints string panics, and hands every other payload to the
//! hook that was installed before it.
use crate::{
    description::Description,
    error::{AssertionError, ExternalError, FailureKind},
    formatting,
};
use std::{
    any::Any,
    cell::Cell,
    fmt::Debug,
    panic::{self, AssertUnwindSafe},
    sync::Once,
    thread,
};

static INSTALL_HOOK: Once = Once::new();

thread_local! {
    static CAPTURING: Cell<bool> = Cell::new(false);
}

fn install_panic_hook() {
    INSTALL_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if CAPTURING.with(|c| c.get()) {
                return;
            }

            match info.payload().downcast_ref::<AssertionError>() {
                Some(error) => {
                    let current = thread::current();
                    let name = current.name().unwrap_or("<unnamed>");
                    match info.location() {
                        Some(location) => eprintln!("thread '{}' panicked at {}:\n{}", name, location, error),
                        None => eprintln!("thread '{}' panicked:\n{}", name, error),
                    }
                },
                None => previous(info),
            }
        }));
    });
}

/// Runs `f`, catching any panic without reporting it through the panic hook.
pub(crate) fn capture_panic<F, R>(f: F) -> Result<R, Box<dyn Any + Send + 'static>>
where F: FnOnce() -> R {
    install_panic_hook();

    let was_capturing = CAPTURING.with(|c| c.replace(true));
    let result = panic::catch_unwind(AssertUnwindSafe(f));
    CAPTURING.with(|c| c.set(was_capturing));

    if let Err(payload) = &result {
        log::trace!("captured panic with payload {:?}", (**payload).type_id());
    }

    result
}

/// Terminal failure-raising entry points for custom assertions.
///
/// The first failure raised in a process replaces the process-wide panic
/// hook (see [`std::panic::set_hook`]). The replacement only changes how
/// [`AssertionError`] payloads are printed and delegates everything else to
/// the hook it replaced. A hook installed later by the host test binary takes
/// precedence.
///
/// ```should_panic
/// use fest_assertions::Fail;
///
/// Fail::fail("this always fails");
/// ```
pub struct Fail;

impl Fail {
    pub fn fail(message: impl Into<String>) -> ! {
        Fail::fail_with(AssertionError::failed(FailureKind::Custom, message))
    }

    /// Fails with `cause` attached as the source of the raised error.
    pub fn fail_with_cause(message: impl Into<String>, cause: ExternalError) -> ! {
        Fail::fail_with(AssertionError::failed_with_cause(FailureKind::Custom, message, cause))
    }

    pub fn fail_with(error: AssertionError) -> ! {
        install_panic_hook();
        log::debug!("assertion failed ({:?}): {}", error.kind(), error);

        panic::panic_any(error)
    }
}

/// Builds and raises failures carrying an assertion's description and
/// overriding message, so that every assertion renders the same way.
///
/// ```
/// use fest_assertions::*;
///
/// trait EvenAssertions {
///     fn is_even(self) -> Self;
/// }
///
/// impl EvenAssertions for GenericAssert<u32> {
///     fn is_even(self) -> Self {
///         let actual = *self.actual_or_fail();
///         if actual % 2 != 0 {
///             self.failure(FailureKind::Custom).fail("<{}> should be even", &[&actual]);
///         }
///         self
///     }
/// }
///
/// assert_that(4u32).is_even();
/// should_fail_with_exact_message!(assert_that(3u32).described_as("count").is_even(), "[count] <3> should be even");
/// ```
pub struct AssertionFailure<'a> {
    kind: FailureKind,
    description: Option<&'a dyn Description>,
    overriding_message: Option<&'a str>,
}

impl<'a> AssertionFailure<'a> {
    pub fn new(kind: FailureKind) -> Self {
        AssertionFailure {
            kind,
            description: None,
            overriding_message: None,
        }
    }

    pub fn described_by(mut self, description: Option<&'a dyn Description>) -> Self {
        self.description = description;
        self
    }

    /// Replaces whatever message the assertion would produce.
    pub fn overriding_message(mut self, message: Option<&'a str>) -> Self {
        self.overriding_message = message;
        self
    }

    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    /// The message that [`fail`](AssertionFailure::fail) would raise.
    pub fn message(&self, template: &str, values: &[&dyn Debug]) -> String {
        match self.overriding_message {
            Some(message) => formatting::format(self.description, message, &[]),
            None => formatting::format(self.description, template, values),
        }
    }

    pub fn fail(self, template: &str, values: &[&dyn Debug]) -> ! {
        Fail::fail_with(AssertionError::failed(self.kind, self.message(template, values)))
    }

    pub fn fail_with_cause(self, template: &str, values: &[&dyn Debug], cause: ExternalError) -> ! {
        Fail::fail_with(AssertionError::failed_with_cause(
            self.kind,
            self.message(template, values),
            cause,
        ))
    }

    /// Raises a precondition error. Preconditions report API misuse, so
    /// neither the description nor an overriding message is applied.
    pub fn illegal_argument(self, template: &str, values: &[&dyn Debug]) -> ! {
        Fail::fail_with(AssertionError::illegal_argument(
            self.kind,
            formatting::substitute(template, values),
        ))
    }
}
