use crate::{
    description::Description,
    error::FailureKind,
    fail::{capture_panic, AssertionFailure},
    formatting::Unquoted,
    utils::{matches_pattern, panic_message},
    GenericAssert,
};
use std::any::Any;

/// Making assertion on panic cause.
pub struct PanicCauseConstraint {
    cause: Box<dyn Any + Send>,
    description: Option<Box<dyn Description>>,
    overriding_message: Option<String>,
}

impl PanicCauseConstraint {
    fn failure(&self) -> AssertionFailure<'_> {
        AssertionFailure::new(FailureKind::Panic)
            .described_by(self.description.as_deref())
            .overriding_message(self.overriding_message.as_deref())
    }

    fn message(&self) -> String {
        match panic_message(self.cause.as_ref()) {
            Some(message) => message,
            None => self
                .failure()
                .fail("expecting panic cause to be a message, but was:<{}>", &[&self.cause]),
        }
    }

    /// Panic message should match the glob `pattern`.
    pub fn with_message(self, pattern: impl AsRef<str>) -> Self {
        let message = self.message();

        if !matches_pattern(&message, pattern.as_ref()) {
            self.failure().fail(
                "expecting panic message matching pattern:<{}>, but was:<{}>",
                &[&Unquoted(pattern.as_ref()), &Unquoted(&message)],
            );
        }

        self
    }

    pub fn with_exact_message(self, expected: impl AsRef<str>) -> Self {
        let message = self.message();

        if message != expected.as_ref() {
            self.failure().fail(
                "expecting panic message:<{}>, but was:<{}>",
                &[&Unquoted(expected.as_ref()), &Unquoted(&message)],
            );
        }

        self
    }

    pub fn which(self) -> Box<dyn Any + Send> {
        self.cause
    }
}

/// Assertions for closures implementing [`FnOnce()`](std::ops::FnOnce).
///
/// ### Examples
/// ```
/// use fest_assertions::*;
///
/// // test closure should panic
/// assert_that(|| panic!("this is the message")).panics();
///
/// // use with_message() clause to test closure panic with string message (&str or String)
/// // and pattern match the error message
/// assert_that(|| panic!("this \t is\n the                   message"))
///     .panics()
///     .with_message("this is the message");
///
/// // with_message() support glob patterns
/// assert_that(|| panic!("hello world")).panics().with_message("h*w???d");
///
/// // assertion failures are panics too
/// assert_that(|| assert_that(1).is_equal_to(2))
///     .panics()
///     .with_exact_message("expected:<2> but was:<1>");
///
/// // if closure panic with no string message, use which() clause to test the value of cause.
/// // which() clause returns Box<dyn Any + Send>
/// assert_that(|| std::panic::panic_any(13u32))
///     .panics()
///     .which()
///     .should()
///     .is_instance_of::<u32>();
///
/// // a closure that must not panic gives access to its result
/// assert_that(|| 40 + 2).does_not_panic().is_equal_to(42);
/// ```
pub trait FnAssertions<R> {
    fn panics(self) -> PanicCauseConstraint;
    fn does_not_panic(self) -> GenericAssert<R>;
}

impl<F, R> FnAssertions<R> for GenericAssert<F>
where F: FnOnce() -> R
{
    fn panics(self) -> PanicCauseConstraint {
        let (function, description, overriding_message) = self.into_parts();
        let function = match function {
            Some(function) => function,
            None => GenericAssert::<F>::from_parts(None, description, overriding_message)
                .failure(FailureKind::NullActual)
                .fail("expecting actual value not to be null", &[]),
        };

        match capture_panic(function) {
            Ok(_) => AssertionFailure::new(FailureKind::Panic)
                .described_by(description.as_deref())
                .overriding_message(overriding_message.as_deref())
                .fail("expecting function call to panic, but it returned normally", &[]),
            Err(cause) => PanicCauseConstraint {
                cause,
                description,
                overriding_message,
            },
        }
    }

    fn does_not_panic(self) -> GenericAssert<R> {
        let (function, description, overriding_message) = self.into_parts();
        let function = match function {
            Some(function) => function,
            None => GenericAssert::<F>::from_parts(None, description, overriding_message)
                .failure(FailureKind::NullActual)
                .fail("expecting actual value not to be null", &[]),
        };

        match capture_panic(function) {
            Ok(result) => GenericAssert::from_parts(Some(result), description, overriding_message),
            Err(cause) => {
                let message = panic_message(cause.as_ref()).unwrap_or_else(|| "<no message>".to_owned());
                AssertionFailure::new(FailureKind::Panic)
                    .described_by(description.as_deref())
                    .overriding_message(overriding_message.as_deref())
                    .fail("expecting function call not to panic, but it panicked with:<{}>", &[&Unquoted(&message)])
            },
        }
    }
}
