use crate::{error::FailureKind, GenericAssert};
use std::error::Error;

/// Assertions for errors, i.e. types implementing [`Error`](std::error::Error).
/// Boxed errors are checked through a reference, e.g.
/// `assert_that(boxed.as_ref())`.
///
/// ### Examples
/// ```
/// use fest_assertions::*;
/// use std::io;
///
/// let error = io::Error::new(io::ErrorKind::Other, "disk full");
/// assert_that(&error).has_message("disk full").has_no_cause();
/// ```
pub trait ThrowableAssertions {
    fn has_message<M: AsRef<str>>(self, expected: M) -> Self;
    fn has_no_cause(self) -> Self;
    fn has_cause(self) -> Self;

    /// Message of the last error in the [`source`](std::error::Error::source)
    /// chain.
    fn has_root_cause_message<M: AsRef<str>>(self, expected: M) -> Self;
}

impl<E: Error> ThrowableAssertions for GenericAssert<E> {
    fn has_message<M: AsRef<str>>(self, expected: M) -> Self {
        let expected = expected.as_ref();
        let message = self.actual_or_fail().to_string();

        if message != expected {
            self.failure(FailureKind::Equality)
                .fail("expected message:<{}> but was:<{}>", &[&expected, &message]);
        }

        self
    }

    fn has_no_cause(self) -> Self {
        if let Some(cause) = self.actual_or_fail().source() {
            self.failure(FailureKind::Condition).fail(
                "expected error without cause, but cause was:<{}>",
                &[&cause.to_string()],
            );
        }

        self
    }

    fn has_cause(self) -> Self {
        let actual = self.actual_or_fail();

        if actual.source().is_none() {
            self.failure(FailureKind::Condition)
                .fail("expecting error:<{}> to have a cause", &[&actual.to_string()]);
        }

        self
    }

    fn has_root_cause_message<M: AsRef<str>>(self, expected: M) -> Self {
        let expected = expected.as_ref();
        let actual = self.actual_or_fail();

        let mut root = match actual.source() {
            Some(cause) => cause,
            None => self
                .failure(FailureKind::Condition)
                .fail("expecting error:<{}> to have a cause", &[&actual.to_string()]),
        };
        while let Some(cause) = root.source() {
            root = cause;
        }

        let message = root.to_string();
        if message != expected {
            self.failure(FailureKind::Equality)
                .fail("expected root cause message:<{}> but was:<{}>", &[&expected, &message]);
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use crate::*;
    use std::{error::Error, io};

    #[derive(Debug, thiserror::Error)]
    #[error("request failed")]
    struct RequestError {
        #[source]
        source: ConnectionError,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("connection lost")]
    struct ConnectionError {
        #[source]
        source: io::Error,
    }

    fn nested() -> RequestError {
        RequestError {
            source: ConnectionError {
                source: io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe"),
            },
        }
    }

    #[test]
    fn has_message() {
        nested().should().has_message("request failed");

        should_fail_with_exact_message!(
            nested().should().described_as("call").has_message("ok"),
            "[call] expected message:<\"ok\"> but was:<\"request failed\">"
        );
    }

    #[test]
    fn cause_presence() {
        nested().should().has_cause();
        io::Error::new(io::ErrorKind::Other, "plain").should().has_no_cause();

        should_fail_with_exact_message!(
            nested().should().has_no_cause(),
            "expected error without cause, but cause was:<\"connection lost\">"
        );
        should_fail_with_exact_message!(
            io::Error::new(io::ErrorKind::Other, "plain").should().has_cause(),
            "expecting error:<\"plain\"> to have a cause"
        );
    }

    #[test]
    fn has_root_cause_message() {
        nested().should().has_root_cause_message("broken pipe");

        should_fail_with_exact_message!(
            nested().should().has_root_cause_message("timeout"),
            "expected root cause message:<\"timeout\"> but was:<\"broken pipe\">"
        );
    }

    #[test]
    fn boxed_errors_are_checked_by_reference() {
        let boxed: Box<dyn Error + Send + Sync> = Box::new(nested());

        assert_that(boxed.as_ref()).has_message("request failed").has_cause();
    }

    #[test]
    fn assertion_errors_keep_their_cause() {
        let cause: ExternalError = std::sync::Arc::new(nested());
        let error = expect_failure(move || Fail::fail_with_cause("wrapped", cause));

        error.should().has_message("wrapped").has_root_cause_message("broken pipe");
    }
}
