//! Helpers for testing assertions, custom ones included.
use crate::{
    error::{AssertionError, FailureKind},
    fail::{capture_panic, Fail},
};
use lazy_static::lazy_static;
use regex::{escape, Regex};
use std::any::Any;

lazy_static! {
    static ref SPACES: Regex = Regex::new("(?s)\\s+").expect("whitespace pattern is valid");
}

fn normalize_string(input: &str) -> String {
    SPACES.replace_all(input, " ").trim().to_string()
}

/// Glob match of `message` against `pattern`: `*` matches any run of
/// characters, `?` a single one, whitespace runs compare equal and the
/// pattern may match anywhere in the message.
pub fn matches_pattern(message: &str, pattern: &str) -> bool {
    let reg_pattern = format!("(?s){}", escape(pattern).replace("\\*", ".*").replace("\\?", "."));
    let reg_pattern = normalize_string(&reg_pattern);

    match Regex::new(&reg_pattern) {
        Ok(regex) => regex.is_match(&normalize_string(message)),
        Err(_) => false,
    }
}

/// The message of a panic payload, when it has one.
pub fn panic_message(cause: &(dyn Any + Send)) -> Option<String> {
    if let Some(error) = cause.downcast_ref::<AssertionError>() {
        Some(error.to_string())
    } else if let Some(message) = cause.downcast_ref::<String>() {
        Some(message.to_owned())
    } else {
        cause.downcast_ref::<&str>().map(|m| m.to_string())
    }
}

/// Runs `f` and returns the failure it raised. Panics that are not assertion
/// failures are returned as [`FailureKind::Panic`] failures; a normal return
/// is itself a failure.
///
/// Like every failure, this installs the crate's panic hook on first use
/// (see [`Fail`]). Panics captured here are not printed.
///
/// ```
/// use fest_assertions::*;
///
/// let error = expect_failure(|| assert_that(1).is_equal_to(2));
/// assert_eq!(error.kind(), FailureKind::Equality);
/// assert_eq!(error.message(), "expected:<2> but was:<1>");
/// ```
pub fn expect_failure<F, R>(f: F) -> AssertionError
where F: FnOnce() -> R {
    match capture_panic(f) {
        Ok(_) => Fail::fail_with(AssertionError::failed(
            FailureKind::Panic,
            "expecting an assertion failure, but none was raised",
        )),
        Err(cause) => match cause.downcast::<AssertionError>() {
            Ok(error) => *error,
            Err(other) => AssertionError::failed(
                FailureKind::Panic,
                panic_message(other.as_ref()).unwrap_or_else(|| "panic without message".to_owned()),
            ),
        },
    }
}

#[macro_export]
/// Convenient macro to assert that the specified expression, when executed,
/// fails with a message matching the glob pattern `message`.
/// See [`FnAssertions`](crate::FnAssertions) for details.
///
/// ### Examples
/// ```
/// use fest_assertions::*;
///
/// should_fail_with_message!(assert_that(vec![1, 2]).has_size(3), "expected size:<3> * for list:<[1, 2]>");
/// ```
macro_rules! should_fail_with_message {
    ($expression:expr, $message:expr) => {{
        use $crate::FnAssertions;
        $crate::assert_that(|| {
            $expression;
        })
        .panics()
        .with_message($message);
    }};
}

#[macro_export]
/// Like [`should_fail_with_message!`], but the message must be exactly
/// `message`.
///
/// ### Examples
/// ```
/// use fest_assertions::*;
///
/// should_fail_with_exact_message!(
///     assert_that(Vec::<i32>::new()).is_not_empty(),
///     "expecting a non-empty list, but it was empty"
/// );
/// ```
macro_rules! should_fail_with_exact_message {
    ($expression:expr, $message:expr) => {{
        use $crate::FnAssertions;
        $crate::assert_that(|| {
            $expression;
        })
        .panics()
        .with_exact_message($message);
    }};
}
