use crate::{error::FailureKind, formatting::Unquoted, GenericAssert};
use regex::Regex;
use std::fmt::Debug;

/// Assertions for types implementing [`AsRef<str>`].
///
/// Emptiness and size come from [`GroupAssertions`](crate::GroupAssertions),
/// where a string's size is its number of `char`s.
///
/// ### Examples
/// ```
/// use fest_assertions::*;
///
/// // test actual starting with specified string
/// "Hello".should().starts_with("H");
///
/// // test actual ending with specified string
/// "Hello".should().ends_with("o");
///
/// // test actual containing specified string
/// "Hello".should().contains_text("ell").does_not_contain_text("xyz");
///
/// // test actual matches a regex pattern
/// "abcd".should().matches_regex("^a.*d$");
///
/// // test actual equal the target string, ignoring case
/// String::from("Hello").should().is_equal_to_ignoring_case("hELLO");
/// ```
pub trait StringAssertions {
    fn starts_with<E: AsRef<str>>(self, expected: E) -> Self;
    fn ends_with<E: AsRef<str>>(self, expected: E) -> Self;
    fn contains_text<E: AsRef<str>>(self, expected: E) -> Self;
    fn does_not_contain_text<E: AsRef<str>>(self, expected: E) -> Self;

    /// Fails unless `pattern` matches somewhere in the actual text. An
    /// invalid pattern is an API misuse.
    fn matches_regex<E: AsRef<str>>(self, pattern: E) -> Self;
    fn does_not_match_regex<E: AsRef<str>>(self, pattern: E) -> Self;
    fn is_equal_to_ignoring_case<E: AsRef<str>>(self, expected: E) -> Self;
}

impl<S: AsRef<str> + Debug> GenericAssert<S> {
    fn expect_text(&self, holds: bool, template: &str, expected: &str) {
        if !holds {
            self.failure(FailureKind::Containment)
                .fail(template, &[self.actual_or_fail(), &expected]);
        }
    }

    fn regex(&self, pattern: &str) -> Regex {
        match Regex::new(pattern) {
            Ok(regex) => regex,
            Err(error) => self.failure(FailureKind::Pattern).illegal_argument(
                "invalid regular expression:<{}>: {}",
                &[&pattern, &Unquoted(&error.to_string())],
            ),
        }
    }
}

impl<S: AsRef<str> + Debug> StringAssertions for GenericAssert<S> {
    fn starts_with<E: AsRef<str>>(self, expected: E) -> Self {
        let expected = expected.as_ref();
        let holds = self.actual_or_fail().as_ref().starts_with(expected);

        self.expect_text(holds, "<{}> should start with:<{}>", expected);
        self
    }

    fn ends_with<E: AsRef<str>>(self, expected: E) -> Self {
        let expected = expected.as_ref();
        let holds = self.actual_or_fail().as_ref().ends_with(expected);

        self.expect_text(holds, "<{}> should end with:<{}>", expected);
        self
    }

    fn contains_text<E: AsRef<str>>(self, expected: E) -> Self {
        let expected = expected.as_ref();
        let holds = self.actual_or_fail().as_ref().contains(expected);

        self.expect_text(holds, "<{}> should contain the String:<{}>", expected);
        self
    }

    fn does_not_contain_text<E: AsRef<str>>(self, expected: E) -> Self {
        let expected = expected.as_ref();
        let holds = !self.actual_or_fail().as_ref().contains(expected);

        self.expect_text(holds, "<{}> should not contain the String:<{}>", expected);
        self
    }

    fn matches_regex<E: AsRef<str>>(self, pattern: E) -> Self {
        let pattern = pattern.as_ref();
        let regex = self.regex(pattern);
        let actual = self.actual_or_fail();

        if !regex.is_match(actual.as_ref()) {
            self.failure(FailureKind::Pattern)
                .fail("<{}> should match the regular expression:<{}>", &[actual, &pattern]);
        }

        self
    }

    fn does_not_match_regex<E: AsRef<str>>(self, pattern: E) -> Self {
        let pattern = pattern.as_ref();
        let regex = self.regex(pattern);
        let actual = self.actual_or_fail();

        if regex.is_match(actual.as_ref()) {
            self.failure(FailureKind::Pattern)
                .fail("<{}> should not match the regular expression:<{}>", &[actual, &pattern]);
        }

        self
    }

    fn is_equal_to_ignoring_case<E: AsRef<str>>(self, expected: E) -> Self {
        let expected = expected.as_ref();
        let actual = self.actual_or_fail();

        if actual.as_ref().to_lowercase() != expected.to_lowercase() {
            self.failure(FailureKind::Equality)
                .fail("expected:<{}> but was:<{}> ignoring case", &[&expected, actual]);
        }

        self
    }
}
