use crate::{error::FailureKind, formatting::Unquoted, GenericAssert};
use std::borrow::Borrow;

/// Assertions for types implementing [`Borrow`](std::borrow::Borrow)<[`char`]>.
///
/// ### Examples
/// ```
/// use fest_assertions::*;
///
/// 'A'.should().is_upper_case().is_alphabetic();
/// assert_that('7').is_numeric();
/// assert_that(&' ').is_whitespace();
/// ```
pub trait CharAssertions {
    fn is_upper_case(self) -> Self;
    fn is_lower_case(self) -> Self;
    fn is_alphabetic(self) -> Self;
    fn is_numeric(self) -> Self;
    fn is_whitespace(self) -> Self;
}

impl<T: Borrow<char>> GenericAssert<T> {
    fn expect_char(&self, holds: fn(char) -> bool, class: &str) {
        let actual = *self.actual_or_fail().borrow();

        if !holds(actual) {
            self.failure(FailureKind::Condition)
                .fail("<{}> should be {} character", &[&actual, &Unquoted(class)]);
        }
    }
}

impl<T: Borrow<char>> CharAssertions for GenericAssert<T> {
    fn is_upper_case(self) -> Self {
        self.expect_char(char::is_uppercase, "an uppercase");
        self
    }

    fn is_lower_case(self) -> Self {
        self.expect_char(char::is_lowercase, "a lowercase");
        self
    }

    fn is_alphabetic(self) -> Self {
        self.expect_char(char::is_alphabetic, "an alphabetic");
        self
    }

    fn is_numeric(self) -> Self {
        self.expect_char(char::is_numeric, "a numeric");
        self
    }

    fn is_whitespace(self) -> Self {
        self.expect_char(char::is_whitespace, "a whitespace");
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn character_classes() {
        'é'.should().is_lower_case().is_alphabetic();
        'Z'.should().is_upper_case();
        '٣'.should().is_numeric();
        '\t'.should().is_whitespace();
    }

    #[test]
    fn should_panic_on_wrong_case() {
        should_fail_with_exact_message!('a'.should().is_upper_case(), "<'a'> should be an uppercase character");
        should_fail_with_exact_message!(
            assert_that('A').described_as("initial").is_lower_case(),
            "[initial] <'A'> should be a lowercase character"
        );
    }

    #[test]
    fn should_panic_on_wrong_class() {
        should_fail_with_exact_message!('1'.should().is_alphabetic(), "<'1'> should be an alphabetic character");
        should_fail_with_exact_message!('x'.should().is_numeric(), "<'x'> should be a numeric character");
        should_fail_with_exact_message!('x'.should().is_whitespace(), "<'x'> should be a whitespace character");
    }
}
