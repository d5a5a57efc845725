use crate::{error::FailureKind, GenericAssert};
use std::borrow::Borrow;

/// Assertions for types implementing [`Borrow`](std::borrow::Borrow)<[`bool`]>.
///
/// ### Examples
/// ```
/// use fest_assertions::*;
///
/// // test actual value to be true
/// true.should().is_true();
///
/// // or false
/// assert_that(&false).is_false();
/// ```
pub trait BooleanAssertions {
    fn is_true(self) -> Self;
    fn is_false(self) -> Self;
}

impl<T: Borrow<bool>> GenericAssert<T> {
    fn expect_bool(&self, expected: bool) {
        let actual = *self.actual_or_fail().borrow();

        if actual != expected {
            self.failure(FailureKind::Equality)
                .fail("expected:<{}> but was:<{}>", &[&expected, &actual]);
        }
    }
}

impl<T: Borrow<bool>> BooleanAssertions for GenericAssert<T> {
    fn is_true(self) -> Self {
        self.expect_bool(true);
        self
    }

    fn is_false(self) -> Self {
        self.expect_bool(false);
        self
    }
}
