use crate::{error::FailureKind, formatting::Unquoted, GenericAssert};
use num::{Float, Num};
use std::{borrow::Borrow, cmp::PartialOrd, fmt::Debug};

/// Assertions for types implementing [`PartialOrd`](std::cmp::PartialOrd).
///
/// ### Examples
/// ```
/// use fest_assertions::*;
///
/// // test actual < target value
/// 1.should().is_less_than(2);
///
/// // test actual <= target value
/// "One".should().is_less_than_or_equal_to("Two");
///
/// // test actual > target value
/// 5f32.should().is_greater_than(3f32);
///
/// // test actual >= target value
/// 33u8.should().is_greater_than_or_equal_to(&33u8);
/// ```
pub trait ComparableAssertions<T>
where T: PartialOrd
{
    fn is_less_than<E: Borrow<T>>(self, other: E) -> Self;
    fn is_less_than_or_equal_to<E: Borrow<T>>(self, other: E) -> Self;
    fn is_greater_than<E: Borrow<T>>(self, other: E) -> Self;
    fn is_greater_than_or_equal_to<E: Borrow<T>>(self, other: E) -> Self;
}

impl<T: PartialOrd + Debug> GenericAssert<T> {
    fn expect_ordered(&self, other: &T, holds: fn(&T, &T) -> bool, relation: &str) {
        let actual = self.actual_or_fail();

        if !holds(actual, other) {
            self.failure(FailureKind::Ordering).fail(
                "actual value:<{}> should be {}:<{}>",
                &[actual, &Unquoted(relation), other],
            );
        }
    }
}

impl<T> ComparableAssertions<T> for GenericAssert<T>
where T: PartialOrd + Debug
{
    fn is_less_than<E: Borrow<T>>(self, other: E) -> Self {
        self.expect_ordered(other.borrow(), |a, e| a < e, "less than");
        self
    }

    fn is_less_than_or_equal_to<E: Borrow<T>>(self, other: E) -> Self {
        self.expect_ordered(other.borrow(), |a, e| a <= e, "less than or equal to");
        self
    }

    fn is_greater_than<E: Borrow<T>>(self, other: E) -> Self {
        self.expect_ordered(other.borrow(), |a, e| a > e, "greater than");
        self
    }

    fn is_greater_than_or_equal_to<E: Borrow<T>>(self, other: E) -> Self {
        self.expect_ordered(other.borrow(), |a, e| a >= e, "greater than or equal to");
        self
    }
}

/// Sign assertions for numbers.
///
/// ### Examples
/// ```
/// use fest_assertions::*;
///
/// 0u32.should().is_zero();
/// assert_that(2.5f64).is_positive();
/// assert_that(-7i64).is_negative();
/// ```
pub trait NumberAssertions {
    fn is_zero(self) -> Self;
    fn is_positive(self) -> Self;
    fn is_negative(self) -> Self;
}

impl<T> NumberAssertions for GenericAssert<T>
where T: Num + PartialOrd + Debug
{
    fn is_zero(self) -> Self {
        let actual = self.actual_or_fail();

        if !actual.is_zero() {
            self.failure(FailureKind::Equality)
                .fail("expected:<{}> but was:<{}>", &[&T::zero(), actual]);
        }

        self
    }

    fn is_positive(self) -> Self {
        self.expect_ordered(&T::zero(), |a, e| a > e, "greater than");
        self
    }

    fn is_negative(self) -> Self {
        self.expect_ordered(&T::zero(), |a, e| a < e, "less than");
        self
    }
}

/// Assertions for types implementing [`Float`](num::Float) trait.
///
/// ### Examples
/// ```
/// use fest_assertions::*;
///
/// 2.0f64.should().is_close_to(2.0f64, 0.01f64).is_finite();
/// f32::NAN.should().is_nan();
/// ```
pub trait FloatAssertions<T: Float> {
    /// Passes when the actual value is finite and differs from `expected` by
    /// at most `tolerance`. A negative or NaN tolerance is an API misuse.
    fn is_close_to<E: Borrow<T>, O: Borrow<T>>(self, expected: E, tolerance: O) -> Self;
    fn is_nan(self) -> Self;
    fn is_not_nan(self) -> Self;
    fn is_finite(self) -> Self;
}

impl<T: Float + Debug> FloatAssertions<T> for GenericAssert<T> {
    fn is_close_to<E: Borrow<T>, O: Borrow<T>>(self, expected: E, tolerance: O) -> Self {
        let borrowed_expected = *expected.borrow();
        let borrowed_tolerance = *tolerance.borrow();

        if borrowed_tolerance.is_nan() || borrowed_tolerance < T::zero() {
            self.failure(FailureKind::Equality).illegal_argument(
                "the tolerance should be a non-negative number but was:<{}>",
                &[&borrowed_tolerance],
            );
        }

        let actual = *self.actual_or_fail();
        let difference = (actual - borrowed_expected).abs();

        if !actual.is_finite() || difference.is_nan() || difference > borrowed_tolerance {
            self.failure(FailureKind::Equality).fail(
                "expected:<{}> but was:<{}> using delta:<{}>",
                &[&borrowed_expected, &actual, &borrowed_tolerance],
            );
        }

        self
    }

    fn is_nan(self) -> Self {
        let actual = *self.actual_or_fail();

        if !actual.is_nan() {
            self.failure(FailureKind::Equality)
                .fail("expected:<{}> but was:<{}>", &[&T::nan(), &actual]);
        }

        self
    }

    fn is_not_nan(self) -> Self {
        if self.actual_or_fail().is_nan() {
            self.failure(FailureKind::Inequality)
                .fail("actual value:<{}> should not be equal to:<{}>", &[&T::nan(), &T::nan()]);
        }

        self
    }

    fn is_finite(self) -> Self {
        let actual = *self.actual_or_fail();

        if !actual.is_finite() {
            self.failure(FailureKind::Equality)
                .fail("expecting actual value:<{}> to be finite", &[&actual]);
        }

        self
    }
}
