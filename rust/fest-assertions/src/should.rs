use crate::{
    comparison::ComparisonFailureFactory,
    condition::Condition,
    description::{Description, IntoDescription},
    error::FailureKind,
    fail::{AssertionFailure, Fail},
    formatting::Nullable,
};
use std::{borrow::Borrow, fmt::Debug, ptr, rc::Rc, sync::Arc};

/// Starts an assertion on `actual`.
pub fn assert_that<T>(actual: T) -> GenericAssert<T> {
    GenericAssert::new(Some(actual))
}

/// Starts an assertion on a value that may be null (`None`).
///
/// ```
/// use fest_assertions::*;
///
/// assert_that_nullable(None::<u32>).is_null();
/// assert_that_nullable(Some(3)).is_not_null().is_equal_to(3);
/// ```
pub fn assert_that_nullable<T>(actual: Option<T>) -> GenericAssert<T> {
    GenericAssert::new(actual)
}

/// Trait to start assertion. It has a blanket implementation on any type `T`.
/// Calling [`Should::should`] is the same as calling [`assert_that`].
pub trait Should<T> {
    fn should(self) -> GenericAssert<T>;
}

impl<T> Should<T> for T {
    fn should(self) -> GenericAssert<T> {
        assert_that(self)
    }
}

/// Identity comparison, as opposed to value equality. Two values are
/// identical when they point at the same allocation.
pub trait Identity {
    fn is_identical_to(&self, other: &Self) -> bool;
}

impl<T: ?Sized> Identity for &T {
    fn is_identical_to(&self, other: &Self) -> bool {
        ptr::eq(*self, *other)
    }
}

impl<T: ?Sized> Identity for Box<T> {
    fn is_identical_to(&self, other: &Self) -> bool {
        ptr::eq(&**self, &**other)
    }
}

impl<T: ?Sized> Identity for Rc<T> {
    fn is_identical_to(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> Identity for Arc<T> {
    fn is_identical_to(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

/// The base assertion. Holds the actual value (null is `None`), an optional
/// description and an optional message replacing the default failure text.
///
/// Type-specific assertions are extension traits implemented on
/// `GenericAssert<T>` for the `T`s they apply to, e.g.
/// [`GroupAssertions`](crate::GroupAssertions) for sized groups and
/// [`ComparableAssertions`](crate::ComparableAssertions) for ordered values.
///
/// ### Examples
/// ```
/// use fest_assertions::*;
///
/// assert_that(3 + 5).is_equal_to(8).is_not_equal_to(9);
///
/// // the description prefixes every failure message
/// should_fail_with_exact_message!(
///     assert_that(1).described_as("A Test").is_equal_to(2),
///     "[A Test] expected:<2> but was:<1>"
/// );
///
/// // identity is only defined for references and smart pointers
/// let a = String::from("a");
/// let b = a.clone();
/// assert_that(&a).is_same_as(&a).is_not_same_as(&b);
///
/// assert_that(4).satisfies(Condition::new("even", |v: &i32| v % 2 == 0));
/// "hello".should().matches(|s| s.starts_with('h'));
/// ```
pub struct GenericAssert<T> {
    actual: Option<T>,
    description: Option<Box<dyn Description>>,
    overriding_message: Option<String>,
}

impl<T> GenericAssert<T> {
    fn new(actual: Option<T>) -> Self {
        GenericAssert {
            actual,
            description: None,
            overriding_message: None,
        }
    }

    /// return the reference to the actual value, `None` if it is null
    pub fn actual(&self) -> Option<&T> {
        self.actual.as_ref()
    }

    pub fn into_inner(self) -> Option<T> {
        self.actual
    }

    pub fn description(&self) -> Option<&dyn Description> {
        self.description.as_deref()
    }

    /// Labels the failure messages of this assertion. A second call replaces
    /// the first.
    pub fn described_as(mut self, description: impl IntoDescription) -> Self {
        log::trace!("replacing assertion description: {}", self.description.is_some());

        self.description = Some(description.into_description());
        self
    }

    pub fn overriding_error_message(mut self, message: impl Into<String>) -> Self {
        self.overriding_message = Some(message.into());
        self
    }

    /// A failure pre-filled with this assertion's description and overriding
    /// message.
    pub fn failure(&self, kind: FailureKind) -> AssertionFailure<'_> {
        AssertionFailure::new(kind)
            .described_by(self.description())
            .overriding_message(self.overriding_message.as_deref())
    }

    /// The actual value, failing with a [`FailureKind::NullActual`] failure
    /// when it is null.
    pub fn actual_or_fail(&self) -> &T {
        match &self.actual {
            Some(actual) => actual,
            None => self
                .failure(FailureKind::NullActual)
                .fail("expecting actual value not to be null", &[]),
        }
    }

    pub(crate) fn into_parts(self) -> (Option<T>, Option<Box<dyn Description>>, Option<String>) {
        (self.actual, self.description, self.overriding_message)
    }

    pub(crate) fn from_parts(
        actual: Option<T>,
        description: Option<Box<dyn Description>>,
        overriding_message: Option<String>,
    ) -> Self {
        GenericAssert {
            actual,
            description,
            overriding_message,
        }
    }

    pub fn is_not_null(self) -> Self {
        if self.actual.is_none() {
            self.failure(FailureKind::ExpectedNotNullButWasNull)
                .fail("expecting actual value not to be null", &[]);
        }

        self
    }
}

impl<T: Debug> GenericAssert<T> {
    fn nullable_actual(&self) -> Nullable<'_, T> {
        Nullable(self.actual.as_ref())
    }

    pub fn is_null(self) {
        if self.actual.is_some() {
            self.failure(FailureKind::ExpectedNullButWasNotNull)
                .fail("expected:<null> but was:<{}>", &[&self.nullable_actual()]);
        }
    }

    pub fn is_not_equal_to<E: Borrow<T>>(self, expected: E) -> Self
    where T: PartialEq {
        let expected = expected.borrow();

        if self.actual.as_ref() == Some(expected) {
            self.failure(FailureKind::Inequality).fail(
                "actual value:<{}> should not be equal to:<{}>",
                &[&self.nullable_actual(), expected],
            );
        }

        self
    }

    pub fn is_same_as<E: Borrow<T>>(self, expected: E) -> Self
    where T: Identity {
        let expected = expected.borrow();
        let identical = matches!(&self.actual, Some(actual) if actual.is_identical_to(expected));

        if !identical {
            self.failure(FailureKind::Identity).fail(
                "expected same instance but found:<{}> and:<{}>",
                &[&self.nullable_actual(), expected],
            );
        }

        self
    }

    pub fn is_not_same_as<E: Borrow<T>>(self, expected: E) -> Self
    where T: Identity {
        let expected = expected.borrow();

        if let Some(actual) = &self.actual {
            if actual.is_identical_to(expected) {
                self.failure(FailureKind::NonIdentity)
                    .fail("given objects are same:<{}>", &[actual]);
            }
        }

        self
    }

    /// Fails unless `condition` holds for the actual value. Passing `None`
    /// is an API misuse and is reported before anything is evaluated.
    pub fn satisfies<'c, C>(self, condition: C) -> Self
    where C: Into<Option<Condition<'c, T>>> {
        let condition = self.require_condition(condition.into());
        let satisfied = matches!(&self.actual, Some(actual) if condition.matches(actual));

        if !satisfied {
            self.failure(FailureKind::Condition).fail(
                "expected:<{}> to satisfy condition:<{}>",
                &[&self.nullable_actual(), &condition],
            );
        }

        self
    }

    pub fn does_not_satisfy<'c, C>(self, condition: C) -> Self
    where C: Into<Option<Condition<'c, T>>> {
        let condition = self.require_condition(condition.into());

        if let Some(actual) = &self.actual {
            if condition.matches(actual) {
                self.failure(FailureKind::Condition)
                    .fail("expected:<{}> not to satisfy condition:<{}>", &[actual, &condition]);
            }
        }

        self
    }

    /// Shortcut for [`satisfies`](GenericAssert::satisfies) with an
    /// undescribed predicate.
    pub fn matches<F>(self, predicate: F) -> Self
    where F: Fn(&T) -> bool {
        self.satisfies(Condition::new("given predicate", predicate))
    }

    pub fn is_in<I>(self, values: I) -> Self
    where
        T: PartialEq,
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        let values: Vec<I::Item> = values.into_iter().collect();
        let values: Vec<&T> = values.iter().map(Borrow::<T>::borrow).collect();
        let found = matches!(&self.actual, Some(actual) if values.iter().any(|v| *v == actual));

        if !found {
            self.failure(FailureKind::Containment)
                .fail("expected:<{}> to be in:<{}>", &[&self.nullable_actual(), &values]);
        }

        self
    }

    pub fn is_not_in<I>(self, values: I) -> Self
    where
        T: PartialEq,
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        let values: Vec<I::Item> = values.into_iter().collect();
        let values: Vec<&T> = values.iter().map(Borrow::<T>::borrow).collect();

        if let Some(actual) = &self.actual {
            if values.iter().any(|v| *v == actual) {
                self.failure(FailureKind::Containment)
                    .fail("expected:<{}> not to be in:<{}>", &[actual, &values]);
            }
        }

        self
    }

    fn require_condition<'c>(&self, condition: Option<Condition<'c, T>>) -> Condition<'c, T> {
        match condition {
            Some(condition) => condition,
            None => self
                .failure(FailureKind::Condition)
                .illegal_argument("condition to check should not be null", &[]),
        }
    }
}

impl<T: Debug + PartialEq> GenericAssert<T> {
    /// Fails unless the actual value equals `expected`. When both are text the
    /// failure is an [`AssertionError::Comparison`](crate::AssertionError::Comparison)
    /// carrying both texts.
    pub fn is_equal_to<E: Borrow<T>>(self, expected: E) -> Self {
        let expected = expected.borrow();

        if self.actual.as_ref() != Some(expected) {
            self.fail_not_equal(Some(expected));
        }

        self
    }

    /// Like [`is_equal_to`](GenericAssert::is_equal_to), where `None` expects
    /// the actual value to be null as well.
    pub fn is_equal_to_nullable<E: Borrow<T>>(self, expected: Option<E>) -> Self {
        let expected = expected.as_ref().map(|e| e.borrow());

        if self.actual.as_ref() != expected {
            self.fail_not_equal(expected);
        }

        self
    }

    fn fail_not_equal(&self, expected: Option<&T>) -> ! {
        let failure = self.failure(FailureKind::Equality);
        let message = failure.message("expected:<{}> but was:<{}>", &[&Nullable(expected), &self.nullable_actual()]);

        if let (Some(expected), Some(actual)) = (expected, self.actual.as_ref()) {
            if let Some(comparison) = ComparisonFailureFactory::try_build_comparison_failure_of(&message, expected, actual) {
                Fail::fail_with(comparison.into());
            }
        }

        Fail::fail_with(crate::AssertionError::failed(FailureKind::Equality, message))
    }
}

#[cfg(test)]
mod tests {
    use crate::*;
    use std::rc::Rc;

    #[test]
    fn is_equal_to_succeed() {
        3.should().is_equal_to(3);
        assert_that(vec![1, 2]).is_equal_to(vec![1, 2]);
    }

    #[test]
    fn is_equal_to_fail_without_description() {
        should_fail_with_exact_message!(assert_that(1).is_equal_to(2), "expected:<2> but was:<1>");
    }

    #[test]
    fn is_equal_to_fail_with_description() {
        should_fail_with_exact_message!(
            assert_that(1).described_as("A Test").is_equal_to(2),
            "[A Test] expected:<2> but was:<1>"
        );
    }

    #[test]
    fn last_description_wins() {
        should_fail_with_exact_message!(
            assert_that(1).described_as("first").described_as("second").is_equal_to(2),
            "[second] expected:<2> but was:<1>"
        );
    }

    #[test]
    fn lazy_description_is_used_in_failure() {
        let name = "lazy";
        should_fail_with_exact_message!(
            assert_that(1)
                .described_as(LazyDescription::new(move || name.to_uppercase()))
                .is_equal_to(2),
            "[LAZY] expected:<2> but was:<1>"
        );
    }

    #[test]
    fn is_equal_to_renders_sequences() {
        should_fail_with_exact_message!(
            assert_that(vec![6, 8]).is_equal_to(vec![6]),
            "expected:<[6]> but was:<[6, 8]>"
        );
    }

    #[test]
    fn is_equal_to_on_text_builds_comparison_failure() {
        let error = expect_failure(|| assert_that("c,d").is_equal_to("a,b"));

        let comparison = error.as_comparison().unwrap();
        assert_eq!(comparison.expected(), "a,b");
        assert_eq!(comparison.actual(), "c,d");
        assert_eq!(error.message(), "expected:<\"a,b\"> but was:<\"c,d\">");
    }

    #[test]
    fn is_equal_to_accepts_borrowed_values() {
        let owned = String::from("a");
        let other = String::from("a");
        assert_that(&owned).is_equal_to(&other).is_not_same_as(&other);
        assert_that(owned.as_str()).is_equal_to(other.as_str());

        let words: Vec<&str> = owned.split(',').collect();
        assert_that(words).is_equal_to(vec!["a"]);
    }

    #[test]
    fn is_equal_to_on_borrowed_text_builds_comparison_failure() {
        let expected = String::from("a,b");
        let actual = String::from("c,d");

        let error = expect_failure(|| assert_that(actual.as_str()).is_equal_to(expected.as_str()));
        let comparison = error.as_comparison().unwrap();
        assert_eq!(comparison.expected(), "a,b");
        assert_eq!(comparison.actual(), "c,d");

        let error = expect_failure(|| assert_that(&actual).is_equal_to(&expected));
        assert!(error.as_comparison().is_none());
        assert_eq!(error.message(), "expected:<\"a,b\"> but was:<\"c,d\">");
    }

    #[test]
    fn is_equal_to_on_non_text_builds_generic_failure() {
        let error = expect_failure(|| assert_that(1).is_equal_to(2));

        assert!(error.as_comparison().is_none());
        assert_eq!(error.kind(), FailureKind::Equality);
    }

    #[test]
    fn is_equal_to_nullable_accepts_two_nulls() {
        assert_that_nullable(None::<i32>).is_equal_to_nullable(None::<i32>);
        assert_that_nullable(Some(1)).is_equal_to_nullable(Some(1));
    }

    #[test]
    fn is_equal_to_nullable_renders_null() {
        should_fail_with_exact_message!(
            assert_that_nullable(None::<i32>).is_equal_to_nullable(Some(1)),
            "expected:<1> but was:<null>"
        );
        should_fail_with_exact_message!(
            assert_that(1).is_equal_to_nullable(None::<i32>),
            "expected:<null> but was:<1>"
        );
    }

    #[test]
    fn is_not_equal_to_succeed() {
        assert_that(1).is_not_equal_to(2);
        assert_that_nullable(None::<i32>).is_not_equal_to(2);
    }

    #[test]
    fn is_not_equal_to_fail() {
        should_fail_with_exact_message!(
            assert_that(1).is_not_equal_to(1),
            "actual value:<1> should not be equal to:<1>"
        );
    }

    #[test]
    fn is_null_and_is_not_null() {
        assert_that_nullable(None::<i32>).is_null();
        assert_that(1).is_not_null();

        should_fail_with_exact_message!(assert_that(1).is_null(), "expected:<null> but was:<1>");
        should_fail_with_exact_message!(
            assert_that_nullable(None::<i32>).described_as("A Test").is_not_null(),
            "[A Test] expecting actual value not to be null"
        );
    }

    #[test]
    fn is_same_as_compares_identity() {
        let a = String::from("a");
        let b = a.clone();

        assert_that(&a).is_same_as(&a);
        assert_that(&a).is_not_same_as(&b);
        should_fail_with_exact_message!(
            assert_that(&a).is_same_as(&b),
            "expected same instance but found:<\"a\"> and:<\"a\">"
        );
        should_fail_with_exact_message!(assert_that(&a).is_not_same_as(&a), "given objects are same:<\"a\">");
    }

    #[test]
    fn is_same_as_works_for_smart_pointers() {
        let shared = Rc::new(5);
        let alias = shared.clone();
        let other = Rc::new(5);

        assert_that(shared.clone()).is_same_as(&alias).is_not_same_as(&other);
    }

    #[test]
    fn null_is_never_same_as_non_null() {
        let value = 1;
        should_fail_with_message!(assert_that_nullable(None::<&i32>).is_same_as(&value), "found:<null> and:<1>");
        assert_that_nullable(None::<&i32>).is_not_same_as(&value);
    }

    #[test]
    fn satisfies_succeed() {
        assert_that(4).satisfies(Condition::new("even", |v: &i32| v % 2 == 0));
        assert_that(4).matches(|v| *v == 4);
    }

    #[test]
    fn satisfies_fail() {
        should_fail_with_exact_message!(
            assert_that(3).satisfies(Condition::new("even", |v: &i32| v % 2 == 0)),
            "expected:<3> to satisfy condition:<even>"
        );
        should_fail_with_message!(assert_that(3).matches(|v| *v == 4), "to satisfy condition:<given predicate>");
    }

    #[test]
    fn satisfies_null_condition_is_a_precondition() {
        let error = expect_failure(|| assert_that(3).described_as("ignored").satisfies(None));

        assert!(error.is_precondition());
        assert_eq!(error.message(), "condition to check should not be null");
    }

    #[test]
    fn does_not_satisfy() {
        let even = || Condition::new("even", |v: &i32| v % 2 == 0);

        assert_that(3).does_not_satisfy(even());
        should_fail_with_exact_message!(
            assert_that(4).does_not_satisfy(even()),
            "expected:<4> not to satisfy condition:<even>"
        );
    }

    #[test]
    fn is_in_and_is_not_in() {
        assert_that(2).is_in([1, 2, 3]).is_not_in(vec![4, 5]);

        should_fail_with_exact_message!(assert_that(9).is_in([1, 2]), "expected:<9> to be in:<[1, 2]>");
        should_fail_with_exact_message!(assert_that(1).is_not_in(&[1, 2]), "expected:<1> not to be in:<[1, 2]>");
    }

    #[test]
    fn overriding_error_message_replaces_default_text() {
        should_fail_with_exact_message!(
            assert_that(1)
                .described_as("age")
                .overriding_error_message("must be two")
                .is_equal_to(2),
            "[age] must be two"
        );
    }

    #[test]
    fn chained_assertions_keep_the_subject() {
        assert_that(5)
            .is_not_null()
            .is_equal_to(5)
            .is_not_equal_to(6)
            .matches(|v| *v > 0)
            .is_in([5]);
    }
}
