use std::fmt::{self, Debug, Formatter};

/// A described predicate, checked by
/// [`GenericAssert::satisfies`](crate::GenericAssert::satisfies).
///
/// ```
/// use fest_assertions::*;
///
/// let even = Condition::new("even", |v: &i32| v % 2 == 0);
/// assert_that(4).satisfies(even);
/// ```
pub struct Condition<'a, T: ?Sized> {
    description: String,
    predicate: Box<dyn Fn(&T) -> bool + 'a>,
}

impl<'a, T: ?Sized> Condition<'a, T> {
    pub fn new<F>(description: impl Into<String>, predicate: F) -> Self
    where F: Fn(&T) -> bool + 'a {
        Condition {
            description: description.into(),
            predicate: Box::new(predicate),
        }
    }

    pub fn matches(&self, value: &T) -> bool {
        (self.predicate)(value)
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl<T: ?Sized> Debug for Condition<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}
