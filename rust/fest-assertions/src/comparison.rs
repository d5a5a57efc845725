use crate::error::ComparisonFailure;
use std::{
    any::{Any, TypeId},
    borrow::Cow,
    rc::Rc,
    sync::Arc,
};

/// Upgrades an equality failure to a [`ComparisonFailure`] when both operands
/// are text.
pub struct ComparisonFailureFactory;

impl ComparisonFailureFactory {
    /// Returns `None` unless both `expected` and `actual` are one of the
    /// standard text types. No conversion is attempted.
    ///
    /// ```
    /// use fest_assertions::ComparisonFailureFactory;
    ///
    /// let failure = ComparisonFailureFactory::try_build_comparison_failure("oops", &"a,b", &String::from("c,d"));
    /// assert_eq!(failure.unwrap().expected(), "a,b");
    ///
    /// assert!(ComparisonFailureFactory::try_build_comparison_failure("oops", &1, &"1").is_none());
    /// ```
    pub fn try_build_comparison_failure(message: &str, expected: &dyn Any, actual: &dyn Any) -> Option<ComparisonFailure> {
        let expected = as_text(expected)?;
        let actual = as_text(actual)?;

        Some(ComparisonFailure::new(message, expected, actual))
    }

    /// Same as [`try_build_comparison_failure`](Self::try_build_comparison_failure)
    /// for operands that need not be `'static`, e.g. `&str` borrowed from a
    /// local `String`.
    ///
    /// ```
    /// use fest_assertions::ComparisonFailureFactory;
    ///
    /// let owned = String::from("c,d");
    /// let failure = ComparisonFailureFactory::try_build_comparison_failure_of("oops", &"a,b", &owned.as_str());
    /// assert_eq!(failure.unwrap().actual(), "c,d");
    /// ```
    pub fn try_build_comparison_failure_of<E, A>(message: &str, expected: &E, actual: &A) -> Option<ComparisonFailure> {
        let expected = text_of(expected)?;
        let actual = text_of(actual)?;

        Some(ComparisonFailure::new(message, expected, actual))
    }
}

/// `typeid::of` ignores lifetimes, so a match means `T` is the text type up
/// to its lifetime parameters, which outlive the borrow of `value`.
fn text_of<T>(value: &T) -> Option<&str> {
    let id = typeid::of::<T>();
    let ptr = value as *const T;

    unsafe {
        if id == TypeId::of::<String>() {
            Some((*(ptr as *const String)).as_str())
        } else if id == TypeId::of::<&'static str>() {
            Some(*(ptr as *const &str))
        } else if id == TypeId::of::<Box<str>>() {
            Some(&**(ptr as *const Box<str>))
        } else if id == TypeId::of::<Cow<'static, str>>() {
            Some(&**(ptr as *const Cow<'_, str>))
        } else if id == TypeId::of::<Rc<str>>() {
            Some(&**(ptr as *const Rc<str>))
        } else if id == TypeId::of::<Arc<str>>() {
            Some(&**(ptr as *const Arc<str>))
        } else {
            None
        }
    }
}

fn as_text(value: &dyn Any) -> Option<&str> {
    if let Some(s) = value.downcast_ref::<String>() {
        Some(s.as_str())
    } else if let Some(s) = value.downcast_ref::<&'static str>() {
        Some(*s)
    } else if let Some(s) = value.downcast_ref::<Box<str>>() {
        Some(&**s)
    } else if let Some(s) = value.downcast_ref::<Cow<'static, str>>() {
        Some(&**s)
    } else if let Some(s) = value.downcast_ref::<Rc<str>>() {
        Some(&**s)
    } else {
        value.downcast_ref::<Arc<str>>().map(|s| &**s)
    }
}
