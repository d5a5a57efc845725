//! Labels identifying an assertion in failure messages.

/// Text shown between brackets in front of a failure message.
pub trait Description {
    fn value(&self) -> String;
}

/// A fixed description.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BasicDescription {
    value: String,
}

impl BasicDescription {
    pub fn new(value: impl Into<String>) -> Self {
        BasicDescription { value: value.into() }
    }
}

impl Description for BasicDescription {
    fn value(&self) -> String {
        self.value.clone()
    }
}

/// A description computed only when a failure message is rendered.
///
/// ```
/// use fest_assertions::*;
///
/// let attempt = 3;
/// assert_that(42)
///     .described_as(LazyDescription::new(move || format!("attempt {}", attempt)))
///     .is_equal_to(42);
/// ```
pub struct LazyDescription<F> {
    supplier: F,
}

impl<F: Fn() -> String> LazyDescription<F> {
    pub fn new(supplier: F) -> Self {
        LazyDescription { supplier }
    }
}

impl<F: Fn() -> String> Description for LazyDescription<F> {
    fn value(&self) -> String {
        (self.supplier)()
    }
}

/// Anything accepted by [`GenericAssert::described_as`](crate::GenericAssert::described_as).
pub trait IntoDescription {
    fn into_description(self) -> Box<dyn Description>;
}

impl IntoDescription for &str {
    fn into_description(self) -> Box<dyn Description> {
        Box::new(BasicDescription::new(self))
    }
}

impl IntoDescription for String {
    fn into_description(self) -> Box<dyn Description> {
        Box::new(BasicDescription::new(self))
    }
}

impl IntoDescription for BasicDescription {
    fn into_description(self) -> Box<dyn Description> {
        Box::new(self)
    }
}

impl<F: Fn() -> String + 'static> IntoDescription for LazyDescription<F> {
    fn into_description(self) -> Box<dyn Description> {
        Box::new(self)
    }
}

impl IntoDescription for Box<dyn Description> {
    fn into_description(self) -> Box<dyn Description> {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::Cell, rc::Rc};

    #[test]
    fn basic_description_returns_its_text() {
        assert_eq!("A Test".into_description().value(), "A Test");
    }

    #[test]
    fn lazy_description_is_evaluated_on_each_use() {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let description = LazyDescription::new(move || {
            counter.set(counter.get() + 1);
            format!("call {}", counter.get())
        })
        .into_description();

        assert_eq!(calls.get(), 0);
        assert_eq!(description.value(), "call 1");
        assert_eq!(description.value(), "call 2");
    }
}
