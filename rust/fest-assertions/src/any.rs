use crate::{error::FailureKind, GenericAssert};
use std::{
    any::{type_name, Any, TypeId},
    fmt::{self, Debug, Formatter},
    sync::Arc,
};

////////////////////////////////////////////////////////
// a helper trait to include any types that can get &dyn Any
pub trait ToAny {
    fn to_any(&self) -> &dyn Any;
}

macro_rules! to_any {
    ($($any:ty),*) => {
        $(
            impl ToAny for Box<$any> {
                fn to_any(&self) -> &dyn Any {
                    &**self
                }
            }

            impl ToAny for Arc<$any> {
                fn to_any(&self) -> &dyn Any {
                    &**self
                }
            }

            impl ToAny for &$any {
                fn to_any(&self) -> &dyn Any {
                    *self
                }
            }
        )*
    };
}

to_any!(dyn Any, dyn Any + Send, dyn Any + Send + Sync);

/// A type to check a value against, named for failure messages.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TypeDescriptor {
    id: TypeId,
    name: &'static str,
}

impl TypeDescriptor {
    pub fn of<U: Any>() -> Self {
        TypeDescriptor {
            id: TypeId::of::<U>(),
            name: type_name::<U>(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    fn describes(&self, value: &dyn Any) -> bool {
        value.type_id() == self.id
    }
}

impl Debug for TypeDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Assertions for types which could retrieve a [`Any`](std::any::Any) reference, like [`Box`](std::boxed::Box)<[`Any`](std::any::Any)>
/// , or [`Arc`](std::sync::Arc)<[`Any`](std::any::Any)+[`Send`](std::marker::Send)>, or `&(dyn`[`Any`](std::any::Any)+[`Send`](std::marker::Send)+[`Sync`](std::marker::Sync)`)`.
///
/// ## Examples
/// ```rust
/// use fest_assertions::*;
/// use std::any::Any;
///
/// // use is_instance_of::<T>() to test type of dyn Any
/// let v: Box<dyn Any> = Box::new(3u32);
/// v.should().is_instance_of::<u32>().is_not_instance_of::<i64>();
///
/// // or check against several candidate types at once
/// let v: Box<dyn Any> = Box::new("Hello World");
/// v.should()
///     .is_instance_of_any(&[TypeDescriptor::of::<String>(), TypeDescriptor::of::<&str>()]);
/// ```
pub trait AnyAssertions {
    fn is_instance_of<U: Any>(self) -> Self;
    fn is_not_instance_of<U: Any>(self) -> Self;

    /// Passes when the actual value is of one of `types`. An empty `types`
    /// is an API misuse.
    fn is_instance_of_any(self, types: &[TypeDescriptor]) -> Self;
}

impl<S: ToAny> AnyAssertions for GenericAssert<S> {
    fn is_instance_of<U: Any>(self) -> Self {
        let expected = TypeDescriptor::of::<U>();

        if !expected.describes(self.actual_or_fail().to_any()) {
            self.failure(FailureKind::Type)
                .fail("expecting actual value to be an instance of:<{}>", &[&expected]);
        }

        self
    }

    fn is_not_instance_of<U: Any>(self) -> Self {
        let unexpected = TypeDescriptor::of::<U>();

        if unexpected.describes(self.actual_or_fail().to_any()) {
            self.failure(FailureKind::Type)
                .fail("expecting actual value not to be an instance of:<{}>", &[&unexpected]);
        }

        self
    }

    fn is_instance_of_any(self, types: &[TypeDescriptor]) -> Self {
        if types.is_empty() {
            self.failure(FailureKind::NullExpectedType)
                .illegal_argument("the given array of types should not be empty", &[]);
        }

        let actual = self.actual_or_fail().to_any();

        if !types.iter().any(|t| t.describes(actual)) {
            self.failure(FailureKind::Type).fail(
                "expecting actual value to be an instance of any of:<{}>",
                &[&types],
            );
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use crate::*;
    use std::{any::Any, sync::Arc};

    #[test]
    fn any_is_instance_of_should_not_panic_if_type_matches() {
        let v: Box<dyn Any> = Box::new(3u32);

        v.should().is_instance_of::<u32>();
    }

    #[test]
    fn any_is_instance_of_should_panic_if_type_mismatches() {
        should_fail_with_exact_message!(
            {
                let v: Box<dyn Any> = Box::new(3u32);
                v.should().described_as("boxed").is_instance_of::<&str>()
            },
            "[boxed] expecting actual value to be an instance of:<&str>"
        );
    }

    #[test]
    fn any_is_not_instance_of() {
        let v: Box<dyn Any> = Box::new(3u32);
        v.should().is_not_instance_of::<i32>();

        should_fail_with_exact_message!(
            {
                let v: Box<dyn Any> = Box::new(3u32);
                v.should().is_not_instance_of::<u32>()
            },
            "expecting actual value not to be an instance of:<u32>"
        );
    }

    #[test]
    fn any_is_instance_of_any() {
        let v: Arc<dyn Any + Send + Sync> = Arc::new(3u32);
        let candidates = [TypeDescriptor::of::<i64>(), TypeDescriptor::of::<u32>()];

        v.clone().should().is_instance_of_any(&candidates);
        should_fail_with_exact_message!(
            v.should().is_instance_of_any(&candidates[..1]),
            "expecting actual value to be an instance of any of:<[i64]>"
        );
    }

    #[test]
    fn empty_type_list_is_a_precondition() {
        let v: Box<dyn Any> = Box::new(3u32);
        let error = expect_failure(move || v.should().is_instance_of_any(&[]));

        assert!(error.is_precondition());
        assert_eq!(error.kind(), FailureKind::NullExpectedType);
        assert_eq!(error.message(), "the given array of types should not be empty");
    }

    #[test]
    fn multiple_any_types_work() {
        let box_any: Box<dyn Any> = Box::new(3u32);
        let box_any_send: Box<dyn Any + Send> = Box::new(3u32);
        let box_any_send_sync: Box<dyn Any + Send + Sync> = Box::new(3u32);
        let ref_any: &dyn Any = box_any.as_ref();
        let ref_any_send: &(dyn Any + Send) = box_any_send.as_ref();
        let ref_any_send_sync: &(dyn Any + Send + Sync) = box_any_send_sync.as_ref();
        let arc_any: Arc<dyn Any> = Arc::new(3u32);
        let arc_any_send: Arc<dyn Any + Send> = Arc::new(3u32);
        let arc_any_send_sync: Arc<dyn Any + Send + Sync> = Arc::new(3u32);

        ref_any.should().is_instance_of::<u32>();
        ref_any_send.should().is_instance_of::<u32>();
        ref_any_send_sync.should().is_instance_of::<u32>();
        box_any.should().is_instance_of::<u32>();
        box_any_send.should().is_instance_of::<u32>();
        box_any_send_sync.should().is_instance_of::<u32>();
        arc_any.should().is_instance_of::<u32>();
        arc_any_send.should().is_instance_of::<u32>();
        arc_any_send_sync.should().is_instance_of::<u32>();
    }
}
