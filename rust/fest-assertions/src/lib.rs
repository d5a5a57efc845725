//! # Fluent Assertions Testing in Rust
//!
//! fest-assertions is an assertion library designed to make your assertions read like plain English.
//! Every assertion starts from the value under test, the *actual* value, and chains checks on it.
//! A check that does not hold fails the test with a message that shows what was expected and what
//! was found, optionally prefixed by a description naming the value.
//!
//! Methods available to assert with are dependent upon the type of the actual value. There is also
//! an extension point to write customized asserts on specific types.
//!
//! ## Usage
//!
//! To quickly start using assertions, `use` the fest_assertions root module:
//!
//! ```rust
//! use fest_assertions::*;
//! ```
//!
//! ## Write Test with fest-assertions
//!
//! Start an assertion with [`assert_that`], or call [`Should::should`] on the actual value.
//!
//! ```rust
//! use fest_assertions::*;
//!
//! #[test]
//! pub fn should_be_the_correct_string() {
//!     let actual = "Hello World!";
//!
//!     // this call will consume actual
//!     assert_that(actual).starts_with("H");
//! }
//! ```
//!
//! But for the purpose of exploration, let's break the actual value. We'll change "Hello World!"
//! to be "ello World!".
//!
//! ```rust
//! use fest_assertions::*;
//!
//! #[test]
//! pub fn should_be_the_correct_string() {
//!     let actual = "ello World!";
//!
//!     assert_that(actual).described_as("greeting").starts_with("H");
//! }
//! ```
//!
//! This time, we see that the test fails, and we also get some output from our assertion to tell
//! us what it was, and what it was expected to be:
//!
//! ```bash
//!     [greeting] <"ello World!"> should start with:<"H">
//! ```
//!
//! ## Basic Use Cases
//!
//! Every assertion returns the assertion it was called on, so checks chain on the same value.
//!
//! ```
//! use fest_assertions::*;
//!
//! let actual = 3 + 5;
//! actual.should().is_equal_to(8).is_not_equal_to(9).is_greater_than(7);
//!
//! assert_that("Hello world")
//!     .starts_with("H")
//!     .ends_with("d")
//!     .has_size(11);
//! ```
//!
//! A value which might be missing is asserted through [`assert_that_nullable`]; `None` is the
//! null value.
//!
//! ```
//! use fest_assertions::*;
//!
//! assert_that_nullable(None::<String>).is_null();
//! assert_that_nullable(Some(vec![1])).is_not_null().has_size(1);
//! ```
//!
//! **Note**: [`Should::should`] will consume the actual value. If you want to continue using it,
//! you could pass in a reference.
//!
//! ```
//! use fest_assertions::*;
//!
//! let actual = String::from("Hello world");
//! (&actual).should().starts_with("H");
//! assert_that(&actual).is_same_as(&actual);
//! ```
//!
//! ## Failures
//!
//! A failure is a panic whose payload is an [`AssertionError`]. Text comparisons fail with an
//! [`AssertionError::Comparison`] carrying both texts, API misuse (e.g. a null condition) with an
//! [`AssertionError::IllegalArgument`]. [`expect_failure`] captures the error for inspection.
//!
//! ```
//! use fest_assertions::*;
//!
//! let error = expect_failure(|| assert_that("c,d").is_equal_to("a,b"));
//! let comparison = error.as_comparison().unwrap();
//! assert_eq!((comparison.expected(), comparison.actual()), ("a,b", "c,d"));
//!
//! should_fail_with_exact_message!(
//!     assert_that(1).described_as("A Test").is_equal_to(2),
//!     "[A Test] expected:<2> but was:<1>"
//! );
//! ```
//!
//! ## More examples
//!
//! Additional assertions are provided for different data structure. Some examples below.
//! For more details refer to the each `*Assertions` trait.
//!
//! ```rust
//! use fest_assertions::*;
//! use std::collections::HashMap;
//!
//! // use described conditions to assert the value
//! let actual = "hello";
//! actual
//!     .should()
//!     .is_equal_to("hello")
//!     .satisfies(Condition::new("lower case", |s: &&str| s.chars().all(char::is_lowercase)))
//!     .is_not_empty();
//!
//! // working with boolean
//! true.should().is_true();
//!
//! // working with collections
//! vec![1, 2, 3].should().has_size(3).contains([2]).does_not_have_duplicates();
//!
//! // working with numbers
//! 3.should().is_greater_than(2).is_less_than_or_equal_to(3).is_positive();
//! 0.1f64.should().is_close_to(0.10001, 0.001);
//!
//! // working with hashmap
//! let mut actual = HashMap::new();
//! actual.insert(3, "three");
//! actual.should().contains_entry(3, "three").has_size(1);
//!
//! // working with closures
//! assert_that(|| panic!("test")).panics().with_message("test");
//!
//! // working with enum types
//! // in this case, you need to add #[derive(EnumAssertions)] on the enum type,
//! // the derive macro here will create a trait MyEnumAssertions in the same namespace
//! // and same visibility. Use the assertions in your test to enable it.
//! #[derive(EnumAssertions, Debug)]
//! pub enum MyEnum {
//!     First,
//!     Second(String),
//! }
//!
//! // if your tests are in different module, include 'use MyEnumAssertions'
//! MyEnum::Second("Hello".to_string()).should().is_second();
//! ```

extern crate self as fest_assertions;

/// Assertions on `enum` types. Variants of `enum` types cannot be retrieved
/// dynamically. This derive macro enables building a dedicated Assertions
/// trait for the specific `enum` type, with one `is_<variant>()` method per
/// variant.
///
/// ### Examples
/// ```
/// pub mod my_enum {
///     use fest_assertions::EnumAssertions;
///
///     // the derive macro here will create a trait MyEnumAssertions in the same namespace
///     // and same visibility. Use the assertions in your test to enable it.
///     #[derive(EnumAssertions, Debug)]
///     pub enum MyEnum {
///         First,
///         Second(String),
///         Third(u32, u32, bool),
///         Fourth { apple: f32, banana: u64, orange: String },
///     }
/// }
///
/// use fest_assertions::*;
/// use my_enum::{MyEnum, MyEnumAssertions};
///
/// // test the enum is of a specified variant
/// MyEnum::First.should().is_first();
/// MyEnum::Third(3, 5, true).should().is_third();
///
/// should_fail_with_exact_message!(
///     MyEnum::Second("Hello".to_string()).should().is_first(),
///     "expected:<MyEnum::First> but was:<Second(\"Hello\")>"
/// );
/// ```
#[cfg(feature = "derive")]
pub use fest_assertions_derive::EnumAssertions;

pub use any::{AnyAssertions, ToAny, TypeDescriptor};
pub use boolean::BooleanAssertions;
pub use call::{FnAssertions, PanicCauseConstraint};
pub use character::CharAssertions;
pub use comparison::ComparisonFailureFactory;
pub use condition::Condition;
pub use description::{BasicDescription, Description, IntoDescription, LazyDescription};
pub use error::{AssertionError, ComparisonFailure, ExternalError, FailureKind};
pub use fail::{AssertionFailure, Fail};
pub use group::{Group, GroupAssertions, ItemGroup, ItemGroupAssertions};
pub use map::MapAssertions;
pub use numeric::{ComparableAssertions, FloatAssertions, NumberAssertions};
pub use path::PathAssertions;
pub use should::{assert_that, assert_that_nullable, GenericAssert, Identity, Should};
pub use string::StringAssertions;
pub use throwable::ThrowableAssertions;
pub use utils::expect_failure;

#[macro_use]
pub mod utils;
pub mod formatting;

mod any;
mod boolean;
mod call;
mod character;
mod comparison;
mod condition;
mod description;
#[cfg(all(test, feature = "derive"))]
mod enum_tests;
mod error;
mod fail;
mod group;
mod map;
mod numeric;
mod path;
mod should;
mod string;
mod throwable;
