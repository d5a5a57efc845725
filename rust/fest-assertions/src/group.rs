use crate::{error::FailureKind, formatting::Unquoted, GenericAssert};
use std::{
    borrow::Borrow,
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque},
    fmt::Debug,
};

/// A value with a countable number of elements.
///
/// `NAME` is how failure messages call the group: `list` for [`Vec`],
/// `array` for arrays and slices, `collection` for other sequences and sets,
/// `map` for maps and `string` for text (whose size is its number of
/// `char`s).
pub trait Group {
    const NAME: &'static str;

    fn size(&self) -> usize;
}

/// A [`Group`] whose elements can be visited one by one.
pub trait ItemGroup: Group {
    type Item;

    fn items(&self) -> Box<dyn Iterator<Item = &Self::Item> + '_>;
}

impl<G: Group + ?Sized> Group for &G {
    const NAME: &'static str = G::NAME;

    fn size(&self) -> usize {
        (**self).size()
    }
}

impl<G: ItemGroup + ?Sized> ItemGroup for &G {
    type Item = G::Item;

    fn items(&self) -> Box<dyn Iterator<Item = &Self::Item> + '_> {
        (**self).items()
    }
}

impl<G: Group + ?Sized> Group for Box<G> {
    const NAME: &'static str = G::NAME;

    fn size(&self) -> usize {
        (**self).size()
    }
}

impl<G: ItemGroup + ?Sized> ItemGroup for Box<G> {
    type Item = G::Item;

    fn items(&self) -> Box<dyn Iterator<Item = &Self::Item> + '_> {
        (**self).items()
    }
}

macro_rules! item_group {
    ($name:literal, [$($generics:tt)*], $group:ty) => {
        impl<$($generics)*> Group for $group {
            const NAME: &'static str = $name;

            fn size(&self) -> usize {
                self.len()
            }
        }

        impl<$($generics)*> ItemGroup for $group {
            type Item = T;

            fn items(&self) -> Box<dyn Iterator<Item = &T> + '_> {
                Box::new(self.iter())
            }
        }
    };
}

item_group!("array", [T], [T]);
item_group!("array", [T, const N: usize], [T; N]);
item_group!("list", [T], Vec<T>);
item_group!("collection", [T], VecDeque<T>);
item_group!("collection", [T], LinkedList<T>);
item_group!("collection", [T, S], HashSet<T, S>);
item_group!("collection", [T], BTreeSet<T>);

impl<K, V, S> Group for HashMap<K, V, S> {
    const NAME: &'static str = "map";

    fn size(&self) -> usize {
        self.len()
    }
}

impl<K, V> Group for BTreeMap<K, V> {
    const NAME: &'static str = "map";

    fn size(&self) -> usize {
        self.len()
    }
}

impl Group for str {
    const NAME: &'static str = "string";

    fn size(&self) -> usize {
        self.chars().count()
    }
}

impl Group for String {
    const NAME: &'static str = "string";

    fn size(&self) -> usize {
        self.as_str().size()
    }
}

/// Emptiness and size assertions for any [`Group`].
///
/// ### Examples
/// ```
/// use fest_assertions::*;
/// use std::collections::HashMap;
///
/// assert_that(vec![1, 2, 3]).is_not_empty().has_size(3);
/// assert_that(Vec::<u8>::new()).is_empty();
/// assert_that("héllo").has_size(5);
/// assert_that(HashMap::<u8, u8>::new()).is_null_or_empty();
/// assert_that_nullable(None::<Vec<u8>>).is_null_or_empty();
///
/// should_fail_with_exact_message!(
///     assert_that([1, 2]).described_as("pair").has_size(3),
///     "[pair] expected size:<3> but was size:<2> for array:<[1, 2]>"
/// );
/// ```
pub trait GroupAssertions {
    fn is_empty(self) -> Self;
    fn is_not_empty(self) -> Self;
    fn is_null_or_empty(self) -> Self;
    fn has_size(self, expected: usize) -> Self;
}

impl<G: Group + Debug> GroupAssertions for GenericAssert<G> {
    fn is_empty(self) -> Self {
        let actual = self.actual_or_fail();

        if actual.size() != 0 {
            self.failure(FailureKind::Emptiness)
                .fail("expecting empty {}, but was:<{}>", &[&Unquoted(G::NAME), actual]);
        }

        self
    }

    fn is_not_empty(self) -> Self {
        if self.actual_or_fail().size() == 0 {
            self.failure(FailureKind::Emptiness)
                .fail("expecting a non-empty {}, but it was empty", &[&Unquoted(G::NAME)]);
        }

        self
    }

    fn is_null_or_empty(self) -> Self {
        if let Some(actual) = self.actual() {
            if actual.size() != 0 {
                self.failure(FailureKind::Emptiness)
                    .fail("expecting a null or empty {}, but was:<{}>", &[&Unquoted(G::NAME), actual]);
            }
        }

        self
    }

    fn has_size(self, expected: usize) -> Self {
        let actual = self.actual_or_fail();
        let size = actual.size();

        if size != expected {
            self.failure(FailureKind::Emptiness).fail(
                "expected size:<{}> but was size:<{}> for {}:<{}>",
                &[&expected, &size, &Unquoted(G::NAME), actual],
            );
        }

        self
    }
}

/// Element assertions for an [`ItemGroup`] whose items can be compared.
///
/// Passing no values to `contains`, `contains_only` or `excludes` is an API
/// misuse and raises an [`AssertionError::IllegalArgument`](crate::AssertionError::IllegalArgument).
///
/// ### Examples
/// ```
/// use fest_assertions::*;
///
/// assert_that(vec![1, 2, 3])
///     .contains([3, 1])
///     .contains_only(vec![1, 2, 3])
///     .excludes(&[4, 5])
///     .does_not_have_duplicates();
///
/// should_fail_with_exact_message!(
///     assert_that(vec![1, 2]).contains([2, 5]),
///     "<[1, 2]> does not contain element(s):<[5]>"
/// );
/// ```
pub trait ItemGroupAssertions<T> {
    fn contains<I>(self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Borrow<T>;

    /// Every element is one of `values`, and every value is an element.
    fn contains_only<I>(self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Borrow<T>;

    fn excludes<I>(self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Borrow<T>;

    fn does_not_have_duplicates(self) -> Self;
}

impl<G, T> GenericAssert<G>
where
    G: ItemGroup<Item = T>,
    T: PartialEq,
{
    fn required_values<I>(&self, values: I) -> Vec<I::Item>
    where I: IntoIterator {
        let values: Vec<I::Item> = values.into_iter().collect();

        if values.is_empty() {
            self.failure(FailureKind::Containment)
                .illegal_argument("the given array of values should not be empty", &[]);
        }

        values
    }

    fn holds(actual: &G, value: &T) -> bool {
        actual.items().any(|item| item == value)
    }
}

impl<G, T> ItemGroupAssertions<T> for GenericAssert<G>
where
    G: ItemGroup<Item = T> + Debug,
    T: PartialEq + Debug,
{
    fn contains<I>(self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        let actual = self.actual_or_fail();
        let values = self.required_values(values);
        let missing: Vec<&T> = values
            .iter()
            .map(Borrow::<T>::borrow)
            .filter(|value| !Self::holds(actual, value))
            .collect();

        if !missing.is_empty() {
            self.failure(FailureKind::Containment)
                .fail("<{}> does not contain element(s):<{}>", &[actual, &missing]);
        }

        self
    }

    fn contains_only<I>(self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        self.actual_or_fail();
        let values = self.required_values(values);
        let values: Vec<&T> = values.iter().map(Borrow::<T>::borrow).collect();
        let this = self.contains(values.iter().copied());

        let actual = this.actual_or_fail();
        let extra: Vec<&T> = actual.items().filter(|item| !values.contains(item)).collect();

        if !extra.is_empty() {
            this.failure(FailureKind::Containment).fail(
                "unexpected element(s):<{}> in {}:<{}>",
                &[&extra, &Unquoted(G::NAME), actual],
            );
        }

        this
    }

    fn excludes<I>(self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        let actual = self.actual_or_fail();
        let values = self.required_values(values);
        let found: Vec<&T> = values
            .iter()
            .map(Borrow::<T>::borrow)
            .filter(|value| Self::holds(actual, value))
            .collect();

        if !found.is_empty() {
            self.failure(FailureKind::Containment)
                .fail("<{}> does not exclude element(s):<{}>", &[actual, &found]);
        }

        self
    }

    fn does_not_have_duplicates(self) -> Self {
        let actual = self.actual_or_fail();
        let mut seen: Vec<&T> = Vec::new();
        let mut duplicates: Vec<&T> = Vec::new();

        for item in actual.items() {
            if !seen.contains(&item) {
                seen.push(item);
            } else if !duplicates.contains(&item) {
                duplicates.push(item);
            }
        }

        if !duplicates.is_empty() {
            self.failure(FailureKind::Containment)
                .fail("<{}> contains duplicate(s):<{}>", &[actual, &duplicates]);
        }

        self
    }
}
