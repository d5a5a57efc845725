use crate::{error::FailureKind, GenericAssert};
use std::{borrow::Borrow, collections::HashMap, fmt::Debug, hash::Hash};

/// Assertions for types implementing [`Borrow`](std::borrow::Borrow)<[`HashMap`](std::collections::HashMap)>.
///
/// Emptiness and size come from [`GroupAssertions`](crate::GroupAssertions).
///
/// ## Examples
/// ```
/// use fest_assertions::*;
/// use std::collections::HashMap;
///
/// let mut test_map = HashMap::new();
/// test_map.insert(1, "one");
///
/// // test map containing a specified key, or not
/// (&test_map).should().contains_key(1).does_not_contain_key(&2);
///
/// // test map containing a key mapped to a specified value
/// test_map.should().contains_entry(1, "one").does_not_contain_entry(1, "two").has_size(1);
/// ```
pub trait MapAssertions<K, V> {
    fn contains_key<E: Borrow<K>>(self, key: E) -> Self;
    fn does_not_contain_key<E: Borrow<K>>(self, key: E) -> Self;
    fn contains_entry<E: Borrow<K>, F: Borrow<V>>(self, key: E, value: F) -> Self;
    fn does_not_contain_entry<E: Borrow<K>, F: Borrow<V>>(self, key: E, value: F) -> Self;
}

impl<M, K, V> MapAssertions<K, V> for GenericAssert<M>
where
    M: Borrow<HashMap<K, V>> + Debug,
    K: Hash + Eq + Debug,
    V: PartialEq + Debug,
{
    fn contains_key<E: Borrow<K>>(self, key: E) -> Self {
        let actual = self.actual_or_fail();
        let key = key.borrow();

        if !actual.borrow().contains_key(key) {
            self.failure(FailureKind::Containment)
                .fail("<{}> does not contain key:<{}>", &[actual, key]);
        }

        self
    }

    fn does_not_contain_key<E: Borrow<K>>(self, key: E) -> Self {
        let actual = self.actual_or_fail();
        let key = key.borrow();

        if actual.borrow().contains_key(key) {
            self.failure(FailureKind::Containment)
                .fail("<{}> should not contain key:<{}>", &[actual, key]);
        }

        self
    }

    fn contains_entry<E: Borrow<K>, F: Borrow<V>>(self, key: E, value: F) -> Self {
        let actual = self.actual_or_fail();
        let entry = (key.borrow(), value.borrow());

        if actual.borrow().get(entry.0) != Some(entry.1) {
            self.failure(FailureKind::Containment)
                .fail("<{}> does not contain entry:<{}>", &[actual, &entry]);
        }

        self
    }

    fn does_not_contain_entry<E: Borrow<K>, F: Borrow<V>>(self, key: E, value: F) -> Self {
        let actual = self.actual_or_fail();
        let entry = (key.borrow(), value.borrow());

        if actual.borrow().get(entry.0) == Some(entry.1) {
            self.failure(FailureKind::Containment)
                .fail("<{}> should not contain entry:<{}>", &[actual, &entry]);
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use crate::*;
    use std::collections::HashMap;

    fn single_entry_map() -> HashMap<i32, &'static str> {
        let mut map = HashMap::new();
        map.insert(12, "abc");
        map
    }

    #[test]
    fn contains_key_should_allow_multiple_borrow_forms() {
        let map = single_entry_map();

        (&map).should().contains_key(12).contains_key(&12).contains_key(&mut 12);
        map.should().contains_key(12);
    }

    #[test]
    fn should_panic_if_key_is_missing() {
        should_fail_with_exact_message!(
            single_entry_map().should().contains_key(1),
            "<{12: \"abc\"}> does not contain key:<1>"
        );
        should_fail_with_exact_message!(
            single_entry_map().should().described_as("cache").does_not_contain_key(12),
            "[cache] <{12: \"abc\"}> should not contain key:<12>"
        );
    }

    #[test]
    fn contains_entry() {
        single_entry_map().should().contains_entry(12, "abc").does_not_contain_entry(12, "xyz");

        should_fail_with_exact_message!(
            single_entry_map().should().contains_entry(12, "xyz"),
            "<{12: \"abc\"}> does not contain entry:<(12, \"xyz\")>"
        );
        should_fail_with_exact_message!(
            single_entry_map().should().does_not_contain_entry(&12, &"abc"),
            "<{12: \"abc\"}> should not contain entry:<(12, \"abc\")>"
        );
    }

    #[test]
    fn map_group_assertions() {
        HashMap::<i32, i32>::new().should().is_empty();
        should_fail_with_exact_message!(
            single_entry_map().should().has_size(2),
            "expected size:<2> but was size:<1> for map:<{12: \"abc\"}>"
        );
    }
}
