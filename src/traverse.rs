//! The traversal engine shared by every collection operation.
//!
//! A [`Container`] is either an *ordered sequence* (slices, `Vec`, arrays,
//! `VecDeque`) keyed by index, or a *keyed map* (`HashMap`/`BTreeMap` with
//! `String` keys) keyed by `&str`. Each container kind provides exactly one
//! traversal; the predicate, set, and transformation layers are written
//! against the trait and never branch on the container kind.
//!
//! # Ordering
//!
//! - Sequences are visited strictly index-ascending, `0..len`.
//! - Maps are visited once per key. `HashMap` order is unspecified;
//!   `BTreeMap` order is ascending by key.

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::hash::BuildHasher;

/// A collection that can be visited element by element.
///
/// # Examples
/// ```
/// use u_collect::traverse::Container;
/// use std::collections::HashMap;
///
/// let mut seen = Vec::new();
/// [10, 20, 30].each(|value, index, _| seen.push((index, *value)));
/// assert_eq!(seen, vec![(0, 10), (1, 20), (2, 30)]);
///
/// let mut ages = HashMap::new();
/// ages.insert("ann".to_string(), 31);
/// let mut keys = Vec::new();
/// ages.each(|_, key, _| keys.push(key.to_string()));
/// assert_eq!(keys, vec!["ann".to_string()]);
/// ```
pub trait Container {
    /// Element type.
    type Item;

    /// Key handed to the iterator: an index for sequences, a key for maps.
    type Key<'a>: Copy
    where
        Self: 'a;

    /// Calls `iterator(value, key, container)` once for every element.
    fn each<'a, F>(&'a self, iterator: F)
    where
        F: FnMut(&'a Self::Item, Self::Key<'a>, &'a Self);

    /// Number of elements `each` visits.
    fn len(&self) -> usize;

    /// Returns `true` if `each` visits nothing.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Free-function form of [`Container::each`].
///
/// # Examples
/// ```
/// use u_collect::each;
/// let mut total = 0;
/// each(&vec![1, 2, 3], |v, _, _| total += v);
/// assert_eq!(total, 6);
/// ```
pub fn each<'a, C, F>(container: &'a C, iterator: F)
where
    C: Container + ?Sized,
    F: FnMut(&'a C::Item, C::Key<'a>, &'a C),
{
    container.each(iterator);
}

impl<T> Container for [T] {
    type Item = T;
    type Key<'a>
        = usize
    where
        Self: 'a;

    fn each<'a, F>(&'a self, mut iterator: F)
    where
        F: FnMut(&'a Self::Item, Self::Key<'a>, &'a Self),
    {
        for (i, value) in self.iter().enumerate() {
            iterator(value, i, self);
        }
    }

    fn len(&self) -> usize {
        <[T]>::len(self)
    }
}

impl<T> Container for Vec<T> {
    type Item = T;
    type Key<'a>
        = usize
    where
        Self: 'a;

    fn each<'a, F>(&'a self, mut iterator: F)
    where
        F: FnMut(&'a Self::Item, Self::Key<'a>, &'a Self),
    {
        for (i, value) in self.iter().enumerate() {
            iterator(value, i, self);
        }
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl<T, const N: usize> Container for [T; N] {
    type Item = T;
    type Key<'a>
        = usize
    where
        Self: 'a;

    fn each<'a, F>(&'a self, mut iterator: F)
    where
        F: FnMut(&'a Self::Item, Self::Key<'a>, &'a Self),
    {
        for (i, value) in self.iter().enumerate() {
            iterator(value, i, self);
        }
    }

    fn len(&self) -> usize {
        N
    }
}

impl<T> Container for VecDeque<T> {
    type Item = T;
    type Key<'a>
        = usize
    where
        Self: 'a;

    fn each<'a, F>(&'a self, mut iterator: F)
    where
        F: FnMut(&'a Self::Item, Self::Key<'a>, &'a Self),
    {
        for (i, value) in self.iter().enumerate() {
            iterator(value, i, self);
        }
    }

    fn len(&self) -> usize {
        VecDeque::len(self)
    }
}

impl<V, S> Container for HashMap<String, V, S> {
    type Item = V;
    type Key<'a>
        = &'a str
    where
        Self: 'a;

    fn each<'a, F>(&'a self, mut iterator: F)
    where
        F: FnMut(&'a Self::Item, Self::Key<'a>, &'a Self),
    {
        for (key, value) in self.iter() {
            iterator(value, key.as_str(), self);
        }
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }
}

impl<V> Container for BTreeMap<String, V> {
    type Item = V;
    type Key<'a>
        = &'a str
    where
        Self: 'a;

    fn each<'a, F>(&'a self, mut iterator: F)
    where
        F: FnMut(&'a Self::Item, Self::Key<'a>, &'a Self),
    {
        for (key, value) in self.iter() {
            iterator(value, key.as_str(), self);
        }
    }

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }
}

/// A keyed map addressed by property name.
///
/// Used by the operations that treat map entries as named fields:
/// [`pluck`](crate::transform::pluck),
/// [`sort_by_property`](crate::sorting::sort_by_property),
/// [`extend`](crate::objects::extend) and
/// [`defaults`](crate::objects::defaults).
pub trait Record {
    /// Property value type.
    type Value;

    /// Returns the value stored under `name`, if the record owns it.
    fn property(&self, name: &str) -> Option<&Self::Value>;

    /// Stores `value` under `name`, replacing any previous value.
    fn set_property(&mut self, name: &str, value: Self::Value);

    /// Visits every owned property once, through the record's traversal.
    fn for_each_property<F>(&self, visit: F)
    where
        F: FnMut(&str, &Self::Value);

    /// Returns `true` if the record owns `name`.
    fn has_property(&self, name: &str) -> bool {
        self.property(name).is_some()
    }
}

impl<V, S: BuildHasher> Record for HashMap<String, V, S> {
    type Value = V;

    fn property(&self, name: &str) -> Option<&V> {
        self.get(name)
    }

    fn set_property(&mut self, name: &str, value: V) {
        self.insert(name.to_string(), value);
    }

    fn for_each_property<F>(&self, mut visit: F)
    where
        F: FnMut(&str, &V),
    {
        Container::each(self, |value, key, _| visit(key, value));
    }
}

impl<V> Record for BTreeMap<String, V> {
    type Value = V;

    fn property(&self, name: &str) -> Option<&V> {
        self.get(name)
    }

    fn set_property(&mut self, name: &str, value: V) {
        self.insert(name.to_string(), value);
    }

    fn for_each_property<F>(&self, mut visit: F)
    where
        F: FnMut(&str, &V),
    {
        Container::each(self, |value, key, _| visit(key, value));
    }
}

// ============================================================================
// Tests
// ============================================================================


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn each_visits_indices_in_order(
            data in proptest::collection::vec(any::<i32>(), 0..50),
        ) {
            let mut keys = Vec::new();
            let mut values = Vec::new();
            each(&data, |v, k, _| {
                keys.push(k);
                values.push(*v);
            });
            prop_assert_eq!(keys, (0..data.len()).collect::<Vec<_>>());
            prop_assert_eq!(values, data);
        }

        #[test]
        fn each_visits_all_map_keys(
            map in proptest::collection::hash_map("[a-z]{1,6}", any::<i32>(), 0..30),
        ) {
            let mut count = 0;
            let mut total: i64 = 0;
            each(&map, |v, _, _| {
                count += 1;
                total += i64::from(*v);
            });
            prop_assert_eq!(count, map.len());
            prop_assert_eq!(total, map.values().map(|v| i64::from(*v)).sum::<i64>());
        }
    }
}
