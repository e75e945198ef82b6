//! Fluent wrapper over an owned sequence.
//!
//! [`chain`] lifts a sequence into a [`Chain`], whose methods forward to the
//! free functions of this crate and return a new `Chain`, so a pipeline
//! reads left to right:
//!
//! ```
//! use u_collect::chain;
//!
//! let total = chain([5, 3, 8, 3, 1])
//!     .uniq()
//!     .select(|n| *n > 2)
//!     .map(|n| n * 10)
//!     .reduce(|acc, n| acc + n, 0);
//! assert_eq!(total, 160);
//! ```

use rand::Rng;

use crate::error::Result;
use crate::predicates::{any, contains, every, reject, select};
use crate::random::shuffle_in_place;
use crate::sets::{difference, uniq};
use crate::sorting::sort_by;
use crate::transform::{first, first_n, flatten, last, last_n, map, pluck, reduce, Nested};
use crate::traverse::{Container, Record};

/// An owned sequence with chainable collection operations.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Chain<T> {
    items: Vec<T>,
}

/// Starts a chain over `items`.
pub fn chain<I>(items: I) -> Chain<I::Item>
where
    I: IntoIterator,
{
    Chain {
        items: items.into_iter().collect(),
    }
}

impl<T> Chain<T> {
    /// Applies `mapping` to every element.
    pub fn map<U, F>(self, mapping: F) -> Chain<U>
    where
        F: FnMut(&T) -> U,
    {
        Chain {
            items: map(&self.items, mapping),
        }
    }

    /// Shuffles the elements uniformly with `rng`.
    pub fn shuffle<R: Rng>(mut self, rng: &mut R) -> Self {
        shuffle_in_place(&mut self.items, rng);
        self
    }

    /// Folds the elements into one value starting from `initial`.
    pub fn reduce<A, F>(&self, reducer: F, initial: A) -> A
    where
        F: FnMut(A, &T) -> A,
    {
        reduce(&self.items, reducer, initial)
    }

    /// Returns `true` if every element satisfies `predicate`.
    pub fn every<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        every(&self.items, predicate)
    }

    /// Returns `true` if some element satisfies `predicate`.
    pub fn any<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        any(&self.items, predicate)
    }

    /// First element, if any.
    pub fn first(&self) -> Option<&T> {
        first(&self.items)
    }

    /// Last element, if any.
    pub fn last(&self) -> Option<&T> {
        last(&self.items)
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the chain holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Ends the chain and returns its elements.
    pub fn value(self) -> Vec<T> {
        self.items
    }
}

impl<T: Clone> Chain<T> {
    /// Keeps the first `n` elements.
    pub fn first_n(self, n: usize) -> Self {
        Chain {
            items: first_n(&self.items, n).to_vec(),
        }
    }

    /// Keeps the last `n` elements.
    pub fn last_n(self, n: usize) -> Self {
        Chain {
            items: last_n(&self.items, n).to_vec(),
        }
    }

    /// Keeps the elements satisfying `predicate`.
    pub fn select<P>(self, predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        Chain {
            items: select(&self.items, predicate),
        }
    }

    /// Drops the elements satisfying `predicate`.
    pub fn reject<P>(self, predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        Chain {
            items: reject(&self.items, predicate),
        }
    }

    /// Sorts ascending by `key`, stable on ties.
    ///
    /// # Errors
    /// See [`sort_by`](crate::sorting::sort_by).
    pub fn sort_by<K, F>(self, key: F) -> Result<Self>
    where
        K: PartialOrd,
        F: FnMut(&T) -> K,
    {
        Ok(Chain {
            items: sort_by(&self.items, key)?,
        })
    }
}

impl<T: PartialEq + Clone> Chain<T> {
    /// Returns `true` if some element equals `target`.
    pub fn contains(&self, target: &T) -> bool {
        contains(&self.items, target)
    }

    /// Removes duplicates, keeping first occurrences.
    pub fn uniq(self) -> Self {
        Chain {
            items: uniq(&self.items),
        }
    }

    /// Removes every element present in any of `others`, and duplicates.
    pub fn difference(self, others: &[&[T]]) -> Self {
        Chain {
            items: difference(&self.items, others),
        }
    }
}

impl<R> Chain<R>
where
    R: Record,
    R::Value: Clone,
{
    /// Extracts `property` from every record.
    pub fn pluck(self, property: &str) -> Chain<Option<R::Value>> {
        Chain {
            items: pluck(&self.items, property),
        }
    }
}

impl<T: Clone> Chain<Nested<T>> {
    /// Flattens nested sequences into their leaves.
    pub fn flatten(self) -> Chain<T> {
        Chain {
            items: flatten(&self.items),
        }
    }
}

impl<T> Container for Chain<T> {
    type Item = T;
    type Key<'a>
        = usize
    where
        Self: 'a;

    fn each<'a, F>(&'a self, mut iterator: F)
    where
        F: FnMut(&'a Self::Item, Self::Key<'a>, &'a Self),
    {
        self.items.each(|value, i, _| iterator(value, i, self));
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> From<Vec<T>> for Chain<T> {
    fn from(items: Vec<T>) -> Self {
        Chain { items }
    }
}

impl<T> IntoIterator for Chain<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
