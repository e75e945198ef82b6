//! Deduplication and set algebra over sequences.
//!
//! Equality is `PartialEq`, so element types need not be `Hash` or `Ord`.
//! Membership checks go through [`contains`], which makes these operations
//! O(n·m); they target the small inputs typical of utility code.
//!
//! Results are deduplicated and keep first-occurrence order. For
//! [`intersection`] that order is the order of the first input sequence.

use crate::predicates::{contains, every, select};
use crate::traverse::Container;

/// Returns the distinct elements of `sequence` in first-occurrence order.
///
/// # Examples
/// ```
/// use u_collect::uniq;
/// assert_eq!(uniq(&[1, 2, 2, 3, 1]), vec![1, 2, 3]);
/// ```
pub fn uniq<C>(sequence: &C) -> Vec<C::Item>
where
    C: Container + ?Sized,
    C::Item: PartialEq + Clone,
{
    let mut distinct: Vec<C::Item> = Vec::new();
    sequence.each(|value, _, _| {
        if !contains(&distinct, value) {
            distinct.push(value.clone());
        }
    });
    distinct
}

/// Returns the elements present in every one of `sequences`, each once.
///
/// An element qualifies when the number of inputs containing it, after
/// per-input deduplication, equals the number of inputs. With no inputs the
/// result is empty.
///
/// # Examples
/// ```
/// use u_collect::intersection;
/// let common = intersection(&[&[1, 2, 3][..], &[2, 3, 4][..]]);
/// assert_eq!(common, vec![2, 3]);
/// ```
pub fn intersection<T>(sequences: &[&[T]]) -> Vec<T>
where
    T: PartialEq + Clone,
{
    let Some((head, rest)) = sequences.split_first() else {
        return Vec::new();
    };
    let distinct_rest: Vec<Vec<T>> = rest.iter().map(|s| uniq(*s)).collect();
    select(&uniq(*head), |value| {
        every(&distinct_rest, |other| contains(other, value))
    })
}

/// Returns the elements of `first` that appear in none of `others`.
///
/// Each surviving element appears once, even when `first` repeats it.
///
/// # Examples
/// ```
/// use u_collect::difference;
/// let only_first = difference(&[1, 2, 3, 4, 1], &[&[2, 4][..]]);
/// assert_eq!(only_first, vec![1, 3]);
/// ```
pub fn difference<T>(first: &[T], others: &[&[T]]) -> Vec<T>
where
    T: PartialEq + Clone,
{
    select(&uniq(first), |value| {
        !others.iter().any(|other| contains(*other, value))
    })
}

// ============================================================================
// Tests
// ============================================================================
