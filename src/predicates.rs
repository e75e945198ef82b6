//! Membership tests and predicate-driven filtering.
//!
//! Every function here is a fold over [`Container::each`], so sequences and
//! keyed maps are accepted alike. Filtering functions return a fresh `Vec`
//! in traversal order and never touch their input.

use crate::traverse::Container;

/// Boolean coercion for the predicate-less form of [`any_truthy`].
///
/// `false`, numeric zero, `NaN`, the empty string, `None` and `()` are
/// falsy. Everything else is truthy.
pub trait Truthy {
    /// Returns `true` if the value counts as truthy.
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! impl_truthy_int {
    ($($t:ty),*) => {
        $(impl Truthy for $t {
            fn is_truthy(&self) -> bool {
                *self != 0
            }
        })*
    };
}

impl_truthy_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Truthy for f32 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for () {
    fn is_truthy(&self) -> bool {
        false
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        matches!(self, Some(value) if value.is_truthy())
    }
}

/// Returns `true` if any element equals `target`.
///
/// # Examples
/// ```
/// use u_collect::contains;
/// assert!(contains(&[1, 2, 3], &2));
/// assert!(!contains(&[1, 2, 3], &4));
/// ```
pub fn contains<C>(container: &C, target: &C::Item) -> bool
where
    C: Container + ?Sized,
    C::Item: PartialEq,
{
    let mut found = false;
    container.each(|value, _, _| {
        if value == target {
            found = true;
        }
    });
    found
}

/// Returns the elements for which `predicate` holds, in traversal order.
///
/// # Examples
/// ```
/// use u_collect::select;
/// let evens = select(&[1, 2, 3, 4, 5, 6], |n| n % 2 == 0);
/// assert_eq!(evens, vec![2, 4, 6]);
/// ```
pub fn select<C, P>(container: &C, mut predicate: P) -> Vec<C::Item>
where
    C: Container + ?Sized,
    C::Item: Clone,
    P: FnMut(&C::Item) -> bool,
{
    let mut selected = Vec::new();
    container.each(|value, _, _| {
        if predicate(value) {
            selected.push(value.clone());
        }
    });
    selected
}

/// Returns the elements for which `predicate` does not hold.
///
/// # Examples
/// ```
/// use u_collect::reject;
/// let odds = reject(&[1, 2, 3, 4, 5, 6], |n| n % 2 == 0);
/// assert_eq!(odds, vec![1, 3, 5]);
/// ```
pub fn reject<C, P>(container: &C, mut predicate: P) -> Vec<C::Item>
where
    C: Container + ?Sized,
    C::Item: Clone,
    P: FnMut(&C::Item) -> bool,
{
    select(container, |value| !predicate(value))
}

/// Returns `true` if every element satisfies `predicate`.
///
/// Counts the matching elements and compares against the container length,
/// so an empty container always satisfies `every`.
///
/// # Examples
/// ```
/// use u_collect::every;
/// assert!(every(&[2, 4, 6], |n| n % 2 == 0));
/// assert!(!every(&[2, 3, 6], |n| n % 2 == 0));
/// assert!(every(&Vec::<i32>::new(), |_| false));
/// ```
pub fn every<C, P>(container: &C, mut predicate: P) -> bool
where
    C: Container + ?Sized,
    P: FnMut(&C::Item) -> bool,
{
    let mut passed = 0;
    container.each(|value, _, _| {
        if predicate(value) {
            passed += 1;
        }
    });
    passed == container.len()
}

/// Returns `true` if at least one element satisfies `predicate`.
///
/// # Examples
/// ```
/// use u_collect::any;
/// assert!(any(&[1, 2, 3], |n| *n > 2));
/// assert!(!any(&Vec::<i32>::new(), |_| true));
/// ```
pub fn any<C, P>(container: &C, mut predicate: P) -> bool
where
    C: Container + ?Sized,
    P: FnMut(&C::Item) -> bool,
{
    let mut matched = false;
    container.each(|value, _, _| {
        if !matched && predicate(value) {
            matched = true;
        }
    });
    matched
}

/// Returns `true` if at least one element is [`Truthy`].
///
/// # Examples
/// ```
/// use u_collect::any_truthy;
/// assert!(any_truthy(&[0, 0, 3]));
/// assert!(!any_truthy(&["", ""]));
/// assert!(!any_truthy(&[None::<i32>, Some(0)]));
/// ```
pub fn any_truthy<C>(container: &C) -> bool
where
    C: Container + ?Sized,
    C::Item: Truthy,
{
    any(container, |value| value.is_truthy())
}

// ============================================================================
// Tests
// ============================================================================


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use super::any;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn select_reject_partition(
            data in proptest::collection::vec(-100_i32..100, 0..50),
            pivot in -100_i32..100,
        ) {
            let kept = select(&data, |n| *n < pivot);
            let dropped = reject(&data, |n| *n < pivot);
            prop_assert_eq!(kept.len() + dropped.len(), data.len());
            prop_assert!(kept.iter().all(|n| *n < pivot));
            prop_assert!(dropped.iter().all(|n| *n >= pivot));
        }

        #[test]
        fn every_and_any_are_dual(
            data in proptest::collection::vec(-100_i32..100, 0..50),
            pivot in -100_i32..100,
        ) {
            let all_small = every(&data, |n| *n < pivot);
            let some_big = any(&data, |n| *n >= pivot);
            prop_assert_eq!(all_small, !some_big);
        }

        #[test]
        fn contains_matches_std(
            data in proptest::collection::vec(0_i32..20, 0..30),
            target in 0_i32..20,
        ) {
            prop_assert_eq!(contains(&data, &target), data.contains(&target));
        }
    }
}
