//! Stable ascending sorts keyed by a function or a record property.
//!
//! Both sorts compute every key once, merge-sort an index permutation, then
//! clone the input into the new order. The input is never reordered.
//!
//! Keys only need `PartialOrd`. A pair of keys without an ordering (a `NaN`,
//! for instance) is reported as [`CollectError::Incomparable`] instead of
//! being silently placed somewhere.

use std::cmp::Ordering;

use crate::error::{CollectError, Result};
use crate::traverse::Record;
use crate::transform::map;

/// Returns a copy of `sequence` sorted ascending by `key(element)`.
///
/// Elements with equal keys keep their input order.
///
/// # Errors
/// [`CollectError::Incomparable`] if two keys cannot be ordered.
///
/// # Examples
/// ```
/// use u_collect::sort_by;
/// let words = ["pear", "fig", "apple", "kiwi"];
/// let sorted = sort_by(&words, |w| w.len()).unwrap();
/// assert_eq!(sorted, vec!["fig", "pear", "kiwi", "apple"]);
/// ```
pub fn sort_by<T, K, F>(sequence: &[T], key: F) -> Result<Vec<T>>
where
    T: Clone,
    K: PartialOrd,
    F: FnMut(&T) -> K,
{
    let keys = map(sequence, key);
    let order = stable_order(&keys)?;
    Ok(map(&order, |&i| sequence[i].clone()))
}

/// Returns a copy of `records` sorted ascending by the value of `property`.
///
/// # Errors
/// - [`CollectError::MissingProperty`] if a record lacks `property`.
/// - [`CollectError::Incomparable`] if two property values cannot be ordered.
///
/// # Examples
/// ```
/// use u_collect::sort_by_property;
/// use std::collections::HashMap;
///
/// let rows: Vec<HashMap<String, i32>> = [3, 1, 2]
///     .iter()
///     .map(|n| HashMap::from([("n".to_string(), *n)]))
///     .collect();
/// let sorted = sort_by_property(&rows, "n").unwrap();
/// let ns: Vec<i32> = sorted.iter().map(|r| r["n"]).collect();
/// assert_eq!(ns, vec![1, 2, 3]);
/// ```
pub fn sort_by_property<R>(records: &[R], property: &str) -> Result<Vec<R>>
where
    R: Record + Clone,
    R::Value: PartialOrd,
{
    let mut keys = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        let key = record
            .property(property)
            .ok_or_else(|| CollectError::MissingProperty {
                index,
                property: property.to_string(),
            })?;
        keys.push(key);
    }
    let order = stable_order(&keys)?;
    Ok(map(&order, |&i| records[i].clone()))
}

/// Index permutation that sorts `keys` ascending, ties in input order.
fn stable_order<K: PartialOrd>(keys: &[K]) -> Result<Vec<usize>> {
    // Input neighbours are checked first so the reported pair is the
    // earliest one when it is adjacent.
    for (i, pair) in keys.windows(2).enumerate() {
        if pair[0].partial_cmp(&pair[1]).is_none() {
            return Err(CollectError::Incomparable {
                left: i,
                right: i + 1,
            });
        }
    }

    let mut order: Vec<usize> = (0..keys.len()).collect();
    let mut scratch = order.clone();
    merge_sort(keys, &mut order, &mut scratch)?;
    Ok(order)
}

/// Top-down merge sort of `order` by `keys`, stopping at the first pair
/// without an ordering. `scratch` must be as long as `order`.
fn merge_sort<K: PartialOrd>(
    keys: &[K],
    order: &mut [usize],
    scratch: &mut [usize],
) -> Result<()> {
    let n = order.len();
    if n <= 1 {
        return Ok(());
    }
    let mid = n / 2;
    {
        let (left, right) = order.split_at_mut(mid);
        let (left_scratch, right_scratch) = scratch.split_at_mut(mid);
        merge_sort(keys, left, left_scratch)?;
        merge_sort(keys, right, right_scratch)?;
    }

    scratch.copy_from_slice(order);
    let (left, right) = scratch.split_at(mid);
    let (mut i, mut j) = (0, 0);
    for slot in order.iter_mut() {
        // Left wins ties, which keeps equal keys in input order.
        let take_left = if i == left.len() {
            false
        } else if j == right.len() {
            true
        } else {
            let (a, b) = (left[i], right[j]);
            match keys[b].partial_cmp(&keys[a]) {
                Some(Ordering::Less) => false,
                Some(_) => true,
                None => {
                    return Err(CollectError::Incomparable {
                        left: a.min(b),
                        right: a.max(b),
                    })
                }
            }
        };
        if take_left {
            *slot = left[i];
            i += 1;
        } else {
            *slot = right[j];
            j += 1;
        }
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
