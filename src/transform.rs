//! Operations that build a new sequence or value from their input.
//!
//! `map`, `pluck` and `reduce` accept any [`Container`]; the slicing
//! operations (`first`, `last`, `zip`) work on ordered sequences only.
//! Nothing here mutates its input.

use crate::traverse::{Container, Record};

/// Applies `mapping` to every element, in traversal order.
///
/// # Examples
/// ```
/// use u_collect::map;
/// assert_eq!(map(&[1, 2, 3], |n| n * 10), vec![10, 20, 30]);
/// ```
pub fn map<C, U, F>(container: &C, mut mapping: F) -> Vec<U>
where
    C: Container + ?Sized,
    F: FnMut(&C::Item) -> U,
{
    let mut mapped = Vec::with_capacity(container.len());
    container.each(|value, _, _| mapped.push(mapping(value)));
    mapped
}

/// Extracts `property` from every record.
///
/// Records lacking the property yield `None` in that position, so the
/// output always has one entry per record.
///
/// # Examples
/// ```
/// use u_collect::pluck;
/// use std::collections::HashMap;
///
/// let people: Vec<HashMap<String, u32>> = vec![
///     HashMap::from([("age".to_string(), 31)]),
///     HashMap::from([("height".to_string(), 180)]),
/// ];
/// assert_eq!(pluck(&people, "age"), vec![Some(31), None]);
/// ```
pub fn pluck<C, R>(records: &C, property: &str) -> Vec<Option<R::Value>>
where
    C: Container<Item = R> + ?Sized,
    R: Record,
    R::Value: Clone,
{
    map(records, |record| record.property(property).cloned())
}

/// Folds the container into a single value.
///
/// `reducer(accumulator, value)` is called once per element, starting from
/// `initial`. The initial value is used as given, whatever it is; an empty
/// container returns it unchanged.
///
/// # Examples
/// ```
/// use u_collect::reduce;
/// assert_eq!(reduce(&[1, 2, 3], |acc, n| acc + n, 0), 6);
/// assert_eq!(reduce(&Vec::<i32>::new(), |acc, n| acc + n, 5), 5);
/// assert_eq!(reduce(&["a", "b"], |acc, s| acc + *s, String::new()), "ab");
/// ```
pub fn reduce<C, A, F>(container: &C, mut reducer: F, initial: A) -> A
where
    C: Container + ?Sized,
    F: FnMut(A, &C::Item) -> A,
{
    let mut accumulator = Some(initial);
    container.each(|value, _, _| {
        accumulator = accumulator.take().map(|acc| reducer(acc, value));
    });
    accumulator.expect("accumulator is restored after every step")
}

/// A borrowed ordered sequence that may be absent.
///
/// Implemented for slices, arrays and `Vec`s behind a shared reference,
/// and for `Option` of any of those. `None` stands for an
/// absent sequence.
pub trait Sequence<'a, T: 'a> {
    /// The elements as one contiguous slice, or `None` when absent.
    fn into_slice(self) -> Option<&'a [T]>;
}

impl<'a, T> Sequence<'a, T> for &'a [T] {
    fn into_slice(self) -> Option<&'a [T]> {
        Some(self)
    }
}

impl<'a, T, const N: usize> Sequence<'a, T> for &'a [T; N] {
    fn into_slice(self) -> Option<&'a [T]> {
        Some(self.as_slice())
    }
}

impl<'a, T> Sequence<'a, T> for &'a Vec<T> {
    fn into_slice(self) -> Option<&'a [T]> {
        Some(self.as_slice())
    }
}

impl<'a, T: 'a, S: Sequence<'a, T>> Sequence<'a, T> for Option<S> {
    fn into_slice(self) -> Option<&'a [T]> {
        self.and_then(Sequence::into_slice)
    }
}

/// Returns the first element, or `None` for an empty or absent sequence.
///
/// # Examples
/// ```
/// use u_collect::first;
/// let data = vec![4, 5, 6];
/// assert_eq!(first(&data), Some(&4));
/// assert_eq!(data.len(), 3);
/// assert_eq!(first(None::<&[i32]>), None);
/// ```
pub fn first<'a, T: 'a, S>(sequence: S) -> Option<&'a T>
where
    S: Sequence<'a, T>,
{
    sequence.into_slice().and_then(|s| s.first())
}

/// Returns the first `min(n, len)` elements.
///
/// An absent sequence yields an empty slice.
///
/// # Examples
/// ```
/// use u_collect::first_n;
/// let data = [1, 2, 3, 4];
/// assert_eq!(first_n(&data, 2), &[1, 2]);
/// assert_eq!(first_n(&data, 10), &[1, 2, 3, 4]);
/// ```
pub fn first_n<'a, T: 'a, S>(sequence: S, n: usize) -> &'a [T]
where
    S: Sequence<'a, T>,
{
    match sequence.into_slice() {
        Some(s) => &s[..n.min(s.len())],
        None => &[],
    }
}

/// Returns the last element, or `None` for an empty or absent sequence.
///
/// # Examples
/// ```
/// use u_collect::last;
/// assert_eq!(last(&[4, 5, 6]), Some(&6));
/// ```
pub fn last<'a, T: 'a, S>(sequence: S) -> Option<&'a T>
where
    S: Sequence<'a, T>,
{
    sequence.into_slice().and_then(|s| s.last())
}

/// Returns the last `min(n, len)` elements.
///
/// An absent sequence yields an empty slice.
///
/// # Examples
/// ```
/// use u_collect::last_n;
/// let data = vec![1, 2, 3, 4];
/// assert_eq!(last_n(&data, 3), &[2, 3, 4]);
/// assert_eq!(last_n(&data, 0), &[] as &[i32]);
/// ```
pub fn last_n<'a, T: 'a, S>(sequence: S, n: usize) -> &'a [T]
where
    S: Sequence<'a, T>,
{
    match sequence.into_slice() {
        Some(s) => &s[s.len() - n.min(s.len())..],
        None => &[],
    }
}

/// A sequence whose elements are either values or further sequences.
#[derive(Debug, Clone, PartialEq)]
pub enum Nested<T> {
    /// A plain value.
    Leaf(T),
    /// A nested sequence, descended into by [`flatten`].
    Seq(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// Wraps a plain value.
    pub fn leaf(value: T) -> Self {
        Nested::Leaf(value)
    }

    /// Builds a nested sequence from its items.
    pub fn seq<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Nested<T>>,
    {
        Nested::Seq(items.into_iter().collect())
    }

    /// Maximum nesting depth. A leaf has depth 0, `[]` and `[1]` depth 1.
    pub fn depth(&self) -> usize {
        match self {
            Nested::Leaf(_) => 0,
            Nested::Seq(items) => 1 + items.iter().map(Nested::depth).max().unwrap_or(0),
        }
    }
}

/// Flattens arbitrarily nested sequences into their leaves.
///
/// Leaves come out depth-first, left to right.
///
/// # Examples
/// ```
/// use u_collect::{flatten, Nested};
/// use u_collect::Nested::Leaf;
///
/// // [1, [2, [3, [4]], 5]]
/// let nested = vec![
///     Leaf(1),
///     Nested::seq([
///         Leaf(2),
///         Nested::seq([Leaf(3), Nested::seq([Leaf(4)])]),
///         Leaf(5),
///     ]),
/// ];
/// assert_eq!(flatten(&nested), vec![1, 2, 3, 4, 5]);
/// ```
pub fn flatten<T: Clone>(nested: &[Nested<T>]) -> Vec<T> {
    let mut leaves = Vec::new();
    flatten_into(nested, &mut leaves);
    leaves
}

fn flatten_into<T: Clone>(nested: &[Nested<T>], leaves: &mut Vec<T>) {
    nested.each(|item, _, _| match item {
        Nested::Leaf(value) => leaves.push(value.clone()),
        Nested::Seq(items) => flatten_into(items, leaves),
    });
}

/// Groups the `i`-th elements of every sequence together.
///
/// The result has as many rows as the *first* sequence has elements. A
/// shorter sequence contributes `None` once it runs out; extra elements in
/// longer sequences are ignored.
///
/// # Examples
/// ```
/// use u_collect::zip;
/// let rows = zip(&[&[1, 2, 3][..], &[4, 5][..]]);
/// assert_eq!(rows, vec![
///     vec![Some(1), Some(4)],
///     vec![Some(2), Some(5)],
///     vec![Some(3), None],
/// ]);
/// ```
pub fn zip<T: Clone>(sequences: &[&[T]]) -> Vec<Vec<Option<T>>> {
    let Some(head) = sequences.first() else {
        return Vec::new();
    };
    (0..head.len())
        .map(|i| map(sequences, |s| s.get(i).cloned()))
        .collect()
}

/// Two-sequence [`zip`] for sequences of different element types.
///
/// # Examples
/// ```
/// use u_collect::zip2;
/// let pairs = zip2(&['a', 'b', 'c'], &[1, 2]);
/// assert_eq!(pairs, vec![('a', Some(1)), ('b', Some(2)), ('c', None)]);
/// ```
pub fn zip2<A: Clone, B: Clone>(left: &[A], right: &[B]) -> Vec<(A, Option<B>)> {
    let mut pairs = Vec::with_capacity(left.len());
    left.each(|value, i, _| pairs.push((value.clone(), right.get(i).cloned())));
    pairs
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeMap, HashMap};

    fn record(pairs: &[(&str, i32)]) -> HashMap<String, i32> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_map_same_length_and_order() {
        let data = vec!["a", "bb", "ccc"];
        assert_eq!(map(&data, |s| s.len()), vec![1, 2, 3]);
    }

    #[test]
    fn test_map_over_btreemap_values() {
        let mut scores = BTreeMap::new();
        scores.insert("x".to_string(), 2);
        scores.insert("y".to_string(), 3);
        assert_eq!(map(&scores, |v| v * v), vec![4, 9]);
    }

    #[test]
    fn test_pluck_present_and_missing() {
        let people = vec![
            record(&[("age", 31)]),
            record(&[("age", 17), ("id", 2)]),
            record(&[("id", 3)]),
        ];
        assert_eq!(pluck(&people, "age"), vec![Some(31), Some(17), None]);
    }

    #[test]
    fn test_reduce_sum() {
        assert_eq!(reduce(&[1, 2, 3], |a, b| a + b, 0), 6);
    }

    #[test]
    fn test_reduce_empty_keeps_initial() {
        let empty: Vec<i32> = vec![];
        assert_eq!(reduce(&empty, |a, b| a + b, 5), 5);
    }

    #[test]
    fn test_reduce_falsy_initial_values() {
        assert_eq!(reduce(&[2, 3], |a, b| a * b, 0), 0);
        assert!(reduce(&[true, true], |a, b| a || *b, false));
        assert_eq!(
            reduce(&["x", "y"], |mut acc, s| {
                acc.push_str(s);
                acc
            }, String::new()),
            "xy"
        );
        let all_true = reduce(&[true, false], |a, b| a && *b, true);
        assert!(!all_true);
    }

    #[test]
    fn test_reduce_map_values() {
        let rec = record(&[("a", 1), ("b", 2), ("c", 3)]);
        assert_eq!(reduce(&rec, |acc, v| acc + v, 0), 6);
    }

    #[test]
    fn test_first_does_not_mutate() {
        let data = vec![7, 8, 9];
        assert_eq!(first(data.as_slice()), Some(&7));
        assert_eq!(first(data.as_slice()), Some(&7));
        assert_eq!(data, vec![7, 8, 9]);
    }

    #[test]
    fn test_first_absent_and_empty() {
        assert_eq!(first(None::<&[i32]>), None);
        assert_eq!(first(&[] as &[i32]), None);
        assert!(first_n(None::<&[i32]>, 3).is_empty());
    }

    #[test]
    fn test_first_last_accept_owned_containers() {
        let vec = vec!['x', 'y', 'z'];
        let array = [10, 20, 30];
        assert_eq!(first(&vec), Some(&'x'));
        assert_eq!(last(&vec), Some(&'z'));
        assert_eq!(first_n(&vec, 2), &['x', 'y']);
        assert_eq!(last_n(&array, 2), &[20, 30]);
        assert_eq!(last(Some(&array)), Some(&30));
        assert_eq!(first(None::<&Vec<char>>), None);
    }

    #[test]
    fn test_first_n_bounds() {
        let data = [1, 2, 3];
        assert_eq!(first_n(&data[..], 0), &[] as &[i32]);
        assert_eq!(first_n(&data[..], 2), &[1, 2]);
        assert_eq!(first_n(&data[..], 3), &[1, 2, 3]);
        assert_eq!(first_n(&data[..], 99), &[1, 2, 3]);
    }

    #[test]
    fn test_last_does_not_mutate() {
        let data = vec![7, 8, 9];
        assert_eq!(last(data.as_slice()), Some(&9));
        assert_eq!(last(data.as_slice()), Some(&9));
        assert_eq!(data.len(), 3);
    }

    #[test]
    fn test_last_n_bounds() {
        let data = [1, 2, 3];
        assert_eq!(last_n(&data[..], 1), &[3]);
        assert_eq!(last_n(&data[..], 2), &[2, 3]);
        assert_eq!(last_n(&data[..], 99), &[1, 2, 3]);
        assert!(last_n(None::<&[i32]>, 2).is_empty());
        assert_eq!(last(None::<&[i32]>), None);
    }

    #[test]
    fn test_flatten_deep() {
        use Nested::Leaf;
        let nested = vec![
            Leaf(1),
            Nested::seq([
                Leaf(2),
                Nested::seq([Leaf(3), Nested::seq([Leaf(4)])]),
                Leaf(5),
            ]),
        ];
        assert_eq!(flatten(&nested), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_flatten_empty_seqs() {
        let nested: Vec<Nested<i32>> = vec![
            Nested::seq([]),
            Nested::seq([Nested::seq([])]),
            Nested::leaf(9),
        ];
        assert_eq!(flatten(&nested), vec![9]);
    }

    #[test]
    fn test_nested_depth() {
        assert_eq!(Nested::leaf(1).depth(), 0);
        assert_eq!(Nested::<i32>::seq([]).depth(), 1);
        let deep = Nested::seq([Nested::seq([Nested::seq([Nested::leaf(1)])])]);
        assert_eq!(deep.depth(), 3);
    }

    #[test]
    fn test_zip_first_length_wins() {
        let rows = zip(&[&[1, 2][..], &[3, 4, 5][..]]);
        assert_eq!(rows, vec![vec![Some(1), Some(3)], vec![Some(2), Some(4)]]);
    }

    #[test]
    fn test_zip_empty_inputs() {
        let none: &[&[i32]] = &[];
        assert!(zip(none).is_empty());
        assert!(zip(&[&[] as &[i32], &[1][..]]).is_empty());
    }

    #[test]
    fn test_zip2_letters_and_numbers() {
        let pairs = zip2(&["a", "b", "c"], &[1, 2, 3]);
        assert_eq!(pairs, vec![("a", Some(1)), ("b", Some(2)), ("c", Some(3))]);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn nested_strategy() -> impl Strategy<Value = Nested<i32>> {
        let leaf = any::<i32>().prop_map(Nested::Leaf);
        leaf.prop_recursive(4, 32, 6, |inner| {
            proptest::collection::vec(inner, 0..6).prop_map(Nested::Seq)
        })
    }

    fn count_leaves(item: &Nested<i32>) -> usize {
        match item {
            Nested::Leaf(_) => 1,
            Nested::Seq(items) => items.iter().map(count_leaves).sum(),
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn map_preserves_length(
            data in proptest::collection::vec(any::<i32>(), 0..50),
        ) {
            let mapped = map(&data, |n| i64::from(*n) * 2);
            prop_assert_eq!(mapped.len(), data.len());
        }

        #[test]
        fn reduce_matches_sum(
            data in proptest::collection::vec(-1000_i64..1000, 0..50),
            initial in -1000_i64..1000,
        ) {
            let total = reduce(&data, |acc, n| acc + n, initial);
            prop_assert_eq!(total, initial + data.iter().sum::<i64>());
        }

        #[test]
        fn first_n_and_last_n_split(
            data in proptest::collection::vec(any::<i32>(), 0..50),
            n in 0_usize..60,
        ) {
            let head = first_n(data.as_slice(), n);
            prop_assert_eq!(head.len(), n.min(data.len()));
            let tail = last_n(data.as_slice(), data.len() - head.len());
            let mut joined = head.to_vec();
            joined.extend_from_slice(tail);
            prop_assert_eq!(joined, data);
        }

        #[test]
        fn flatten_keeps_every_leaf(
            nested in proptest::collection::vec(nested_strategy(), 0..6),
        ) {
            let flat = flatten(&nested);
            let expected: usize = nested.iter().map(count_leaves).sum();
            prop_assert_eq!(flat.len(), expected);
        }

        #[test]
        fn zip_rows_follow_first(
            a in proptest::collection::vec(any::<i32>(), 0..20),
            b in proptest::collection::vec(any::<i32>(), 0..20),
        ) {
            let rows = zip(&[&a[..], &b[..]]);
            prop_assert_eq!(rows.len(), a.len());
            for (i, row) in rows.iter().enumerate() {
                prop_assert_eq!(row[0], Some(a[i]));
                prop_assert_eq!(row[1], b.get(i).copied());
            }
        }
    }
}
