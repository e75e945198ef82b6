//! Shallow merging of records.
//!
//! Both functions copy properties one level deep: values are cloned, nested
//! structures are not merged.

use crate::traverse::{Container, Record};

/// Returns `target` merged with every source, left to right.
///
/// Later sources overwrite earlier ones, and any source overwrites
/// `target`. `target` itself is left untouched.
///
/// # Examples
/// ```
/// use u_collect::extend;
/// use std::collections::BTreeMap;
///
/// let base = BTreeMap::from([("key1".to_string(), "something")]);
/// let more = BTreeMap::from([
///     ("key2".to_string(), "something new"),
///     ("key3".to_string(), "something else new"),
/// ]);
/// let last = BTreeMap::from([("bla".to_string(), "even more stuff")]);
///
/// let merged = extend(&base, &[&more, &last]);
/// assert_eq!(merged.len(), 4);
/// assert_eq!(base.len(), 1);
/// ```
pub fn extend<M>(target: &M, sources: &[&M]) -> M
where
    M: Record + Clone,
    M::Value: Clone,
{
    let mut merged = target.clone();
    sources.each(|source, _, _| {
        source.for_each_property(|key, value| merged.set_property(key, value.clone()));
    });
    merged
}

/// Fills in properties `target` does not own, in place.
///
/// For a key missing from `target`, the first source that has it wins.
///
/// # Examples
/// ```
/// use u_collect::defaults;
/// use std::collections::HashMap;
///
/// let mut opts = HashMap::from([("color".to_string(), "red")]);
/// let fallback = HashMap::from([
///     ("color".to_string(), "blue"),
///     ("size".to_string(), "large"),
/// ]);
/// defaults(&mut opts, &[&fallback]);
/// assert_eq!(opts["color"], "red");
/// assert_eq!(opts["size"], "large");
/// ```
pub fn defaults<M>(target: &mut M, sources: &[&M])
where
    M: Record,
    M::Value: Clone,
{
    sources.each(|source, _, _| {
        source.for_each_property(|key, value| {
            if !target.has_property(key) {
                target.set_property(key, value.clone());
            }
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeMap, HashMap};

    fn rec(pairs: &[(&str, i32)]) -> BTreeMap<String, i32> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_extend_later_sources_win() {
        let target = rec(&[("a", 1), ("b", 1)]);
        let s1 = rec(&[("b", 2), ("c", 2)]);
        let s2 = rec(&[("c", 3)]);
        let merged = extend(&target, &[&s1, &s2]);
        assert_eq!(merged, rec(&[("a", 1), ("b", 2), ("c", 3)]));
    }

    #[test]
    fn test_extend_no_sources_copies_target() {
        let target = rec(&[("a", 1)]);
        assert_eq!(extend(&target, &[]), target);
    }

    #[test]
    fn test_extend_leaves_inputs_alone() {
        let target = rec(&[("a", 1)]);
        let source = rec(&[("a", 9)]);
        let _ = extend(&target, &[&source]);
        assert_eq!(target, rec(&[("a", 1)]));
        assert_eq!(source, rec(&[("a", 9)]));
    }

    #[test]
    fn test_defaults_first_source_wins() {
        let mut target = rec(&[("a", 1)]);
        let s1 = rec(&[("a", 10), ("b", 20)]);
        let s2 = rec(&[("b", 30), ("c", 40)]);
        defaults(&mut target, &[&s1, &s2]);
        assert_eq!(target, rec(&[("a", 1), ("b", 20), ("c", 40)]));
    }

    #[test]
    fn test_defaults_hashmap() {
        let mut target: HashMap<String, bool> = HashMap::new();
        let source = HashMap::from([("verbose".to_string(), false)]);
        defaults(&mut target, &[&source]);
        assert_eq!(target.get("verbose"), Some(&false));
    }

    #[test]
    fn test_defaults_keeps_falsy_values() {
        let mut target = rec(&[("n", 0)]);
        defaults(&mut target, &[&rec(&[("n", 5)])]);
        assert_eq!(target["n"], 0);
    }
}
