//! Per-argument result caching.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// Wrapper caching one result per distinct argument.
///
/// A call with an argument seen before returns the cached value without
/// running the function. Each distinct argument has its own cache entry.
///
/// # Examples
/// ```
/// use u_collect::memoize;
///
/// let mut square = memoize(|n: u64| n * n);
/// assert_eq!(square.call(5), 25);
/// assert_eq!(square.call(5), 25);
/// assert_eq!(square.call(7), 49);
/// assert_eq!(square.computations(), 2);
/// ```
pub struct Memoize<F, A, R> {
    func: F,
    cache: HashMap<A, R>,
    computations: usize,
}

/// Wraps `func` in a [`Memoize`] cache.
pub fn memoize<F, A, R>(func: F) -> Memoize<F, A, R>
where
    F: FnMut(A) -> R,
    A: Hash + Eq + Clone,
    R: Clone,
{
    Memoize {
        func,
        cache: HashMap::new(),
        computations: 0,
    }
}

impl<F, A, R> Memoize<F, A, R>
where
    F: FnMut(A) -> R,
    A: Hash + Eq + Clone,
    R: Clone,
{
    /// Returns the result for `argument`, computing it on first sight.
    pub fn call(&mut self, argument: A) -> R {
        if let Some(hit) = self.cache.get(&argument) {
            return hit.clone();
        }
        tracing::trace!(cached = self.cache.len(), "memoize: cache miss");
        let result = (self.func)(argument.clone());
        self.computations += 1;
        self.cache.insert(argument, result.clone());
        result
    }

    /// Returns `true` if a result for `argument` is cached.
    pub fn is_cached(&self, argument: &A) -> bool {
        self.cache.contains_key(argument)
    }

    /// Number of cached arguments.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Returns `true` if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Number of times the wrapped function has run.
    pub fn computations(&self) -> usize {
        self.computations
    }

    /// Drops every cached result.
    pub fn clear(&mut self) {
        self.cache.clear();
    }
}

impl<F, A: fmt::Debug, R: fmt::Debug> fmt::Debug for Memoize<F, A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memoize")
            .field("cache", &self.cache)
            .field("computations", &self.computations)
            .finish()
    }
}
