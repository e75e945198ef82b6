//! Random permutations of sequences.
//!
//! The random source is a collaborator: any [`rand::Rng`] works, and
//! [`create_rng`] builds a seeded one for reproducible runs. The only draw
//! the algorithms make is a uniform index via `random_range`.
//!
//! # Algorithm
//!
//! Durstenfeld's in-place Fisher-Yates: walk the slice backwards and swap
//! position `i` with a uniformly chosen `j` in `0..=i`. Every one of the n!
//! permutations is equally likely.
//!
//! Reference: Knuth (1997), *TAOCP* Vol. 2, §3.4.2, Algorithm P.

use rand::Rng;

/// Creates a fast, seeded random number generator.
///
/// Uses `SmallRng` (Xoshiro256++). The sequence is deterministic for a
/// given seed on the same platform.
///
/// # Examples
/// ```
/// use u_collect::random::create_rng;
/// use rand::Rng;
/// let mut rng = create_rng(42);
/// let x: f64 = rng.random();
/// assert!(x >= 0.0 && x < 1.0);
/// ```
pub fn create_rng(seed: u64) -> rand::rngs::SmallRng {
    use rand::SeedableRng;
    rand::rngs::SmallRng::seed_from_u64(seed)
}

/// Returns a uniformly shuffled copy of `sequence`.
///
/// Draws one index per position after the first, so an input of length n
/// consumes n − 1 values from `rng`.
///
/// # Complexity
/// Time: O(n), Space: O(n)
///
/// # Examples
/// ```
/// use u_collect::random::{create_rng, shuffle};
/// let data = vec![1, 2, 3, 4, 5];
/// let mut rng = create_rng(42);
/// let mut shuffled = shuffle(&data, &mut rng);
/// assert_eq!(data, vec![1, 2, 3, 4, 5]);
/// shuffled.sort();
/// assert_eq!(shuffled, data);
/// ```
pub fn shuffle<T: Clone, R: Rng>(sequence: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = sequence.to_vec();
    shuffle_in_place(&mut shuffled, rng);
    shuffled
}

/// Fisher-Yates (Durstenfeld) in-place shuffle.
///
/// # Complexity
/// Time: O(n), Space: O(1)
pub fn shuffle_in_place<T, R: Rng>(slice: &mut [T], rng: &mut R) {
    let n = slice.len();
    if n <= 1 {
        return;
    }
    for i in (1..n).rev() {
        let j = rng.random_range(0..=i);
        slice.swap(i, j);
    }
}

/// Returns a shuffled index permutation of `[0, n)`.
///
/// Useful to visit a sequence in random order without cloning it.
///
/// # Examples
/// ```
/// use u_collect::random::{create_rng, shuffled_indices};
/// let mut rng = create_rng(42);
/// let mut indices = shuffled_indices(5, &mut rng);
/// indices.sort();
/// assert_eq!(indices, vec![0, 1, 2, 3, 4]);
/// ```
pub fn shuffled_indices<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..n).collect();
    shuffle_in_place(&mut indices, rng);
    indices
}

// ============================================================================
// Tests
// ============================================================================
