//! Collection helpers: search, shuffle, sampling, and reordering.
//!
//! Randomized helpers take `&mut R where R: Rng` so callers decide
//! between a seeded generator (reproducible tests) and an OS-seeded one.
//! Helpers that reorder caller-owned data do so through `&mut` receivers;
//! the mutation is the contract, not a side effect.
//!
//! # Reproducibility
//!
//! For reproducible runs, use [`create_rng`] with a fixed seed. The
//! underlying algorithm (`SmallRng`) is deterministic for a given seed
//! on the same platform.

use rand::Rng;

/// Error for malformed collection arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    /// The index does not address an element of the slice.
    IndexOutOfBounds { index: usize, len: usize },
}

impl std::fmt::Display for CollectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CollectionError::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for slice of length {len}")
            }
        }
    }
}

impl std::error::Error for CollectionError {}

/// Creates a fast, seeded random number generator.
///
/// The sequence is deterministic for a given seed on the same platform.
///
/// # Examples
/// ```
/// use kitbag::collection::create_rng;
/// use rand::Rng;
/// let mut rng = create_rng(42);
/// let x: f64 = rng.random();
/// assert!(x >= 0.0 && x < 1.0);
/// ```
pub fn create_rng(seed: u64) -> rand::rngs::SmallRng {
    use rand::SeedableRng;
    rand::rngs::SmallRng::seed_from_u64(seed)
}

/// Returns the first element satisfying `predicate`, scanning in order.
///
/// The predicate also receives the element's index. Returns `None` for
/// an empty slice or when nothing matches.
///
/// # Examples
/// ```
/// use kitbag::collection::find_first;
/// let v = [10, 25, 30, 25];
/// assert_eq!(find_first(&v, |&n, _| n > 20), Some(&25));
/// assert_eq!(find_first(&v, |&n, i| n == 25 && i > 1), Some(&25));
/// assert_eq!(find_first(&v, |&n, _| n > 99), None);
/// ```
pub fn find_first<T>(slice: &[T], mut predicate: impl FnMut(&T, usize) -> bool) -> Option<&T> {
    slice
        .iter()
        .enumerate()
        .find(|(i, item)| predicate(item, *i))
        .map(|(_, item)| item)
}

/// Fisher–Yates (Durstenfeld) in-place shuffle.
///
/// Produces a uniformly random permutation: each of the n! permutations
/// is equally likely. (A comparator-based "shuffle" via sorting is not
/// uniform, which is why this takes the linear-time route.)
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Examples
/// ```
/// use kitbag::collection::{create_rng, shuffle};
/// let mut v = vec![1, 2, 3, 4, 5];
/// let mut rng = create_rng(42);
/// shuffle(&mut v, &mut rng);
/// v.sort();
/// assert_eq!(v, vec![1, 2, 3, 4, 5]);
/// ```
pub fn shuffle<T, R: Rng>(slice: &mut [T], rng: &mut R) {
    let n = slice.len();
    if n <= 1 {
        return;
    }
    for i in (1..n).rev() {
        let j = rng.random_range(0..=i);
        slice.swap(i, j);
    }
}

/// Draws `count` elements without replacement, reordering the slice.
///
/// Runs a partial Fisher–Yates from the tail: after the call the last
/// `count` positions hold a uniform sample and are returned as a borrow.
/// The rest of the slice keeps all remaining elements, in unspecified
/// order; the reordering is part of the contract, signalled by the
/// `&mut` receiver. `count` larger than the slice is clamped.
///
/// # Complexity
/// Time: O(count), Space: O(1)
///
/// # Examples
/// ```
/// use kitbag::collection::{create_rng, sample};
/// let mut v = vec![1, 2, 3, 4, 5, 6, 7, 8];
/// let mut rng = create_rng(7);
/// let picked = sample(&mut v, 3, &mut rng);
/// assert_eq!(picked.len(), 3);
/// ```
pub fn sample<'a, T, R: Rng>(slice: &'a mut [T], count: usize, rng: &mut R) -> &'a [T] {
    let len = slice.len();
    let count = count.min(len);
    let start = len - count;
    for i in (start..len).rev() {
        let j = rng.random_range(0..=i);
        slice.swap(i, j);
    }
    &slice[start..]
}

/// Moves the element at `index` to the front, keeping the relative order
/// of everything else.
///
/// # Returns
/// - `Ok(true)` if the element moved.
/// - `Ok(false)` if it was already at the front (logged at debug level).
/// - `Err(CollectionError::IndexOutOfBounds)` if `index` is outside the
///   slice.
///
/// # Examples
/// ```
/// use kitbag::collection::move_to_front;
/// let mut v = vec!['a', 'b', 'c', 'd'];
/// assert_eq!(move_to_front(&mut v, 2), Ok(true));
/// assert_eq!(v, vec!['c', 'a', 'b', 'd']);
/// ```
pub fn move_to_front<T>(slice: &mut [T], index: usize) -> Result<bool, CollectionError> {
    if index >= slice.len() {
        return Err(CollectionError::IndexOutOfBounds {
            index,
            len: slice.len(),
        });
    }
    if index == 0 {
        log::debug!("move_to_front: element already at the front");
        return Ok(false);
    }
    slice[..=index].rotate_right(1);
    Ok(true)
}

/// Moves the element at `index` to the back, keeping the relative order
/// of everything else.
///
/// # Returns
/// - `Ok(true)` if the element moved.
/// - `Ok(false)` if it was already at the back (logged at debug level).
/// - `Err(CollectionError::IndexOutOfBounds)` if `index` is outside the
///   slice.
pub fn move_to_back<T>(slice: &mut [T], index: usize) -> Result<bool, CollectionError> {
    let len = slice.len();
    if index >= len {
        return Err(CollectionError::IndexOutOfBounds { index, len });
    }
    if index == len - 1 {
        log::debug!("move_to_back: element already at the back");
        return Ok(false);
    }
    slice[index..].rotate_left(1);
    Ok(true)
}

/// Uniform random integer in the inclusive range `[min, max]`.
///
/// Returns `min` unchanged when `min >= max`.
///
/// # Examples
/// ```
/// use kitbag::collection::{create_rng, random_int};
/// let mut rng = create_rng(1);
/// let n = random_int(5, 10, &mut rng);
/// assert!((5..=10).contains(&n));
/// ```
pub fn random_int<R: Rng>(min: i64, max: i64, rng: &mut R) -> i64 {
    if min >= max {
        return min;
    }
    rng.random_range(min..=max)
}
