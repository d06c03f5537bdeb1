//! Swap move: exchange two distinct positions.

use rand::Rng;

/// Swaps two distinct, uniformly chosen positions of `perm`.
///
/// The second position is redrawn until it differs from the first.
/// Permutations shorter than two are left untouched and consume no
/// randomness. Returns the swapped positions, if any.
pub fn swap_distinct<R: Rng>(perm: &mut [usize], rng: &mut R) -> Option<(usize, usize)> {
    let n = perm.len();
    if n < 2 {
        return None;
    }
    let i = rng.random_range(0..n);
    let mut j = rng.random_range(0..n);
    while j == i {
        j = rng.random_range(0..n);
    }
    perm.swap(i, j);
    Some((i, j))
}
