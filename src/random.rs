//! Explicit random streams.
//!
//! Every search takes a `&mut R: Rng` instead of reaching for a global
//! generator, so a fixed seed reproduces a run exactly and independent runs
//! can own independent streams.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a seeded random stream.
///
/// # Examples
///
/// ```
/// use rand::Rng;
/// use cvrp_bench::random::create_rng;
///
/// let mut a = create_rng(7);
/// let mut b = create_rng(7);
/// assert_eq!(a.random_range(0..1000u32), b.random_range(0..1000u32));
/// ```
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a stream seeded from `seed`, or from OS entropy when `None`.
pub fn create_rng_or_entropy(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => create_rng(seed),
        None => StdRng::from_os_rng(),
    }
}
