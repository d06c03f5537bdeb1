//! Single-step 2-opt on a customer permutation.
//!
//! # Algorithm
//!
//! Pick positions `i < k` uniformly and consider reversing `perm[i..=k]`.
//! Only the edges that change are priced:
//!
//! ```text
//! before = d(p[i-1], p[i]) + d(p[k], p[k+1]) + Σ d(p[t], p[t+1])   for t in i..k
//! after  = d(p[i-1], p[k]) + d(p[i], p[k+1]) + Σ d(p[t+1], p[t])   for t in i..k
//! ```
//!
//! The boundary terms are dropped at either end of the permutation. The
//! reversal is applied only when `after + 1e-9 < before`.
//!
//! # Approximation
//!
//! Edges are taken from raw permutation adjacency. The decoder later cuts
//! the permutation into capacity-feasible routes and adds depot legs, which
//! this delta ignores, so an accepted step can leave the decoded cost
//! unchanged or even higher. It is a cheap perturbation toward shorter
//! tours, not an exact route-cost 2-opt.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use rand::Rng;

use crate::distance::DistanceMatrix;

const IMPROVEMENT_EPS: f64 = 1e-9;

/// Change in permutation edge-sum from reversing `perm[i..=k]`.
///
/// Negative means the reversed order is shorter. Requires `i < k < perm.len()`.
///
/// # Examples
///
/// ```
/// use cvrp_bench::distance::DistanceMatrix;
/// use cvrp_bench::local_search::two_opt_delta;
/// use cvrp_bench::models::Node;
///
/// let nodes = vec![
///     Node::depot(1, 0.0, 0.0),
///     Node::new(2, 1.0, 0.0, 1),
///     Node::new(3, 2.0, 0.0, 1),
///     Node::new(4, 3.0, 0.0, 1),
///     Node::new(5, 4.0, 0.0, 1),
/// ];
/// let dm = DistanceMatrix::from_nodes(&nodes);
///
/// // 2,4,3,5: reversing positions 1..=2 gives 2,3,4,5
/// assert_eq!(two_opt_delta(&[2, 4, 3, 5], &dm, 1, 2), -2.0);
/// ```
pub fn two_opt_delta(perm: &[usize], distances: &DistanceMatrix, i: usize, k: usize) -> f64 {
    let edge = |a: usize, b: usize| distances.get(perm[a], perm[b]);
    let n = perm.len();

    let mut before = 0.0;
    let mut after = 0.0;
    if i > 0 {
        before += edge(i - 1, i);
        after += edge(i - 1, k);
    }
    if k + 1 < n {
        before += edge(k, k + 1);
        after += edge(i, k + 1);
    }
    for t in i..k {
        before += edge(t, t + 1);
        after += edge(t + 1, t);
    }
    after - before
}

/// Reverses `perm[i..=k]` if [`two_opt_delta`] says it is shorter.
///
/// Returns `true` if the permutation changed.
pub fn apply_if_improving(
    perm: &mut [usize],
    distances: &DistanceMatrix,
    i: usize,
    k: usize,
) -> bool {
    if two_opt_delta(perm, distances, i, k) < -IMPROVEMENT_EPS {
        perm[i..=k].reverse();
        true
    } else {
        false
    }
}

/// One random 2-opt attempt.
///
/// Draws `i` uniformly from `0..=n-2`, then `k` uniformly from `i+1..=n-1`,
/// and applies [`apply_if_improving`]. Permutations shorter than two are left
/// untouched and consume no randomness.
pub fn two_opt_step<R: Rng>(perm: &mut [usize], distances: &DistanceMatrix, rng: &mut R) -> bool {
    let n = perm.len();
    if n < 2 {
        return false;
    }
    let i = rng.random_range(0..=n - 2);
    let k = rng.random_range(i + 1..=n - 1);
    apply_if_improving(perm, distances, i, k)
}
