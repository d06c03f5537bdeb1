//! Nearest-neighbor constructive heuristic.
//!
//! Builds a customer permutation greedily: from a start customer, always
//! move to the nearest unvisited customer. Capacity is ignored during
//! construction; the decoder splits the resulting order into routes.
//!
//! # Complexity
//!
//! O(n²) where n = number of customers.

use tracing::debug;

use crate::evaluation::decode_unchecked;
use crate::models::{Permutation, Problem, Solution};
use crate::progress::ProgressSink;
use crate::stats::SampleTracker;

/// Builds a nearest-neighbor permutation starting at `start_id`.
///
/// If `start_id` is not a customer (the depot, or out of range) the lowest
/// customer id is used instead. Distance ties go to the lowest candidate id.
///
/// # Examples
///
/// ```
/// use cvrp_bench::models::{Node, Problem};
/// use cvrp_bench::constructive::build_permutation;
///
/// let problem = Problem::new(
///     vec![
///         Node::depot(1, 0.0, 0.0),
///         Node::new(2, 10.0, 0.0, 5), // far
///         Node::new(3, 1.0, 0.0, 5),  // near
///         Node::new(4, 2.0, 0.0, 5),
///     ],
///     100,
///     1,
/// )
/// .unwrap();
///
/// assert_eq!(build_permutation(&problem, 3), vec![3, 4, 2]);
/// ```
pub fn build_permutation(problem: &Problem, start_id: usize) -> Permutation {
    let mut unvisited = problem.customer_ids();
    let mut order = Vec::with_capacity(unvisited.len());
    if unvisited.is_empty() {
        return order;
    }

    let start_pos = unvisited
        .iter()
        .position(|&id| id == start_id)
        .unwrap_or(0);
    let mut current = unvisited.remove(start_pos);
    order.push(current);

    let distances = problem.distances();
    while let Some(next) = distances.nearest_neighbor(current, &unvisited) {
        if let Some(pos) = unvisited.iter().position(|&id| id == next) {
            unvisited.remove(pos);
        }
        order.push(next);
        current = next;
    }
    order
}

/// Start id used by restart `r`: a round-robin over `2..=dimension`.
pub fn round_robin_start(problem: &Problem, restart: usize) -> usize {
    let span = problem.dimension().saturating_sub(1).max(1);
    2 + restart % span
}

/// Runs `restarts` independent nearest-neighbor constructions and returns
/// the best decode.
///
/// Restart `r` starts from [`round_robin_start`]; nothing is randomized.
/// Emits one record per restart: index, best so far, this restart's cost,
/// running mean, worst so far. With zero restarts nothing is emitted and
/// [`Solution::unset`] is returned.
pub fn run<S: ProgressSink>(problem: &Problem, restarts: usize, mut sink: S) -> Solution {
    let mut tracker = SampleTracker::new();
    for restart in 0..restarts {
        let perm = build_permutation(problem, round_robin_start(problem, restart));
        let solution = decode_unchecked(problem, &perm);
        sink.record(&tracker.observe(restart, solution));
    }
    let best = tracker.into_best();
    debug!(restarts, best = best.cost(), "greedy construction finished");
    best
}
