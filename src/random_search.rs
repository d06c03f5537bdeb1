//! Pure random sampling.
//!
//! Every iteration draws a fresh, independent uniform permutation (not a
//! walk from the previous one), decodes it, and folds its cost into the
//! running best, worst and mean.

use rand::Rng;
use tracing::debug;

use crate::evaluation::{decode_unchecked, random_permutation};
use crate::models::{Problem, Solution};
use crate::progress::ProgressSink;
use crate::stats::SampleTracker;

/// Samples `iterations` random permutations and returns the best decode.
///
/// Emits one record per iteration: index, best so far, this iteration's
/// cost, running mean, worst so far.
///
/// Requires `iterations >= 1` for a meaningful result; with zero iterations
/// nothing is emitted and [`Solution::unset`] is returned.
///
/// # Examples
///
/// ```
/// use cvrp_bench::models::{Node, Problem};
/// use cvrp_bench::random::create_rng;
/// use cvrp_bench::random_search;
/// use cvrp_bench::progress::ProgressRecord;
///
/// let problem = Problem::new(
///     vec![
///         Node::depot(1, 0.0, 0.0),
///         Node::new(2, 1.0, 0.0, 4),
///         Node::new(3, 2.0, 0.0, 4),
///         Node::new(4, 3.0, 0.0, 4),
///     ],
///     10,
///     1,
/// )
/// .unwrap();
///
/// let mut log: Vec<ProgressRecord> = Vec::new();
/// let best = random_search::run(&problem, 20, &mut create_rng(42), &mut log);
/// assert_eq!(log.len(), 20);
/// assert_eq!(best.num_served(), 3);
/// ```
pub fn run<R: Rng, S: ProgressSink>(
    problem: &Problem,
    iterations: usize,
    rng: &mut R,
    mut sink: S,
) -> Solution {
    let mut tracker = SampleTracker::new();
    for iteration in 0..iterations {
        let perm = random_permutation(problem, rng);
        let solution = decode_unchecked(problem, &perm);
        sink.record(&tracker.observe(iteration, solution));
    }
    let best = tracker.into_best();
    debug!(iterations, best = best.cost(), "random search finished");
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::decode;
    use crate::models::Node;
    use crate::progress::{NoopSink, ProgressRecord};
    use crate::random::create_rng;

    fn grid_problem() -> Problem {
        let mut nodes = vec![Node::depot(1, 5.0, 5.0)];
        for i in 0..9 {
            nodes.push(Node::new(i + 2, (i % 3) as f64 * 4.0, (i / 3) as f64 * 4.0, 3));
        }
        Problem::new(nodes, 10, 1).expect("valid")
    }

    #[test]
    fn test_single_iteration_matches_one_decode() {
        let p = grid_problem();
        let best = run(&p, 1, &mut create_rng(42), NoopSink);

        let mut rng = create_rng(42);
        let perm = random_permutation(&p, &mut rng);
        let expected = decode(&p, &perm).expect("valid");
        assert_eq!(best, expected);
    }

    #[test]
    fn test_records_per_iteration() {
        let p = grid_problem();
        let mut log: Vec<ProgressRecord> = Vec::new();
        let best = run(&p, 50, &mut create_rng(7), &mut log);
        assert_eq!(log.len(), 50);
        for (i, r) in log.iter().enumerate() {
            assert_eq!(r.index, i);
            let current = r.current.expect("random search reports current");
            assert!(r.best <= current);
            assert!(current <= r.worst);
            assert!(r.best <= r.mean && r.mean <= r.worst);
        }
        for w in log.windows(2) {
            assert!(w[1].best <= w[0].best);
            assert!(w[1].worst >= w[0].worst);
        }
        assert_eq!(best.cost(), log.last().expect("non-empty").best);
    }

    #[test]
    fn test_best_is_feasible() {
        let p = grid_problem();
        let best = run(&p, 30, &mut create_rng(1), NoopSink);
        assert_eq!(best.num_served(), 9);
        for route in best.routes() {
            assert!(route.load() <= p.capacity());
        }
    }

    #[test]
    fn test_zero_iterations_is_unset() {
        let p = grid_problem();
        let mut log: Vec<ProgressRecord> = Vec::new();
        let best = run(&p, 0, &mut create_rng(1), &mut log);
        assert!(best.is_unset());
        assert!(log.is_empty());
    }

    #[test]
    fn test_deterministic_with_seed() {
        let p = grid_problem();
        let mut log_a: Vec<ProgressRecord> = Vec::new();
        let mut log_b: Vec<ProgressRecord> = Vec::new();
        let a = run(&p, 25, &mut create_rng(99), &mut log_a);
        let b = run(&p, 25, &mut create_rng(99), &mut log_b);
        assert_eq!(a, b);
        assert_eq!(log_a, log_b);
    }
}
