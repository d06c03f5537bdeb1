//! SA execution loop.

use rand::Rng;
use tracing::debug;

use super::config::{InitialState, SaConfig};
use crate::constructive::build_permutation;
use crate::evaluation::{decode_unchecked, random_permutation};
use crate::local_search::swap_distinct;
use crate::models::{Permutation, Problem, Solution};
use crate::progress::{ProgressRecord, ProgressSink};

/// Runs simulated annealing and returns the best solution visited.
///
/// The neighbor of the current permutation swaps two distinct positions.
/// A move is accepted if it improves, or otherwise with probability
/// `exp(-delta / T)`; improving moves draw no random number. The best is
/// tracked over every current state, so it never regresses.
///
/// Records: index 0 carries the initial state (best, current, mean and worst
/// all equal its cost). Each neighbor evaluation then emits one record,
/// indexed from 1, with the post-decision current cost and a running mean
/// over every current cost including the initial one.
///
/// A degenerate schedule (see [`SaConfig::is_degenerate`]) runs no
/// transitions and returns the initial state.
///
/// # Examples
///
/// ```
/// use cvrp_bench::models::{Node, Problem};
/// use cvrp_bench::progress::ProgressRecord;
/// use cvrp_bench::random::create_rng;
/// use cvrp_bench::sa::{self, SaConfig};
///
/// let problem = Problem::new(
///     vec![
///         Node::depot(1, 0.0, 0.0),
///         Node::new(2, 4.0, 0.0, 3),
///         Node::new(3, 0.0, 4.0, 3),
///         Node::new(4, -4.0, 0.0, 3),
///         Node::new(5, 0.0, -4.0, 3),
///     ],
///     6,
///     1,
/// )
/// .unwrap();
///
/// let config = SaConfig::default()
///     .with_initial_temperature(10.0)
///     .with_min_temperature(1.0)
///     .with_cooling_rate(0.5)
///     .with_iterations_per_temperature(5);
/// let mut log: Vec<ProgressRecord> = Vec::new();
/// let best = sa::run(&problem, &config, &mut create_rng(7), &mut log);
///
/// // 10 -> 5 -> 2.5 -> 1.25 -> 0.625: four levels of five steps, plus the start
/// assert_eq!(log.len(), 21);
/// assert_eq!(best.cost(), log.last().unwrap().best);
/// ```
pub fn run<R: Rng, S: ProgressSink>(
    problem: &Problem,
    config: &SaConfig,
    rng: &mut R,
    mut sink: S,
) -> Solution {
    let mut current_perm = initial_permutation(problem, config.initial_state, rng);
    let mut current = decode_unchecked(problem, &current_perm);
    let mut best = current.clone();
    let mut worst = current.cost();
    let mut sum = current.cost();
    let mut visited = 1usize;

    sink.record(&ProgressRecord {
        index: 0,
        best: best.cost(),
        current: Some(current.cost()),
        mean: current.cost(),
        worst,
    });

    if config.is_degenerate() {
        debug!(
            initial = config.initial_temperature,
            min = config.min_temperature,
            rate = config.cooling_rate,
            "degenerate annealing schedule, returning initial state"
        );
        return best;
    }

    let mut temperature = config.initial_temperature;
    let mut step = 1usize;
    let mut accepted = 0usize;

    while temperature > config.min_temperature {
        for _ in 0..config.iterations_per_temperature {
            let mut neighbor_perm = current_perm.clone();
            swap_distinct(&mut neighbor_perm, rng);
            let neighbor = decode_unchecked(problem, &neighbor_perm);
            let delta = neighbor.cost() - current.cost();

            if metropolis_accepts(delta, temperature, rng) {
                current_perm = neighbor_perm;
                current = neighbor;
                accepted += 1;
            }

            if current.cost() < best.cost() {
                best = current.clone();
            }
            if current.cost() > worst {
                worst = current.cost();
            }
            sum += current.cost();
            visited += 1;

            sink.record(&ProgressRecord {
                index: step,
                best: best.cost(),
                current: Some(current.cost()),
                mean: sum / visited as f64,
                worst,
            });
            step += 1;
        }
        temperature *= config.cooling_rate;
    }

    debug!(
        steps = step - 1,
        accepted,
        final_temperature = temperature,
        best = best.cost(),
        "simulated annealing finished"
    );
    best
}

/// Metropolis acceptance criterion: improving moves are always taken
/// without a draw; otherwise one uniform draw in [0, 1) must fall below
/// `exp(-delta / temperature)`.
fn metropolis_accepts<R: Rng>(delta: f64, temperature: f64, rng: &mut R) -> bool {
    delta < 0.0 || rng.random::<f64>() < (-delta / temperature).exp()
}

fn initial_permutation<R: Rng>(problem: &Problem, state: InitialState, rng: &mut R) -> Permutation {
    match state {
        InitialState::Random => random_permutation(problem, rng),
        InitialState::Greedy => {
            let customers = problem.customer_ids();
            if customers.is_empty() {
                return Vec::new();
            }
            let start = customers[rng.random_range(0..customers.len())];
            build_permutation(problem, start)
        }
    }
}
