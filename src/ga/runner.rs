//! Evolutionary loop execution.
//!
//! initialization → per generation: report → track best → elites →
//! offspring (tournament, crossover, mutation, optional 2-opt) → replace.

use rand::Rng;
use tracing::debug;

use super::chromosome::Individual;
use super::config::GaConfig;
use super::selection::tournament;
use crate::constructive::{build_permutation, round_robin_start};
use crate::evaluation::{decode_unchecked, random_permutation};
use crate::local_search::two_opt_step;
use crate::models::{Problem, Solution};
use crate::progress::{ProgressRecord, ProgressSink};

/// Runs the evolutionary search and returns the decoded all-time best.
///
/// Emits one record per generation, before offspring are produced: the
/// generation index and the population's best, mean and worst cost
/// (`current` is `None`).
///
/// Returns [`Solution::unset`] and emits nothing when the population size
/// or the generation count is zero.
///
/// # Examples
///
/// ```
/// use cvrp_bench::ga::{self, GaConfig};
/// use cvrp_bench::models::{Node, Problem};
/// use cvrp_bench::progress::ProgressRecord;
/// use cvrp_bench::random::create_rng;
///
/// let mut nodes = vec![Node::depot(1, 0.0, 0.0)];
/// for i in 0..8 {
///     nodes.push(Node::new(i + 2, (i * 7 % 10) as f64, (i * 3 % 10) as f64, 2));
/// }
/// let problem = Problem::new(nodes, 6, 1).unwrap();
///
/// let config = GaConfig::default().with_population_size(20).with_generations(15);
/// let mut log: Vec<ProgressRecord> = Vec::new();
/// let best = ga::run(&problem, &config, &mut create_rng(42), &mut log);
///
/// assert_eq!(log.len(), 15);
/// assert_eq!(best.num_served(), 8);
/// assert!(best.cost() <= log[0].best);
/// ```
pub fn run<R: Rng, S: ProgressSink>(
    problem: &Problem,
    config: &GaConfig,
    rng: &mut R,
    mut sink: S,
) -> Solution {
    if config.population_size == 0 || config.generations == 0 {
        debug!(
            population = config.population_size,
            generations = config.generations,
            "evolutionary search has no work"
        );
        return Solution::unset();
    }

    let mut population = initial_population(problem, config, rng);
    let mut best_overall = first_cheapest(&population).clone();

    for generation in 0..config.generations {
        let record = generation_record(generation, &population);
        sink.record(&record);

        if record.best < best_overall.cost() {
            if let Some(ind) = population.iter().find(|ind| ind.cost() == record.best) {
                best_overall = ind.clone();
            }
        }

        population = next_generation(problem, config, &population, rng);
    }

    // offspring of the last generation are never reported, but may be better
    let last_best = first_cheapest(&population);
    if last_best.cost() < best_overall.cost() {
        best_overall = last_best.clone();
    }

    let best = decode_unchecked(problem, best_overall.permutation());
    debug!(
        population = config.population_size,
        generations = config.generations,
        best = best.cost(),
        "evolutionary search finished"
    );
    best
}

/// Builds the initial population: the first `greedy_seed_count()`
/// individuals by nearest-neighbor construction with round-robin starts,
/// the rest uniformly random.
fn initial_population<R: Rng>(problem: &Problem, config: &GaConfig, rng: &mut R) -> Vec<Individual> {
    let greedy = config.greedy_seed_count();
    (0..config.population_size)
        .map(|i| {
            let perm = if i < greedy {
                build_permutation(problem, round_robin_start(problem, i))
            } else {
                random_permutation(problem, rng)
            };
            Individual::evaluate(problem, perm)
        })
        .collect()
}

fn next_generation<R: Rng>(
    problem: &Problem,
    config: &GaConfig,
    population: &[Individual],
    rng: &mut R,
) -> Vec<Individual> {
    let mut next = Vec::with_capacity(config.population_size);

    // Elitism: stable sort keeps the earlier of equal-cost individuals first.
    let elites = config.elite_count.min(population.len());
    if elites > 0 {
        let mut sorted: Vec<&Individual> = population.iter().collect();
        sorted.sort_by(|a, b| a.cost().total_cmp(&b.cost()));
        next.extend(sorted.into_iter().take(elites).cloned());
    }

    while next.len() < config.population_size {
        next.push(offspring(problem, config, population, rng));
    }
    next
}

fn offspring<R: Rng>(
    problem: &Problem,
    config: &GaConfig,
    population: &[Individual],
    rng: &mut R,
) -> Individual {
    let p1 = tournament(population, config.tournament_size, rng);
    let p2 = tournament(population, config.tournament_size, rng);
    let parent1 = population[p1].permutation();
    let parent2 = population[p2].permutation();

    let mut child = if rng.random::<f64>() < config.crossover_rate {
        config.crossover.apply(parent1, parent2, rng)
    } else {
        parent1.to_vec()
    };

    if child.len() >= 2 && rng.random::<f64>() < config.mutation_rate {
        config.mutation.apply(&mut child, rng);
    }

    if config.two_opt_rate > 0.0 && rng.random::<f64>() < config.two_opt_rate {
        two_opt_step(&mut child, problem.distances(), rng);
    }

    Individual::evaluate(problem, child)
}

fn generation_record(generation: usize, population: &[Individual]) -> ProgressRecord {
    let mut best = f64::INFINITY;
    let mut worst = f64::NEG_INFINITY;
    let mut sum = 0.0;
    for ind in population {
        best = best.min(ind.cost());
        worst = worst.max(ind.cost());
        sum += ind.cost();
    }
    ProgressRecord {
        index: generation,
        best,
        current: None,
        mean: sum / population.len() as f64,
        worst,
    }
}

/// First individual with the lowest cost. `population` must be non-empty.
fn first_cheapest(population: &[Individual]) -> &Individual {
    let mut best = &population[0];
    for ind in &population[1..] {
        if ind.cost() < best.cost() {
            best = ind;
        }
    }
    best
}
