//! Tournament selection.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use rand::Rng;

use super::chromosome::Individual;

/// Tournament selection: draw `k` individuals uniformly with replacement and
/// return the index of the cheapest.
///
/// The first draw is the initial winner and only a strictly cheaper draw
/// replaces it, so ties go to the earliest draw. `k = 0` acts as `k = 1`.
///
/// # Complexity
/// O(k) per selection
///
/// # Panics
/// Panics if `population` is empty.
pub fn tournament<R: Rng>(population: &[Individual], k: usize, rng: &mut R) -> usize {
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );
    let k = k.max(1);
    let n = population.len();

    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        if population[idx].cost() < population[best_idx].cost() {
            best_idx = idx;
        }
    }
    best_idx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn population(costs: &[f64]) -> Vec<Individual> {
        costs
            .iter()
            .enumerate()
            .map(|(i, &c)| Individual::new(vec![i + 2], c))
            .collect()
    }

    #[test]
    fn test_tournament_returns_valid_index() {
        let pop = population(&[5.0, 3.0, 8.0, 1.0, 4.0]);
        let mut rng = create_rng(42);
        for _ in 0..100 {
            assert!(tournament(&pop, 3, &mut rng) < pop.len());
        }
    }

    #[test]
    fn test_tournament_size_one_is_uniform_draw() {
        let pop = population(&[5.0, 3.0, 8.0, 1.0, 4.0]);
        let expected = create_rng(9).random_range(0..pop.len());
        assert_eq!(tournament(&pop, 1, &mut create_rng(9)), expected);
        assert_eq!(tournament(&pop, 0, &mut create_rng(9)), expected);
    }

    #[test]
    fn test_tournament_matches_replayed_draws() {
        let pop = population(&[5.0, 3.0, 8.0, 1.0, 4.0, 2.0]);
        for seed in 0..20 {
            let mut replay = create_rng(seed);
            let draws: Vec<usize> = (0..4).map(|_| replay.random_range(0..pop.len())).collect();
            let mut expected = draws[0];
            for &d in &draws[1..] {
                if pop[d].cost() < pop[expected].cost() {
                    expected = d;
                }
            }
            assert_eq!(tournament(&pop, 4, &mut create_rng(seed)), expected);
        }
    }

    #[test]
    fn test_large_tournament_prefers_best() {
        let pop = population(&[10.0, 9.0, 8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0]);
        let mut rng = create_rng(42);
        let mut best_count = 0;
        for _ in 0..1000 {
            if tournament(&pop, 10, &mut rng) == 9 {
                best_count += 1;
            }
        }
        // P(best drawn at least once in 10 draws) = 1 - 0.9^10 ≈ 0.65
        assert!(best_count > 550, "best selected {best_count}/1000 times");
    }

    #[test]
    fn test_ties_keep_first_draw() {
        let pop = population(&[1.0, 1.0, 1.0]);
        let first = create_rng(5).random_range(0..3);
        assert_eq!(tournament(&pop, 5, &mut create_rng(5)), first);
    }
}
