//! Permutation crossover and mutation operators.
//!
//! Crossovers take two equal-length permutations of the same id set and
//! return one child containing every id exactly once. Ids may be any
//! `usize` values (customer ids here), not necessarily `0..n`.
//!
//! # Crossover Operators
//!
//! - [`order_crossover`] (OX): Davis (1985) — preserves relative order
//! - [`pmx_crossover`] (PMX): Goldberg & Lingle (1985) — preserves absolute position
//! - [`cycle_crossover`] (CX): Oliver, Smith & Holland (1987) — every id keeps
//!   a position from one of the parents
//!
//! # Mutation Operators
//!
//! - [`swap_mutation`]: Exchange two distinct random positions — O(1)
//! - [`inversion_mutation`]: Reverse a random segment — O(n)
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Goldberg & Lingle (1985), "Alleles, Loci, and the Traveling Salesman Problem"
//! - Oliver, Smith & Holland (1987), "A Study of Permutation Crossover
//!   Operators on the Traveling Salesman Problem"

use rand::Rng;

use super::config::{Crossover, Mutation};
use crate::local_search::swap_distinct;

const EMPTY: usize = usize::MAX;

impl Crossover {
    /// Produces one child from two parents with this operator.
    pub fn apply<R: Rng>(self, parent1: &[usize], parent2: &[usize], rng: &mut R) -> Vec<usize> {
        match self {
            Crossover::Order => order_crossover(parent1, parent2, rng),
            Crossover::PartiallyMapped => pmx_crossover(parent1, parent2, rng),
            Crossover::Cycle => cycle_crossover(parent1, parent2),
        }
    }
}

impl Mutation {
    /// Applies this operator unconditionally.
    pub fn apply<R: Rng>(self, perm: &mut [usize], rng: &mut R) {
        match self {
            Mutation::Swap => swap_mutation(perm, rng),
            Mutation::Inversion => inversion_mutation(perm, rng),
        }
    }
}

// ============================================================================
// Crossover operators
// ============================================================================

/// Order Crossover (OX) for permutations.
///
/// # Algorithm (Davis, 1985)
///
/// 1. Select a random segment `[start, end]`
/// 2. Copy `parent1[start..=end]` to the child at the same positions
/// 3. Walk `parent2` cyclically from `end + 1`, placing every id not yet in
///    the child into the next free child slot, also cyclically from `end + 1`
///
/// Parents shorter than two are returned as a copy of `parent1`.
///
/// # Complexity
/// O(n) time, O(max id) space
pub fn order_crossover<R: Rng>(parent1: &[usize], parent2: &[usize], rng: &mut R) -> Vec<usize> {
    let n = parent1.len();
    debug_assert_eq!(n, parent2.len(), "parents must have equal length");
    if n < 2 {
        return parent1.to_vec();
    }

    let (start, end) = random_segment(n, rng);
    let mut child = vec![EMPTY; n];
    let mut used = IdSet::for_parents(parent1, parent2);

    for i in start..=end {
        child[i] = parent1[i];
        used.insert(parent1[i]);
    }

    let mut pos = (end + 1) % n;
    for offset in 0..n {
        let candidate = parent2[(end + 1 + offset) % n];
        if used.contains(candidate) {
            continue;
        }
        while child[pos] != EMPTY {
            pos = (pos + 1) % n;
        }
        child[pos] = candidate;
        used.insert(candidate);
    }

    child
}

/// Partially Mapped Crossover (PMX) for permutations.
///
/// # Algorithm (Goldberg & Lingle, 1985)
///
/// 1. Select a random segment `[start, end]`
/// 2. Copy `parent1[start..=end]` to the child at the same positions
/// 3. For each `i` in the segment whose `parent2[i]` is not yet placed,
///    follow the mapping chain `pos = index of parent1[pos] in parent2`
///    from `i` until the child slot at `pos` is empty, and place it there
/// 4. Fill the remaining empty slots left to right with the first unused
///    ids of `parent2`, in `parent2` order
///
/// Parents shorter than two are returned as a copy of `parent1`.
///
/// # Complexity
/// O(n) time, O(max id) space
pub fn pmx_crossover<R: Rng>(parent1: &[usize], parent2: &[usize], rng: &mut R) -> Vec<usize> {
    let n = parent1.len();
    debug_assert_eq!(n, parent2.len(), "parents must have equal length");
    if n < 2 {
        return parent1.to_vec();
    }

    let (start, end) = random_segment(n, rng);
    pmx_with_segment(parent1, parent2, start, end)
}

/// PMX over a fixed segment `[start, end]`.
fn pmx_with_segment(parent1: &[usize], parent2: &[usize], start: usize, end: usize) -> Vec<usize> {
    let n = parent1.len();
    let mut child = vec![EMPTY; n];
    let mut used = IdSet::for_parents(parent1, parent2);
    let index_in_p2 = IndexMap::new(parent2);

    for i in start..=end {
        child[i] = parent1[i];
        used.insert(parent1[i]);
    }

    for i in start..=end {
        let value = parent2[i];
        if used.contains(value) {
            continue;
        }
        let mut pos = i;
        while child[pos] != EMPTY {
            pos = index_in_p2.get(parent1[pos]);
        }
        child[pos] = value;
        used.insert(value);
    }

    let mut donor = parent2.iter().copied();
    for slot in child.iter_mut().filter(|slot| **slot == EMPTY) {
        if let Some(value) = donor.by_ref().find(|&v| !used.contains(v)) {
            *slot = value;
            used.insert(value);
        }
    }

    child
}

/// Cycle Crossover (CX) for permutations.
///
/// Positions are partitioned into cycles by following
/// `pos -> index of parent1[pos] in parent2` until the start is reached
/// again. Cycles are numbered in order of their lowest position; even
/// cycles take their ids from `parent1`, odd cycles from `parent2`.
///
/// Deterministic: consumes no randomness.
///
/// # Examples
///
/// ```
/// use cvrp_bench::ga::operators::cycle_crossover;
///
/// let p1 = [2, 3, 4, 5, 6, 7, 8, 9];
/// let p2 = [3, 9, 5, 7, 8, 2, 6, 4];
/// // cycle 0 covers positions {0, 1, 2, 3, 5, 7}, cycle 1 covers {4, 6}
/// assert_eq!(cycle_crossover(&p1, &p2), vec![2, 3, 4, 5, 8, 7, 6, 9]);
/// ```
///
/// # Complexity
/// O(n) time, O(max id) space
pub fn cycle_crossover(parent1: &[usize], parent2: &[usize]) -> Vec<usize> {
    let n = parent1.len();
    debug_assert_eq!(n, parent2.len(), "parents must have equal length");

    let index_in_p2 = IndexMap::new(parent2);
    let mut child = vec![EMPTY; n];
    let mut visited = vec![false; n];
    let mut from_p1 = true;

    for start in 0..n {
        if visited[start] {
            continue;
        }
        let mut idx = start;
        loop {
            visited[idx] = true;
            child[idx] = if from_p1 { parent1[idx] } else { parent2[idx] };
            idx = index_in_p2.get(parent1[idx]);
            if idx == start || visited[idx] {
                break;
            }
        }
        from_p1 = !from_p1;
    }

    child
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Swap mutation: exchange two distinct random positions.
///
/// No-op for permutations shorter than two.
///
/// # Complexity
/// O(1) expected
pub fn swap_mutation<R: Rng>(perm: &mut [usize], rng: &mut R) {
    swap_distinct(perm, rng);
}

/// Inversion mutation: reverse a random segment `[start, end]`.
///
/// The segment may be a single position, in which case nothing changes.
/// No-op for permutations shorter than two.
///
/// # Complexity
/// O(n) worst case for segment reversal
pub fn inversion_mutation<R: Rng>(perm: &mut [usize], rng: &mut R) {
    let n = perm.len();
    if n < 2 {
        return;
    }
    let (start, end) = random_segment(n, rng);
    perm[start..=end].reverse();
}

// ============================================================================
// Helpers
// ============================================================================

/// Pick a random segment `[start, end]` within `0..n` where `start <= end`.
fn random_segment<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let a = rng.random_range(0..n);
    let b = rng.random_range(0..n);
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Membership flags indexed directly by id.
struct IdSet {
    flags: Vec<bool>,
}

impl IdSet {
    fn for_parents(parent1: &[usize], parent2: &[usize]) -> Self {
        let max = parent1.iter().chain(parent2).copied().max().unwrap_or(0);
        Self {
            flags: vec![false; max + 1],
        }
    }

    fn insert(&mut self, id: usize) {
        self.flags[id] = true;
    }

    fn contains(&self, id: usize) -> bool {
        self.flags[id]
    }
}

/// Position of each id in one parent.
struct IndexMap {
    positions: Vec<usize>,
}

impl IndexMap {
    fn new(parent: &[usize]) -> Self {
        let max = parent.iter().copied().max().unwrap_or(0);
        let mut positions = vec![EMPTY; max + 1];
        for (i, &id) in parent.iter().enumerate() {
            positions[id] = i;
        }
        Self { positions }
    }

    fn get(&self, id: usize) -> usize {
        self.positions[id]
    }
}

// ============================================================================
// Tests
// ============================================================================
