//! Constructive heuristics for building customer permutations.
//!
//! - [`build_permutation`] — Greedy nearest-neighbor ordering from a start customer, O(n²)
//! - [`run`] — Multi-restart nearest-neighbor with round-robin start customers

mod nearest_neighbor;

pub use nearest_neighbor::{build_permutation, round_robin_start, run};
