//! # cvrp-bench
//!
//! Capacitated vehicle routing benchmark: four searches over one shared
//! permutation decoder, compared on TSPLIB instances.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Node, Problem, Route, Solution)
//! - [`distance`] — Rounded Euclidean distance matrix
//! - [`evaluation`] — Permutation decoding and cost evaluation
//! - [`constructive`] — Nearest-neighbor construction and multi-restart greedy
//! - [`random_search`] — Independent random sampling
//! - [`sa`] — Simulated annealing over swap moves
//! - [`ga`] — Evolutionary search over customer permutations
//! - [`local_search`] — Single-step 2-opt and swap moves
//! - [`progress`] — Per-step progress records and sinks
//! - [`stats`] — Statistics over repeated runs
//! - [`random`] — Seeded random streams
//! - [`io`] — TSPLIB instance and reference cost readers
//! - [`config`] — Benchmark configuration file
//! - [`benchmark`] — Outer loop over instance files

pub mod benchmark;
pub mod config;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod ga;
pub mod io;
pub mod local_search;
pub mod models;
pub mod progress;
pub mod random;
pub mod random_search;
pub mod sa;
pub mod stats;

pub use error::CvrpError;
