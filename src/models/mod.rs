//! Domain model types for the capacitated vehicle routing problem.
//!
//! Provides the core abstractions: nodes with coordinates and demand, the
//! immutable problem instance with its precomputed distance matrix, routes
//! as ordered customer sequences, and solutions with their travel cost.

mod node;
mod problem;
mod route;
mod solution;

pub use node::Node;
pub use problem::Problem;
pub use route::Route;
pub use solution::Solution;

/// A customer ordering: every non-depot id exactly once.
///
/// The genotype every search manipulates; [`decode`](crate::evaluation::decode)
/// turns it into routes.
pub type Permutation = Vec<usize>;
