//! Instance and reference-solution readers.
//!
//! - [`read_problem`] / [`parse_problem`] — TSPLIB CVRP instances
//! - [`read_optimal_cost`] / [`parse_optimal_cost`] — best known cost from a `.sol` file

mod optimal;
mod tsplib;

pub use optimal::{parse_optimal_cost, read_optimal_cost};
pub use tsplib::{parse_problem, read_problem};
