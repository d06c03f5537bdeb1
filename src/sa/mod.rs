//! Simulated Annealing (SA) over customer permutations.
//!
//! A single trajectory with a swap neighborhood, the Metropolis acceptance
//! criterion and geometric cooling.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;

pub use config::{InitialState, SaConfig};
pub use runner::run;
