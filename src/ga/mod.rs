//! Evolutionary search over customer permutations.
//!
//! Generational, with tournament selection, one configured crossover and one
//! configured mutation operator, an optional 2-opt step and elitism. Every
//! individual is a permutation scored by the shared decoder.
//!
//! # Key Types
//!
//! - [`Individual`]: Permutation paired with its decoded cost
//! - [`GaConfig`]: Algorithm parameters with builder methods
//! - [`Crossover`], [`Mutation`]: Operator choices, parsed from config names
//!
//! # Submodules
//!
//! - [`operators`]: OX, PMX and CX crossover; swap and inversion mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod chromosome;
mod config;
pub mod operators;
mod runner;
mod selection;

pub use chromosome::Individual;
pub use config::{Crossover, GaConfig, Mutation};
pub use runner::run;
pub use selection::tournament;
