//! Local moves on customer permutations.
//!
//! - [`swap_distinct`] — Exchange two distinct positions (annealing neighbour, swap mutation)
//! - [`two_opt_step`] — One random 2-opt reversal, applied only if the
//!   permutation edge-sum shrinks

mod swap;
mod two_opt;

pub use swap::swap_distinct;
pub use two_opt::{apply_if_improving, two_opt_delta, two_opt_step};
