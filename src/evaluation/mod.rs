//! Decoding permutations into routes and evaluating their cost.
//!
//! - [`decode`] — first-fit capacity split of a customer permutation
//! - [`evaluate`] — total depot-to-depot travel cost of a solution
//! - [`random_permutation`] — uniform customer shuffle

mod decoder;

pub(crate) use decoder::decode_unchecked;
pub use decoder::{decode, evaluate, random_permutation, route_distance};
