//! Distance matrix.
//!
//! Provides the dense, id-indexed distance matrix every search reads from.

mod matrix;

pub use matrix::DistanceMatrix;
