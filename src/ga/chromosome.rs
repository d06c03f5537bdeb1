//! Permutation chromosome for the evolutionary search.
//!
//! An individual is a customer permutation (the genotype) paired with the
//! cost of its decoded routes. The decoder, not the chromosome, decides the
//! route boundaries.

use crate::evaluation::decode_unchecked;
use crate::models::{Permutation, Problem};

/// A customer permutation and its decoded cost.
///
/// # Examples
///
/// ```
/// use cvrp_bench::ga::Individual;
/// use cvrp_bench::models::{Node, Problem};
///
/// let problem = Problem::new(
///     vec![
///         Node::depot(1, 0.0, 0.0),
///         Node::new(2, 3.0, 4.0, 5),
///         Node::new(3, 6.0, 8.0, 5),
///     ],
///     10,
///     1,
/// )
/// .unwrap();
///
/// let ind = Individual::evaluate(&problem, vec![3, 2]);
/// assert_eq!(ind.permutation(), &[3, 2]);
/// assert_eq!(ind.cost(), 20.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    permutation: Permutation,
    cost: f64,
}

impl Individual {
    /// Pairs a permutation with an already known cost.
    pub fn new(permutation: Permutation, cost: f64) -> Self {
        Self { permutation, cost }
    }

    /// Decodes `permutation` and records its cost.
    pub fn evaluate(problem: &Problem, permutation: Permutation) -> Self {
        let cost = decode_unchecked(problem, &permutation).cost();
        Self { permutation, cost }
    }

    /// Returns the customer permutation.
    pub fn permutation(&self) -> &[usize] {
        &self.permutation
    }

    /// Decoded cost. Lower is better.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Consumes the individual, returning its permutation.
    pub fn into_permutation(self) -> Permutation {
        self.permutation
    }

    /// Returns the number of customers in this permutation.
    pub fn len(&self) -> usize {
        self.permutation.len()
    }

    /// Returns true if the permutation has no customers.
    pub fn is_empty(&self) -> bool {
        self.permutation.is_empty()
    }
}
