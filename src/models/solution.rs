//! Solution type.

use serde::{Deserialize, Serialize};

use super::Route;

/// A complete CVRP solution: routes plus their total travel cost.
///
/// Solutions produced by [`decode`](crate::evaluation::decode) always carry a
/// cost consistent with their routes.
///
/// # Examples
///
/// ```
/// use cvrp_bench::models::{Route, Solution};
///
/// let mut route = Route::new();
/// route.push(2, 1);
/// let sol = Solution::new(vec![route], 12.0);
/// assert_eq!(sol.num_routes(), 1);
/// assert_eq!(sol.cost(), 12.0);
///
/// assert!(Solution::unset().cost().is_infinite());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    routes: Vec<Route>,
    cost: f64,
}

impl Solution {
    /// Creates a solution from routes and their cost.
    pub fn new(routes: Vec<Route>, cost: f64) -> Self {
        Self { routes, cost }
    }

    /// The sentinel returned when a search performs no work: no routes and
    /// infinite cost, so any real solution compares better.
    pub fn unset() -> Self {
        Self {
            routes: Vec::new(),
            cost: f64::INFINITY,
        }
    }

    pub(crate) fn with_cost(mut self, cost: f64) -> Self {
        self.cost = cost;
        self
    }

    /// Returns `true` if this is the no-work sentinel.
    pub fn is_unset(&self) -> bool {
        self.routes.is_empty() && self.cost == f64::INFINITY
    }

    /// Returns the routes in this solution.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Returns the number of routes (vehicles used).
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Total travel cost.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Total number of customers served (across all routes).
    pub fn num_served(&self) -> usize {
        self.routes.iter().map(Route::len).sum()
    }

    /// All customers in route order, routes concatenated.
    pub fn customer_sequence(&self) -> Vec<usize> {
        self.routes
            .iter()
            .flat_map(|r| r.customer_ids().iter().copied())
            .collect()
    }
}
