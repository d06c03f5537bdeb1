//! Route type.

use serde::{Deserialize, Serialize};

/// An ordered sequence of customers served by one vehicle.
///
/// The depot is implicit at both ends and is not stored.
///
/// # Examples
///
/// ```
/// use cvrp_bench::models::Route;
///
/// let mut route = Route::new();
/// route.push(4, 3);
/// route.push(2, 5);
/// assert_eq!(route.customer_ids(), &[4, 2]);
/// assert_eq!(route.load(), 8);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Route {
    customers: Vec<usize>,
    load: i32,
}

impl Route {
    /// Creates an empty route.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a customer and adds its demand to the route load.
    pub fn push(&mut self, customer_id: usize, demand: i32) {
        self.customers.push(customer_id);
        self.load += demand;
    }

    /// Returns the customer ids in visit order.
    pub fn customer_ids(&self) -> &[usize] {
        &self.customers
    }

    /// Returns the number of customers on the route.
    pub fn len(&self) -> usize {
        self.customers.len()
    }

    /// Returns `true` if this route has no customers.
    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    /// Total demand served by this route.
    pub fn load(&self) -> i32 {
        self.load
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_empty() {
        let r = Route::new();
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
        assert_eq!(r.load(), 0);
    }

    #[test]
    fn test_route_push() {
        let mut r = Route::new();
        r.push(5, 20);
        r.push(3, 15);
        assert_eq!(r.len(), 2);
        assert_eq!(r.customer_ids(), &[5, 3]);
        assert_eq!(r.load(), 35);
    }
}
