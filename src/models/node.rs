//! Node type.

use serde::{Deserialize, Serialize};

/// A location in a routing problem: the depot or a customer.
///
/// Ids are 1-based. The depot carries demand 0.
///
/// # Examples
///
/// ```
/// use cvrp_bench::models::Node;
///
/// let depot = Node::depot(1, 35.0, 35.0);
/// assert_eq!(depot.id(), 1);
/// assert_eq!(depot.demand(), 0);
///
/// let c = Node::new(2, 41.0, 49.0, 10);
/// assert_eq!(c.id(), 2);
/// assert_eq!(c.demand(), 10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    id: usize,
    x: f64,
    y: f64,
    demand: i32,
}

impl Node {
    /// Creates a new node.
    pub fn new(id: usize, x: f64, y: f64, demand: i32) -> Self {
        Self { id, x, y, demand }
    }

    /// Creates a depot node (demand 0).
    pub fn depot(id: usize, x: f64, y: f64) -> Self {
        Self::new(id, x, y, 0)
    }

    /// Node id (1-based).
    pub fn id(&self) -> usize {
        self.id
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Demand at this node.
    pub fn demand(&self) -> i32 {
        self.demand
    }

    /// Euclidean distance to another node, rounded to the nearest integer.
    pub fn rounded_distance_to(&self, other: &Node) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt().round()
    }
}
