//! CVRP problem instance.

use crate::distance::DistanceMatrix;
use crate::error::CvrpError;

use super::Node;

/// An immutable capacitated vehicle routing instance.
///
/// Nodes are stored in id order (`nodes()[i].id() == i + 1`). The distance
/// matrix is computed once at construction and shared read-only by every
/// search that runs against the instance.
///
/// # Examples
///
/// ```
/// use cvrp_bench::models::{Node, Problem};
///
/// let problem = Problem::new(
///     vec![
///         Node::depot(1, 0.0, 0.0),
///         Node::new(2, 3.0, 4.0, 4),
///         Node::new(3, 6.0, 8.0, 5),
///     ],
///     10,
///     1,
/// )
/// .unwrap();
/// assert_eq!(problem.dimension(), 3);
/// assert_eq!(problem.customer_ids(), vec![2, 3]);
/// assert_eq!(problem.distance(1, 2), 5.0);
/// ```
#[derive(Debug, Clone)]
pub struct Problem {
    name: String,
    capacity: i32,
    depot_id: usize,
    nodes: Vec<Node>,
    distances: DistanceMatrix,
}

impl Problem {
    /// Builds a problem, computing rounded Euclidean distances.
    ///
    /// Nodes may be given in any order but their ids must be exactly
    /// `1..=nodes.len()`. The capacity must be positive and the depot must be
    /// one of the nodes.
    pub fn new(mut nodes: Vec<Node>, capacity: i32, depot_id: usize) -> Result<Self, CvrpError> {
        nodes.sort_by_key(Node::id);
        if nodes.is_empty() {
            return Err(CvrpError::InvalidProblem("problem has no nodes".into()));
        }
        if let Some((pos, node)) = nodes.iter().enumerate().find(|(pos, n)| n.id() != pos + 1) {
            return Err(CvrpError::InvalidProblem(format!(
                "node ids must be 1..={}, found id {} at position {}",
                nodes.len(),
                node.id(),
                pos + 1
            )));
        }
        if capacity <= 0 {
            return Err(CvrpError::InvalidProblem(format!(
                "capacity must be positive, got {capacity}"
            )));
        }
        if depot_id == 0 || depot_id > nodes.len() {
            return Err(CvrpError::InvalidProblem(format!(
                "depot id {depot_id} is not a node"
            )));
        }
        if let Some(node) = nodes.iter().find(|n| n.demand() < 0) {
            return Err(CvrpError::InvalidProblem(format!(
                "node {} has negative demand {}",
                node.id(),
                node.demand()
            )));
        }

        let distances = DistanceMatrix::from_nodes(&nodes);
        Ok(Self {
            name: String::new(),
            capacity,
            depot_id,
            nodes,
            distances,
        })
    }

    /// Sets the instance name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Instance name (empty if unnamed).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of nodes including the depot.
    pub fn dimension(&self) -> usize {
        self.nodes.len()
    }

    /// Number of customers (excluding the depot).
    pub fn num_customers(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Vehicle capacity.
    pub fn capacity(&self) -> i32 {
        self.capacity
    }

    /// Depot node id.
    pub fn depot_id(&self) -> usize {
        self.depot_id
    }

    /// All nodes in id order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Node with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not in `1..=dimension`.
    pub fn node(&self, id: usize) -> &Node {
        &self.nodes[id - 1]
    }

    /// Demand of the node with the given id.
    pub fn demand(&self, id: usize) -> i32 {
        self.node(id).demand()
    }

    /// Distance between two node ids.
    pub fn distance(&self, from: usize, to: usize) -> f64 {
        self.distances.get(from, to)
    }

    /// The underlying distance matrix.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Customer ids (every id except the depot) in ascending order.
    pub fn customer_ids(&self) -> Vec<usize> {
        self.nodes
            .iter()
            .map(Node::id)
            .filter(|&id| id != self.depot_id)
            .collect()
    }

    /// Returns `true` if `id` names a customer of this problem.
    pub fn is_customer(&self, id: usize) -> bool {
        id >= 1 && id <= self.nodes.len() && id != self.depot_id
    }
}
