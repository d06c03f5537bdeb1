//! Dense distance matrix.

use crate::models::Node;

/// A dense square distance matrix stored in row-major order.
///
/// Indexed directly by node id. Row and column 0 are unused padding so that
/// 1-based ids need no offset arithmetic; a problem with `dimension` nodes
/// gets a matrix of size `dimension + 1`.
///
/// # Examples
///
/// ```
/// use cvrp_bench::models::Node;
/// use cvrp_bench::distance::DistanceMatrix;
///
/// let nodes = vec![
///     Node::depot(1, 0.0, 0.0),
///     Node::new(2, 3.0, 4.0, 10),
///     Node::new(3, 6.0, 8.0, 20),
/// ];
/// let dm = DistanceMatrix::from_nodes(&nodes);
/// assert_eq!(dm.get(1, 2), 5.0);
/// assert_eq!(dm.size(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes a rounded Euclidean matrix from node coordinates.
    ///
    /// The matrix is sized by the largest id so every node id indexes it.
    pub fn from_nodes(nodes: &[Node]) -> Self {
        let size = nodes.iter().map(Node::id).max().map_or(1, |max| max + 1);
        let mut dm = Self::new(size);
        for (i, a) in nodes.iter().enumerate() {
            for b in &nodes[i + 1..] {
                let d = a.rounded_distance_to(b);
                dm.set(a.id(), b.id(), d);
                dm.set(b.id(), a.id(), d);
            }
        }
        dm
    }

    /// Returns the distance from node `from` to node `to`.
    ///
    /// # Panics
    ///
    /// Panics if either id is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of rows (largest id + 1).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the nearest of `candidates` as seen from `from`.
    ///
    /// Ties go to the candidate that appears first in the slice.
    /// Returns `None` if `candidates` is empty.
    pub fn nearest_neighbor(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        candidates
            .iter()
            .copied()
            .min_by(|&a, &b| self.get(from, a).total_cmp(&self.get(from, b)))
    }
}
