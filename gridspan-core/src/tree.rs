//! Spanning-tree results produced by the solver crates.

use crate::network::Connection;

/// The outcome of one spanning-tree construction.
///
/// Holds the per-vertex parent pointers and linking keys, the accepted
/// connections in discovery order, and the accumulated total cost. A tree
/// is created by a solver, never mutated afterwards, and owned by the
/// caller.
///
/// A disconnected network yields a *partial* tree: structurally valid but
/// covering only the component reachable from the start vertex. Callers
/// must check [`Self::is_spanning`] when they expect full coverage.
///
/// # Examples
/// ```
/// use gridspan_core::SpanningTree;
///
/// let tree = SpanningTree::new(1, vec![None], vec![0.0], Vec::new(), 0.0);
/// assert!(tree.is_spanning());
/// assert_eq!(tree.total_cost(), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpanningTree {
    vertex_count: usize,
    parent: Vec<Option<usize>>,
    key: Vec<f64>,
    connections: Vec<Connection>,
    total_cost: f64,
}

impl SpanningTree {
    /// Assemble a finished tree from solver state.
    ///
    /// `parent` and `key` must both hold `vertex_count` entries; the root
    /// (and any unreached vertex) has parent `None`, and unreached
    /// vertices keep an infinite key.
    #[must_use]
    pub fn new(
        vertex_count: usize,
        parent: Vec<Option<usize>>,
        key: Vec<f64>,
        connections: Vec<Connection>,
        total_cost: f64,
    ) -> Self {
        debug_assert_eq!(parent.len(), vertex_count);
        debug_assert_eq!(key.len(), vertex_count);
        Self {
            vertex_count,
            parent,
            key,
            connections,
            total_cost,
        }
    }

    /// Number of vertices the construction ran over.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Parent of `vertex` in the tree; `None` for the root, unreached
    /// vertices, and out-of-range indices.
    #[must_use]
    pub fn parent(&self, vertex: usize) -> Option<usize> {
        self.parent.get(vertex).copied().flatten()
    }

    /// Per-vertex parent pointers in vertex order.
    #[must_use]
    pub fn parents(&self) -> &[Option<usize>] {
        &self.parent
    }

    /// Final linking key of `vertex` (the cost of its tree edge; `0` for
    /// the root, infinite when unreached). `None` for out-of-range
    /// indices.
    #[must_use]
    pub fn key(&self, vertex: usize) -> Option<f64> {
        self.key.get(vertex).copied()
    }

    /// Per-vertex linking keys in vertex order.
    #[must_use]
    pub fn keys(&self) -> &[f64] {
        &self.key
    }

    /// Accepted connections in discovery order.
    #[must_use]
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Number of accepted connections.
    #[must_use]
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// Total cost of all accepted connections.
    #[must_use]
    pub const fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// Whether the tree spans every vertex (`vertex_count - 1`
    /// connections).
    #[must_use]
    pub fn is_spanning(&self) -> bool {
        self.vertex_count > 0 && self.connections.len() == self.vertex_count - 1
    }
}
