//! `KruskalSolver`: edge-sorted construction over the network cost matrix.

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::time::Instant;

use gridspan_core::{
    Connection, FacilityNetwork, SolveError, SpanDiagnostics, SpanRequest, SpanResponse,
    SpanningTree, SpanningTreeSolver,
};

/// Spanning-tree solver running Kruskal's algorithm.
///
/// Edges are considered cheapest-first (ties broken by endpoint indices,
/// so runs are deterministic) and accepted whenever they merge two
/// components. The accepted forest is then re-rooted at the start vertex
/// with a breadth-first pass, producing the same tree shape the Prim
/// solver emits; on a disconnected network only the start vertex's
/// component is reported.
///
/// # Examples
/// ```
/// use gridspan_core::{SpanRequest, SpanningTreeSolver};
/// use gridspan_core::test_support::chain_network;
/// use gridspan_solver_kruskal::KruskalSolver;
///
/// # fn main() -> Result<(), gridspan_core::SolveError> {
/// let network = chain_network(4);
/// let response = KruskalSolver::new().solve(&network, &SpanRequest::from_hub())?;
/// assert!(response.tree.is_spanning());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct KruskalSolver;

impl KruskalSolver {
    /// Construct the solver.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl SpanningTreeSolver for KruskalSolver {
    fn solve(
        &self,
        network: &FacilityNetwork,
        request: &SpanRequest,
    ) -> Result<SpanResponse, SolveError> {
        let start = request.resolve(network)?;
        let started_at = Instant::now();

        let vertex_count = network.vertex_count();
        let adjacency = accept_edges(network, vertex_count);
        let (tree, visited) = reroot(network, vertex_count, start, &adjacency);

        if visited < vertex_count {
            log::warn!(
                "network '{}' is disconnected: attached {visited} of {vertex_count} \
                 facilities; returning a partial tree",
                network.name()
            );
        }

        Ok(SpanResponse {
            tree,
            diagnostics: SpanDiagnostics {
                solve_time: started_at.elapsed(),
                vertices_visited: visited,
            },
        })
    }
}

/// Union-find with path compression and union by rank.
struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u32>,
}

impl DisjointSet {
    fn new(size: usize) -> Self {
        Self {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    fn find(&mut self, vertex: usize) -> usize {
        let mut root = vertex;
        while let Some(&next) = self.parent.get(root)
            && next != root
        {
            root = next;
        }
        // Compress the walked path onto the root.
        let mut current = vertex;
        while current != root {
            let Some(slot) = self.parent.get_mut(current) else {
                break;
            };
            current = *slot;
            *slot = root;
        }
        root
    }

    /// Merge the components of `a` and `b`; false when already merged.
    fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }
        let rank_a = self.rank.get(root_a).copied().unwrap_or(0);
        let rank_b = self.rank.get(root_b).copied().unwrap_or(0);
        let (child, parent) = if rank_a < rank_b {
            (root_a, root_b)
        } else {
            (root_b, root_a)
        };
        if let Some(slot) = self.parent.get_mut(child) {
            *slot = parent;
        }
        if rank_a == rank_b
            && let Some(rank) = self.rank.get_mut(parent)
        {
            *rank += 1;
        }
        true
    }
}

/// Accept edges cheapest-first into a forest, returned as adjacency
/// lists.
fn accept_edges(network: &FacilityNetwork, vertex_count: usize) -> Vec<Vec<usize>> {
    let mut edges: Vec<(usize, usize, f64)> = Vec::new();
    for i in 0..vertex_count {
        for j in (i + 1)..vertex_count {
            if let Some(cost) = network.cost(i, j)
                && cost.is_finite()
            {
                edges.push((i, j, cost));
            }
        }
    }
    edges.sort_by(|lhs, rhs| {
        lhs.2
            .partial_cmp(&rhs.2)
            .unwrap_or(Ordering::Equal)
            .then_with(|| (lhs.0, lhs.1).cmp(&(rhs.0, rhs.1)))
    });

    let mut components = DisjointSet::new(vertex_count);
    let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); vertex_count];
    let mut accepted = 0_usize;
    for (i, j, _) in edges {
        if accepted == vertex_count.saturating_sub(1) {
            break;
        }
        if components.union(i, j) {
            if let Some(row) = adjacency.get_mut(i) {
                row.push(j);
            }
            if let Some(row) = adjacency.get_mut(j) {
                row.push(i);
            }
            accepted += 1;
        }
    }
    adjacency
}

/// Walk the accepted forest breadth-first from `start`, producing the
/// parent/key arrays and discovery-ordered connections of the start
/// vertex's component.
#[expect(
    clippy::float_arithmetic,
    reason = "tree cost accumulates floating-point connection costs"
)]
fn reroot(
    network: &FacilityNetwork,
    vertex_count: usize,
    start: usize,
    adjacency: &[Vec<usize>],
) -> (SpanningTree, usize) {
    let mut parent = vec![None; vertex_count];
    let mut key = vec![f64::INFINITY; vertex_count];
    let mut seen = vec![false; vertex_count];
    let mut connections: Vec<Connection> = Vec::with_capacity(vertex_count.saturating_sub(1));
    let mut total_cost = 0.0;
    let mut visited = 0_usize;

    if let Some(slot) = key.get_mut(start) {
        *slot = 0.0;
    }
    if let Some(flag) = seen.get_mut(start) {
        *flag = true;
    }

    let mut queue = VecDeque::from([start]);
    while let Some(vertex) = queue.pop_front() {
        visited += 1;
        let Some(neighbours) = adjacency.get(vertex) else {
            continue;
        };
        for &next in neighbours {
            if seen.get(next).copied().unwrap_or(true) {
                continue;
            }
            if let Some(flag) = seen.get_mut(next) {
                *flag = true;
            }
            if let Some(slot) = parent.get_mut(next) {
                *slot = Some(vertex);
            }
            if let Some(connection) = network.connection_between(vertex, next) {
                if let Some(slot) = key.get_mut(next) {
                    *slot = connection.cost;
                }
                total_cost += connection.cost;
                connections.push(connection);
            }
            queue.push_back(next);
        }
    }

    (
        SpanningTree::new(vertex_count, parent, key, connections, total_cost),
        visited,
    )
}
