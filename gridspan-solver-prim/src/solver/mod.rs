//! `PrimSolver`: dense Prim's algorithm over the network cost matrix.

use std::time::Instant;

use gridspan_core::{
    FacilityNetwork, SolveError, SpanDiagnostics, SpanRequest, SpanResponse, SpanningTree,
    SpanningTreeSolver,
};

use crate::trace::{SpanStep, SpanTrace};

/// Spanning-tree solver running Prim's algorithm.
///
/// The solver is stateless; all working storage lives in a per-call
/// scratch area, so independent runs may share one solver across threads.
///
/// # Examples
/// ```
/// use gridspan_core::{SpanRequest, SpanningTreeSolver};
/// use gridspan_core::test_support::chain_network;
/// use gridspan_solver_prim::PrimSolver;
///
/// # fn main() -> Result<(), gridspan_core::SolveError> {
/// let network = chain_network(4);
/// let response = PrimSolver::new().solve(&network, &SpanRequest::from_hub())?;
/// assert!(response.tree.is_spanning());
/// assert_eq!(response.tree.connection_count(), 3);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct PrimSolver;

impl PrimSolver {
    /// Construct the solver.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Run the identical growth loop while recording one [`SpanStep`]
    /// per attached vertex.
    ///
    /// # Errors
    ///
    /// Same conditions as [`SpanningTreeSolver::solve`].
    pub fn solve_traced(
        &self,
        network: &FacilityNetwork,
        request: &SpanRequest,
    ) -> Result<(SpanResponse, SpanTrace), SolveError> {
        let mut steps = Vec::new();
        let response = grow(network, request, |step| steps.push(step))?;
        Ok((response, SpanTrace { steps }))
    }
}

impl SpanningTreeSolver for PrimSolver {
    fn solve(
        &self,
        network: &FacilityNetwork,
        request: &SpanRequest,
    ) -> Result<SpanResponse, SolveError> {
        grow(network, request, |_| {})
    }
}

/// Per-call working storage for the growth loop.
struct Scratch {
    key: Vec<f64>,
    parent: Vec<Option<usize>>,
    in_tree: Vec<bool>,
}

impl Scratch {
    fn new(vertex_count: usize, start: usize) -> Self {
        let mut key = vec![f64::INFINITY; vertex_count];
        if let Some(slot) = key.get_mut(start) {
            *slot = 0.0;
        }
        Self {
            key,
            parent: vec![None; vertex_count],
            in_tree: vec![false; vertex_count],
        }
    }

    /// Cheapest unattached vertex, lowest index on ties; `None` when every
    /// remaining vertex is unreachable.
    fn cheapest_unattached(&self) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (vertex, (&key, &in_tree)) in self.key.iter().zip(&self.in_tree).enumerate() {
            if in_tree || key.is_infinite() {
                continue;
            }
            if best.is_none_or(|(_, best_key)| key < best_key) {
                best = Some((vertex, key));
            }
        }
        best.map(|(vertex, _)| vertex)
    }

    fn attach(&mut self, vertex: usize) {
        if let Some(flag) = self.in_tree.get_mut(vertex) {
            *flag = true;
        }
    }

    fn parent_of(&self, vertex: usize) -> Option<usize> {
        self.parent.get(vertex).copied().flatten()
    }

    /// Offer every unattached vertex a link through the newly attached
    /// one, keeping whichever key is cheaper.
    fn relax_from(&mut self, network: &FacilityNetwork, attached: usize) {
        for (vertex, ((key, parent), &in_tree)) in self
            .key
            .iter_mut()
            .zip(self.parent.iter_mut())
            .zip(self.in_tree.iter())
            .enumerate()
        {
            if in_tree {
                continue;
            }
            let Some(cost) = network.cost(attached, vertex) else {
                continue;
            };
            if cost.is_finite() && cost < *key {
                *key = cost;
                *parent = Some(attached);
            }
        }
    }

    fn into_parts(self) -> (Vec<Option<usize>>, Vec<f64>) {
        (self.parent, self.key)
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "tree cost accumulates floating-point connection costs"
)]
fn grow(
    network: &FacilityNetwork,
    request: &SpanRequest,
    mut record: impl FnMut(SpanStep),
) -> Result<SpanResponse, SolveError> {
    let start = request.resolve(network)?;
    let started_at = Instant::now();

    let vertex_count = network.vertex_count();
    let mut scratch = Scratch::new(vertex_count, start);
    let mut connections = Vec::with_capacity(vertex_count.saturating_sub(1));
    let mut total_cost = 0.0;
    let mut visited = 0_usize;

    for iteration in 0..vertex_count {
        let Some(selected) = scratch.cheapest_unattached() else {
            log::warn!(
                "network '{}' is disconnected: attached {visited} of {vertex_count} \
                 facilities; returning a partial tree",
                network.name()
            );
            break;
        };
        scratch.attach(selected);
        visited += 1;

        if let Some(parent) = scratch.parent_of(selected)
            && let Some(connection) = network.connection_between(parent, selected)
        {
            total_cost += connection.cost;
            connections.push(connection);
        }

        scratch.relax_from(network, selected);
        record(SpanStep {
            iteration,
            selected,
            keys: scratch.key.clone(),
            parents: scratch.parent.clone(),
        });
    }

    let (parent, key) = scratch.into_parts();
    let tree = SpanningTree::new(vertex_count, parent, key, connections, total_cost);
    log::debug!(
        "spanned '{}' from {start}: {} connections, total cost {:.2}",
        network.name(),
        tree.connection_count(),
        tree.total_cost()
    );
    Ok(SpanResponse {
        tree,
        diagnostics: SpanDiagnostics {
            solve_time: started_at.elapsed(),
            vertices_visited: visited,
        },
    })
}

#[cfg(test)]
mod tests;
