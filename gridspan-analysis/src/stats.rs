//! Summary statistics over a completed spanning tree.

use std::collections::HashMap;

use gridspan_core::{FacilityCategory, FacilityNetwork, SpanningTree, Terrain};

/// Derived metrics for one spanning tree.
///
/// All values are computed once from the tree's accepted connections;
/// neither the network nor the tree is mutated.
///
/// # Examples
/// ```
/// use gridspan_analysis::TreeStatistics;
/// use gridspan_core::test_support::chain_network;
/// use gridspan_core::{SpanRequest, SpanningTreeSolver};
/// use gridspan_solver_prim::PrimSolver;
///
/// # fn main() -> Result<(), gridspan_core::SolveError> {
/// let network = chain_network(4);
/// let response = PrimSolver::new().solve(&network, &SpanRequest::from_hub())?;
/// let stats = TreeStatistics::from_tree(&network, &response.tree);
/// assert!(stats.total_length_km > 0.0);
/// assert!(stats.cost_per_km.is_some());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TreeStatistics {
    /// Total fibre length across all accepted connections, in kilometres.
    pub total_length_km: f64,
    /// Mean connection length; zero for an empty tree.
    pub average_length_km: f64,
    /// Longest accepted connection; zero for an empty tree.
    pub longest_km: f64,
    /// Shortest accepted connection; zero for an empty tree.
    pub shortest_km: f64,
    /// Total cost divided by total length; `None` when the tree has no
    /// length to divide by.
    pub cost_per_km: Option<f64>,
    /// How often each facility category appears as a connection endpoint.
    pub category_endpoints: HashMap<FacilityCategory, usize>,
    /// Number of accepted connections crossing each terrain.
    pub terrain_connections: HashMap<Terrain, usize>,
}

impl TreeStatistics {
    /// Aggregate statistics for `tree` as built over `network`.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "aggregation over at most a hundred floating-point lengths"
    )]
    pub fn from_tree(network: &FacilityNetwork, tree: &SpanningTree) -> Self {
        let mut total_length_km = 0.0_f64;
        let mut longest_km = 0.0_f64;
        let mut shortest_km = f64::INFINITY;
        let mut category_endpoints: HashMap<FacilityCategory, usize> = HashMap::new();
        let mut terrain_connections: HashMap<Terrain, usize> = HashMap::new();

        for connection in tree.connections() {
            total_length_km += connection.distance_km;
            longest_km = longest_km.max(connection.distance_km);
            shortest_km = shortest_km.min(connection.distance_km);
            *terrain_connections.entry(connection.terrain).or_insert(0) += 1;
            for endpoint in [connection.source, connection.target] {
                if let Some(facility) = network.facility(endpoint) {
                    *category_endpoints.entry(facility.category).or_insert(0) += 1;
                }
            }
        }

        let connection_count = tree.connection_count();
        let average_length_km = if connection_count == 0 {
            0.0
        } else {
            total_length_km / connection_count as f64
        };
        let cost_per_km = if total_length_km > 0.0 {
            Some(tree.total_cost() / total_length_km)
        } else {
            None
        };

        Self {
            total_length_km,
            average_length_km,
            longest_km,
            shortest_km: if shortest_km.is_finite() {
                shortest_km
            } else {
                0.0
            },
            cost_per_km,
            category_endpoints,
            terrain_connections,
        }
    }
}
