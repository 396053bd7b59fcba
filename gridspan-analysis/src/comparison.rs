//! Side-by-side comparison of a spanning tree against the baselines.

use gridspan_core::{FacilityNetwork, SpanningTree};

use crate::baseline::{sequential_network_cost, star_network_cost};

/// Percentage saved by `optimised` relative to `baseline`.
///
/// Returns `None` when the baseline is non-positive or non-finite, since
/// a savings figure against such a baseline is meaningless.
///
/// # Examples
/// ```
/// use gridspan_analysis::savings_percent;
///
/// assert_eq!(savings_percent(200.0, 150.0), Some(25.0));
/// assert_eq!(savings_percent(0.0, 150.0), None);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "savings are a floating-point ratio"
)]
pub fn savings_percent(baseline: f64, optimised: f64) -> Option<f64> {
    if baseline <= 0.0 || !baseline.is_finite() {
        return None;
    }
    Some((baseline - optimised) / baseline * 100.0)
}

/// A spanning tree's cost next to both baseline topologies.
///
/// The star figures are `None` when the network has no designated hub;
/// the savings figures are additionally `None` when the corresponding
/// baseline is non-positive.
///
/// # Examples
/// ```
/// use gridspan_analysis::NetworkComparison;
/// use gridspan_core::test_support::demo_network;
/// use gridspan_core::{SpanRequest, SpanningTreeSolver};
/// use gridspan_solver_prim::PrimSolver;
///
/// # fn main() -> Result<(), gridspan_core::SolveError> {
/// let network = demo_network();
/// let response = PrimSolver::new().solve(&network, &SpanRequest::from_hub())?;
/// let comparison = NetworkComparison::evaluate(&network, &response.tree);
/// assert!(comparison.savings_vs_star.expect("hub designated") >= 0.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkComparison {
    /// Total cost of the optimised spanning tree.
    pub spanning_cost: f64,
    /// Star-topology baseline; `None` without a hub.
    pub star_cost: Option<f64>,
    /// Sequential-build baseline.
    pub sequential_cost: f64,
    /// Savings of the tree versus the star baseline.
    pub savings_vs_star: Option<f64>,
    /// Savings of the tree versus the sequential baseline.
    pub savings_vs_sequential: Option<f64>,
}

impl NetworkComparison {
    /// Price both baselines for `network` and compare `tree` against
    /// them.
    #[must_use]
    pub fn evaluate(network: &FacilityNetwork, tree: &SpanningTree) -> Self {
        let spanning_cost = tree.total_cost();
        let star_cost = star_network_cost(network).ok();
        let sequential_cost = sequential_network_cost(network);
        Self {
            spanning_cost,
            star_cost,
            sequential_cost,
            savings_vs_star: star_cost
                .and_then(|baseline| savings_percent(baseline, spanning_cost)),
            savings_vs_sequential: savings_percent(sequential_cost, spanning_cost),
        }
    }
}
