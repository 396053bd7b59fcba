//! Baseline topology cost estimators.
//!
//! Both estimators price a topology without building it, and both treat a
//! pair with no feasible connection as contributing nothing. That is a
//! deliberate approximation: on a disconnected network the baselines
//! understate the true cost of the topology they describe, because the
//! missing links are priced at zero rather than reported. Callers
//! comparing against a partial spanning tree should keep that in mind.

use thiserror::Error;

use gridspan_core::FacilityNetwork;

/// Errors returned by [`star_network_cost`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BaselineError {
    /// The network has no designated hub to centre the star on.
    #[error("the network has no designated hub")]
    MissingHub,
}

/// Cost of connecting every facility directly to the hub.
///
/// Sums `cost[hub][v]` over every other facility with a feasible link;
/// infeasible pairs contribute nothing (see the module notes).
///
/// # Errors
///
/// Returns [`BaselineError::MissingHub`] when no hub was designated.
///
/// # Examples
/// ```
/// use gridspan_analysis::star_network_cost;
/// use gridspan_core::test_support::chain_network;
///
/// let network = chain_network(3);
/// // Only facility 1 has a feasible link to the hub.
/// let cost = star_network_cost(&network)?;
/// assert_eq!(cost, network.cost(0, 1).unwrap());
/// # Ok::<(), gridspan_analysis::BaselineError>(())
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "baseline estimates accumulate floating-point costs"
)]
pub fn star_network_cost(network: &FacilityNetwork) -> Result<f64, BaselineError> {
    let hub = network.hub().ok_or(BaselineError::MissingHub)?;
    let mut total = 0.0;
    for vertex in 0..network.vertex_count() {
        if vertex == hub {
            continue;
        }
        if let Some(cost) = network.cost(hub, vertex)
            && cost.is_finite()
        {
            total += cost;
        }
    }
    Ok(total)
}

/// Cost of building the network in identifier order.
///
/// Facility `i` is connected to `i - 1` when that link is feasible;
/// otherwise the cheapest feasible link from any earlier facility is
/// used. A facility with no feasible link to any predecessor contributes
/// nothing (see the module notes).
///
/// # Examples
/// ```
/// use gridspan_analysis::sequential_network_cost;
/// use gridspan_core::test_support::chain_network;
///
/// let network = chain_network(4);
/// assert!(sequential_network_cost(&network) > 0.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "baseline estimates accumulate floating-point costs"
)]
pub fn sequential_network_cost(network: &FacilityNetwork) -> f64 {
    let mut total = 0.0;
    for vertex in 1..network.vertex_count() {
        let direct = network.cost(vertex - 1, vertex).filter(|cost| cost.is_finite());
        let cost = direct.or_else(|| {
            (0..vertex)
                .filter_map(|earlier| network.cost(earlier, vertex))
                .filter(|cost| cost.is_finite())
                .min_by(|lhs, rhs| lhs.total_cmp(rhs))
        });
        if let Some(cost) = cost {
            total += cost;
        }
    }
    total
}
