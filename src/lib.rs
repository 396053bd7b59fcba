//! Facade crate for the Gridspan network-planning engine.
//!
//! This crate re-exports the core domain types and exposes the optional
//! solver and analysis implementations behind feature flags.

#![forbid(unsafe_code)]

pub use gridspan_core::{
    Connection, CostModel, EARTH_RADIUS_KM, Facility, FacilityCategory, FacilityNetwork,
    MAX_FACILITIES, NetworkError, SolveError, SpanDiagnostics, SpanRequest, SpanResponse,
    SpanningTree, SpanningTreeSolver, SquareMatrix, Terrain, geodesic_distance_km,
};

#[cfg(feature = "solver-prim")]
pub use gridspan_solver_prim::{PrimSolver, SpanStep, SpanTrace};

#[cfg(feature = "solver-kruskal")]
pub use gridspan_solver_kruskal::KruskalSolver;

#[cfg(feature = "analysis")]
pub use gridspan_analysis::{
    BaselineError, NetworkComparison, TreeStatistics, savings_percent, sequential_network_cost,
    star_network_cost,
};
