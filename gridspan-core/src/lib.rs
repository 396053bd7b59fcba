//! Core domain types for the Gridspan network-planning engine.
//!
//! Gridspan plans minimum-cost fibre networks over geographically located
//! facilities. This crate owns the data model: facilities and their
//! categories, terrain classifications, the monetary cost model, the
//! facility network (a dense weighted graph), and the spanning-tree solver
//! contract implemented by the solver crates.
//!
//! Construction is fallible and validated up front; solvers then treat the
//! network as an immutable snapshot, so independent consumers may query it
//! concurrently without locking.

#![forbid(unsafe_code)]

mod cost;
mod facility;
mod geodesic;
mod matrix;
mod network;
mod solver;
mod terrain;
mod tree;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use cost::CostModel;
pub use facility::{Facility, FacilityCategory};
pub use geodesic::{EARTH_RADIUS_KM, geodesic_distance_km};
pub use matrix::SquareMatrix;
pub use network::{Connection, FacilityNetwork, MAX_FACILITIES, NetworkError};
pub use solver::{SolveError, SpanDiagnostics, SpanRequest, SpanResponse, SpanningTreeSolver};
pub use terrain::Terrain;
pub use tree::SpanningTree;
