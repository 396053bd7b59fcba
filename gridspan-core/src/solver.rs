//! The spanning-tree solver contract implemented by the solver crates.

use std::time::Duration;

use thiserror::Error;

use crate::network::FacilityNetwork;
use crate::tree::SpanningTree;

/// Parameters for a spanning-tree construction.
///
/// The start vertex defaults to the network's designated hub; callers may
/// override it to grow the tree from any facility.
///
/// # Examples
/// ```
/// use gridspan_core::SpanRequest;
///
/// let request = SpanRequest::from_hub();
/// assert_eq!(request.start, None);
/// assert_eq!(SpanRequest::starting_at(3).start, Some(3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpanRequest {
    /// Explicit start vertex; `None` uses the network hub.
    pub start: Option<usize>,
}

impl SpanRequest {
    /// Grow the tree from the network's designated hub.
    #[must_use]
    pub const fn from_hub() -> Self {
        Self { start: None }
    }

    /// Grow the tree from an explicit facility.
    #[must_use]
    pub const fn starting_at(start: usize) -> Self {
        Self { start: Some(start) }
    }

    /// Resolve the effective start vertex against a network.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::EmptyNetwork`] when the network has no
    /// facilities, [`SolveError::MissingHub`] when no override is given
    /// and no hub was designated, and [`SolveError::InvalidStartVertex`]
    /// when the chosen vertex has no facility behind it.
    pub fn resolve(&self, network: &FacilityNetwork) -> Result<usize, SolveError> {
        if network.vertex_count() == 0 {
            return Err(SolveError::EmptyNetwork);
        }
        let start = match self.start {
            Some(start) => start,
            None => network.hub().ok_or(SolveError::MissingHub)?,
        };
        if network.facility(start).is_none() {
            return Err(SolveError::InvalidStartVertex { start });
        }
        Ok(start)
    }
}

/// Telemetry for one solver invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpanDiagnostics {
    /// Wall-clock time the construction took.
    pub solve_time: Duration,
    /// Vertices actually attached to the tree, including the root.
    pub vertices_visited: usize,
}

/// Response from a successful spanning-tree construction.
///
/// A disconnected network still solves successfully; the tree is then
/// partial and [`SpanningTree::is_spanning`] reports `false`.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanResponse {
    /// The constructed (possibly partial) tree.
    pub tree: SpanningTree,
    /// Telemetry for the run.
    pub diagnostics: SpanDiagnostics,
}

/// Errors returned by [`SpanningTreeSolver::solve`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The network contains no facilities.
    #[error("the network has no facilities to span")]
    EmptyNetwork,
    /// No start override was given and the network has no hub.
    #[error("no start vertex given and the network has no designated hub")]
    MissingHub,
    /// The requested start vertex has no facility behind it.
    #[error("start vertex {start} is not a facility in the network")]
    InvalidStartVertex {
        /// The vertex that failed to resolve.
        start: usize,
    },
}

/// Construct a minimum-cost spanning tree over a facility network.
///
/// Implementations must be deterministic — the same network and request
/// always produce the same tree — and must report disconnection through a
/// partial tree rather than an error. Solvers are `Send + Sync` so
/// independent runs may share one immutable network snapshot.
pub trait SpanningTreeSolver: Send + Sync {
    /// Build a spanning tree, or an error when the request cannot resolve.
    fn solve(
        &self,
        network: &FacilityNetwork,
        request: &SpanRequest,
    ) -> Result<SpanResponse, SolveError>;
}
