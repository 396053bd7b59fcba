//! The facility network: a dense, undirected, cost-weighted graph.
//!
//! The network owns the facility set and three parallel `capacity ×
//! capacity` matrices: adjusted connection costs (with `f64::INFINITY` as
//! the "no feasible connection" sentinel), geodesic distances in
//! kilometres, and per-pair terrain. It is mutated only while an external
//! loader feeds it facilities and connections; afterwards solvers and
//! analysers treat it as an immutable snapshot.

use thiserror::Error;

use crate::cost::CostModel;
use crate::facility::{Facility, FacilityCategory};
use crate::geodesic::geodesic_distance_km;
use crate::matrix::SquareMatrix;
use crate::terrain::Terrain;

/// Defensive upper bound on network capacity.
///
/// The planning domain never exceeds a hundred facilities, and every
/// algorithm here is O(V²); the bound keeps an accidental oversized load
/// from allocating quadratic memory.
pub const MAX_FACILITIES: usize = 100;

/// A single derived connection between two facilities.
///
/// Connections are not stored as such; they are derived from the matrices
/// when a pair is linked, and collected into a
/// [`SpanningTree`](crate::SpanningTree) by the solvers.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Connection {
    /// Facility id on the tree side of the link.
    pub source: usize,
    /// Facility id being attached.
    pub target: usize,
    /// Geodesic length of the link in kilometres.
    pub distance_km: f64,
    /// Terrain the link crosses.
    pub terrain: Terrain,
    /// Adjusted cost in millions of rupees; infinite when infeasible.
    pub cost: f64,
}

/// Errors raised while building a [`FacilityNetwork`].
///
/// Every error is reported before any mutation, so a failed call leaves
/// the network exactly as it was.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NetworkError {
    /// The requested capacity was zero.
    #[error("a network needs capacity for at least one facility")]
    ZeroCapacity,
    /// The requested capacity exceeded [`MAX_FACILITIES`].
    #[error("capacity {requested} exceeds the supported maximum of {maximum} facilities")]
    CapacityExceeded {
        /// Capacity the caller asked for.
        requested: usize,
        /// Largest capacity the network supports.
        maximum: usize,
    },
    /// A facility id fell outside `[0, capacity)`.
    #[error("facility id {id} is outside the configured capacity {capacity}")]
    IdOutOfRange {
        /// Offending identifier.
        id: usize,
        /// Configured network capacity.
        capacity: usize,
    },
    /// A connection referenced an id with no facility behind it.
    #[error("no facility with id {id} has been added")]
    UnknownFacility {
        /// Offending identifier.
        id: usize,
    },
    /// A connection referenced the same facility twice.
    #[error("facility {id} cannot be connected to itself")]
    SelfLoop {
        /// The repeated identifier.
        id: usize,
    },
}

/// Dense weighted graph over the facilities of one planning area.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use gridspan_core::{Facility, FacilityCategory, FacilityNetwork, Terrain};
///
/// # fn main() -> Result<(), gridspan_core::NetworkError> {
/// let mut network = FacilityNetwork::new("Karad", 10)?;
/// network.add_facility(Facility::new(
///     0,
///     "Main Data Center",
///     Coord { x: 74.0, y: 18.5 },
///     FacilityCategory::DataCenter,
///     0,
/// ))?;
/// network.add_facility(Facility::new(
///     1,
///     "City Hospital",
///     Coord { x: 74.02, y: 18.51 },
///     FacilityCategory::Hospital,
///     1500,
/// ))?;
/// let link = network.add_connection(0, 1, Terrain::Urban, true)?;
/// assert!(link.cost.is_finite());
/// assert_eq!(network.hub(), Some(0));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct FacilityNetwork {
    name: String,
    capacity: usize,
    cost_model: CostModel,
    facilities: Vec<Option<Facility>>,
    costs: SquareMatrix<f64>,
    distances: SquareMatrix<f64>,
    terrains: SquareMatrix<Terrain>,
    configured: SquareMatrix<bool>,
    vertex_count: usize,
    edge_count: usize,
    hub: Option<usize>,
}

impl FacilityNetwork {
    /// Create an empty network with the default [`CostModel`].
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::ZeroCapacity`] for `capacity == 0` and
    /// [`NetworkError::CapacityExceeded`] above [`MAX_FACILITIES`]. On
    /// failure no partially-initialised network is reachable.
    pub fn new(name: impl Into<String>, capacity: usize) -> Result<Self, NetworkError> {
        Self::with_cost_model(name, capacity, CostModel::default())
    }

    /// Create an empty network with a calibrated [`CostModel`].
    ///
    /// # Errors
    ///
    /// Same conditions as [`Self::new`].
    pub fn with_cost_model(
        name: impl Into<String>,
        capacity: usize,
        cost_model: CostModel,
    ) -> Result<Self, NetworkError> {
        if capacity == 0 {
            return Err(NetworkError::ZeroCapacity);
        }
        if capacity > MAX_FACILITIES {
            return Err(NetworkError::CapacityExceeded {
                requested: capacity,
                maximum: MAX_FACILITIES,
            });
        }

        let mut costs = SquareMatrix::filled(capacity, f64::INFINITY);
        for v in 0..capacity {
            costs.set(v, v, 0.0);
        }

        let name = name.into();
        log::debug!("created network '{name}' with capacity {capacity}");
        Ok(Self {
            name,
            capacity,
            cost_model,
            facilities: vec![None; capacity],
            costs,
            distances: SquareMatrix::filled(capacity, 0.0),
            terrains: SquareMatrix::filled(capacity, Terrain::Plain),
            configured: SquareMatrix::filled(capacity, false),
            vertex_count: 0,
            edge_count: 0,
            hub: None,
        })
    }

    /// Add a facility, overwriting any previous facility with the same id.
    ///
    /// The vertex count grows to cover the highest id seen; it never
    /// shrinks. The first `DataCenter` added becomes the hub (first match
    /// wins; later data centres leave the designation alone).
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::IdOutOfRange`] when `facility.id` is at or
    /// beyond the configured capacity. Nothing is mutated on error.
    pub fn add_facility(&mut self, facility: Facility) -> Result<(), NetworkError> {
        let id = facility.id;
        let Some(slot) = self.facilities.get_mut(id) else {
            return Err(NetworkError::IdOutOfRange {
                id,
                capacity: self.capacity,
            });
        };

        log::debug!(
            "adding facility {id}: {} ({}, pop {})",
            facility.name,
            facility.category,
            facility.population
        );
        if self.hub.is_none() && facility.category == FacilityCategory::DataCenter {
            self.hub = Some(id);
        }
        *slot = Some(facility);
        if id >= self.vertex_count {
            self.vertex_count = id + 1;
        }
        Ok(())
    }

    /// Link two facilities, deriving distance and adjusted cost.
    ///
    /// When `feasible` is false the pair is recorded with an infinite
    /// cost, marking the link as impossible; the distance and terrain are
    /// still stored. Both symmetric matrix entries are written and the
    /// derived [`Connection`] is returned.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::SelfLoop`] when `src == dest`, and
    /// [`NetworkError::IdOutOfRange`] or [`NetworkError::UnknownFacility`]
    /// when either endpoint does not resolve to a facility. Nothing is
    /// mutated on error.
    pub fn add_connection(
        &mut self,
        src: usize,
        dest: usize,
        terrain: Terrain,
        feasible: bool,
    ) -> Result<Connection, NetworkError> {
        if src == dest {
            return Err(NetworkError::SelfLoop { id: src });
        }
        let src_facility = self.require_facility(src)?;
        let dest_facility = self.require_facility(dest)?;

        let distance_km = geodesic_distance_km(src_facility.location, dest_facility.location);
        let cost = if feasible {
            self.cost_model
                .adjusted_cost(distance_km, terrain, src_facility, dest_facility)
        } else {
            f64::INFINITY
        };

        log::debug!(
            "connecting {src} <-> {dest}: {distance_km:.2} km over {terrain}, cost {cost:.2}"
        );
        self.costs.set_symmetric(src, dest, cost);
        self.distances.set_symmetric(src, dest, distance_km);
        self.terrains.set_symmetric(src, dest, terrain);
        if self.configured.get(src, dest) != Some(&true) {
            self.edge_count += 1;
        }
        self.configured.set_symmetric(src, dest, true);

        Ok(Connection {
            source: src,
            target: dest,
            distance_km,
            terrain,
            cost,
        })
    }

    /// Recompute the geodesic distance for every facility pair.
    ///
    /// Pairs with a missing facility (an id gap) are skipped.
    pub fn recompute_all_distances(&mut self) {
        log::info!(
            "recomputing geodesic distances for {} facilities",
            self.vertex_count
        );
        for i in 0..self.vertex_count {
            for j in (i + 1)..self.vertex_count {
                let (Some(a), Some(b)) = (self.facility(i), self.facility(j)) else {
                    continue;
                };
                let distance_km = geodesic_distance_km(a.location, b.location);
                self.distances.set_symmetric(i, j, distance_km);
            }
        }
    }

    /// Derive costs for every pair that was never explicitly configured.
    ///
    /// Explicitly configured pairs — including explicitly infeasible ones
    /// — are left untouched. The stored distance and terrain are used, so
    /// callers normally run [`Self::recompute_all_distances`] first;
    /// terrain defaults to [`Terrain::Plain`] when never set.
    pub fn recompute_all_costs(&mut self) {
        log::info!(
            "recomputing connection costs for {} facilities",
            self.vertex_count
        );
        for i in 0..self.vertex_count {
            for j in (i + 1)..self.vertex_count {
                if self.configured.get(i, j) == Some(&true) {
                    continue;
                }
                let (Some(a), Some(b)) = (self.facility(i), self.facility(j)) else {
                    continue;
                };
                let distance_km = self.distances.get(i, j).copied().unwrap_or(0.0);
                let terrain = self.terrains.get(i, j).copied().unwrap_or_default();
                let cost = self.cost_model.adjusted_cost(distance_km, terrain, a, b);
                self.costs.set_symmetric(i, j, cost);
            }
        }
    }

    /// Network display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Configured capacity (matrix side length).
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of vertices implied by the highest facility id added.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of explicitly configured connections.
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Designated hub (the first data centre added), if any.
    #[must_use]
    pub const fn hub(&self) -> Option<usize> {
        self.hub
    }

    /// The cost model used to derive connection costs.
    #[must_use]
    pub const fn cost_model(&self) -> &CostModel {
        &self.cost_model
    }

    /// Facility with the given id, if one was added.
    #[must_use]
    pub fn facility(&self, id: usize) -> Option<&Facility> {
        self.facilities.get(id).and_then(Option::as_ref)
    }

    /// Iterate over all facilities in id order.
    pub fn facilities(&self) -> impl Iterator<Item = &Facility> {
        self.facilities.iter().filter_map(Option::as_ref)
    }

    /// Adjusted cost between two facilities; `None` when out of range.
    ///
    /// An infinite value means the pair has no feasible connection.
    #[must_use]
    pub fn cost(&self, a: usize, b: usize) -> Option<f64> {
        self.costs.get(a, b).copied()
    }

    /// Geodesic distance in kilometres; `None` when out of range.
    #[must_use]
    pub fn distance(&self, a: usize, b: usize) -> Option<f64> {
        self.distances.get(a, b).copied()
    }

    /// Terrain between two facilities; `None` when out of range.
    #[must_use]
    pub fn terrain_between(&self, a: usize, b: usize) -> Option<Terrain> {
        self.terrains.get(a, b).copied()
    }

    /// Whether a finite-cost connection exists between two facilities.
    #[must_use]
    pub fn is_feasible(&self, a: usize, b: usize) -> bool {
        self.cost(a, b).is_some_and(f64::is_finite) && a != b
    }

    /// The derived [`Connection`] for a pair, from the stored matrices.
    ///
    /// Returns `None` when either index is out of range; the connection's
    /// cost is infinite when the pair is infeasible.
    #[must_use]
    pub fn connection_between(&self, source: usize, target: usize) -> Option<Connection> {
        Some(Connection {
            source,
            target,
            distance_km: self.distance(source, target)?,
            terrain: self.terrain_between(source, target)?,
            cost: self.cost(source, target)?,
        })
    }

    /// Read-only view of the adjusted-cost matrix.
    #[must_use]
    pub const fn cost_matrix(&self) -> &SquareMatrix<f64> {
        &self.costs
    }

    /// Read-only view of the geodesic-distance matrix.
    #[must_use]
    pub const fn distance_matrix(&self) -> &SquareMatrix<f64> {
        &self.distances
    }

    /// Read-only view of the terrain matrix.
    #[must_use]
    pub const fn terrain_matrix(&self) -> &SquareMatrix<Terrain> {
        &self.terrains
    }

    fn require_facility(&self, id: usize) -> Result<&Facility, NetworkError> {
        if id >= self.capacity {
            return Err(NetworkError::IdOutOfRange {
                id,
                capacity: self.capacity,
            });
        }
        self.facility(id)
            .ok_or(NetworkError::UnknownFacility { id })
    }
}
