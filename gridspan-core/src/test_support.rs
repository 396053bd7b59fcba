//! Shared network fixtures for unit, property, and behaviour tests.
//!
//! These builders construct small, fully deterministic networks with
//! known topology so solver and analysis tests can assert exact outcomes.

use geo::Coord;

use crate::{Facility, FacilityCategory, FacilityNetwork, Terrain};

/// Construct a facility at (`x`, `y`) with a generated name.
#[must_use]
pub fn facility(
    id: usize,
    category: FacilityCategory,
    x: f64,
    y: f64,
    population: u32,
) -> Facility {
    Facility::new(
        id,
        format!("facility-{id}"),
        Coord { x, y },
        category,
        population,
    )
}

/// Two facilities whose only configured connection is explicitly
/// infeasible.
///
/// Solving this network yields a partial tree containing just the start
/// vertex. Facility `0` is a data centre, so the hub is designated.
///
/// # Panics
///
/// Panics only if the fixture itself is misconfigured.
#[must_use]
pub fn isolated_pair_network() -> FacilityNetwork {
    let mut network = FacilityNetwork::new("isolated-pair", 2).expect("capacity within bounds");
    network
        .add_facility(facility(0, FacilityCategory::DataCenter, 74.0, 18.5, 0))
        .expect("id in range");
    network
        .add_facility(facility(1, FacilityCategory::Hospital, 74.05, 18.55, 900))
        .expect("id in range");
    network
        .add_connection(0, 1, Terrain::River, false)
        .expect("valid pair");
    network
}

/// Five facilities on a near-regular pentagon.
///
/// The five ring edges are feasible and short; the two chords `(0, 2)`
/// and `(1, 3)` are feasible but markedly longer; the remaining three
/// pairs are explicitly infeasible. A minimum spanning tree must
/// therefore select four of the five ring edges.
///
/// Facility `0` is the data centre at the top of the ring.
///
/// # Panics
///
/// Panics only if the fixture itself is misconfigured.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "fixture computes ring coordinates trigonometrically"
)]
pub fn pentagon_network() -> FacilityNetwork {
    let mut network = FacilityNetwork::new("pentagon", 5).expect("capacity within bounds");

    let centre = Coord { x: 74.0, y: 18.5 };
    let radius_deg = 0.008;
    for id in 0..5 {
        let angle = f64::from(u32::try_from(id).expect("small id"))
            .mul_add(72.0, 90.0)
            .to_radians();
        let location = Coord {
            x: centre.x + radius_deg * angle.cos(),
            y: centre.y + radius_deg * angle.sin(),
        };
        let category = if id == 0 {
            FacilityCategory::DataCenter
        } else {
            FacilityCategory::Residential
        };
        network
            .add_facility(Facility::new(
                id,
                format!("ring-{id}"),
                location,
                category,
                100,
            ))
            .expect("id in range");
    }

    // Ring edges, then the two long chords, then the impossible pairs.
    for (src, dest) in [(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)] {
        network
            .add_connection(src, dest, Terrain::Plain, true)
            .expect("valid pair");
    }
    for (src, dest) in [(0, 2), (1, 3)] {
        network
            .add_connection(src, dest, Terrain::Plain, true)
            .expect("valid pair");
    }
    for (src, dest) in [(0, 3), (1, 4), (2, 4)] {
        network
            .add_connection(src, dest, Terrain::Plain, false)
            .expect("valid pair");
    }
    network
}

/// Whether `source` and `target` are adjacent on the pentagon ring.
#[must_use]
pub const fn is_pentagon_ring_edge(source: usize, target: usize) -> bool {
    matches!(
        (source, target),
        (0, 1) | (1, 0) | (1, 2) | (2, 1) | (2, 3) | (3, 2) | (3, 4) | (4, 3) | (4, 0) | (0, 4)
    )
}

/// A chain of `length` facilities along a line of longitude, each linked
/// to its successor over plain terrain.
///
/// Facility `0` is the data centre. The resulting network is connected
/// and its unique spanning tree is the chain itself.
///
/// # Panics
///
/// Panics when `length` is zero, exceeds the supported capacity, or the
/// fixture is misconfigured.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "fixture spaces facilities along a line"
)]
pub fn chain_network(length: usize) -> FacilityNetwork {
    let mut network = FacilityNetwork::new("chain", length).expect("capacity within bounds");
    for id in 0..length {
        let offset = f64::from(u32::try_from(id).expect("bounded length")) * 0.01;
        let category = if id == 0 {
            FacilityCategory::DataCenter
        } else {
            FacilityCategory::Residential
        };
        network
            .add_facility(facility(id, category, 74.0 + offset, 18.5, 250))
            .expect("id in range");
    }
    for id in 1..length {
        network
            .add_connection(id - 1, id, Terrain::Plain, true)
            .expect("valid pair");
    }
    network
}

/// Four facilities forming two clusters with no feasible link between
/// them: `0 — 1` and `2 — 3`.
///
/// Growing a tree from facility `0` reaches exactly two vertices.
///
/// # Panics
///
/// Panics only if the fixture itself is misconfigured.
#[must_use]
pub fn split_clusters_network() -> FacilityNetwork {
    let mut network = FacilityNetwork::new("split", 4).expect("capacity within bounds");
    network
        .add_facility(facility(0, FacilityCategory::DataCenter, 74.0, 18.5, 0))
        .expect("id in range");
    network
        .add_facility(facility(1, FacilityCategory::School, 74.01, 18.5, 400))
        .expect("id in range");
    network
        .add_facility(facility(2, FacilityCategory::Hospital, 74.3, 18.8, 1200))
        .expect("id in range");
    network
        .add_facility(facility(3, FacilityCategory::Residential, 74.31, 18.8, 2000))
        .expect("id in range");
    network
        .add_connection(0, 1, Terrain::Urban, true)
        .expect("valid pair");
    network
        .add_connection(2, 3, Terrain::Plain, true)
        .expect("valid pair");
    network
}

/// A mixed eight-facility city with every pair feasible.
///
/// A handful of connections are configured explicitly with varied
/// terrain; the rest are derived by the recompute passes over plain
/// terrain. Facility `0` is the data centre hub.
///
/// # Panics
///
/// Panics only if the fixture itself is misconfigured.
#[must_use]
pub fn demo_network() -> FacilityNetwork {
    let mut network = FacilityNetwork::new("demo-city", 8).expect("capacity within bounds");
    let plan = [
        (0, FacilityCategory::DataCenter, 74.000, 18.500, 0),
        (1, FacilityCategory::Hospital, 74.020, 18.510, 1500),
        (2, FacilityCategory::School, 74.035, 18.495, 800),
        (3, FacilityCategory::Government, 73.990, 18.520, 300),
        (4, FacilityCategory::Residential, 74.010, 18.530, 2600),
        (5, FacilityCategory::Residential, 74.045, 18.515, 3100),
        (6, FacilityCategory::Commercial, 74.025, 18.485, 450),
        (7, FacilityCategory::Commercial, 73.980, 18.495, 700),
    ];
    for (id, category, x, y, population) in plan {
        network
            .add_facility(facility(id, category, x, y, population))
            .expect("id in range");
    }
    for (src, dest, terrain) in [
        (0, 1, Terrain::Urban),
        (0, 3, Terrain::River),
        (1, 4, Terrain::Urban),
        (2, 5, Terrain::Hilly),
        (2, 6, Terrain::Forest),
    ] {
        network
            .add_connection(src, dest, terrain, true)
            .expect("valid pair");
    }
    network.recompute_all_distances();
    network.recompute_all_costs();
    network
}
