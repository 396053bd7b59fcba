//! Tests for the `PrimSolver`.

use super::*;
use gridspan_core::test_support::{
    chain_network, is_pentagon_ring_edge, isolated_pair_network, pentagon_network,
    split_clusters_network,
};
use gridspan_core::{Facility, FacilityCategory, FacilityNetwork};
use rstest::rstest;

fn solve(network: &FacilityNetwork) -> SpanResponse {
    PrimSolver::new()
        .solve(network, &SpanRequest::from_hub())
        .expect("solvable network")
}

#[rstest]
fn chain_tree_is_the_chain_itself() {
    let network = chain_network(5);
    let response = solve(&network);

    assert!(response.tree.is_spanning());
    assert_eq!(response.tree.connection_count(), 4);
    assert_eq!(response.diagnostics.vertices_visited, 5);
    for vertex in 1..5 {
        assert_eq!(response.tree.parent(vertex), Some(vertex - 1));
        assert_eq!(
            response.tree.key(vertex),
            network.cost(vertex - 1, vertex),
            "key of {vertex} must equal its tree-edge cost"
        );
    }
}

#[rstest]
fn pentagon_tree_uses_only_ring_edges() {
    let network = pentagon_network();
    let response = solve(&network);

    assert!(response.tree.is_spanning());
    assert_eq!(response.tree.connection_count(), 4);
    let mut expected_total = 0.0;
    for connection in response.tree.connections() {
        assert!(
            is_pentagon_ring_edge(connection.source, connection.target),
            "chord {}-{} should never beat a ring edge",
            connection.source,
            connection.target
        );
        expected_total += connection.cost;
    }
    assert!((response.tree.total_cost() - expected_total).abs() < 1e-9);
}

#[rstest]
fn single_facility_yields_an_empty_spanning_tree() {
    let mut network = FacilityNetwork::new("solo", 1).expect("capacity within bounds");
    network
        .add_facility(Facility::new(
            0,
            "Main Data Center",
            geo::Coord { x: 74.0, y: 18.5 },
            FacilityCategory::DataCenter,
            0,
        ))
        .expect("id in range");

    let response = solve(&network);
    assert!(response.tree.is_spanning());
    assert_eq!(response.tree.connection_count(), 0);
    assert_eq!(response.tree.total_cost(), 0.0);
    assert_eq!(response.diagnostics.vertices_visited, 1);
}

#[rstest]
fn infeasible_pair_reports_disconnection() {
    let network = isolated_pair_network();
    let response = solve(&network);

    assert!(!response.tree.is_spanning());
    assert_eq!(response.tree.connection_count(), 0);
    assert_eq!(response.tree.total_cost(), 0.0);
    assert_eq!(response.diagnostics.vertices_visited, 1);
    assert_eq!(response.tree.parent(1), None);
    assert_eq!(response.tree.key(1), Some(f64::INFINITY));
}

#[rstest]
fn split_clusters_cover_only_the_start_component() {
    let network = split_clusters_network();
    let response = solve(&network);

    assert!(!response.tree.is_spanning());
    assert_eq!(response.tree.connection_count(), 1);
    assert_eq!(response.diagnostics.vertices_visited, 2);
    assert_eq!(response.tree.parent(1), Some(0));
    assert_eq!(response.tree.parent(2), None);
    assert_eq!(response.tree.parent(3), None);
}

#[rstest]
fn solving_twice_is_deterministic() {
    let network = pentagon_network();
    let first = solve(&network);
    let second = solve(&network);
    assert_eq!(first.tree, second.tree);
}

#[rstest]
fn start_override_changes_the_root() {
    let network = chain_network(4);
    let response = PrimSolver::new()
        .solve(&network, &SpanRequest::starting_at(3))
        .expect("facility 3 exists");

    assert!(response.tree.is_spanning());
    assert_eq!(response.tree.parent(3), None);
    assert_eq!(response.tree.parent(0), Some(1));
    assert_eq!(response.tree.key(3), Some(0.0));
}

#[rstest]
fn missing_hub_is_reported() {
    let mut network = FacilityNetwork::new("no-hub", 2).expect("capacity within bounds");
    network
        .add_facility(Facility::new(
            0,
            "School",
            geo::Coord { x: 74.0, y: 18.5 },
            FacilityCategory::School,
            100,
        ))
        .expect("id in range");

    let err = PrimSolver::new()
        .solve(&network, &SpanRequest::from_hub())
        .expect_err("no hub designated");
    assert_eq!(err, SolveError::MissingHub);
}

#[rstest]
fn trace_records_one_step_per_attached_vertex() {
    let network = pentagon_network();
    let (response, trace) = PrimSolver::new()
        .solve_traced(&network, &SpanRequest::from_hub())
        .expect("solvable network");

    assert_eq!(trace.len(), response.diagnostics.vertices_visited);
    let first = trace.steps.first().expect("at least the root step");
    assert_eq!(first.selected, 0, "the hub is attached first");
    let last = trace.steps.last().expect("at least the root step");
    assert_eq!(last.parents, response.tree.parents());
    assert_eq!(last.keys, response.tree.keys());
}

#[rstest]
fn traced_and_untraced_runs_agree() {
    let network = pentagon_network();
    let untraced = solve(&network);
    let (traced, _) = PrimSolver::new()
        .solve_traced(&network, &SpanRequest::from_hub())
        .expect("solvable network");
    assert_eq!(untraced.tree, traced.tree);
}

#[rstest]
fn trace_is_shorter_on_disconnected_networks() {
    let network = split_clusters_network();
    let (response, trace) = PrimSolver::new()
        .solve_traced(&network, &SpanRequest::from_hub())
        .expect("solvable network");
    assert_eq!(trace.len(), 2);
    assert!(!response.tree.is_spanning());
}
