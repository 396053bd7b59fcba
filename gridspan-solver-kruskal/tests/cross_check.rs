//! Cross-checks between the Kruskal and Prim solvers.
//!
//! Any two minimum spanning trees of the same network carry the same
//! total cost, so the two independent implementations must agree on every
//! input — including the partial trees produced by disconnected networks.

use geo::Coord;
use gridspan_core::test_support::{
    chain_network, demo_network, pentagon_network, split_clusters_network,
};
use gridspan_core::{
    Facility, FacilityCategory, FacilityNetwork, SpanRequest, SpanningTreeSolver,
};
use gridspan_solver_kruskal::KruskalSolver;
use gridspan_solver_prim::PrimSolver;
use proptest::prelude::*;
use rstest::rstest;

fn total_costs(network: &FacilityNetwork) -> (f64, f64) {
    let request = SpanRequest::from_hub();
    let prim = PrimSolver::new()
        .solve(network, &request)
        .expect("solvable network");
    let kruskal = KruskalSolver::new()
        .solve(network, &request)
        .expect("solvable network");
    assert_eq!(
        prim.tree.connection_count(),
        kruskal.tree.connection_count(),
        "both solvers must attach the same number of facilities"
    );
    (prim.tree.total_cost(), kruskal.tree.total_cost())
}

#[rstest]
fn agree_on_the_pentagon() {
    let (prim, kruskal) = total_costs(&pentagon_network());
    assert!((prim - kruskal).abs() < 1e-9);
}

#[rstest]
fn agree_on_a_chain() {
    let (prim, kruskal) = total_costs(&chain_network(8));
    assert!((prim - kruskal).abs() < 1e-9);
}

#[rstest]
fn agree_on_the_demo_city() {
    let (prim, kruskal) = total_costs(&demo_network());
    assert!((prim - kruskal).abs() < 1e-9);
}

#[rstest]
fn agree_on_disconnected_networks() {
    let (prim, kruskal) = total_costs(&split_clusters_network());
    assert!((prim - kruskal).abs() < 1e-9);
}

fn build_network(plan: &[(f64, f64, u32)]) -> FacilityNetwork {
    let mut network = FacilityNetwork::new("generated", plan.len()).expect("size within bounds");
    for (id, &(x, y, population)) in plan.iter().enumerate() {
        let category = if id == 0 {
            FacilityCategory::DataCenter
        } else {
            FacilityCategory::Residential
        };
        network
            .add_facility(Facility::new(
                id,
                format!("generated-{id}"),
                Coord { x, y },
                category,
                population,
            ))
            .expect("id in range");
    }
    network.recompute_all_distances();
    network.recompute_all_costs();
    network
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// Property: on fully connected generated networks the two solvers
    /// produce trees of identical total cost.
    #[test]
    fn generated_networks_agree(
        plan in prop::collection::vec(
            (73.9_f64..74.1, 18.4_f64..18.6, 0_u32..5000),
            2..12,
        )
    ) {
        let network = build_network(&plan);
        let (prim, kruskal) = total_costs(&network);
        prop_assert!(
            (prim - kruskal).abs() < 1e-9,
            "prim {prim} != kruskal {kruskal}"
        );
    }
}
