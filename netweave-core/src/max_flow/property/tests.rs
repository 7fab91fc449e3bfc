//! Property runners for the max-flow engine.

use proptest::prelude::*;
use proptest::test_runner::TestCaseResult;
use rand::{SeedableRng, rngs::SmallRng};

use crate::{
    Orientation,
    max_flow::{FLOW_EPSILON, MaxFlow},
    test_utils::{
        NetworkFixture, TopologyKind, generate_fixture, network_fixture_strategy,
        suite_proptest_config,
    },
};

use super::oracle::brute_force_min_cut;

fn close(left: f64, right: f64) -> bool {
    (left - right).abs() <= 1e-7 * left.abs().max(right.abs()).max(1.0)
}

fn run_min_cut_equivalence(fixture: &NetworkFixture, orientation: Orientation) -> TestCaseResult {
    let graph = fixture.graph(orientation);
    let n = graph.vertex_count();
    for source in 0..n {
        for sink in (0..n).filter(|&sink| sink != source) {
            let flow = MaxFlow::compute(&graph, source, sink)
                .map_err(|err| TestCaseError::fail(err.to_string()))?;
            let oracle = brute_force_min_cut(&graph, source, sink);
            prop_assert!(
                close(flow.value(), oracle),
                "{source}->{sink}: flow {}, min cut {oracle}",
                flow.value()
            );

            let reported_cut: f64 = flow
                .min_cut()
                .iter()
                .filter_map(|id| graph.edge(*id))
                .map(|edge| edge.bandwidth())
                .sum();
            prop_assert!(close(reported_cut, flow.value()));
        }
    }
    Ok(())
}

fn run_feasibility(fixture: &NetworkFixture, orientation: Orientation) -> TestCaseResult {
    let graph = fixture.graph(orientation);
    let n = graph.vertex_count();
    let (source, sink) = (0, n - 1);
    let flow = MaxFlow::compute(&graph, source, sink)
        .map_err(|err| TestCaseError::fail(err.to_string()))?;

    let mut balance = vec![0.0; n];
    for (edge, &amount) in graph.edges().zip(flow.edge_flows()) {
        prop_assert!(amount.abs() <= edge.bandwidth() + FLOW_EPSILON);
        if orientation == Orientation::Directed {
            prop_assert!(amount >= -FLOW_EPSILON);
        }
        balance[edge.from()] -= amount;
        balance[edge.to()] += amount;
    }
    for (vertex, &net) in balance.iter().enumerate() {
        if source == sink {
            prop_assert!(close(net, 0.0));
        } else if vertex == source {
            prop_assert!(close(-net, flow.value()));
        } else if vertex == sink {
            prop_assert!(close(net, flow.value()));
        } else {
            prop_assert!(close(net, 0.0), "vertex {vertex} leaks {net}");
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(suite_proptest_config(64))]

    #[test]
    fn flow_equals_brute_force_min_cut(fixture in network_fixture_strategy(7)) {
        run_min_cut_equivalence(&fixture, Orientation::Directed)?;
        run_min_cut_equivalence(&fixture, Orientation::Undirected)?;
    }

    #[test]
    fn flow_is_feasible(fixture in network_fixture_strategy(24)) {
        run_feasibility(&fixture, Orientation::Directed)?;
        run_feasibility(&fixture, Orientation::Undirected)?;
    }
}

#[rstest::rstest]
#[case::random(TopologyKind::Random, 42)]
#[case::uniform(TopologyKind::Uniform, 99)]
#[case::ring(TopologyKind::Ring, 7)]
#[case::dense(TopologyKind::Dense, 2024)]
#[case::islands(TopologyKind::Islands, 5)]
fn flow_equals_brute_force_min_cut_rstest(#[case] kind: TopologyKind, #[case] seed: u64) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let fixture = generate_fixture(kind, 8, &mut rng);
    run_min_cut_equivalence(&fixture, Orientation::Directed).expect("max-flow min-cut must hold");
    run_feasibility(&fixture, Orientation::Undirected).expect("flow must be feasible");
}
