//! Property runners for the spanning engine.

use proptest::prelude::*;
use proptest::test_runner::TestCaseResult;
use rand::{SeedableRng, rngs::SmallRng};

use crate::{
    Orientation,
    spanning::prim_spanning_forest,
    test_utils::{
        NetworkFixture, TopologyKind, generate_fixture, network_fixture_strategy,
        suite_proptest_config,
    },
};

use super::oracle::{component_count, exhaustive_minimum, kruskal_total};

fn close(left: f64, right: f64) -> bool {
    (left - right).abs() <= 1e-9 * left.abs().max(right.abs()).max(1.0)
}

fn run_structure(fixture: &NetworkFixture) -> TestCaseResult {
    let graph = fixture.graph(Orientation::Directed);
    let forest = prim_spanning_forest(&graph);
    let components = component_count(&graph);

    prop_assert_eq!(forest.tree_count(), components);
    prop_assert_eq!(forest.edges().len(), graph.vertex_count() - components);
    prop_assert_eq!(forest.is_tree(), components == 1);
    for (id, edge) in forest.edge_ids().iter().zip(forest.edges()) {
        prop_assert_eq!(graph.edge(*id), Some(edge));
    }
    prop_assert!(close(forest.total_time(), kruskal_total(&graph)));
    Ok(())
}

fn run_exhaustive(fixture: &NetworkFixture) -> TestCaseResult {
    let graph = fixture.graph(Orientation::Undirected);
    let forest = prim_spanning_forest(&graph);
    let oracle = exhaustive_minimum(&graph);
    prop_assert!(
        close(forest.total_time(), oracle),
        "prim {} vs exhaustive {oracle}",
        forest.total_time()
    );
    Ok(())
}

proptest! {
    #![proptest_config(suite_proptest_config(128))]

    #[test]
    fn prim_matches_exhaustive_enumeration(fixture in network_fixture_strategy(5)) {
        run_exhaustive(&fixture)?;
    }

    #[test]
    fn prim_forest_structure(fixture in network_fixture_strategy(30)) {
        run_structure(&fixture)?;
    }
}

#[rstest::rstest]
#[case::random(TopologyKind::Random, 42)]
#[case::uniform(TopologyKind::Uniform, 42)]
#[case::ring(TopologyKind::Ring, 3)]
#[case::dense(TopologyKind::Dense, 17)]
#[case::islands(TopologyKind::Islands, 8)]
fn prim_forest_structure_rstest(#[case] kind: TopologyKind, #[case] seed: u64) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let fixture = generate_fixture(kind, 20, &mut rng);
    run_structure(&fixture).expect("forest structure must hold");
}
