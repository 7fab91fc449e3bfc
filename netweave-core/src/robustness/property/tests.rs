//! Property runners for the failure sweep.

use proptest::prelude::*;
use proptest::test_runner::TestCaseResult;
use rand::{SeedableRng, rngs::SmallRng};

use crate::{
    Connectivity, Orientation,
    robustness::find_disconnecting_pairs,
    test_utils::{
        NetworkFixture, TopologyKind, generate_fixture, network_fixture_strategy,
        suite_proptest_config,
    },
};

use super::oracle::brute_force_pairs;

fn run_oracle_equivalence(fixture: &NetworkFixture) -> TestCaseResult {
    for orientation in [Orientation::Directed, Orientation::Undirected] {
        let graph = fixture.graph(orientation);
        let found: Vec<_> = find_disconnecting_pairs(&graph, Connectivity::Weak)
            .into_iter()
            .map(|pair| (pair.first, pair.second, pair.components))
            .collect();
        prop_assert_eq!(found, brute_force_pairs(&graph));
    }
    Ok(())
}

fn run_strong_superset(fixture: &NetworkFixture) -> TestCaseResult {
    let graph = fixture.graph(Orientation::Directed);
    let weak = find_disconnecting_pairs(&graph, Connectivity::Weak);
    let strong = find_disconnecting_pairs(&graph, Connectivity::Strong);
    for pair in &weak {
        prop_assert!(
            strong
                .iter()
                .any(|other| (other.first, other.second) == (pair.first, pair.second)),
            "weakly disconnecting pair {:?} missing under strong semantics",
            pair
        );
    }
    prop_assert!(strong.windows(2).all(|w| (w[0].first, w[0].second) < (w[1].first, w[1].second)));
    Ok(())
}

proptest! {
    #![proptest_config(suite_proptest_config(96))]

    #[test]
    fn sweep_matches_brute_force(fixture in network_fixture_strategy(12)) {
        run_oracle_equivalence(&fixture)?;
    }

    #[test]
    fn strong_sweep_reports_a_superset(fixture in network_fixture_strategy(10)) {
        run_strong_superset(&fixture)?;
    }
}

#[rstest::rstest]
#[case::random(TopologyKind::Random, 42)]
#[case::uniform(TopologyKind::Uniform, 31)]
#[case::ring(TopologyKind::Ring, 12)]
#[case::dense(TopologyKind::Dense, 5)]
#[case::islands(TopologyKind::Islands, 77)]
fn sweep_matches_brute_force_rstest(#[case] kind: TopologyKind, #[case] seed: u64) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let fixture = generate_fixture(kind, 14, &mut rng);
    run_oracle_equivalence(&fixture).expect("sweep must match the oracle");
    run_strong_superset(&fixture).expect("strong sweep must cover weak pairs");
}
