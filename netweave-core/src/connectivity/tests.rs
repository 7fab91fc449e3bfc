//! Unit and property tests for component labelling.

use proptest::prelude::*;
use rstest::rstest;

use crate::{
    Cable, Graph, Orientation,
    test_utils::{graph_of, network_fixture_strategy, suite_proptest_config, worked_example},
};

use super::{Components, Connectivity};

#[rstest]
#[case::weak(Connectivity::Weak, true, 1)]
#[case::strong(Connectivity::Strong, false, 4)]
fn copper_view_of_worked_example(
    #[case] semantics: Connectivity,
    #[case] connected: bool,
    #[case] count: usize,
) {
    let graph = worked_example(Orientation::Directed);
    let copper = Components::of_filtered(&graph, semantics, |e| *e.cable() == Cable::copper());
    assert_eq!(copper.is_connected(), connected);
    assert_eq!(copper.count(), count);
    assert_eq!(copper.semantics(), semantics);
}

#[test]
fn strong_components_follow_cycles() {
    let graph = graph_of(
        Orientation::Directed,
        5,
        &[
            (0, 1, 1.0, 1.0, "copper"),
            (1, 2, 1.0, 1.0, "copper"),
            (2, 0, 1.0, 1.0, "copper"),
            (2, 3, 1.0, 1.0, "copper"),
            (3, 4, 1.0, 1.0, "copper"),
            (4, 3, 1.0, 1.0, "copper"),
        ],
    );
    let strong = Components::of(&graph, Connectivity::Strong);
    assert_eq!(strong.count(), 2);
    assert_eq!(strong.members(), vec![vec![0, 1, 2], vec![3, 4]]);
    assert!(Components::of(&graph, Connectivity::Weak).is_connected());
}

#[test]
fn component_ids_are_ordered_by_lowest_vertex() {
    let graph = graph_of(
        Orientation::Undirected,
        5,
        &[(3, 4, 1.0, 1.0, "copper"), (0, 2, 1.0, 1.0, "copper")],
    );
    let components = Components::of(&graph, Connectivity::Weak);
    assert_eq!(components.count(), 3);
    assert_eq!(components.component_of(0), Some(0));
    assert_eq!(components.component_of(2), Some(0));
    assert_eq!(components.component_of(1), Some(1));
    assert_eq!(components.component_of(4), Some(2));
    assert_eq!(components.component_of(9), None);
}

#[test]
fn excluded_vertices_drop_their_edges() {
    // A path 0-1-2 splits when the middle vertex goes.
    let graph = graph_of(
        Orientation::Directed,
        3,
        &[(0, 1, 1.0, 1.0, "copper"), (1, 2, 1.0, 1.0, "copper")],
    );
    let remaining = Components::excluding(&graph, Connectivity::Weak, &[1]);
    assert_eq!(remaining.count(), 2);
    assert_eq!(remaining.component_of(1), None);
    assert_eq!(remaining.members(), vec![vec![0], vec![2]]);
}

#[rstest]
#[case::weak(Connectivity::Weak)]
#[case::strong(Connectivity::Strong)]
fn empty_and_singleton_graphs(#[case] semantics: Connectivity) {
    let empty = Components::of(&graph_of(Orientation::Directed, 0, &[]), semantics);
    assert_eq!(empty.count(), 0);
    assert!(!empty.is_connected());

    let single = Components::of(&graph_of(Orientation::Directed, 1, &[]), semantics);
    assert!(single.is_connected());

    let all_gone = Components::excluding(&graph_of(Orientation::Directed, 2, &[]), semantics, &[0, 1]);
    assert_eq!(all_gone.count(), 0);
}

#[test]
fn strong_equals_weak_on_undirected_graphs() {
    let graph = worked_example(Orientation::Undirected);
    let strong = Components::of_filtered(&graph, Connectivity::Strong, |e| {
        *e.cable() == Cable::copper()
    });
    assert!(strong.is_connected());
}

fn label_vector(components: &Components, n: usize) -> Vec<Option<usize>> {
    (0..n).map(|v| components.component_of(v)).collect()
}

proptest! {
    #![proptest_config(suite_proptest_config(128))]

    #[test]
    fn removing_edges_never_decreases_component_count(
        fixture in network_fixture_strategy(14),
        keep_mask in proptest::collection::vec(any::<bool>(), 0..256),
    ) {
        let graph = fixture.graph(Orientation::Directed);
        let mut reduced_graph = Graph::directed(graph.vertex_count());
        let keep = keep_mask.iter().copied().chain(std::iter::repeat(true));
        for (edge, keep) in graph.edges().zip(keep) {
            if keep {
                reduced_graph.add_edge(edge.clone()).expect("endpoints are in range");
            }
        }
        for semantics in [Connectivity::Weak, Connectivity::Strong] {
            let full = Components::of(&graph, semantics);
            let reduced = Components::of(&reduced_graph, semantics);
            prop_assert!(reduced.count() >= full.count());
        }
    }

    #[test]
    fn strong_components_refine_weak_components(fixture in network_fixture_strategy(14)) {
        let graph = fixture.graph(Orientation::Directed);
        let weak = Components::of(&graph, Connectivity::Weak);
        let strong = Components::of(&graph, Connectivity::Strong);
        prop_assert!(strong.count() >= weak.count());
        let n = graph.vertex_count();
        let weak_labels = label_vector(&weak, n);
        let strong_labels = label_vector(&strong, n);
        for a in 0..n {
            for b in 0..n {
                if strong_labels[a] == strong_labels[b] {
                    prop_assert_eq!(weak_labels[a], weak_labels[b]);
                }
            }
        }
    }
}
