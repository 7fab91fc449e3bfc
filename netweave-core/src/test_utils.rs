//! Shared test utilities for `netweave-core`.
//!
//! Topology fixtures are generated from a seeded [`SmallRng`] so a failing
//! proptest case can be replayed from its `(kind, seed)` pair alone.

use netweave_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::{prelude::*, test_runner::Config as ProptestConfig};
use rand::{Rng, SeedableRng, rngs::SmallRng};
use test_strategy::Arbitrary;

use crate::{Cable, Edge, Graph, Orientation};

/// Builds a standard proptest configuration from the shared CI profile.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Builds an edge in tests where the attributes are known to be valid.
pub(crate) fn link(from: usize, to: usize, bandwidth: f64, length: f64, cable: &str) -> Edge {
    Edge::with_vertex_ids(from, to, bandwidth, length, cable).expect("test edge must be valid")
}

/// Builds a graph from `(from, to, bandwidth, length, cable)` tuples.
pub(crate) fn graph_of(
    orientation: Orientation,
    vertex_count: usize,
    edges: &[(usize, usize, f64, f64, &str)],
) -> Graph {
    let mut graph = Graph::with_orientation(vertex_count, orientation);
    for &(from, to, bandwidth, length, cable) in edges {
        graph
            .add_edge(link(from, to, bandwidth, length, cable))
            .expect("test edge endpoints must be in range");
    }
    graph
}

/// The four-vertex network used throughout the documentation.
pub(crate) fn worked_example(orientation: Orientation) -> Graph {
    graph_of(
        orientation,
        4,
        &[
            (0, 1, 10.0, 5.0, "copper"),
            (1, 2, 5.0, 10.0, "copper"),
            (2, 3, 8.0, 4.0, "fiber"),
            (3, 0, 6.0, 3.0, "copper"),
        ],
    )
}

/// Shape of a generated topology.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(crate) enum TopologyKind {
    /// Random edges with unique-ish latencies.
    Random,
    /// Many links sharing one latency, stressing tie-breaking.
    Uniform,
    /// A ring with a few chords.
    Ring,
    /// Near-complete graph.
    Dense,
    /// Several islands with no links between them.
    Islands,
}

/// Generated network plus the inputs that produced it.
#[derive(Clone, Debug)]
pub(crate) struct NetworkFixture {
    pub vertex_count: usize,
    pub edges: Vec<Edge>,
    pub kind: TopologyKind,
}

impl NetworkFixture {
    /// Materialises the fixture under the given orientation.
    pub(crate) fn graph(&self, orientation: Orientation) -> Graph {
        let mut graph = Graph::with_orientation(self.vertex_count, orientation);
        for edge in &self.edges {
            graph
                .add_edge(edge.clone())
                .expect("fixture endpoints must be in range");
        }
        graph
    }
}

/// Strategy producing fixtures with between 1 and `max_vertices` vertices.
pub(crate) fn network_fixture_strategy(
    max_vertices: usize,
) -> impl Strategy<Value = NetworkFixture> {
    (any::<TopologyKind>(), any::<u64>()).prop_map(move |(kind, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(kind, max_vertices, &mut rng)
    })
}

/// Generates a fixture of the requested shape.
pub(crate) fn generate_fixture(
    kind: TopologyKind,
    max_vertices: usize,
    rng: &mut SmallRng,
) -> NetworkFixture {
    let vertex_count = rng.gen_range(1..=max_vertices.max(1));
    let edges = match kind {
        TopologyKind::Random => probabilistic(rng, vertex_count, 0.3, |rng| {
            (rng.gen_range(1.0..100.0), rng.gen_range(0.0..50.0))
        }),
        TopologyKind::Uniform => probabilistic(rng, vertex_count, 0.4, |_| (4.0, 2.0)),
        TopologyKind::Ring => ring(rng, vertex_count),
        TopologyKind::Dense => probabilistic(rng, vertex_count, 0.85, |rng| {
            (f64::from(rng.gen_range(1_u8..=8)), f64::from(rng.gen_range(0_u8..=8)))
        }),
        TopologyKind::Islands => islands(rng, vertex_count),
    };
    NetworkFixture {
        vertex_count,
        edges,
        kind,
    }
}

fn random_cable(rng: &mut SmallRng) -> &'static str {
    if rng.gen_bool(0.6) { "copper" } else { "fiber" }
}

fn probabilistic(
    rng: &mut SmallRng,
    vertex_count: usize,
    probability: f64,
    mut attributes: impl FnMut(&mut SmallRng) -> (f64, f64),
) -> Vec<Edge> {
    let mut edges = Vec::new();
    for from in 0..vertex_count {
        for to in 0..vertex_count {
            if from != to && rng.gen_bool(probability) {
                let (bandwidth, length) = attributes(rng);
                let cable = random_cable(rng);
                edges.push(link(from, to, bandwidth, length, cable));
            }
        }
    }
    edges
}

fn ring(rng: &mut SmallRng, vertex_count: usize) -> Vec<Edge> {
    let mut edges = Vec::new();
    if vertex_count < 2 {
        return edges;
    }
    for from in 0..vertex_count {
        let cable = random_cable(rng);
        let bandwidth = rng.gen_range(1.0..20.0);
        edges.push(link(from, (from + 1) % vertex_count, bandwidth, 1.0, cable));
    }
    for _ in 0..vertex_count / 3 {
        let from = rng.gen_range(0..vertex_count);
        let to = rng.gen_range(0..vertex_count);
        let cable = random_cable(rng);
        edges.push(link(from, to, rng.gen_range(1.0..20.0), 3.0, cable));
    }
    edges
}

fn islands(rng: &mut SmallRng, vertex_count: usize) -> Vec<Edge> {
    let island_count = rng.gen_range(1..=vertex_count.min(3));
    let mut edges = Vec::new();
    for from in 0..vertex_count {
        for to in 0..vertex_count {
            if from != to && from % island_count == to % island_count && rng.gen_bool(0.5) {
                let cable = random_cable(rng);
                edges.push(link(from, to, rng.gen_range(1.0..10.0), 2.0, cable));
            }
        }
    }
    edges
}
