//! Seeded synthetic network topologies.
//!
//! A generated network is a ring backbone over every vertex, so it is always
//! weakly connected, plus `extra_degree` random chords per vertex. Bandwidths,
//! lengths and cable types are drawn from a [`SmallRng`] seeded by the
//! config, so runs are reproducible.

use netweave_core::{Cable, Edge, EdgeError, Graph, GraphError, Orientation};
use rand::{Rng, SeedableRng, rngs::SmallRng};
use thiserror::Error;

/// Errors raised while generating a synthetic topology.
#[derive(Debug, Error)]
pub enum SyntheticError {
    /// The topology must contain at least two vertices.
    #[error("a synthetic topology needs at least two vertices (got {vertex_count})")]
    TooFewVertices {
        /// Requested vertex count.
        vertex_count: usize,
    },
    /// A generated link failed validation.
    #[error(transparent)]
    Edge(#[from] EdgeError),
    /// A generated link referenced a missing vertex.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Configuration for [`generate_topology`].
#[derive(Clone, Debug)]
pub struct TopologyConfig {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Random chords added per vertex.
    pub extra_degree: usize,
    /// Link orientation of the generated graph.
    pub orientation: Orientation,
    /// Seed for the random generator.
    pub seed: u64,
}

/// Generates a reproducible network for benchmarking.
///
/// # Errors
/// Returns [`SyntheticError::TooFewVertices`] when fewer than two vertices
/// are requested.
///
/// # Examples
/// ```
/// use netweave_benches::topology::{TopologyConfig, generate_topology};
/// use netweave_core::Orientation;
///
/// let graph = generate_topology(&TopologyConfig {
///     vertex_count: 10,
///     extra_degree: 2,
///     orientation: Orientation::Directed,
///     seed: 7,
/// })?;
/// assert_eq!(graph.vertex_count(), 10);
/// assert_eq!(graph.edge_count(), 30);
/// # Ok::<(), netweave_benches::topology::SyntheticError>(())
/// ```
pub fn generate_topology(config: &TopologyConfig) -> Result<Graph, SyntheticError> {
    let n = config.vertex_count;
    if n < 2 {
        return Err(SyntheticError::TooFewVertices { vertex_count: n });
    }
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut graph = Graph::with_orientation(n, config.orientation);

    for from in 0..n {
        let to = (from + 1) % n;
        graph.add_edge(random_link(&mut rng, from, to)?)?;
    }
    for from in 0..n {
        for _ in 0..config.extra_degree {
            let to = rng.gen_range(0..n);
            graph.add_edge(random_link(&mut rng, from, to)?)?;
        }
    }
    Ok(graph)
}

fn random_link(rng: &mut SmallRng, from: usize, to: usize) -> Result<Edge, EdgeError> {
    let bandwidth = rng.gen_range(1.0..100.0);
    let length = rng.gen_range(0.0..50.0);
    let cable = if rng.gen_bool(0.7) {
        Cable::copper()
    } else {
        Cable::fiber()
    };
    Edge::with_vertex_ids(from, to, bandwidth, length, cable)
}

#[cfg(test)]
mod tests {
    use super::*;

    use netweave_core::{Components, Connectivity};
    use rstest::rstest;

    fn config(vertex_count: usize, seed: u64) -> TopologyConfig {
        TopologyConfig {
            vertex_count,
            extra_degree: 3,
            orientation: Orientation::Directed,
            seed,
        }
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    fn rejects_degenerate_sizes(#[case] vertex_count: usize) {
        let err = generate_topology(&config(vertex_count, 1)).expect_err("too small");
        assert!(matches!(err, SyntheticError::TooFewVertices { .. }));
    }

    #[rstest]
    #[case(2, 11)]
    #[case(50, 42)]
    fn ring_backbone_connects_every_vertex(#[case] vertex_count: usize, #[case] seed: u64) {
        let graph = generate_topology(&config(vertex_count, seed)).expect("topology builds");
        assert_eq!(graph.edge_count(), vertex_count * 4);
        assert!(Components::of(&graph, Connectivity::Strong).is_connected());
    }

    #[test]
    fn same_seed_same_network() {
        let first = generate_topology(&config(30, 9)).expect("topology builds");
        let second = generate_topology(&config(30, 9)).expect("topology builds");
        assert!(first.edges().eq(second.edges()));
    }
}
