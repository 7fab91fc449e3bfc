//! Benchmark parameter types.

use std::fmt;

/// Parameters for one topology-sized benchmark run.
#[derive(Clone, Debug)]
pub struct TopologyBenchParams {
    /// Number of vertices in the generated network.
    pub vertex_count: usize,
    /// Extra links per vertex on top of the ring backbone.
    pub extra_degree: usize,
}

impl fmt::Display for TopologyBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "V={},d={}", self.vertex_count, self.extra_degree)
    }
}
