//! Lowest-latency routing benchmarks.
//!
//! Measures single-source Dijkstra and the all-pairs sweep, which runs one
//! Dijkstra per source in parallel.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use netweave_benches::{
    error::BenchSetupError,
    params::TopologyBenchParams,
    topology::{TopologyConfig, generate_topology},
};
use netweave_core::{AllPairsShortestPaths, Orientation, ShortestPaths};

/// Seed used for all synthetic topology generation in this benchmark.
const SEED: u64 = 42;

/// Random chords per vertex.
const EXTRA_DEGREE: usize = 4;

/// Network sizes to benchmark.
const VERTEX_COUNTS: &[usize] = &[100, 500, 1_000];

fn routing_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("dijkstra");
    group.sample_size(20);

    for &vertex_count in VERTEX_COUNTS {
        let graph = generate_topology(&TopologyConfig {
            vertex_count,
            extra_degree: EXTRA_DEGREE,
            orientation: Orientation::Directed,
            seed: SEED,
        })?;
        let _warmup = ShortestPaths::from_source(&graph, 0)?;

        let params = TopologyBenchParams {
            vertex_count,
            extra_degree: EXTRA_DEGREE,
        };
        group.bench_with_input(
            BenchmarkId::new("single_source", &params),
            &graph,
            |b, graph| b.iter(|| ShortestPaths::from_source(graph, 0)),
        );
        group.bench_with_input(
            BenchmarkId::new("all_pairs", &params),
            &graph,
            |b, graph| b.iter(|| AllPairsShortestPaths::new(graph)),
        );
    }

    group.finish();
    Ok(())
}

fn routing(c: &mut Criterion) {
    if let Err(err) = routing_impl(c) {
        panic!("routing benchmark setup failed: {err}");
    }
}

criterion_group!(benches, routing);
criterion_main!(benches);
