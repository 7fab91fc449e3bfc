//! Exhaustive minimum-cut oracle.

use crate::{Graph, Orientation};

/// Returns the capacity of the cheapest cut separating `source` from `sink`.
///
/// Enumerates all `2^(V-2)` placements of the remaining vertices, so callers
/// must keep `V` small.
pub(super) fn brute_force_min_cut(graph: &Graph, source: usize, sink: usize) -> f64 {
    let n = graph.vertex_count();
    let others: Vec<usize> = (0..n).filter(|&v| v != source && v != sink).collect();
    let symmetric = graph.orientation() == Orientation::Undirected;
    let mut best = f64::INFINITY;

    for mask in 0_u32..(1 << others.len()) {
        let mut inside = vec![false; n];
        inside[source] = true;
        for (bit, &vertex) in others.iter().enumerate() {
            inside[vertex] = mask & (1 << bit) != 0;
        }
        let capacity: f64 = graph
            .edges()
            .filter(|edge| {
                let (from, to) = (inside[edge.from()], inside[edge.to()]);
                (from && !to) || (symmetric && to && !from)
            })
            .map(|edge| edge.bandwidth())
            .sum();
        best = best.min(capacity);
    }
    best
}
