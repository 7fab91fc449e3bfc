//! Floyd-Warshall oracle for routing property verification.

use crate::{Graph, Orientation};

/// Computes the full latency matrix; unreachable pairs hold infinity.
pub(super) fn floyd_warshall(graph: &Graph) -> Vec<Vec<f64>> {
    let n = graph.vertex_count();
    let mut dist = vec![vec![f64::INFINITY; n]; n];
    for (vertex, row) in dist.iter_mut().enumerate() {
        row[vertex] = 0.0;
    }
    for edge in graph.edges() {
        let (from, to, time) = (edge.from(), edge.to(), edge.time());
        if time < dist[from][to] {
            dist[from][to] = time;
        }
        if graph.orientation() == Orientation::Undirected && time < dist[to][from] {
            dist[to][from] = time;
        }
    }
    for via in 0..n {
        for from in 0..n {
            for to in 0..n {
                let through = dist[from][via] + dist[via][to];
                if through < dist[from][to] {
                    dist[from][to] = through;
                }
            }
        }
    }
    dist
}
