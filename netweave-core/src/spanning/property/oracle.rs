//! Reference spanning-forest oracles.

use crate::Graph;

fn find(parent: &mut [usize], vertex: usize) -> usize {
    let mut root = vertex;
    while parent[root] != root {
        root = parent[root];
    }
    root
}

/// Returns the number of weak components of `graph`.
pub(super) fn component_count(graph: &Graph) -> usize {
    let n = graph.vertex_count();
    let mut parent: Vec<usize> = (0..n).collect();
    let mut count = n;
    for edge in graph.edges() {
        let (left, right) = (find(&mut parent, edge.from()), find(&mut parent, edge.to()));
        if left != right {
            parent[right] = left;
            count -= 1;
        }
    }
    count
}

/// Minimum total latency over every acyclic edge subset of size
/// `V - components`, found by exhaustive enumeration.
pub(super) fn exhaustive_minimum(graph: &Graph) -> f64 {
    let edges: Vec<(usize, usize, f64)> = graph
        .edges()
        .map(|edge| (edge.from(), edge.to(), edge.time()))
        .collect();
    let target = graph.vertex_count() - component_count(graph);
    let mut best = f64::INFINITY;
    let mut chosen = Vec::with_capacity(target);
    enumerate(&edges, 0, target, &mut chosen, graph.vertex_count(), &mut best);
    best
}

fn enumerate(
    edges: &[(usize, usize, f64)],
    start: usize,
    target: usize,
    chosen: &mut Vec<usize>,
    vertex_count: usize,
    best: &mut f64,
) {
    if chosen.len() == target {
        let mut parent: Vec<usize> = (0..vertex_count).collect();
        let mut total = 0.0;
        for &index in chosen.iter() {
            let (from, to, time) = edges[index];
            let (left, right) = (find(&mut parent, from), find(&mut parent, to));
            if left == right {
                return;
            }
            parent[right] = left;
            total += time;
        }
        *best = best.min(total);
        return;
    }
    for index in start..edges.len() {
        chosen.push(index);
        enumerate(edges, index + 1, target, chosen, vertex_count, best);
        chosen.pop();
    }
}

/// Total latency of a minimum spanning forest by sequential Kruskal.
pub(super) fn kruskal_total(graph: &Graph) -> f64 {
    let mut edges: Vec<(usize, usize, f64)> = graph
        .edges()
        .map(|edge| (edge.from(), edge.to(), edge.time()))
        .collect();
    edges.sort_by(|left, right| left.2.total_cmp(&right.2));
    let mut parent: Vec<usize> = (0..graph.vertex_count()).collect();
    let mut total = 0.0;
    for (from, to, time) in edges {
        let (left, right) = (find(&mut parent, from), find(&mut parent, to));
        if left != right {
            parent[right] = left;
            total += time;
        }
    }
    total
}
