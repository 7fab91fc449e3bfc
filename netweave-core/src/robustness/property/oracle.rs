//! Brute-force disconnecting-pair oracle using undirected flood fill.

use std::collections::VecDeque;

use crate::Graph;

/// Weak component count after removing `first` and `second`.
pub(super) fn remaining_components(graph: &Graph, first: usize, second: usize) -> usize {
    let n = graph.vertex_count();
    let mut neighbours = vec![Vec::new(); n];
    for edge in graph.edges() {
        let (from, to) = (edge.from(), edge.to());
        if [from, to].iter().any(|&v| v == first || v == second) {
            continue;
        }
        neighbours[from].push(to);
        neighbours[to].push(from);
    }

    let mut seen = vec![false; n];
    seen[first] = true;
    seen[second] = true;
    let mut count = 0;
    for start in 0..n {
        if seen[start] {
            continue;
        }
        count += 1;
        seen[start] = true;
        let mut queue = VecDeque::from([start]);
        while let Some(vertex) = queue.pop_front() {
            for &next in &neighbours[vertex] {
                if !seen[next] {
                    seen[next] = true;
                    queue.push_back(next);
                }
            }
        }
    }
    count
}

/// Every `(i, j, components)` triple whose remainder is not one component.
pub(super) fn brute_force_pairs(graph: &Graph) -> Vec<(usize, usize, usize)> {
    let n = graph.vertex_count();
    let mut pairs = Vec::new();
    for first in 0..n {
        for second in first + 1..n {
            let components = remaining_components(graph, first, second);
            if components != 1 {
                pairs.push((first, second, components));
            }
        }
    }
    pairs
}
