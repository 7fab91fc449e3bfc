//! Lowest-latency spanning forest with Prim's algorithm.
//!
//! The graph is read through its undirected view, so a directed link may be
//! crossed in either direction. Crossing edges are ordered by
//! `(time, edge id)`, which makes the selection deterministic when latencies
//! tie.

use std::{cmp::Ordering, collections::BinaryHeap};

use tracing::{info, instrument, warn};

use crate::{Edge, EdgeId, Graph};

/// Spanning tree of every component, in selection order.
///
/// When the input is connected the forest is a single tree with `V - 1`
/// edges. Otherwise [`SpanningForest::is_tree`] is `false` and one tree is
/// reported per component.
#[derive(Clone, Debug, PartialEq)]
pub struct SpanningForest {
    edges: Vec<Edge>,
    edge_ids: Vec<EdgeId>,
    tree_count: usize,
    total_time: f64,
}

impl SpanningForest {
    /// Returns the selected edges in selection order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the graph ids of the selected edges, parallel to
    /// [`SpanningForest::edges`].
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_ids(&self) -> &[EdgeId] { &self.edge_ids }

    /// Returns the number of trees, one per component.
    #[must_use]
    #[rustfmt::skip]
    pub fn tree_count(&self) -> usize { self.tree_count }

    /// Returns the summed latency of the selected edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn total_time(&self) -> f64 { self.total_time }

    /// Returns `true` when the forest is a single spanning tree.
    #[must_use]
    pub fn is_tree(&self) -> bool {
        self.tree_count == 1
    }
}

#[derive(Clone, Copy, Debug)]
struct CrossingEdge {
    time: f64,
    id: EdgeId,
    target: usize,
}

impl PartialEq for CrossingEdge {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for CrossingEdge {}

// Reversed so `BinaryHeap` pops the lightest edge first.
impl Ord for CrossingEdge {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .time
            .total_cmp(&self.time)
            .then_with(|| other.id.cmp(&self.id))
            .then_with(|| other.target.cmp(&self.target))
    }
}

impl PartialOrd for CrossingEdge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Computes the lowest-latency spanning forest of `graph`.
///
/// Trees are grown from the lowest unvisited vertex. A graph with no vertices
/// yields an empty forest with zero trees.
///
/// # Examples
/// ```
/// use netweave_core::{Edge, Graph, prim_spanning_forest};
///
/// let mut graph = Graph::directed(3);
/// graph.add_edge(Edge::new(0, 1, 10.0, 5.0, "copper")?)?;
/// graph.add_edge(Edge::new(2, 1, 4.0, 4.0, "fiber")?)?;
/// graph.add_edge(Edge::new(0, 2, 1.0, 9.0, "copper")?)?;
/// let forest = prim_spanning_forest(&graph);
/// assert!(forest.is_tree());
/// assert_eq!(forest.edges().len(), 2);
/// assert_eq!(forest.total_time(), 1.5);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[must_use]
#[instrument(
    name = "core.spanning_forest",
    skip(graph),
    fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
)]
pub fn prim_spanning_forest(graph: &Graph) -> SpanningForest {
    let n = graph.vertex_count();
    let mut visited = vec![false; n];
    let mut frontier = BinaryHeap::new();
    let mut edge_ids = Vec::with_capacity(n.saturating_sub(1));
    let mut tree_count = 0;

    for root in 0..n {
        if visited[root] {
            continue;
        }
        tree_count += 1;
        visit(graph, root, &mut visited, &mut frontier);
        while let Some(CrossingEdge { id, target, .. }) = frontier.pop() {
            if visited[target] {
                continue;
            }
            edge_ids.push(id);
            visit(graph, target, &mut visited, &mut frontier);
        }
    }

    let edges: Vec<Edge> = edge_ids
        .iter()
        .filter_map(|id| graph.edge(*id).cloned())
        .collect();
    let total_time = edges.iter().map(Edge::time).sum();

    if tree_count > 1 {
        warn!(
            trees = tree_count,
            "graph is disconnected; returning a spanning forest"
        );
    }
    info!(edges = edges.len(), total_time, "spanning forest computed");

    SpanningForest {
        edges,
        edge_ids,
        tree_count,
        total_time,
    }
}

fn visit(
    graph: &Graph,
    vertex: usize,
    visited: &mut [bool],
    frontier: &mut BinaryHeap<CrossingEdge>,
) {
    visited[vertex] = true;
    for hop in graph.undirected_hops(vertex) {
        if !visited[hop.target] {
            frontier.push(CrossingEdge {
                time: hop.edge.time(),
                id: hop.id,
                target: hop.target,
            });
        }
    }
}


#[cfg(test)]
mod property;
