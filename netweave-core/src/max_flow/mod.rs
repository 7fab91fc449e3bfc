//! Maximum throughput between two vertices using Edmonds-Karp.
//!
//! Every graph edge `k` owns two residual arcs: arc `2k` runs `from -> to`
//! with the edge's bandwidth as capacity, arc `2k + 1` runs `to -> from` and
//! starts empty on directed graphs or at full bandwidth on undirected graphs.
//! Pushing flow along one arc returns the same amount to its twin, so the net
//! flow on edge `k` is always `capacity(2k) - residual(2k)`.

use std::collections::VecDeque;

use tracing::{debug, info, instrument};

use crate::{EdgeId, Graph, Orientation, QueryError};

/// Residual capacities at or below this value count as saturated.
pub const FLOW_EPSILON: f64 = 1e-9;

/// Result of a maximum-flow computation.
///
/// # Examples
/// ```
/// use netweave_core::{Edge, Graph, MaxFlow};
///
/// let mut graph = Graph::directed(3);
/// graph.add_edge(Edge::new(0, 1, 10.0, 5.0, "copper")?)?;
/// graph.add_edge(Edge::new(1, 2, 5.0, 10.0, "copper")?)?;
/// let flow = MaxFlow::compute(&graph, 0, 2)?;
/// assert_eq!(flow.value(), 5.0);
/// assert_eq!(flow.source_side(), vec![0, 1]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct MaxFlow {
    source: usize,
    sink: usize,
    value: f64,
    edge_flows: Vec<f64>,
    source_side: Vec<bool>,
    cut: Vec<EdgeId>,
    augmentations: usize,
}

impl MaxFlow {
    /// Computes the maximum flow from `source` to `sink` with bandwidth as
    /// capacity.
    ///
    /// # Errors
    /// Returns [`QueryError::VertexOutOfRange`] when either vertex is not in
    /// the graph.
    #[instrument(
        name = "core.max_flow",
        err,
        skip(graph),
        fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
    )]
    pub fn compute(graph: &Graph, source: usize, sink: usize) -> Result<Self, QueryError> {
        graph.ensure_vertex(source)?;
        graph.ensure_vertex(sink)?;

        let mut network = ResidualNetwork::new(graph);
        let mut value = 0.0;
        let mut augmentations = 0;

        if source != sink {
            while let Some(path) = network.augmenting_path(source, sink) {
                let bottleneck = path
                    .iter()
                    .map(|&arc| network.residual[arc])
                    .fold(f64::INFINITY, f64::min);
                for &arc in &path {
                    network.push(arc, bottleneck);
                }
                value += bottleneck;
                augmentations += 1;
                debug!(bottleneck, hops = path.len(), "augmented");
            }
        }

        let source_side = network.reachable_from(source);
        let edge_flows = (0..graph.edge_count())
            .map(|edge| network.net_flow(edge))
            .collect();
        let cut = if source == sink {
            Vec::new()
        } else {
            cut_edges(graph, &source_side)
        };

        info!(value, augmentations, "max flow computed");
        Ok(Self {
            source,
            sink,
            value,
            edge_flows,
            source_side,
            cut,
            augmentations,
        })
    }

    /// Returns the total flow value, never negative.
    #[must_use]
    #[rustfmt::skip]
    pub fn value(&self) -> f64 { self.value }

    /// Returns the source vertex.
    #[must_use]
    #[rustfmt::skip]
    pub fn source(&self) -> usize { self.source }

    /// Returns the sink vertex.
    #[must_use]
    #[rustfmt::skip]
    pub fn sink(&self) -> usize { self.sink }

    /// Returns the number of augmenting paths pushed.
    #[must_use]
    #[rustfmt::skip]
    pub fn augmentations(&self) -> usize { self.augmentations }

    /// Returns the net flow on every graph edge, indexed by insertion order.
    ///
    /// On undirected graphs a negative value means the flow runs `to -> from`.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_flows(&self) -> &[f64] { &self.edge_flows }

    /// Returns the net flow assigned to `edge`.
    #[must_use]
    pub fn flow_on(&self, edge: EdgeId) -> Option<f64> {
        self.edge_flows.get(edge.get()).copied()
    }

    /// Returns the vertices reachable from the source in the final residual
    /// network, in ascending order. They form the source side of a minimum
    /// cut.
    #[must_use]
    pub fn source_side(&self) -> Vec<usize> {
        self.source_side
            .iter()
            .enumerate()
            .filter_map(|(vertex, &inside)| inside.then_some(vertex))
            .collect()
    }

    /// Returns the edges crossing the minimum cut. Their bandwidths sum to
    /// [`MaxFlow::value`].
    #[must_use]
    #[rustfmt::skip]
    pub fn min_cut(&self) -> &[EdgeId] { &self.cut }
}

struct ResidualNetwork {
    heads: Vec<usize>,
    capacity: Vec<f64>,
    residual: Vec<f64>,
    outgoing: Vec<Vec<usize>>,
}

impl ResidualNetwork {
    fn new(graph: &Graph) -> Self {
        let arc_count = graph.edge_count() * 2;
        let mut heads = Vec::with_capacity(arc_count);
        let mut capacity = Vec::with_capacity(arc_count);
        let mut outgoing = vec![Vec::new(); graph.vertex_count()];
        let symmetric = graph.orientation() == Orientation::Undirected;

        for (index, edge) in graph.edges().enumerate() {
            let (from, to, bandwidth) = (edge.from(), edge.to(), edge.bandwidth());
            heads.extend([to, from]);
            capacity.extend([bandwidth, if symmetric { bandwidth } else { 0.0 }]);
            // Self-loops never lie on a shortest augmenting path.
            if from != to {
                outgoing[from].push(2 * index);
                outgoing[to].push(2 * index + 1);
            }
        }

        Self {
            heads,
            residual: capacity.clone(),
            capacity,
            outgoing,
        }
    }

    /// Breadth-first search for the shortest path with spare capacity,
    /// returned as arc ids from source to sink.
    fn augmenting_path(&self, source: usize, sink: usize) -> Option<Vec<usize>> {
        let mut parent_arc: Vec<Option<usize>> = vec![None; self.outgoing.len()];
        let mut visited = vec![false; self.outgoing.len()];
        let mut queue = VecDeque::from([source]);
        visited[source] = true;

        while let Some(vertex) = queue.pop_front() {
            for &arc in &self.outgoing[vertex] {
                let head = self.heads[arc];
                if visited[head] || self.residual[arc] <= FLOW_EPSILON {
                    continue;
                }
                visited[head] = true;
                parent_arc[head] = Some(arc);
                if head == sink {
                    return Some(self.trace(&parent_arc, sink));
                }
                queue.push_back(head);
            }
        }
        None
    }

    fn trace(&self, parent_arc: &[Option<usize>], sink: usize) -> Vec<usize> {
        let mut path = Vec::new();
        let mut vertex = sink;
        while let Some(arc) = parent_arc[vertex] {
            path.push(arc);
            // The tail of an arc is the head of its twin.
            vertex = self.heads[arc ^ 1];
        }
        path.reverse();
        path
    }

    fn push(&mut self, arc: usize, amount: f64) {
        self.residual[arc] -= amount;
        self.residual[arc ^ 1] += amount;
    }

    fn net_flow(&self, edge: usize) -> f64 {
        let forward = 2 * edge;
        self.capacity[forward] - self.residual[forward]
    }

    fn reachable_from(&self, source: usize) -> Vec<bool> {
        let mut seen = vec![false; self.outgoing.len()];
        let mut queue = VecDeque::from([source]);
        seen[source] = true;
        while let Some(vertex) = queue.pop_front() {
            for &arc in &self.outgoing[vertex] {
                let head = self.heads[arc];
                if !seen[head] && self.residual[arc] > FLOW_EPSILON {
                    seen[head] = true;
                    queue.push_back(head);
                }
            }
        }
        seen
    }
}

fn cut_edges(graph: &Graph, source_side: &[bool]) -> Vec<EdgeId> {
    let symmetric = graph.orientation() == Orientation::Undirected;
    graph
        .edges_with_ids()
        .filter(|(_, edge)| {
            let (from, to) = (source_side[edge.from()], source_side[edge.to()]);
            (from && !to) || (symmetric && to && !from)
        })
        .map(|(id, _)| id)
        .collect()
}


#[cfg(test)]
mod property;
