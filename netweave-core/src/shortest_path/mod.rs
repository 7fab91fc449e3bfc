//! Lowest-latency routing with Dijkstra's algorithm.
//!
//! Edge weights are [`Edge::time`], which edge validation keeps finite and
//! non-negative. [`ShortestPaths`] answers single-source queries;
//! [`AllPairsShortestPaths`] caches one single-source run per vertex, computed
//! in parallel when the `parallel` feature is enabled.

use std::{cmp::Ordering, collections::BinaryHeap, convert::Infallible, fmt};

use tracing::{debug, instrument};

use crate::{
    CancellationToken, Edge, Graph, QueryError, cancel::sweep_rows, graph::Orientation,
};

/// Ordered sequence of edges from a source to a destination.
#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    edges: Vec<Edge>,
    total_time: f64,
}

impl Route {
    /// Returns the edges in source-to-destination order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the summed latency of the route.
    #[must_use]
    #[rustfmt::skip]
    pub fn total_time(&self) -> f64 { self.total_time }

    /// Returns the number of hops.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.edges.len() }

    /// Returns `true` for the self-route, which has no edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.edges.is_empty() }

    /// Returns the smallest bandwidth along the route, or `None` for the empty
    /// self-route.
    ///
    /// # Examples
    /// ```
    /// use netweave_core::{Edge, Graph, ShortestPaths};
    ///
    /// let mut graph = Graph::directed(3);
    /// graph.add_edge(Edge::new(0, 1, 10.0, 5.0, "copper")?)?;
    /// graph.add_edge(Edge::new(1, 2, 5.0, 10.0, "copper")?)?;
    /// let route = ShortestPaths::from_source(&graph, 0)?.path_to(2)?;
    /// assert_eq!(route.bottleneck_bandwidth(), Some(5.0));
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[must_use]
    pub fn bottleneck_bandwidth(&self) -> Option<f64> {
        self.edges
            .iter()
            .map(Edge::bandwidth)
            .min_by(f64::total_cmp)
    }
}

/// Result of one single-source Dijkstra run.
#[derive(Clone, Debug)]
pub struct ShortestPaths {
    source: usize,
    orientation: Orientation,
    distances: Vec<f64>,
    parents: Vec<Option<Edge>>,
}

impl ShortestPaths {
    /// Runs Dijkstra from `source`.
    ///
    /// # Errors
    /// Returns [`QueryError::VertexOutOfRange`] when `source` is not a vertex
    /// of `graph`.
    #[instrument(
        name = "core.shortest_paths",
        err,
        skip(graph),
        fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
    )]
    pub fn from_source(graph: &Graph, source: usize) -> Result<Self, QueryError> {
        graph.ensure_vertex(source)?;
        let paths = dijkstra(graph, source);
        debug!(
            reachable = paths.distances.iter().filter(|d| d.is_finite()).count(),
            "single-source search completed"
        );
        Ok(paths)
    }

    /// Returns the source vertex of this run.
    #[must_use]
    #[rustfmt::skip]
    pub fn source(&self) -> usize { self.source }

    /// Returns `true` when `target` is reachable from the source.
    #[must_use]
    pub fn has_path_to(&self, target: usize) -> bool {
        self.distance_to(target).is_some()
    }

    /// Returns the lowest total latency to `target`, or `None` when it is
    /// unreachable or out of range.
    #[must_use]
    pub fn distance_to(&self, target: usize) -> Option<f64> {
        self.distances
            .get(target)
            .copied()
            .filter(|distance| distance.is_finite())
    }

    /// Reconstructs the lowest-latency route to `target`.
    ///
    /// # Errors
    /// Returns [`QueryError::VertexOutOfRange`] for an unknown `target` and
    /// [`QueryError::NoPath`] when it is unreachable. Check
    /// [`ShortestPaths::has_path_to`] first to avoid the latter.
    pub fn path_to(&self, target: usize) -> Result<Route, QueryError> {
        if target >= self.distances.len() {
            return Err(QueryError::VertexOutOfRange {
                vertex: target,
                vertex_count: self.distances.len(),
            });
        }
        let total_time = self.distance_to(target).ok_or(QueryError::NoPath {
            from: self.source,
            to: target,
        })?;

        let mut edges = Vec::new();
        let mut current = target;
        while let Some(edge) = self.parents.get(current).and_then(Option::as_ref) {
            current = match self.orientation {
                Orientation::Directed => edge.from(),
                Orientation::Undirected => edge.opposite(current),
            };
            edges.push(edge.clone());
        }
        edges.reverse();

        Ok(Route { edges, total_time })
    }
}

/// Cached single-source results for every vertex.
#[derive(Clone, Debug)]
pub struct AllPairsShortestPaths {
    rows: Vec<ShortestPaths>,
}

impl AllPairsShortestPaths {
    /// Runs one Dijkstra per source vertex.
    #[must_use]
    pub fn new(graph: &Graph) -> Self {
        let Ok(all_pairs) = Self::compute(graph, |_| Ok::<(), Infallible>(()));
        all_pairs
    }

    /// Runs one Dijkstra per source vertex, checking `token` before each run.
    ///
    /// # Errors
    /// Returns [`QueryError::Cancelled`] once the token is cancelled.
    pub fn new_with_cancellation(
        graph: &Graph,
        token: &CancellationToken,
    ) -> Result<Self, QueryError> {
        Self::compute(graph, |_| token.check())
    }

    #[instrument(
        name = "core.all_pairs_shortest_paths",
        err,
        skip(graph, check),
        fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
    )]
    fn compute<E>(
        graph: &Graph,
        check: impl Fn(usize) -> Result<(), E> + Send + Sync,
    ) -> Result<Self, E>
    where
        E: fmt::Display + Send,
    {
        let rows = sweep_rows(graph.vertex_count(), |source| -> Result<ShortestPaths, E> {
            check(source)?;
            Ok(dijkstra(graph, source))
        })?;
        Ok(Self { rows })
    }

    /// Returns `true` when `target` is reachable from `source`.
    #[must_use]
    pub fn has_path(&self, source: usize, target: usize) -> bool {
        self.distance(source, target).is_some()
    }

    /// Returns the lowest total latency from `source` to `target`.
    #[must_use]
    pub fn distance(&self, source: usize, target: usize) -> Option<f64> {
        self.rows.get(source)?.distance_to(target)
    }

    /// Returns the lowest-latency route from `source` to `target`.
    ///
    /// # Errors
    /// Returns [`QueryError::VertexOutOfRange`] for unknown vertices and
    /// [`QueryError::NoPath`] when `target` is unreachable.
    pub fn path(&self, source: usize, target: usize) -> Result<Route, QueryError> {
        self.rows
            .get(source)
            .ok_or(QueryError::VertexOutOfRange {
                vertex: source,
                vertex_count: self.rows.len(),
            })?
            .path_to(target)
    }

    /// Returns the single-source result rooted at `source`.
    #[must_use]
    pub fn from_source(&self, source: usize) -> Option<&ShortestPaths> {
        self.rows.get(source)
    }
}

/// Frontier entry, ordered so the nearest vertex pops first from a max-heap.
#[derive(Clone, Copy, Debug, PartialEq)]
struct FrontierEntry {
    vertex: usize,
    distance: f64,
}

impl Eq for FrontierEntry {}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn dijkstra(graph: &Graph, source: usize) -> ShortestPaths {
    let vertex_count = graph.vertex_count();
    let mut distances = vec![f64::INFINITY; vertex_count];
    let mut parents: Vec<Option<Edge>> = vec![None; vertex_count];
    let mut frontier = BinaryHeap::new();

    distances[source] = 0.0;
    frontier.push(FrontierEntry {
        vertex: source,
        distance: 0.0,
    });

    while let Some(FrontierEntry { vertex, distance }) = frontier.pop() {
        // Stale entry superseded by a later relaxation.
        if distance > distances[vertex] {
            continue;
        }
        for hop in graph.hops(vertex) {
            let candidate = distance + hop.edge.time();
            if candidate < distances[hop.target] {
                distances[hop.target] = candidate;
                parents[hop.target] = Some(hop.edge.clone());
                frontier.push(FrontierEntry {
                    vertex: hop.target,
                    distance: candidate,
                });
            }
        }
    }

    ShortestPaths {
        source,
        orientation: graph.orientation(),
        distances,
        parents,
    }
}


#[cfg(test)]
mod property;
