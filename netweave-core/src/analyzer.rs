//! Query facade over one loaded network.
//!
//! [`AnalyzerBuilder`] fixes the connectivity semantics and an optional
//! cancellation token; [`NetworkAnalyzer`] then answers the five network
//! questions against its immutable graph.

use tracing::{info, instrument, warn};

use crate::{
    AllPairsShortestPaths, Cable, CancellationToken, Components, Connectivity, DisconnectingPair,
    Graph, MaxFlow, Result, Route, ShortestPaths, SpanningForest, prim_spanning_forest,
    robustness::{find_disconnecting_pairs, find_disconnecting_pairs_with_cancellation},
};

/// Configures and constructs [`NetworkAnalyzer`] instances.
///
/// # Examples
/// ```
/// use netweave_core::{AnalyzerBuilder, Connectivity, Graph};
///
/// let analyzer = AnalyzerBuilder::new(Graph::directed(2))
///     .with_connectivity(Connectivity::Strong)
///     .build();
/// assert_eq!(analyzer.connectivity(), Connectivity::Strong);
/// assert_eq!(analyzer.graph().vertex_count(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct AnalyzerBuilder {
    graph: Graph,
    connectivity: Connectivity,
    cancellation: Option<CancellationToken>,
}

impl AnalyzerBuilder {
    /// Creates a builder over `graph` with weak connectivity and no
    /// cancellation token.
    #[must_use]
    pub fn new(graph: Graph) -> Self {
        Self {
            graph,
            connectivity: Connectivity::default(),
            cancellation: None,
        }
    }

    /// Sets the semantics used by the cable and failure queries.
    #[must_use]
    pub fn with_connectivity(mut self, connectivity: Connectivity) -> Self {
        self.connectivity = connectivity;
        self
    }

    /// Returns the configured connectivity semantics.
    #[must_use]
    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    /// Attaches a token observed by the long-running sweeps.
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// Constructs the analyzer.
    #[must_use]
    pub fn build(self) -> NetworkAnalyzer {
        NetworkAnalyzer {
            graph: self.graph,
            connectivity: self.connectivity,
            cancellation: self.cancellation,
        }
    }
}

/// Answers routing, capacity and resilience questions about one network.
///
/// # Examples
/// ```
/// use netweave_core::{AnalyzerBuilder, Cable, Edge, Graph};
///
/// let mut graph = Graph::directed(3);
/// graph.add_edge(Edge::new(0, 1, 10.0, 5.0, "copper")?)?;
/// graph.add_edge(Edge::new(1, 2, 5.0, 10.0, "copper")?)?;
/// let analyzer = AnalyzerBuilder::new(graph).build();
///
/// let route = analyzer.lowest_latency_path(0, 2)?.expect("2 is reachable");
/// assert_eq!(route.total_time(), 2.5);
/// assert!(analyzer.cable_only_connected(&Cable::copper()));
/// assert_eq!(analyzer.max_throughput(0, 2)?, 5.0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug)]
pub struct NetworkAnalyzer {
    graph: Graph,
    connectivity: Connectivity,
    cancellation: Option<CancellationToken>,
}

impl NetworkAnalyzer {
    /// Returns the analysed graph.
    #[must_use]
    #[rustfmt::skip]
    pub fn graph(&self) -> &Graph { &self.graph }

    /// Returns the configured connectivity semantics.
    #[must_use]
    #[rustfmt::skip]
    pub fn connectivity(&self) -> Connectivity { self.connectivity }

    /// Returns the lowest-latency route from `from` to `to`, or `None` when
    /// `to` is unreachable.
    ///
    /// # Errors
    /// Returns [`crate::NetworkError::Query`] when either vertex is out of
    /// range.
    #[instrument(name = "core.lowest_latency_path", err, skip(self))]
    pub fn lowest_latency_path(&self, from: usize, to: usize) -> Result<Option<Route>> {
        self.graph.ensure_vertex(from)?;
        self.graph.ensure_vertex(to)?;
        let paths = ShortestPaths::from_source(&self.graph, from)?;
        if !paths.has_path_to(to) {
            warn!("destination is unreachable");
            return Ok(None);
        }
        Ok(Some(paths.path_to(to)?))
    }

    /// Returns cached shortest paths for every pair, honouring the configured
    /// cancellation token.
    ///
    /// # Errors
    /// Returns [`crate::NetworkError::Query`] when the sweep is cancelled.
    pub fn all_pairs_shortest_paths(&self) -> Result<AllPairsShortestPaths> {
        Ok(match &self.cancellation {
            Some(token) => AllPairsShortestPaths::new_with_cancellation(&self.graph, token)?,
            None => AllPairsShortestPaths::new(&self.graph),
        })
    }

    /// Returns `true` when the links made of `cable` alone connect every
    /// vertex under the configured semantics.
    #[must_use]
    #[instrument(
        name = "core.cable_only_connected",
        skip(self, cable),
        fields(cable = %cable, semantics = %self.connectivity),
    )]
    pub fn cable_only_connected(&self, cable: &Cable) -> bool {
        let components =
            Components::of_filtered(&self.graph, self.connectivity, |edge| edge.cable() == cable);
        info!(components = components.count(), "cable view labelled");
        components.is_connected()
    }

    /// Returns the maximum throughput from `from` to `to`.
    ///
    /// # Errors
    /// Returns [`crate::NetworkError::Query`] when either vertex is out of
    /// range.
    pub fn max_throughput(&self, from: usize, to: usize) -> Result<f64> {
        Ok(self.max_flow(from, to)?.value())
    }

    /// Returns the full maximum-flow result, including per-edge flows and the
    /// minimum cut.
    ///
    /// # Errors
    /// Returns [`crate::NetworkError::Query`] when either vertex is out of
    /// range.
    pub fn max_flow(&self, from: usize, to: usize) -> Result<MaxFlow> {
        Ok(MaxFlow::compute(&self.graph, from, to)?)
    }

    /// Returns the lowest-latency spanning forest.
    #[must_use]
    pub fn lowest_latency_spanning_structure(&self) -> SpanningForest {
        prim_spanning_forest(&self.graph)
    }

    /// Returns every vertex pair whose joint failure disconnects the rest of
    /// the network, sorted by `(first, second)`.
    ///
    /// # Errors
    /// Returns [`crate::NetworkError::Query`] when the sweep is cancelled.
    pub fn find_disconnecting_pairs(&self) -> Result<Vec<DisconnectingPair>> {
        Ok(match &self.cancellation {
            Some(token) => {
                find_disconnecting_pairs_with_cancellation(&self.graph, self.connectivity, token)?
            }
            None => find_disconnecting_pairs(&self.graph, self.connectivity),
        })
    }
}
