//! Append-only adjacency-list graph store.
//!
//! The vertex count is fixed at construction and edges can only be appended,
//! so every query observes a stable snapshot. Edges are identified by a dense
//! [`EdgeId`] equal to their insertion index.

use crate::{edge::Edge, error::GraphError};

/// Whether links may be traversed in both directions.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Orientation {
    /// Links run from `from` to `to` only.
    #[default]
    Directed,
    /// Links may be traversed either way.
    Undirected,
}

/// Dense identifier of an edge within one [`Graph`].
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    /// Returns the insertion index backing this id.
    #[must_use]
    #[rustfmt::skip]
    pub const fn get(self) -> usize { self.0 }
}

/// One traversable step out of a vertex.
#[derive(Clone, Copy, Debug)]
pub struct Hop<'a> {
    /// Identifier of the traversed edge.
    pub id: EdgeId,
    /// The traversed edge.
    pub edge: &'a Edge,
    /// Vertex reached by the step.
    pub target: usize,
}

/// Weighted network over a fixed vertex set.
///
/// # Examples
/// ```
/// use netweave_core::{Edge, Graph};
///
/// let mut graph = Graph::directed(3);
/// graph.add_edge(Edge::new(0, 1, 10.0, 5.0, "copper")?)?;
/// graph.add_edge(Edge::new(1, 2, 5.0, 10.0, "fiber")?)?;
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.adjacent(1).count(), 1);
/// assert_eq!(graph.incident(1).count(), 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug)]
pub struct Graph {
    orientation: Orientation,
    edges: Vec<Edge>,
    // Outgoing ids for directed graphs, incident ids for undirected graphs.
    adjacency: Vec<Vec<EdgeId>>,
    // Incoming ids; only populated for directed graphs.
    incoming: Vec<Vec<EdgeId>>,
}

impl Graph {
    /// Creates an empty directed graph over `vertex_count` vertices.
    #[must_use]
    pub fn directed(vertex_count: usize) -> Self {
        Self::with_orientation(vertex_count, Orientation::Directed)
    }

    /// Creates an empty undirected graph over `vertex_count` vertices.
    #[must_use]
    pub fn undirected(vertex_count: usize) -> Self {
        Self::with_orientation(vertex_count, Orientation::Undirected)
    }

    /// Creates an empty graph with an explicit [`Orientation`].
    ///
    /// Allocation failure aborts; see [`Graph::try_with_orientation`] for
    /// vertex counts read from input.
    #[must_use]
    pub fn with_orientation(vertex_count: usize, orientation: Orientation) -> Self {
        let incoming_lists = match orientation {
            Orientation::Directed => vertex_count,
            Orientation::Undirected => 0,
        };
        Self {
            orientation,
            edges: Vec::new(),
            adjacency: vec![Vec::new(); vertex_count],
            incoming: vec![Vec::new(); incoming_lists],
        }
    }

    /// Creates an empty graph, reporting allocation failure instead of
    /// aborting.
    ///
    /// Use this when `vertex_count` comes from untrusted input.
    ///
    /// # Errors
    /// Returns [`GraphError::TooManyVertices`] when the adjacency lists for
    /// `vertex_count` vertices cannot be reserved.
    ///
    /// # Examples
    /// ```
    /// use netweave_core::{Graph, GraphError, Orientation};
    ///
    /// let graph = Graph::try_with_orientation(4, Orientation::Undirected)?;
    /// assert_eq!(graph.vertex_count(), 4);
    ///
    /// let err = Graph::try_with_orientation(usize::MAX, Orientation::Directed)
    ///     .unwrap_err();
    /// assert_eq!(err, GraphError::TooManyVertices { vertex_count: usize::MAX });
    /// # Ok::<(), GraphError>(())
    /// ```
    pub fn try_with_orientation(
        vertex_count: usize,
        orientation: Orientation,
    ) -> Result<Self, GraphError> {
        let incoming_lists = match orientation {
            Orientation::Directed => vertex_count,
            Orientation::Undirected => 0,
        };
        let too_many = || GraphError::TooManyVertices { vertex_count };
        let adjacency = empty_lists(vertex_count).ok_or_else(too_many)?;
        let incoming = empty_lists(incoming_lists).ok_or_else(too_many)?;
        Ok(Self {
            orientation,
            edges: Vec::new(),
            adjacency,
            incoming,
        })
    }

    /// Returns the orientation chosen at construction.
    #[must_use]
    #[rustfmt::skip]
    pub fn orientation(&self) -> Orientation { self.orientation }

    /// Returns `V`, the fixed number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.adjacency.len() }

    /// Returns the number of stored edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_count(&self) -> usize { self.edges.len() }

    /// Returns `true` when `vertex` lies in `[0, V)`.
    #[must_use]
    pub fn contains_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Appends `edge` and returns its identifier.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] when an endpoint is `>= V`;
    /// the graph is left unchanged.
    pub fn add_edge(&mut self, edge: Edge) -> Result<EdgeId, GraphError> {
        let vertex_count = self.vertex_count();
        for vertex in [edge.from(), edge.to()] {
            if vertex >= vertex_count {
                return Err(GraphError::VertexOutOfRange {
                    vertex,
                    vertex_count,
                });
            }
        }

        let id = EdgeId(self.edges.len());
        let (from, to) = (edge.from(), edge.to());
        match self.orientation {
            Orientation::Directed => {
                self.adjacency[from].push(id);
                self.incoming[to].push(id);
            }
            Orientation::Undirected => {
                self.adjacency[from].push(id);
                if from != to {
                    self.adjacency[to].push(id);
                }
            }
        }
        self.edges.push(edge);
        Ok(id)
    }

    /// Returns the edge stored under `id`, if it belongs to this graph.
    #[must_use]
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.0)
    }

    /// Iterates all edges in insertion order. The iterator can be recreated at
    /// will; the graph itself is never consumed.
    pub fn edges(&self) -> impl ExactSizeIterator<Item = &Edge> + Clone + '_ {
        self.edges.iter()
    }

    /// Iterates `(id, edge)` pairs in insertion order.
    pub fn edges_with_ids(&self) -> impl ExactSizeIterator<Item = (EdgeId, &Edge)> + '_ {
        self.edges
            .iter()
            .enumerate()
            .map(|(index, edge)| (EdgeId(index), edge))
    }

    /// Outgoing edges of `vertex` for directed graphs, incident edges for
    /// undirected graphs. Out-of-range vertices yield nothing.
    pub fn adjacent(&self, vertex: usize) -> impl Iterator<Item = &Edge> + '_ {
        ids_at(&self.adjacency, vertex)
            .iter()
            .map(move |id| self.stored(*id))
    }

    /// Every edge touching `vertex`, regardless of orientation.
    pub fn incident(&self, vertex: usize) -> impl Iterator<Item = &Edge> + '_ {
        self.incident_ids(vertex).map(move |id| self.stored(id))
    }

    /// Steps that respect the graph's orientation.
    pub fn hops(&self, vertex: usize) -> impl Iterator<Item = Hop<'_>> + '_ {
        let orientation = self.orientation;
        ids_at(&self.adjacency, vertex).iter().map(move |id| {
            let edge = self.stored(*id);
            let target = match orientation {
                Orientation::Directed => edge.to(),
                Orientation::Undirected => edge.opposite(vertex),
            };
            Hop {
                id: *id,
                edge,
                target,
            }
        })
    }

    /// Steps across every incident edge, ignoring direction.
    pub fn undirected_hops(&self, vertex: usize) -> impl Iterator<Item = Hop<'_>> + '_ {
        self.incident_ids(vertex).map(move |id| {
            let edge = self.stored(id);
            Hop {
                id,
                edge,
                target: edge.opposite(vertex),
            }
        })
    }

    /// Builds the induced subgraph over the full vertex set that keeps only
    /// edges satisfying `predicate`.
    ///
    /// # Examples
    /// ```
    /// use netweave_core::{Cable, Edge, Graph};
    ///
    /// let mut graph = Graph::directed(2);
    /// graph.add_edge(Edge::new(0, 1, 1.0, 1.0, Cable::copper())?)?;
    /// graph.add_edge(Edge::new(1, 0, 1.0, 1.0, Cable::fiber())?)?;
    /// let copper = graph.filtered(|edge| *edge.cable() == Cable::copper());
    /// assert_eq!(copper.vertex_count(), 2);
    /// assert_eq!(copper.edge_count(), 1);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[must_use]
    pub fn filtered(&self, predicate: impl Fn(&Edge) -> bool) -> Self {
        let mut subgraph = Self::with_orientation(self.vertex_count(), self.orientation);
        for edge in self.edges.iter().filter(|edge| predicate(edge)) {
            // Endpoints were validated when the edge entered `self`.
            subgraph.push_validated(edge.clone());
        }
        subgraph
    }

    /// Fails with [`crate::QueryError::VertexOutOfRange`] for vertices outside
    /// `[0, V)`.
    pub(crate) fn ensure_vertex(&self, vertex: usize) -> Result<(), crate::QueryError> {
        if self.contains_vertex(vertex) {
            Ok(())
        } else {
            Err(crate::QueryError::VertexOutOfRange {
                vertex,
                vertex_count: self.vertex_count(),
            })
        }
    }

    fn push_validated(&mut self, edge: Edge) {
        let id = EdgeId(self.edges.len());
        let (from, to) = (edge.from(), edge.to());
        self.adjacency[from].push(id);
        match self.orientation {
            Orientation::Directed => self.incoming[to].push(id),
            Orientation::Undirected if from != to => self.adjacency[to].push(id),
            Orientation::Undirected => {}
        }
        self.edges.push(edge);
    }

    fn incident_ids(&self, vertex: usize) -> impl Iterator<Item = EdgeId> + '_ {
        let outgoing = ids_at(&self.adjacency, vertex).iter().copied();
        let incoming = ids_at(&self.incoming, vertex)
            .iter()
            .copied()
            // A directed self-loop already appeared in the outgoing list.
            .filter(move |id| self.stored(*id).from() != vertex);
        outgoing.chain(incoming)
    }

    fn stored(&self, id: EdgeId) -> &Edge {
        &self.edges[id.0]
    }
}

fn empty_lists(count: usize) -> Option<Vec<Vec<EdgeId>>> {
    let mut lists = Vec::new();
    lists.try_reserve_exact(count).ok()?;
    lists.resize_with(count, Vec::new);
    Some(lists)
}

fn ids_at(lists: &[Vec<EdgeId>], vertex: usize) -> &[EdgeId] {
    lists.get(vertex).map_or(&[][..], Vec::as_slice)
}
