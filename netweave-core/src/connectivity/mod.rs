//! Component labelling over filtered and vertex-excluded views of a graph.
//!
//! [`Connectivity`] selects the semantics. Weak components ignore direction
//! and are labelled with a disjoint-set forest; strong components require
//! mutual reachability and are labelled with an iterative Tarjan walk.
//! Component ids are canonical: component `0` holds the lowest included
//! vertex, component `1` the lowest vertex not in component `0`, and so on.

mod strong;
mod union_find;

use std::fmt;

use tracing::{debug, instrument};

use crate::{Edge, Graph};

use self::union_find::DisjointSet;

/// Which notion of "connected" a query uses.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Connectivity {
    /// Direction is ignored; two vertices share a component when an
    /// undirected walk joins them.
    #[default]
    Weak,
    /// Two vertices share a component when each can reach the other.
    Strong,
}

impl Connectivity {
    /// Returns the lowercase name used in logs and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weak => "weak",
            Self::Strong => "strong",
        }
    }
}

impl fmt::Display for Connectivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Component labelling of one view of a graph.
///
/// # Examples
/// ```
/// use netweave_core::{Cable, Components, Connectivity, Edge, Graph};
///
/// let mut graph = Graph::directed(3);
/// graph.add_edge(Edge::new(0, 1, 1.0, 1.0, Cable::copper())?)?;
/// graph.add_edge(Edge::new(1, 2, 1.0, 1.0, Cable::fiber())?)?;
///
/// let all = Components::of(&graph, Connectivity::Weak);
/// assert!(all.is_connected());
///
/// let copper = Components::of_filtered(&graph, Connectivity::Weak, |edge| {
///     *edge.cable() == Cable::copper()
/// });
/// assert_eq!(copper.count(), 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Components {
    semantics: Connectivity,
    labels: Vec<Option<usize>>,
    count: usize,
}

impl Components {
    /// Labels the components of the whole graph.
    #[must_use]
    pub fn of(graph: &Graph, semantics: Connectivity) -> Self {
        Self::of_filtered(graph, semantics, |_| true)
    }

    /// Labels the components of the subgraph on the full vertex set that keeps
    /// only edges satisfying `predicate`.
    #[must_use]
    #[instrument(
        name = "core.components",
        level = "debug",
        skip(graph, predicate),
        fields(vertices = graph.vertex_count()),
    )]
    pub fn of_filtered(
        graph: &Graph,
        semantics: Connectivity,
        predicate: impl Fn(&Edge) -> bool,
    ) -> Self {
        let included = vec![true; graph.vertex_count()];
        let components = Self::label(graph, semantics, &included, &predicate);
        debug!(count = components.count, "components labelled");
        components
    }

    /// Labels the components that remain after removing the vertices in
    /// `excluded` together with every edge touching them.
    ///
    /// Excluded ids outside `[0, V)` are ignored.
    #[must_use]
    pub fn excluding(graph: &Graph, semantics: Connectivity, excluded: &[usize]) -> Self {
        let mut included = vec![true; graph.vertex_count()];
        for &vertex in excluded {
            if let Some(slot) = included.get_mut(vertex) {
                *slot = false;
            }
        }
        Self::label(graph, semantics, &included, &|_| true)
    }

    pub(crate) fn label(
        graph: &Graph,
        semantics: Connectivity,
        included: &[bool],
        keep: &dyn Fn(&Edge) -> bool,
    ) -> Self {
        let raw = match semantics {
            Connectivity::Weak => weak_labels(graph, included, keep),
            Connectivity::Strong => strong::label(graph, included, keep),
        };
        let (labels, count) = canonicalise(&raw);
        Self {
            semantics,
            labels,
            count,
        }
    }

    /// Returns the semantics the labelling was computed under.
    #[must_use]
    #[rustfmt::skip]
    pub fn semantics(&self) -> Connectivity { self.semantics }

    /// Returns the number of components among the included vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn count(&self) -> usize { self.count }

    /// Returns `true` when exactly one component exists.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.count == 1
    }

    /// Returns the component id of `vertex`, or `None` when it was excluded or
    /// is out of range.
    #[must_use]
    pub fn component_of(&self, vertex: usize) -> Option<usize> {
        self.labels.get(vertex).copied().flatten()
    }

    /// Returns the vertices of each component in ascending order, indexed by
    /// component id.
    #[must_use]
    pub fn members(&self) -> Vec<Vec<usize>> {
        let mut members = vec![Vec::new(); self.count];
        for (vertex, label) in self.labels.iter().enumerate() {
            if let Some(component) = label {
                members[*component].push(vertex);
            }
        }
        members
    }
}

fn weak_labels(
    graph: &Graph,
    included: &[bool],
    keep: &dyn Fn(&Edge) -> bool,
) -> Vec<Option<usize>> {
    let n = graph.vertex_count();
    let mut set = DisjointSet::new(n);
    for edge in graph.edges() {
        let (from, to) = (edge.from(), edge.to());
        if included[from] && included[to] && keep(edge) {
            set.union(from, to);
        }
    }
    (0..n)
        .map(|vertex| included[vertex].then(|| set.find(vertex)))
        .collect()
}

/// Renumbers arbitrary labels by order of each component's lowest vertex.
fn canonicalise(raw: &[Option<usize>]) -> (Vec<Option<usize>>, usize) {
    let mut remap: Vec<Option<usize>> = vec![None; raw.len()];
    let mut next = 0;
    let labels = raw
        .iter()
        .map(|label| {
            let label = (*label)?;
            let slot = &mut remap[label];
            Some(*slot.get_or_insert_with(|| {
                next += 1;
                next - 1
            }))
        })
        .collect();
    (labels, next)
}

#[cfg(test)]
mod tests;
