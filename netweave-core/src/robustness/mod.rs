//! Two-vertex failure analysis.
//!
//! Every unordered pair `{i, j}` is removed in turn and the remaining
//! vertices are relabelled. A pair is reported when what is left is not
//! exactly one component, so removing both vertices of a two-vertex network
//! counts. Outer indices fan out across rayon workers when
//! the `parallel` feature is enabled; each worker owns its own scratch state.

use std::{convert::Infallible, fmt};

use tracing::{info, instrument};

use crate::{
    CancellationToken, Components, Connectivity, Graph, QueryError, cancel::sweep_rows,
};

/// A pair of vertices whose joint failure disconnects the rest of the network.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct DisconnectingPair {
    /// The lower vertex of the pair.
    pub first: usize,
    /// The higher vertex of the pair.
    pub second: usize,
    /// Component count of the remaining network.
    pub components: usize,
}

/// Returns every pair `(i, j)` with `i < j` whose removal leaves anything
/// other than a single component, sorted by `(i, j)`.
///
/// # Examples
/// ```
/// use netweave_core::{Connectivity, Edge, Graph, find_disconnecting_pairs};
///
/// // A path 0 - 1 - 2 - 3.
/// let mut graph = Graph::directed(4);
/// for (from, to) in [(0, 1), (1, 2), (2, 3)] {
///     graph.add_edge(Edge::new(from, to, 1.0, 1.0, "copper")?)?;
/// }
/// let pairs = find_disconnecting_pairs(&graph, Connectivity::Weak);
/// let found: Vec<_> = pairs.iter().map(|p| (p.first, p.second)).collect();
/// assert_eq!(found, vec![(0, 2), (1, 2), (1, 3)]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[must_use]
pub fn find_disconnecting_pairs(graph: &Graph, semantics: Connectivity) -> Vec<DisconnectingPair> {
    let Ok(pairs) = sweep(graph, semantics, |_| Ok::<(), Infallible>(()));
    pairs
}

/// Cancellable form of [`find_disconnecting_pairs`], checking `token` before
/// each outer vertex.
///
/// # Errors
/// Returns [`QueryError::Cancelled`] once the token is cancelled.
pub fn find_disconnecting_pairs_with_cancellation(
    graph: &Graph,
    semantics: Connectivity,
    token: &CancellationToken,
) -> Result<Vec<DisconnectingPair>, QueryError> {
    sweep(graph, semantics, |_| token.check())
}

#[instrument(
    name = "core.disconnecting_pairs",
    err,
    skip(graph, check),
    fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
)]
fn sweep<E>(
    graph: &Graph,
    semantics: Connectivity,
    check: impl Fn(usize) -> Result<(), E> + Send + Sync,
) -> Result<Vec<DisconnectingPair>, E>
where
    E: fmt::Display + Send,
{
    let n = graph.vertex_count();
    let row = |first: usize| -> Result<Vec<DisconnectingPair>, E> {
        check(first)?;
        let mut included = vec![true; n];
        included[first] = false;
        let mut found = Vec::new();
        for second in first + 1..n {
            included[second] = false;
            let components = Components::label(graph, semantics, &included, &|_| true).count();
            included[second] = true;
            if components != 1 {
                found.push(DisconnectingPair {
                    first,
                    second,
                    components,
                });
            }
        }
        Ok(found)
    };

    let rows = sweep_rows(n, row)?;

    // Rows arrive in outer-index order and each row is ascending in `second`.
    let pairs: Vec<DisconnectingPair> = rows.into_iter().flatten().collect();
    info!(pairs = pairs.len(), "failure sweep completed");
    Ok(pairs)
}


#[cfg(test)]
mod property;
