//! Netweave core library.
//!
//! Loads nothing and prints nothing: callers build a [`Graph`] of validated
//! [`Edge`]s and ask a [`NetworkAnalyzer`] for lowest-latency routes,
//! single-cable connectivity, maximum throughput, the lowest-latency spanning
//! structure and the vertex pairs whose failure splits the network.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod analyzer;
mod cancel;
mod connectivity;
mod edge;
mod error;
mod graph;
mod max_flow;
mod robustness;
mod shortest_path;
mod spanning;

#[cfg(test)]
mod test_utils;

pub use crate::{
    analyzer::{AnalyzerBuilder, NetworkAnalyzer},
    cancel::CancellationToken,
    connectivity::{Components, Connectivity},
    edge::{Cable, Edge},
    error::{
        EdgeError, EdgeErrorCode, EndpointError, GraphError, GraphErrorCode, NetworkError,
        NetworkErrorCode, QueryError, QueryErrorCode, Result,
    },
    graph::{EdgeId, Graph, Hop, Orientation},
    max_flow::{FLOW_EPSILON, MaxFlow},
    robustness::{
        DisconnectingPair, find_disconnecting_pairs, find_disconnecting_pairs_with_cancellation,
    },
    shortest_path::{AllPairsShortestPaths, Route, ShortestPaths},
    spanning::{SpanningForest, prim_spanning_forest},
};
