//! Error types for the netweave core library.
//!
//! Each failure family (edge validation, endpoint lookup, graph insertion and
//! query evaluation) has its own enum with a stable machine-readable code.
//! [`NetworkError`] aggregates them for the [`crate::NetworkAnalyzer`] API.

use thiserror::Error;

/// Declares a stable code enum for an error enum.
///
/// Generates the code enum with `as_str` and `Display`, plus a `code()`
/// method on the error mapping each variant to its code.
#[doc(hidden)]
#[macro_export]
macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? $( ( $($tuple:tt)* ) )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl ::core::fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? $( ( $($tuple)* ) )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Validation failure raised while constructing an [`crate::Edge`].
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum EdgeError {
    /// An endpoint was a negative integer.
    #[error("vertex names must be non-negative integers (got {vertex})")]
    NegativeVertex {
        /// The rejected endpoint.
        vertex: i64,
    },
    /// An endpoint does not fit the platform's vertex index type.
    #[error("vertex {vertex} exceeds the addressable vertex range")]
    VertexTooLarge {
        /// The rejected endpoint.
        vertex: i64,
    },
    /// Bandwidth was NaN or infinite.
    #[error("bandwidth must be a finite number (got {bandwidth})")]
    NonFiniteBandwidth {
        /// The rejected bandwidth.
        bandwidth: f64,
    },
    /// Bandwidth was zero or negative, leaving the latency weight undefined.
    #[error("bandwidth must be strictly positive (got {bandwidth})")]
    NonPositiveBandwidth {
        /// The rejected bandwidth.
        bandwidth: f64,
    },
    /// Length was NaN or infinite.
    #[error("length must be a finite number (got {length})")]
    NonFiniteLength {
        /// The rejected length.
        length: f64,
    },
    /// Length was negative, which would produce a negative latency weight.
    #[error("length must not be negative (got {length})")]
    NegativeLength {
        /// The rejected length.
        length: f64,
    },
}

define_error_codes! {
    /// Stable codes describing [`EdgeError`] variants.
    enum EdgeErrorCode for EdgeError {
        /// An endpoint was a negative integer.
        NegativeVertex => NegativeVertex { .. } => "EDGE_NEGATIVE_VERTEX",
        /// An endpoint does not fit the vertex index type.
        VertexTooLarge => VertexTooLarge { .. } => "EDGE_VERTEX_TOO_LARGE",
        /// Bandwidth was NaN or infinite.
        NonFiniteBandwidth => NonFiniteBandwidth { .. } => "EDGE_NON_FINITE_BANDWIDTH",
        /// Bandwidth was zero or negative.
        NonPositiveBandwidth => NonPositiveBandwidth { .. } => "EDGE_NON_POSITIVE_BANDWIDTH",
        /// Length was NaN or infinite.
        NonFiniteLength => NonFiniteLength { .. } => "EDGE_NON_FINITE_LENGTH",
        /// Length was negative.
        NegativeLength => NegativeLength { .. } => "EDGE_NEGATIVE_LENGTH",
    }
}

/// Raised by [`crate::Edge::other`] when the vertex is not an endpoint.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("vertex {vertex} is not an endpoint of the edge {from}-{to}")]
pub struct EndpointError {
    /// The vertex supplied by the caller.
    pub vertex: usize,
    /// Tail of the queried edge.
    pub from: usize,
    /// Head of the queried edge.
    pub to: usize,
}

/// Failure raised while appending to a [`crate::Graph`].
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// An edge endpoint lies outside `[0, V)`.
    #[error("edge references vertex {vertex}, but the graph has {vertex_count} vertices")]
    VertexOutOfRange {
        /// The offending endpoint.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// The adjacency lists for the requested vertex count could not be
    /// allocated.
    #[error("cannot allocate a graph with {vertex_count} vertices")]
    TooManyVertices {
        /// The requested vertex count.
        vertex_count: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// An edge endpoint lies outside the vertex range.
        VertexOutOfRange => VertexOutOfRange { .. } => "GRAPH_VERTEX_OUT_OF_RANGE",
        /// The vertex count exceeds what can be allocated.
        TooManyVertices => TooManyVertices { .. } => "GRAPH_TOO_MANY_VERTICES",
    }
}

/// Failure raised while evaluating a query against a [`crate::Graph`].
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum QueryError {
    /// A query vertex lies outside `[0, V)`.
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange {
        /// The offending vertex.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// A path was requested for an unreachable destination.
    #[error("no path exists from vertex {from} to vertex {to}")]
    NoPath {
        /// Source vertex of the request.
        from: usize,
        /// Destination vertex of the request.
        to: usize,
    },
    /// The query observed a cancellation request and stopped early.
    #[error("query was cancelled before completion")]
    Cancelled,
}

define_error_codes! {
    /// Stable codes describing [`QueryError`] variants.
    enum QueryErrorCode for QueryError {
        /// A query vertex lies outside the vertex range.
        VertexOutOfRange => VertexOutOfRange { .. } => "QUERY_VERTEX_OUT_OF_RANGE",
        /// A path was requested for an unreachable destination.
        NoPath => NoPath { .. } => "QUERY_NO_PATH",
        /// The query was cancelled.
        Cancelled => Cancelled => "QUERY_CANCELLED",
    }
}

/// Error type produced by the [`crate::NetworkAnalyzer`] surface.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum NetworkError {
    /// Edge validation failed.
    #[error(transparent)]
    Edge(#[from] EdgeError),
    /// An endpoint lookup failed.
    #[error(transparent)]
    Endpoint(#[from] EndpointError),
    /// Inserting an edge into the graph failed.
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// Evaluating a query failed.
    #[error(transparent)]
    Query(#[from] QueryError),
}

define_error_codes! {
    /// Stable codes describing [`NetworkError`] variants.
    enum NetworkErrorCode for NetworkError {
        /// Edge validation failed.
        InvalidEdge => Edge(..) => "NETWORK_INVALID_EDGE",
        /// An endpoint lookup failed.
        NotAnEndpoint => Endpoint(..) => "NETWORK_NOT_AN_ENDPOINT",
        /// Inserting an edge into the graph failed.
        GraphFailure => Graph(..) => "NETWORK_GRAPH_FAILURE",
        /// Evaluating a query failed.
        QueryFailure => Query(..) => "NETWORK_QUERY_FAILURE",
    }
}

impl NetworkError {
    /// Retrieve the inner [`QueryErrorCode`] when the error came from a query.
    #[must_use]
    pub const fn query_code(&self) -> Option<QueryErrorCode> {
        match self {
            Self::Query(error) => Some(error.code()),
            _ => None,
        }
    }

    /// Retrieve the inner [`EdgeErrorCode`] when the error came from edge validation.
    #[must_use]
    pub const fn edge_code(&self) -> Option<EdgeErrorCode> {
        match self {
            Self::Edge(error) => Some(error.code()),
            _ => None,
        }
    }
}

/// Convenient alias for results returned by the analyzer API.
pub type Result<T> = core::result::Result<T, NetworkError>;
