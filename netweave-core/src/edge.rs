//! Immutable link records shared by every query engine.
//!
//! An [`Edge`] carries a bandwidth (flow capacity), a physical length and a
//! [`Cable`] medium tag. The derived latency weight is `length / bandwidth`.
//! Validation at construction guarantees the weight is finite and
//! non-negative, which the shortest-path and spanning engines rely on.

use std::{cmp::Ordering, fmt, sync::Arc};

use crate::error::{EdgeError, EndpointError};

/// Medium tag attached to a link, such as `copper` or `fiber`.
///
/// # Examples
/// ```
/// use netweave_core::Cable;
///
/// assert_eq!(Cable::copper(), Cable::from("copper"));
/// assert_ne!(Cable::copper(), Cable::fiber());
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Cable(Arc<str>);

impl Cable {
    /// Creates a cable tag from any string-like value.
    #[must_use]
    pub fn new(tag: impl Into<Arc<str>>) -> Self {
        Self(tag.into())
    }

    /// The `copper` medium.
    #[must_use]
    pub fn copper() -> Self {
        Self::new("copper")
    }

    /// The `fiber` medium.
    #[must_use]
    pub fn fiber() -> Self {
        Self::new("fiber")
    }

    /// Returns the tag as a string slice.
    #[must_use]
    #[rustfmt::skip]
    pub fn as_str(&self) -> &str { &self.0 }
}

impl From<&str> for Cable {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Cable {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for Cable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated network link from `from` to `to`.
///
/// Directed and undirected links share this record; whether the link may be
/// traversed backwards is decided by the owning [`crate::Graph`]'s
/// [`crate::Orientation`].
///
/// # Examples
/// ```
/// use netweave_core::{Cable, Edge};
///
/// let edge = Edge::new(0, 1, 10.0, 5.0, Cable::copper())?;
/// assert_eq!(edge.time(), 0.5);
/// assert_eq!(edge.other(1)?, 0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
    from: usize,
    to: usize,
    bandwidth: f64,
    length: f64,
    cable: Cable,
}

impl Edge {
    /// Validates the raw attributes and constructs an edge.
    ///
    /// # Errors
    /// Returns [`EdgeError`] when either endpoint is negative, when bandwidth
    /// or length is NaN or infinite, when bandwidth is not strictly positive,
    /// or when length is negative.
    pub fn new(
        from: i64,
        to: i64,
        bandwidth: f64,
        length: f64,
        cable: impl Into<Cable>,
    ) -> Result<Self, EdgeError> {
        let from = vertex_index(from)?;
        let to = vertex_index(to)?;
        Self::with_vertex_ids(from, to, bandwidth, length, cable)
    }

    /// Constructs an edge from already non-negative vertex ids, validating the
    /// numeric attributes only.
    ///
    /// # Errors
    /// Returns [`EdgeError`] under the same numeric rules as [`Edge::new`].
    pub fn with_vertex_ids(
        from: usize,
        to: usize,
        bandwidth: f64,
        length: f64,
        cable: impl Into<Cable>,
    ) -> Result<Self, EdgeError> {
        if !bandwidth.is_finite() {
            return Err(EdgeError::NonFiniteBandwidth { bandwidth });
        }
        if bandwidth <= 0.0 {
            return Err(EdgeError::NonPositiveBandwidth { bandwidth });
        }
        if !length.is_finite() {
            return Err(EdgeError::NonFiniteLength { length });
        }
        if length < 0.0 {
            return Err(EdgeError::NegativeLength { length });
        }

        Ok(Self {
            from,
            to,
            bandwidth,
            length,
            cable: cable.into(),
        })
    }

    /// Returns the tail vertex.
    #[must_use]
    #[rustfmt::skip]
    pub fn from(&self) -> usize { self.from }

    /// Returns the head vertex.
    #[must_use]
    #[rustfmt::skip]
    pub fn to(&self) -> usize { self.to }

    /// Returns the link capacity.
    #[must_use]
    #[rustfmt::skip]
    pub fn bandwidth(&self) -> f64 { self.bandwidth }

    /// Returns the physical length.
    #[must_use]
    #[rustfmt::skip]
    pub fn length(&self) -> f64 { self.length }

    /// Returns the medium tag.
    #[must_use]
    #[rustfmt::skip]
    pub fn cable(&self) -> &Cable { &self.cable }

    /// Returns the latency weight `length / bandwidth`.
    #[must_use]
    pub fn time(&self) -> f64 {
        self.length / self.bandwidth
    }

    /// Returns the endpoint opposite `vertex`.
    ///
    /// # Errors
    /// Returns [`EndpointError`] when `vertex` is neither endpoint.
    pub fn other(&self, vertex: usize) -> Result<usize, EndpointError> {
        if vertex == self.from {
            Ok(self.to)
        } else if vertex == self.to {
            Ok(self.from)
        } else {
            Err(EndpointError {
                vertex,
                from: self.from,
                to: self.to,
            })
        }
    }

    /// Infallible variant of [`Edge::other`] for callers that already hold an
    /// endpoint.
    pub(crate) fn opposite(&self, vertex: usize) -> usize {
        if vertex == self.from {
            self.to
        } else {
            self.from
        }
    }

    /// Orders edges by ascending bandwidth.
    ///
    /// This is the natural capacity ordering; it is unrelated to
    /// [`Edge::latency_order`], which the spanning engine uses.
    #[must_use]
    pub fn bandwidth_order(&self, other: &Self) -> Ordering {
        self.bandwidth.total_cmp(&other.bandwidth)
    }

    /// Orders edges by ascending latency weight [`Edge::time`].
    #[must_use]
    pub fn latency_order(&self, other: &Self) -> Ordering {
        self.time().total_cmp(&other.time())
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "An edge of length {} with bandwidth {} connects vertex {} to vertex {}",
            self.length, self.bandwidth, self.from, self.to
        )
    }
}

fn vertex_index(vertex: i64) -> Result<usize, EdgeError> {
    if vertex < 0 {
        return Err(EdgeError::NegativeVertex { vertex });
    }
    usize::try_from(vertex).map_err(|_| EdgeError::VertexTooLarge { vertex })
}
