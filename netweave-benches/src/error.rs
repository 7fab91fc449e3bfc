//! Benchmark setup error type.
//!
//! Lets setup functions propagate failures with `?` instead of panicking
//! mid-measurement.

use netweave_core::{NetworkError, QueryError};

use crate::topology::SyntheticError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic topology generation failed.
    #[error("synthetic topology generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// A warm-up query failed.
    #[error("query failed: {0}")]
    Query(#[from] QueryError),
    /// The analyzer rejected a warm-up query.
    #[error("analyzer failed: {0}")]
    Network(#[from] NetworkError),
}
