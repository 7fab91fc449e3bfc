//! Cooperative cancellation for long-running sweeps.
//!
//! Sweeps run one row per vertex through `sweep_rows`. A cancellable sweep
//! checks its token at the start of each row; an uncancellable one uses an
//! `Infallible` check and cannot fail.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::QueryError;

/// Shared flag checked between algorithm steps.
///
/// Clones observe the same flag, so a token handed to a query can be cancelled
/// from another thread.
///
/// # Examples
/// ```
/// use netweave_core::CancellationToken;
///
/// let token = CancellationToken::new();
/// let observer = token.clone();
/// token.cancel();
/// assert!(observer.is_cancelled());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Creates a token that has not been cancelled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation of every query observing this token.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    /// Returns `true` once [`CancellationToken::cancel`] has been called.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    pub(crate) fn check(&self) -> Result<(), QueryError> {
        if self.is_cancelled() {
            Err(QueryError::Cancelled)
        } else {
            Ok(())
        }
    }
}

/// Maps every index in `0..count` through `row`, returning rows in index
/// order. Rows run on rayon workers; the first error ends the sweep.
#[cfg(feature = "parallel")]
pub(crate) fn sweep_rows<T, E, F>(count: usize, row: F) -> Result<Vec<T>, E>
where
    T: Send,
    E: Send,
    F: Fn(usize) -> Result<T, E> + Send + Sync,
{
    (0..count).into_par_iter().map(row).collect()
}

/// Maps every index in `0..count` through `row`, returning rows in index
/// order. The first error ends the sweep.
#[cfg(not(feature = "parallel"))]
pub(crate) fn sweep_rows<T, E, F>(count: usize, row: F) -> Result<Vec<T>, E>
where
    T: Send,
    E: Send,
    F: Fn(usize) -> Result<T, E> + Send + Sync,
{
    (0..count).map(row).collect()
}
