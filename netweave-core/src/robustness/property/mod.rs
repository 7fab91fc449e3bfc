//! Property-based tests for the failure sweep.
//!
//! A breadth-first oracle that rebuilds each two-vertex-removed network from
//! scratch must agree with the sweep on every pair.

mod oracle;
mod tests;
