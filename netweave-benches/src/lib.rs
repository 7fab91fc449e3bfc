//! Benchmark support crate for netweave.
//!
//! Provides a seeded synthetic topology generator and parameter types used by
//! the Criterion benchmarks for routing, capacity and structural queries.

pub mod error;
pub mod params;
pub mod topology;
