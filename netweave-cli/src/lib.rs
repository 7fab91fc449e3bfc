//! Support library for the netweave CLI binary.
//!
//! Exposes the command pipeline and logging setup so doctests and unit tests
//! can drive commands against in-memory readers and writers.

pub mod cli;
pub mod logging;
