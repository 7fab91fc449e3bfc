//! Property-based tests for the Prim spanning engine.
//!
//! Small graphs are compared against exhaustive enumeration of every edge
//! subset of the right size; larger ones against a sequential Kruskal oracle.

mod oracle;
mod tests;
