//! Property-based tests for the Dijkstra routing engine.
//!
//! Distances are checked against a Floyd-Warshall oracle, and every
//! reconstructed route is checked to be a contiguous walk whose latency sums
//! to the reported distance. Distances also obey the triangle inequality
//! through every intermediate vertex.

mod oracle;
