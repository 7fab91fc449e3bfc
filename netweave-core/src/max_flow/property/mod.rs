//! Property-based tests for the Edmonds-Karp engine.
//!
//! On graphs with at most eight vertices every `s`-`t` cut is enumerated and
//! the flow value must equal the cheapest one (max-flow min-cut). Larger
//! graphs are checked for capacity limits and conservation.

mod oracle;
mod tests;
