//! Position evaluation for k-in-a-row boards

pub mod heuristic;

pub use heuristic::evaluate;

/// Score type shared by the evaluator and the search engines.
///
/// Window scores grow as 10^count, so a 64-bit value keeps large win
/// lengths comfortably in range.
pub type Value = i64;
