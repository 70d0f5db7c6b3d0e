//! Search algorithms (exhaustive minimax, depth-bounded alpha-beta)

pub mod alphabeta;
pub mod minimax;
pub mod transposition;

pub use alphabeta::{cutoff_depth, AlphaBetaSearcher};
pub use minimax::MinimaxSearcher;
pub use transposition::Transposition;

use crate::eval::Value;

/// Sentinel bound strictly outside any reachable score.
///
/// Utilities are in {-1, 0, +1} and window scores are bounded well below
/// this, so `INF` is safe as an initial alpha/beta window.
pub const INF: Value = Value::MAX / 2;

/// Backed-up value plus the recommended action (none at a terminal state).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome<M> {
    pub value: Value,
    pub best: Option<M>,
}

/// Search diagnostics, reported at `debug` level after each search.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchStats {
    /// States expanded (terminal and interior)
    pub nodes: u64,
    /// Child evaluations answered from the transposition cache
    pub cache_hits: u64,
    /// Outcomes written to the transposition cache
    pub cache_stores: u64,
    /// Siblings abandoned by alpha-beta pruning
    pub prunes: u64,
    /// Frontier states scored by the heuristic
    pub heuristic_leaves: u64,
}
