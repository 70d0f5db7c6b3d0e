//! Depth-bounded alpha-beta search with heuristic cutoff
//!
//! Same recursion shape as the exhaustive search, plus an (alpha, beta)
//! window and a depth counter. When the injected cutoff predicate fires
//! the frontier board is scored by the injected heuristic instead of
//! being expanded. Pruning is fail-soft: a pruned node may report a value
//! outside the original window.
//!
//! Deliberately uncached: a value produced under one (alpha, beta) window
//! is not valid under another, so memoizing without the window in the key
//! would silently corrupt results.

use log::debug;

use super::{SearchOutcome, SearchStats, INF};
use crate::board::Mark;
use crate::eval::Value;
use crate::game::{Game, InvalidMoveError};

/// A cutoff predicate searching to depth `d`: fires once depth exceeds it.
pub fn cutoff_depth<S>(d: u32) -> impl Fn(&S, u32) -> bool + Copy {
    move |_state, depth| depth > d
}

/// Depth-bounded searcher with a fixed root perspective.
///
/// The cutoff predicate `(state, depth) -> bool` and heuristic
/// `(state, player) -> score` are supplied as first-class values. A cutoff
/// that never fires degenerates safely into exhaustive search with
/// pruning, and the heuristic is then never invoked.
pub struct AlphaBetaSearcher<'a, G, C, H>
where
    G: Game,
    C: Fn(&G::State, u32) -> bool,
    H: Fn(&G::State, Mark) -> Value,
{
    game: &'a G,
    root: Mark,
    cutoff: C,
    heuristic: H,
    stats: SearchStats,
}

impl<'a, G, C, H> AlphaBetaSearcher<'a, G, C, H>
where
    G: Game,
    C: Fn(&G::State, u32) -> bool,
    H: Fn(&G::State, Mark) -> Value,
{
    pub fn new(game: &'a G, root: Mark, cutoff: C, heuristic: H) -> Self {
        Self {
            game,
            root,
            cutoff,
            heuristic,
            stats: SearchStats::default(),
        }
    }

    /// Search from `state` with a full window.
    pub fn search(
        &mut self,
        state: &G::State,
    ) -> Result<SearchOutcome<G::Move>, InvalidMoveError> {
        let maximizing = self.game.to_move(state) == self.root;
        let outcome = self.value(state, -INF, INF, 0, maximizing)?;
        debug!(
            "alphabeta({}): value={} nodes={} prunes={} leaves={}",
            self.root,
            outcome.value,
            self.stats.nodes,
            self.stats.prunes,
            self.stats.heuristic_leaves,
        );
        Ok(outcome)
    }

    #[must_use]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    fn value(
        &mut self,
        state: &G::State,
        mut alpha: Value,
        mut beta: Value,
        depth: u32,
        maximizing: bool,
    ) -> Result<SearchOutcome<G::Move>, InvalidMoveError> {
        self.stats.nodes += 1;

        // Terminal check precedes the cutoff: an exact value always beats
        // a heuristic one
        if self.game.is_terminal(state) {
            return Ok(SearchOutcome {
                value: self.game.utility(state, self.root),
                best: None,
            });
        }
        if (self.cutoff)(state, depth) {
            self.stats.heuristic_leaves += 1;
            return Ok(SearchOutcome {
                value: (self.heuristic)(state, self.root),
                best: None,
            });
        }

        let mut best_value = if maximizing { -INF } else { INF };
        let mut best_move = None;

        for mv in self.game.actions(state) {
            let child = self.game.result(state, mv)?;
            let outcome = self.value(&child, alpha, beta, depth + 1, !maximizing)?;

            if maximizing {
                if outcome.value > best_value {
                    best_value = outcome.value;
                    best_move = Some(mv);
                    alpha = alpha.max(best_value);
                }
                if best_value >= beta {
                    // Fail-soft: report the value found, even above beta
                    self.stats.prunes += 1;
                    break;
                }
            } else {
                if outcome.value < best_value {
                    best_value = outcome.value;
                    best_move = Some(mv);
                    beta = beta.min(best_value);
                }
                if best_value <= alpha {
                    self.stats.prunes += 1;
                    break;
                }
            }
        }

        Ok(SearchOutcome {
            value: best_value,
            best: best_move,
        })
    }
}
