//! Exhaustive minimax with a transposition cache
//!
//! Backward induction over the full game tree. Values are exact: no cutoff
//! is ever applied, so this is only suitable for games whose complete tree
//! is tractable. The game state space is finite and acyclic (moves only
//! add marks), so the recursion terminates and exact outcomes are safe to
//! memoize unconditionally within one search perspective.

use log::debug;

use super::{SearchOutcome, SearchStats, Transposition, INF};
use crate::board::Mark;
use crate::game::{Game, InvalidMoveError};

/// Exhaustive searcher with a fixed root perspective.
///
/// The perspective is fixed at construction and every value produced by
/// [`MinimaxSearcher::search`] is relative to it, as are the cached
/// outcomes. Build a fresh searcher to search on behalf of the other mark.
pub struct MinimaxSearcher<'a, G: Game> {
    game: &'a G,
    root: Mark,
    cache: Transposition<G::Key, G::Move>,
    stats: SearchStats,
}

impl<'a, G: Game> MinimaxSearcher<'a, G> {
    pub fn new(game: &'a G, root: Mark) -> Self {
        Self {
            game,
            root,
            cache: Transposition::new(),
            stats: SearchStats::default(),
        }
    }

    /// Run the full search from `state` and return the exact outcome.
    pub fn search(
        &mut self,
        state: &G::State,
    ) -> Result<SearchOutcome<G::Move>, InvalidMoveError> {
        let outcome = self.value(state)?;
        debug!(
            "minimax({}): value={} nodes={} cached={} hits={}",
            self.root,
            outcome.value,
            self.stats.nodes,
            self.cache.len(),
            self.stats.cache_hits,
        );
        Ok(outcome)
    }

    #[must_use]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// One backward-induction step. The role (maximize or minimize) falls
    /// out of whose turn it is relative to the root perspective.
    fn value(&mut self, state: &G::State) -> Result<SearchOutcome<G::Move>, InvalidMoveError> {
        self.stats.nodes += 1;

        if self.game.is_terminal(state) {
            return Ok(SearchOutcome {
                value: self.game.utility(state, self.root),
                best: None,
            });
        }

        let maximizing = self.game.to_move(state) == self.root;
        let mut best_value = if maximizing { -INF } else { INF };
        let mut best_move = None;

        for mv in self.game.actions(state) {
            let child = self.game.result(state, mv)?;
            let key = self.game.key(&child);
            let outcome = match self.cache.probe(&key) {
                Some(cached) => {
                    self.stats.cache_hits += 1;
                    cached
                }
                None => {
                    let computed = self.value(&child)?;
                    // Store before returning so a later transposition onto
                    // this position can never miss
                    self.cache.store(key, computed);
                    self.stats.cache_stores += 1;
                    computed
                }
            };
            // Strict comparison keeps the first-seen best on ties
            let better = if maximizing {
                outcome.value > best_value
            } else {
                outcome.value < best_value
            };
            if better {
                best_value = outcome.value;
                best_move = Some(mv);
            }
        }

        Ok(SearchOutcome {
            value: best_value,
            best: best_move,
        })
    }
}
