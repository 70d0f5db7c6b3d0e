//! Transposition cache for the exhaustive search
//!
//! Positions reachable by different move orders collapse onto one entry,
//! keyed by the full mark assignment plus the active mark. Values are
//! exact backed-up utilities relative to one fixed root player, so a cache
//! must never be shared between searches rooted at different perspectives.
//! Each [`MinimaxSearcher`](super::MinimaxSearcher) owns its own instance.
//!
//! Every computed outcome is stored before the searcher returns, so a
//! lookup for a previously explored position can never miss. Treating a
//! miss as "assume non-terminal" (or worse, "assume terminal") would be
//! unsound; a miss here simply means the position has not been explored.

use std::collections::HashMap;
use std::hash::Hash;

use super::SearchOutcome;

/// Exact-value memo for one search perspective.
#[derive(Debug)]
pub struct Transposition<K, M> {
    entries: HashMap<K, SearchOutcome<M>>,
}

impl<K: Eq + Hash, M: Copy> Transposition<K, M> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Look up a previously computed outcome.
    #[must_use]
    pub fn probe(&self, key: &K) -> Option<SearchOutcome<M>> {
        self.entries.get(key).copied()
    }

    /// Record an outcome. Exact values never go stale within one
    /// perspective, so a duplicate store is a plain overwrite.
    pub fn store(&mut self, key: K, outcome: SearchOutcome<M>) {
        self.entries.insert(key, outcome);
    }

    /// Number of cached positions
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Eq + Hash, M: Copy> Default for Transposition<K, M> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;

    #[test]
    fn test_probe_miss_on_fresh_cache() {
        let cache: Transposition<u64, Pos> = Transposition::new();
        assert!(cache.probe(&42).is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_store_then_probe() {
        let mut cache: Transposition<u64, Pos> = Transposition::new();
        let outcome = SearchOutcome {
            value: 1,
            best: Some(Pos::new(0, 2)),
        };
        cache.store(7, outcome);
        assert_eq!(cache.probe(&7), Some(outcome));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_store_overwrites() {
        let mut cache: Transposition<u64, Pos> = Transposition::new();
        cache.store(
            7,
            SearchOutcome {
                value: 0,
                best: None,
            },
        );
        cache.store(
            7,
            SearchOutcome {
                value: 1,
                best: Some(Pos::new(1, 1)),
            },
        );
        assert_eq!(cache.probe(&7).unwrap().value, 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_distinct_keys_do_not_collide() {
        let mut cache: Transposition<u64, Pos> = Transposition::new();
        cache.store(
            1,
            SearchOutcome {
                value: 1,
                best: None,
            },
        );
        cache.store(
            2,
            SearchOutcome {
                value: -1,
                best: None,
            },
        );
        assert_eq!(cache.probe(&1).unwrap().value, 1);
        assert_eq!(cache.probe(&2).unwrap().value, -1);
    }
}
