//! Generalized k-in-a-row game engine
//!
//! Plays a w×h grid game where the first mark to line up k in a row
//! (horizontally, vertically or diagonally) wins. The crate centers on two
//! adversarial search engines:
//! - exhaustive minimax backed by a per-search transposition cache
//! - depth-bounded alpha-beta with fail-soft pruning and a pluggable
//!   heuristic at the cutoff frontier
//!
//! # Architecture
//!
//! - [`board`]: immutable board snapshots with functional placement
//! - [`rules`]: win detection through the just-placed square
//! - [`game`]: the [`Game`] capability trait and the concrete
//!   [`TicTacToe`] grid game
//! - [`eval`]: window-counting heuristic evaluator
//! - [`search`]: the two search engines and the transposition cache
//! - [`play`] / [`players`]: a one-game driver and ready-made strategies
//!
//! # Quick Start
//!
//! ```
//! use kinarow::{Game, MinimaxSearcher, TicTacToe};
//! use kinarow::board::Mark;
//!
//! let game = TicTacToe::classic();
//! let board = game.initial();
//!
//! let mut searcher = MinimaxSearcher::new(&game, Mark::X);
//! let outcome = searcher.search(&board).unwrap();
//! assert_eq!(outcome.value, 0); // optimal 3x3 play is a draw
//! ```

pub mod board;
pub mod eval;
pub mod game;
pub mod play;
pub mod players;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Mark, Pos};
pub use eval::{evaluate, Value};
pub use game::{Game, InvalidMoveError, TicTacToe};
pub use play::{play_game, PlayError, Strategy};
pub use search::{cutoff_depth, AlphaBetaSearcher, MinimaxSearcher, SearchOutcome};
