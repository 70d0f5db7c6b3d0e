//! Game abstraction and the generalized k-in-a-row game
//!
//! The search engines never inspect game specifics. They only rely on the
//! capability set {actions, result, is_terminal, utility}, so alternative
//! grid games (other dimensions, other win lengths, other rule twists) can
//! be substituted without touching the engines.

use std::hash::Hash;

use thiserror::Error;

use crate::board::{Board, Mark, Pos, StateKey};
use crate::eval::Value;
use crate::rules::k_in_row;

/// Contract violation when applying a move.
///
/// The engines only ever apply moves drawn from `actions`, so these fire
/// only on caller mistakes. Silently overwriting a square would corrupt
/// the search, hence the hard failure.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMoveError {
    #[error("square {0} is already occupied")]
    Occupied(Pos),
    #[error("square {0} lies outside the {1}x{2} grid")]
    OutOfBounds(Pos, u8, u8),
}

/// Capability set a turn-taking two-mark game exposes to the search.
pub trait Game {
    /// Immutable positional snapshot
    type State;
    /// Action token; opaque to the engines
    type Move: Copy;
    /// Canonical cache key: value-equal iff positions are interchangeable
    type Key: Eq + Hash;

    /// The starting state
    fn initial(&self) -> Self::State;

    /// The mark that moves next in `state`
    fn to_move(&self, state: &Self::State) -> Mark;

    /// All legal moves. Empty exactly when the state is terminal.
    fn actions(&self, state: &Self::State) -> Vec<Self::Move>;

    /// Apply a move, producing a fresh successor state. The input state is
    /// never mutated.
    fn result(&self, state: &Self::State, mv: Self::Move) -> Result<Self::State, InvalidMoveError>;

    /// True iff the game has ended in `state`
    fn is_terminal(&self, state: &Self::State) -> bool;

    /// Terminal value in {-1, 0, +1} from `player`'s perspective
    fn utility(&self, state: &Self::State, player: Mark) -> Value;

    /// Canonical key for the transposition cache
    fn key(&self, state: &Self::State) -> Self::Key;
}

/// Generalized tic-tac-toe: width x height grid, k contiguous marks to win.
///
/// X moves first and is the convention-positive side: a cached utility of
/// +1 means X completed a run, -1 means O did.
#[derive(Debug, Clone, Copy)]
pub struct TicTacToe {
    width: u8,
    height: u8,
    win_len: u8,
}

impl TicTacToe {
    pub fn new(width: u8, height: u8, win_len: u8) -> Self {
        Self {
            width,
            height,
            win_len,
        }
    }

    /// Classic 3x3 game
    pub fn classic() -> Self {
        Self::new(3, 3, 3)
    }
}

impl Game for TicTacToe {
    type State = Board;
    type Move = Pos;
    type Key = StateKey;

    fn initial(&self) -> Board {
        Board::new(self.width, self.height, self.win_len, Mark::X)
    }

    fn to_move(&self, state: &Board) -> Mark {
        state.to_move()
    }

    fn actions(&self, state: &Board) -> Vec<Pos> {
        state.empty_squares()
    }

    fn result(&self, state: &Board, mv: Pos) -> Result<Board, InvalidMoveError> {
        if !state.in_bounds(mv) {
            return Err(InvalidMoveError::OutOfBounds(mv, self.width, self.height));
        }
        if !state.is_empty(mv) {
            return Err(InvalidMoveError::Occupied(mv));
        }
        let mover = state.to_move();
        let next = state.place(mv);
        // Win detection runs only through the square just filled
        let utility = if k_in_row(&next, mover, mv) {
            match mover {
                Mark::X => 1,
                Mark::O => -1,
            }
        } else {
            0
        };
        Ok(next.with_utility(utility))
    }

    fn is_terminal(&self, state: &Board) -> bool {
        state.raw_utility() != 0 || state.is_full()
    }

    fn utility(&self, state: &Board, player: Mark) -> Value {
        let u = Value::from(state.raw_utility());
        match player {
            Mark::X => u,
            Mark::O => -u,
        }
    }

    fn key(&self, state: &Board) -> StateKey {
        state.key()
    }
}
