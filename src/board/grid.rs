//! Immutable board snapshot with functional placement

use std::fmt;

use super::{Cell, Mark, Pos};

/// Positional snapshot of a w×h grid plus game metadata.
///
/// A `Board` is never mutated after construction. Applying a move produces
/// a fresh successor via [`Board::place`], so the search can hold many
/// sibling boards derived from the same predecessor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u8,
    height: u8,
    win_len: u8,
    to_move: Mark,
    /// Cached terminal value: +1 if X just completed a run, -1 for O, 0 otherwise.
    utility: i8,
    cells: Vec<Option<Mark>>,
    occupied: u16,
}

/// Canonical cache key: the full cell assignment plus the mark to move.
///
/// Deliberately excludes derived fields (utility, counts) so two boards
/// compare equal exactly when their positions are interchangeable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StateKey {
    cells: Vec<Option<Mark>>,
    to_move: Mark,
}

impl Board {
    /// Create the empty initial board with `to_move` as the first mover.
    pub fn new(width: u8, height: u8, win_len: u8, to_move: Mark) -> Self {
        Self {
            width,
            height,
            win_len,
            to_move,
            utility: 0,
            cells: vec![None; width as usize * height as usize],
            occupied: 0,
        }
    }

    #[inline]
    pub fn width(&self) -> u8 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Run length required to win
    #[inline]
    pub fn win_len(&self) -> u8 {
        self.win_len
    }

    /// The mark that moves next
    #[inline]
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Raw cached utility from X's perspective (+1 X win, -1 O win, 0 otherwise)
    #[inline]
    pub fn raw_utility(&self) -> i8 {
        self.utility
    }

    /// Query a square by signed coordinates.
    ///
    /// Out-of-bounds coordinates report [`Cell::Off`] rather than panicking,
    /// which lets line scans walk past the edge and stop naturally.
    #[inline]
    pub fn at(&self, row: i32, col: i32) -> Cell {
        if row < 0 || row >= i32::from(self.height) || col < 0 || col >= i32::from(self.width) {
            return Cell::Off;
        }
        match self.cells[row as usize * self.width as usize + col as usize] {
            Some(mark) => Cell::Taken(mark),
            None => Cell::Empty,
        }
    }

    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        self.at(i32::from(pos.row), i32::from(pos.col))
    }

    /// Check if a square is in bounds and unoccupied
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Cell::Empty
    }

    #[inline]
    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.row < self.height && pos.col < self.width
    }

    #[inline]
    pub fn occupied_count(&self) -> u16 {
        self.occupied
    }

    #[inline]
    pub fn total_cells(&self) -> u16 {
        u16::from(self.width) * u16::from(self.height)
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.occupied == self.total_cells()
    }

    /// All unoccupied squares in row-major order.
    pub fn empty_squares(&self) -> Vec<Pos> {
        let mut moves = Vec::with_capacity((self.total_cells() - self.occupied) as usize);
        for (idx, cell) in self.cells.iter().enumerate() {
            if cell.is_none() {
                let row = (idx / self.width as usize) as u8;
                let col = (idx % self.width as usize) as u8;
                moves.push(Pos::new(row, col));
            }
        }
        moves
    }

    /// Produce the successor board: place the active mark on `pos` and flip
    /// the turn. Utility stays 0; the caller evaluates the win condition on
    /// the successor and seals it with [`Board::with_utility`].
    ///
    /// The square must be in bounds and empty; game-rule validation happens
    /// in the caller.
    pub(crate) fn place(&self, pos: Pos) -> Board {
        debug_assert!(self.is_empty(pos));
        let mut cells = self.cells.clone();
        cells[pos.row as usize * self.width as usize + pos.col as usize] = Some(self.to_move);
        Board {
            width: self.width,
            height: self.height,
            win_len: self.win_len,
            to_move: self.to_move.opponent(),
            utility: 0,
            cells,
            occupied: self.occupied + 1,
        }
    }

    /// Seal the terminal value of a freshly placed board.
    pub(crate) fn with_utility(mut self, utility: i8) -> Board {
        self.utility = utility;
        self
    }

    /// Canonical key identifying this position for the transposition cache.
    pub fn key(&self) -> StateKey {
        StateKey {
            cells: self.cells.clone(),
            to_move: self.to_move,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                if col > 0 {
                    write!(f, " ")?;
                }
                match self.get(Pos::new(row, col)) {
                    Cell::Taken(mark) => write!(f, "{mark}")?,
                    _ => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
