//! Win condition checking for k-in-a-row
//!
//! The win test only ever runs through the square that was just filled: a
//! new run must pass through the new mark, so scanning the whole board
//! would be both slower and redundant.

use crate::board::{Board, Cell, Mark, Pos};

/// Direction vectors for line checking (4 axes)
const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Check whether `mark` has a run of at least `board.win_len()` passing
/// through `square`.
///
/// For each axis the run length is the count of contiguous same-mark cells
/// walking forward plus the count walking backward, minus one because the
/// starting square is counted by both walks.
#[must_use]
pub fn k_in_row(board: &Board, mark: Mark, square: Pos) -> bool {
    let k = i32::from(board.win_len());
    DIRECTIONS.iter().any(|&(dr, dc)| {
        count_in_dir(board, mark, square, dr, dc) + count_in_dir(board, mark, square, -dr, -dc) - 1
            >= k
    })
}

/// Count contiguous `mark` cells starting at `square` and stepping by
/// `(dr, dc)`, including the starting square itself if it matches.
fn count_in_dir(board: &Board, mark: Mark, square: Pos, dr: i32, dc: i32) -> i32 {
    let mut count = 0;
    let mut row = i32::from(square.row);
    let mut col = i32::from(square.col);
    while board.at(row, col) == Cell::Taken(mark) {
        count += 1;
        row += dr;
        col += dc;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    /// Apply a move sequence starting from an empty board, alternating marks.
    fn board_after(width: u8, height: u8, k: u8, moves: &[(u8, u8)]) -> Board {
        let mut board = Board::new(width, height, k, Mark::X);
        for &(row, col) in moves {
            board = board.place(Pos::new(row, col));
        }
        board
    }

    #[test]
    fn test_horizontal_run() {
        // X at (0,0) (0,1) (0,2), O interleaved elsewhere
        let board = board_after(3, 3, 3, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert!(k_in_row(&board, Mark::X, Pos::new(0, 2)));
        // The middle square of the run also sees it
        assert!(k_in_row(&board, Mark::X, Pos::new(0, 1)));
    }

    #[test]
    fn test_vertical_run() {
        let board = board_after(3, 3, 3, &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 0)]);
        assert!(k_in_row(&board, Mark::X, Pos::new(2, 0)));
        assert!(!k_in_row(&board, Mark::O, Pos::new(1, 1)));
    }

    #[test]
    fn test_diagonal_run() {
        let board = board_after(3, 3, 3, &[(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)]);
        assert!(k_in_row(&board, Mark::X, Pos::new(1, 1)));
    }

    #[test]
    fn test_anti_diagonal_run() {
        let board = board_after(3, 3, 3, &[(0, 2), (0, 1), (1, 1), (1, 0), (2, 0)]);
        assert!(k_in_row(&board, Mark::X, Pos::new(1, 1)));
    }

    #[test]
    fn test_run_of_k_minus_one_is_not_a_win() {
        let board = board_after(4, 4, 4, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert!(!k_in_row(&board, Mark::X, Pos::new(0, 2)));
    }

    #[test]
    fn test_run_interrupted_by_opponent() {
        // X . X with O filling the gap later: never a run of 3
        let board = board_after(3, 3, 3, &[(0, 0), (0, 1), (0, 2)]);
        assert!(!k_in_row(&board, Mark::X, Pos::new(0, 0)));
        assert!(!k_in_row(&board, Mark::X, Pos::new(0, 2)));
    }

    #[test]
    fn test_run_across_edge_stops() {
        // Two X in the corner; the scan must stop at the edge, not wrap
        let board = board_after(3, 3, 3, &[(0, 1), (1, 1), (0, 0)]);
        assert!(!k_in_row(&board, Mark::X, Pos::new(0, 0)));
    }
}
