//! Window-counting heuristic for non-terminal boards
//!
//! Every axis-aligned window of exactly k cells is classified:
//! - only the player's marks (p of them): contributes +10^p
//! - only the opponent's marks (o of them): contributes -10^o
//! - mixed or entirely empty: contributes 0
//!
//! The exponential weighting makes near-complete lines dominate, which
//! approximates tactical urgency without any lookahead. Swapping the two
//! marks negates the score exactly, so the evaluation is symmetric.

use super::Value;
use crate::board::{Board, Cell, Mark};

/// Ceiling on reported scores. 10^count saturates long before this, and
/// clamping symmetrically keeps every score strictly inside the search
/// engines' (-INF, INF) window without breaking antisymmetry.
const SCORE_LIMIT: Value = i64::MAX / 4;

/// Score a non-terminal board for `player` by sliding a k-cell window
/// along every row, column and both diagonal directions.
///
/// Scores are saturated and clamped to `±(i64::MAX / 4)`, so boards with
/// win lengths large enough to overflow the 10^count weights (k > 18)
/// still evaluate without panicking.
#[must_use]
pub fn evaluate(board: &Board, player: Mark) -> Value {
    let w = i32::from(board.width());
    let h = i32::from(board.height());
    let k = i32::from(board.win_len());

    // Accumulate in i128: the widest possible board cannot overflow it,
    // and summing exactly keeps the negation symmetry that saturating
    // i64 adds would lose at the extremes
    let mut total: i128 = 0;

    // Rows (empty ranges drop an orientation when k exceeds that dimension)
    for r in 0..h {
        for c in 0..=(w - k) {
            total += i128::from(window_score(board, player, r, c, 0, 1, k));
        }
    }
    // Columns
    for c in 0..w {
        for r in 0..=(h - k) {
            total += i128::from(window_score(board, player, r, c, 1, 0, k));
        }
    }
    // Diagonals (down-right)
    for r in 0..=(h - k) {
        for c in 0..=(w - k) {
            total += i128::from(window_score(board, player, r, c, 1, 1, k));
        }
    }
    // Anti-diagonals (down-left)
    for r in 0..=(h - k) {
        for c in (k - 1)..w {
            total += i128::from(window_score(board, player, r, c, 1, -1, k));
        }
    }

    total.clamp(-i128::from(SCORE_LIMIT), i128::from(SCORE_LIMIT)) as Value
}

/// Contribution of a single k-cell window starting at (row, col) and
/// stepping by (dr, dc). Window coordinates are in bounds by construction;
/// the `Cell::Off` arm is unreachable but kept total.
fn window_score(board: &Board, player: Mark, row: i32, col: i32, dr: i32, dc: i32, k: i32) -> Value {
    let mut own = 0u32;
    let mut opp = 0u32;
    for i in 0..k {
        match board.at(row + dr * i, col + dc * i) {
            Cell::Taken(mark) if mark == player => own += 1,
            Cell::Taken(_) => opp += 1,
            Cell::Empty | Cell::Off => {}
        }
    }
    if opp == 0 && own > 0 {
        10i64.saturating_pow(own)
    } else if own == 0 && opp > 0 {
        -(10i64.saturating_pow(opp))
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;

    fn board_after(width: u8, height: u8, k: u8, moves: &[(u8, u8)]) -> Board {
        let mut board = Board::new(width, height, k, Mark::X);
        for &(row, col) in moves {
            board = board.place(Pos::new(row, col));
        }
        board
    }

    #[test]
    fn test_empty_board_scores_zero() {
        let board = Board::new(4, 4, 4, Mark::X);
        assert_eq!(evaluate(&board, Mark::X), 0);
        assert_eq!(evaluate(&board, Mark::O), 0);
    }

    #[test]
    fn test_single_mark_counts_its_windows() {
        // Center of 3x3 with k=3: one row, one column, two diagonals
        let board = board_after(3, 3, 3, &[(1, 1)]);
        assert_eq!(evaluate(&board, Mark::X), 4 * 10);
        assert_eq!(evaluate(&board, Mark::O), -4 * 10);
    }

    #[test]
    fn test_mixed_window_scores_zero() {
        // X and O in the same (only) horizontal window of row 0
        let board = board_after(3, 3, 3, &[(0, 0), (0, 1)]);
        // Row 0 window mixed; X still owns its column and the main diagonal,
        // O its column. Just verify antisymmetry and sign here.
        assert_eq!(evaluate(&board, Mark::X), -evaluate(&board, Mark::O));
    }

    #[test]
    fn test_exponential_weighting() {
        // Three X in a row on 4x4 k=4: the row window with p=3 dominates
        let board = board_after(4, 4, 4, &[(0, 0), (2, 0), (0, 1), (2, 1), (0, 2)]);
        let score = evaluate(&board, Mark::X);
        assert!(score >= 1000 - 200, "near-complete line must dominate: {score}");
    }

    #[test]
    fn test_antisymmetry_on_random_like_position() {
        let board = board_after(
            5,
            5,
            4,
            &[(0, 0), (1, 1), (2, 2), (3, 3), (0, 4), (4, 0), (2, 1), (1, 2)],
        );
        assert_eq!(evaluate(&board, Mark::X), -evaluate(&board, Mark::O));
    }

    #[test]
    fn test_huge_win_length_saturates_without_panic() {
        // 19 same-color marks in one k=20 window would overflow 10^count;
        // the weights saturate and the total stays inside the search window
        let mut board = Board::new(25, 2, 20, Mark::X);
        for c in 0..19 {
            board = board.place(Pos::new(0, c)).place(Pos::new(1, c));
        }
        let for_x = evaluate(&board, Mark::X);
        let for_o = evaluate(&board, Mark::O);
        assert!(for_x.abs() <= i64::MAX / 4);
        assert_eq!(for_x, -for_o, "clamping must preserve antisymmetry");
    }

    #[test]
    fn test_non_square_board_windows() {
        // 5x2 board, k=4: only horizontal windows exist
        let board = board_after(5, 2, 4, &[(0, 0)]);
        // X at (0,0) sits in exactly one horizontal window (cols 0..=3)
        assert_eq!(evaluate(&board, Mark::X), 10);
    }
}
