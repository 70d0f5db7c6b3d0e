//! Ready-made player strategies
//!
//! Each constructor returns a boxed `(game, state) -> move` closure fit
//! for [`play_game`](crate::play::play_game). The search-backed players
//! build a fresh searcher per move, so every search call owns its own
//! transposition cache rooted at the mark on move.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use crate::board::Mark;
use crate::eval::Value;
use crate::game::Game;
use crate::play::{PlayError, Strategy};
use crate::search::{cutoff_depth, AlphaBetaSearcher, MinimaxSearcher};

/// Uniformly random legal move, from a seeded RNG.
pub fn random_player<'a, G: Game + 'a>(seed: u64) -> Strategy<'a, G> {
    let mut rng = StdRng::seed_from_u64(seed);
    Box::new(move |game, state| {
        let moves = game.actions(state);
        moves
            .choose(&mut rng)
            .copied()
            .ok_or_else(|| PlayError::NoMove(game.to_move(state)))
    })
}

/// Optimal play via exhaustive memoized minimax.
pub fn minimax_player<'a, G: Game + 'a>() -> Strategy<'a, G> {
    Box::new(|game, state| {
        let mut searcher = MinimaxSearcher::new(game, game.to_move(state));
        let outcome = searcher.search(state)?;
        outcome
            .best
            .ok_or_else(|| PlayError::NoMove(game.to_move(state)))
    })
}

/// Depth-bounded alpha-beta play with an injected heuristic.
pub fn alphabeta_player<'a, G, H>(depth: u32, heuristic: H) -> Strategy<'a, G>
where
    G: Game + 'a,
    H: Fn(&G::State, Mark) -> Value + Copy + 'a,
{
    Box::new(move |game, state| {
        let mut searcher =
            AlphaBetaSearcher::new(game, game.to_move(state), cutoff_depth(depth), heuristic);
        let outcome = searcher.search(state)?;
        outcome
            .best
            .ok_or_else(|| PlayError::NoMove(game.to_move(state)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;
    use crate::eval::evaluate;
    use crate::game::TicTacToe;

    #[test]
    fn test_random_player_is_deterministic_per_seed() {
        let game = TicTacToe::classic();
        let board = game.initial();
        let mut a = random_player::<TicTacToe>(42);
        let mut b = random_player::<TicTacToe>(42);
        assert_eq!(a(&game, &board).unwrap(), b(&game, &board).unwrap());
    }

    #[test]
    fn test_random_player_move_is_legal() {
        let game = TicTacToe::classic();
        let mut board = game.initial();
        let mut player = random_player::<TicTacToe>(7);
        for _ in 0..5 {
            let mv = player(&game, &board).unwrap();
            assert!(board.is_empty(mv));
            board = game.result(&board, mv).unwrap();
        }
    }

    #[test]
    fn test_minimax_player_takes_the_win() {
        let game = TicTacToe::classic();
        let mut board = game.initial();
        for mv in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            board = game.result(&board, Pos::new(mv.0, mv.1)).unwrap();
        }
        let mut player = minimax_player::<TicTacToe>();
        assert_eq!(player(&game, &board).unwrap(), Pos::new(0, 2));
    }

    #[test]
    fn test_alphabeta_player_picks_a_legal_move() {
        let game = TicTacToe::new(4, 4, 4);
        let board = game.initial();
        let mut player = alphabeta_player::<TicTacToe, _>(2, evaluate);
        let mv = player(&game, &board).unwrap();
        assert!(board.is_empty(mv));
    }
}
