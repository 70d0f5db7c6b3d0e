//! Game driver: alternates two strategies until the game ends

use std::fmt;

use log::info;
use thiserror::Error;

use crate::board::Mark;
use crate::game::{Game, InvalidMoveError};

/// Errors surfacing from a strategy or from applying its move.
#[derive(Error, Debug)]
pub enum PlayError {
    #[error(transparent)]
    InvalidMove(#[from] InvalidMoveError),
    /// A strategy produced no move for a non-terminal state. Searches only
    /// return an empty move at terminal states, so this is a logic error.
    #[error("strategy for {0} produced no move")]
    NoMove(Mark),
}

/// A player: given the game and the current state, pick a move.
pub type Strategy<'a, G> =
    Box<dyn FnMut(&G, &<G as Game>::State) -> Result<<G as Game>::Move, PlayError> + 'a>;

/// Play one game from the initial state, dispatching to `x` or `o` by whose
/// turn it is. Returns the terminal state.
pub fn play_game<G>(
    game: &G,
    mut x: Strategy<'_, G>,
    mut o: Strategy<'_, G>,
) -> Result<G::State, PlayError>
where
    G: Game,
    G::State: fmt::Display,
    G::Move: fmt::Debug,
{
    let mut state = game.initial();
    while !game.is_terminal(&state) {
        let mover = game.to_move(&state);
        let mv = match mover {
            Mark::X => x(game, &state)?,
            Mark::O => o(game, &state)?,
        };
        state = game.result(&state, mv)?;
        info!("{mover} plays {mv:?}");
        info!("\n{state}");
    }
    Ok(state)
}
