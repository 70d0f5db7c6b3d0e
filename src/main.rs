//! Demo driver: play one configurable k-in-a-row game

use std::env;

use clap::{Parser, ValueEnum};
use log::info;

use kinarow::players::{alphabeta_player, minimax_player, random_player};
use kinarow::{evaluate, play_game, Game, Mark, PlayError, Strategy, TicTacToe};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PlayerKind {
    /// Uniformly random legal moves
    Random,
    /// Exhaustive memoized minimax (only tractable on small boards)
    Minimax,
    /// Depth-bounded alpha-beta with the window heuristic
    Alphabeta,
}

#[derive(Parser, Debug)]
#[command(about = "Play one generalized tic-tac-toe game between two strategies")]
struct Args {
    /// Board width
    #[arg(long, default_value_t = 3)]
    width: u8,

    /// Board height
    #[arg(long, default_value_t = 3)]
    height: u8,

    /// Run length required to win
    #[arg(short = 'k', long, default_value_t = 3)]
    win_len: u8,

    /// Cutoff depth for alpha-beta players
    #[arg(short, long, default_value_t = 4)]
    depth: u32,

    /// Seed for random players
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Strategy for X (moves first)
    #[arg(long, value_enum, default_value = "minimax")]
    x: PlayerKind,

    /// Strategy for O
    #[arg(long, value_enum, default_value = "alphabeta")]
    o: PlayerKind,
}

fn strategy<'a>(kind: PlayerKind, depth: u32, seed: u64) -> Strategy<'a, TicTacToe> {
    match kind {
        PlayerKind::Random => random_player(seed),
        PlayerKind::Minimax => minimax_player(),
        PlayerKind::Alphabeta => alphabeta_player(depth, evaluate),
    }
}

fn main() -> Result<(), PlayError> {
    // Default to 'info' level logging unless RUST_LOG overrides it
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let args = Args::parse();
    let game = TicTacToe::new(args.width, args.height, args.win_len);

    info!(
        "{}x{} board, {} in a row to win: X={:?} vs O={:?}",
        args.width, args.height, args.win_len, args.x, args.o
    );

    let x = strategy(args.x, args.depth, args.seed);
    // Offset the seed so two random players do not mirror each other
    let o = strategy(args.o, args.depth, args.seed.wrapping_add(1));

    let final_state = play_game(&game, x, o)?;

    println!("{final_state}");
    match game.utility(&final_state, Mark::X) {
        1 => println!("X wins"),
        -1 => println!("O wins"),
        _ => println!("draw"),
    }
    Ok(())
}
