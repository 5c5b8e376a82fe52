//! Strictly Minimax - CLI
//!
//! Asks the alpha-beta engine about tic-tac-toe positions.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use strictly_minimax::cli::{Cli, Command};
use strictly_minimax::commands::{self, OutputFormat, SelfPlayText};
use strictly_tictactoe::{Board, SearchStrategy};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    match cli.command {
        Command::Status { board } => run_status(&board, cli.format),
        Command::BestMove { board, strategy } => run_best_move(&board, strategy.into(), cli.format),
        Command::SelfPlay { board, strategy } => run_self_play(board, strategy.into(), cli.format),
    }
}

/// Logs go to stderr so stdout stays machine-readable.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,strictly_minimax=info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Print the status of a board
#[instrument(skip(board), fields(board = %board))]
fn run_status(board: &Board, format: OutputFormat) -> Result<()> {
    let report = commands::status_report(board);
    println!("{}", commands::render(&report, format)?);
    Ok(())
}

/// Print the engine's move for a board
#[instrument(skip(board), fields(board = %board))]
fn run_best_move(board: &Board, strategy: SearchStrategy, format: OutputFormat) -> Result<()> {
    let report = commands::best_move(board, strategy)?;
    println!("{}", commands::render(&report, format)?);
    Ok(())
}

/// Play the engine against itself and print the game
#[instrument(skip(board), fields(board = %board))]
fn run_self_play(board: Board, strategy: SearchStrategy, format: OutputFormat) -> Result<()> {
    info!(%strategy, "Starting self-play");
    let outcome = strictly_tictactoe::self_play(board, strategy)?;
    println!("{}", commands::render(&SelfPlayText(&outcome), format)?);
    Ok(())
}
