//! Command-line interface for strictly_minimax.

use crate::commands::OutputFormat;
use clap::{Parser, Subcommand, ValueEnum};
use strictly_tictactoe::{Board, SearchStrategy};

/// Strictly Minimax - optimal tic-tac-toe moves by alpha-beta search
#[derive(Parser, Debug)]
#[command(name = "strictly_minimax")]
#[command(about = "Optimal tic-tac-toe play by exhaustive game-tree search", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Report whose turn it is and whether the game is over
    Status {
        /// Board as nine cells, row-major: X, O, or '.' for empty (e.g. "XO./.X./...")
        #[arg(long, default_value = ".........")]
        board: Board,
    },

    /// Ask the engine for its move
    BestMove {
        /// Board as nine cells, row-major: X, O, or '.' for empty
        #[arg(long, default_value = ".........")]
        board: Board,

        /// Search variant
        #[arg(long, value_enum, default_value_t = Strategy::AlphaBeta)]
        strategy: Strategy,
    },

    /// Let the engine play both sides until the game ends
    SelfPlay {
        /// Starting board
        #[arg(long, default_value = ".........")]
        board: Board,

        /// Search variant
        #[arg(long, value_enum, default_value_t = Strategy::AlphaBeta)]
        strategy: Strategy,
    },
}

/// Search variant as chosen on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Minimax with alpha-beta pruning
    AlphaBeta,
    /// Plain minimax over the whole tree
    Exhaustive,
}

impl From<Strategy> for SearchStrategy {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::AlphaBeta => SearchStrategy::AlphaBeta,
            Strategy::Exhaustive => SearchStrategy::Exhaustive,
        }
    }
}
