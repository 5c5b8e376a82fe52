//! Strictly Minimax library - optimal tic-tac-toe play
//!
//! Re-exports the rules engine and search from `strictly_tictactoe` and
//! hosts the command logic behind the `strictly_minimax` binary.
//!
//! # Architecture
//!
//! - **Rules**: pure functions over board values (`player`, `actions`,
//!   `result`, `winner`, `terminal`, `utility`)
//! - **Search**: minimax with alpha-beta pruning (`minimax`, `evaluate`)
//! - **Commands**: status queries, best-move queries and engine self-play,
//!   rendered as text or JSON
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{Action, Board, minimax};
//!
//! # fn main() -> anyhow::Result<()> {
//! let board: Board = "XX. OO. ...".parse()?;
//! assert_eq!(minimax(&board)?, Some(Action::new(0, 2)));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;

// Crate-level exports - Game types and rules (tic-tac-toe)
pub use strictly_tictactoe::{
    Action, Board, BoardParseError, Cell, Evaluation, Game, GameOutcome, GameStatus,
    GameTransition, InProgress, InvalidMoveError, Outcome, Player, SearchStats, SearchStrategy,
    actions, evaluate, initial_state, minimax, minimax_exhaustive, player, result, self_play,
    status, terminal, utility, winner,
};

// Crate-level exports - Commands
pub use commands::{MoveReport, OutputFormat, StatusReport, best_move, render, status_report};
