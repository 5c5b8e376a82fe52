//! Pure tic-tac-toe rules and optimal play.
//!
//! Two layers, strictly ordered:
//!
//! - **Rules** ([`rules`]): pure functions over [`Board`] values: whose turn
//!   it is, which actions are legal, what an action produces, whether the
//!   game is over, who won, and the utility of a finished board.
//! - **Search** ([`search`]): minimax with alpha-beta pruning over the full
//!   game tree, returning the optimal action for the player to move.
//!
//! On top sit the move [`contracts`], the board [`invariants`] they check,
//! and a typestate [`Game`] for collaborators that drive whole games.
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{Action, initial_state, minimax, result, terminal};
//!
//! # fn main() -> Result<(), strictly_tictactoe::InvalidMoveError> {
//! let board = result(&initial_state(), Action::new(1, 1))?;
//! assert!(!terminal(&board));
//! let reply = minimax(&board)?;
//! assert!(reply.is_some());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod contracts;
mod game;
pub mod invariants;
pub mod rules;
pub mod search;
mod types;

pub use action::{Action, InvalidMoveError};
pub use game::{
    Draw, Game, GameOutcome, GameTransition, InProgress, Outcome, Won, self_play,
};
pub use rules::{
    actions, initial_state, is_full, player, result, status, terminal, utility, winner,
};
pub use search::{
    Evaluation, SearchStats, SearchStrategy, evaluate, minimax, minimax_exhaustive,
};
pub use types::{Board, BoardParseError, CELLS, Cell, GameStatus, Player, SIDE};
