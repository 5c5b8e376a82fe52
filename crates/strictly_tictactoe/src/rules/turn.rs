//! Turn order and move generation.

use crate::{Action, Board, Cell, Player};
use std::collections::BTreeSet;
use tracing::instrument;

/// Returns the starting board: all nine cells empty.
#[instrument]
pub fn initial_state() -> Board {
    Board::new()
}

/// Returns the player whose turn is next.
///
/// X moves first and the players alternate, so X is to move exactly when
/// an odd number of cells remain empty.
#[instrument(level = "trace")]
pub fn player(board: &Board) -> Player {
    if board.empty_count() % 2 == 1 {
        Player::X
    } else {
        Player::O
    }
}

/// Returns every empty cell as an action.
///
/// The set iterates in row-major order. A full board yields an empty set.
#[instrument(level = "trace")]
pub fn actions(board: &Board) -> BTreeSet<Action> {
    Action::all()
        .filter(|action| board.get(*action) == Some(Cell::Empty))
        .collect()
}
