//! Win detection and scoring.

use crate::{Action, Board, Cell, Player};
use strum::IntoEnumIterator;
use tracing::instrument;

/// The eight winning lines: rows, columns, then diagonals.
pub const LINES: [[Action; 3]; 8] = [
    // Rows
    [Action::new(0, 0), Action::new(0, 1), Action::new(0, 2)],
    [Action::new(1, 0), Action::new(1, 1), Action::new(1, 2)],
    [Action::new(2, 0), Action::new(2, 1), Action::new(2, 2)],
    // Columns
    [Action::new(0, 0), Action::new(1, 0), Action::new(2, 0)],
    [Action::new(0, 1), Action::new(1, 1), Action::new(2, 1)],
    [Action::new(0, 2), Action::new(1, 2), Action::new(2, 2)],
    // Diagonals
    [Action::new(0, 0), Action::new(1, 1), Action::new(2, 2)],
    [Action::new(0, 2), Action::new(1, 1), Action::new(2, 0)],
];

/// Checks whether `player` holds every cell of some line.
pub fn has_line(board: &Board, player: Player) -> bool {
    let mark = Some(Cell::Occupied(player));
    LINES
        .iter()
        .any(|line| line.iter().all(|action| board.get(*action) == mark))
}

/// Returns the winner of the game, if there is one.
///
/// X is checked before O. Under alternating play only one player can hold
/// a line, so the order only matters for malformed boards.
#[instrument(level = "trace")]
pub fn winner(board: &Board) -> Option<Player> {
    Player::iter().find(|player| has_line(board, *player))
}

/// Scores a board from X's point of view.
///
/// Returns 1 if X has won, -1 if O has won, and 0 otherwise. The score is
/// only meaningful for terminal boards.
#[instrument(level = "trace")]
pub fn utility(board: &Board) -> i32 {
    match winner(board) {
        Some(Player::X) => 1,
        Some(Player::O) => -1,
        None => 0,
    }
}
