//! Applying a move to a board.

use super::turn::player;
use crate::contracts::{Contract, MoveContract};
use crate::{Action, Board, Cell, InvalidMoveError};
use tracing::instrument;

/// Returns the board that results from playing `action`.
///
/// The mover is whoever [`player`] says is next. The input board is never
/// touched; the new board is an independent copy.
///
/// # Errors
///
/// Returns [`InvalidMoveError::OutOfBounds`] if the coordinates are off the
/// grid and [`InvalidMoveError::Occupied`] if the cell already holds a mark.
#[instrument(level = "trace")]
pub fn result(board: &Board, action: Action) -> Result<Board, InvalidMoveError> {
    MoveContract::pre(board, &action)?;

    let index = action
        .index()
        .ok_or(InvalidMoveError::OutOfBounds { action })?;
    let next = board.with_cell(index, Cell::Occupied(player(board)));

    #[cfg(debug_assertions)]
    MoveContract::post(board, &next)?;

    Ok(next)
}
