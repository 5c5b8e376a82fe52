//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use crate::invariants::{InvariantSet, ReachableBoard};
use crate::rules::{player, winner};
use crate::{Action, Board, Cell, InvalidMoveError};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), InvalidMoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), InvalidMoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the action's coordinates lie on the 3x3 grid.
pub struct WithinBounds;

impl WithinBounds {
    /// Rejects off-board coordinates.
    #[instrument(level = "trace", skip(board))]
    pub fn check(action: &Action, board: &Board) -> Result<(), InvalidMoveError> {
        if action.in_bounds() {
            Ok(())
        } else {
            Err(InvalidMoveError::OutOfBounds { action: *action })
        }
    }
}

/// Precondition: the target cell must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects occupied cells. Off-board actions are left to [`WithinBounds`].
    #[instrument(level = "trace", skip(board))]
    pub fn check(action: &Action, board: &Board) -> Result<(), InvalidMoveError> {
        match board.get(*action) {
            Some(occupant @ Cell::Occupied(_)) => Err(InvalidMoveError::Occupied {
                action: *action,
                occupant,
            }),
            _ => Ok(()),
        }
    }
}

/// Composite precondition: a move is legal if it is on the board and the
/// cell is empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move, bounds first.
    #[instrument(level = "trace", skip(board))]
    pub fn check(action: &Action, board: &Board) -> Result<(), InvalidMoveError> {
        WithinBounds::check(action, board)?;
        CellIsEmpty::check(action, board)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for a single move.
///
/// Preconditions:
/// - Coordinates are on the board
/// - Cell is empty
///
/// Postconditions:
/// - Exactly one cell changed, from empty to the mover's mark
/// - A reachable, unfinished board stays reachable
pub struct MoveContract;

impl Contract<Board, Action> for MoveContract {
    fn pre(board: &Board, action: &Action) -> Result<(), InvalidMoveError> {
        LegalMove::check(action, board)
    }

    fn post(before: &Board, after: &Board) -> Result<(), InvalidMoveError> {
        let mover = Cell::Occupied(player(before));
        let changed: Vec<(Cell, Cell)> = before
            .cells()
            .iter()
            .zip(after.cells())
            .filter(|(old, new)| old != new)
            .map(|(old, new)| (*old, *new))
            .collect();

        if changed.as_slice() != [(Cell::Empty, mover)] {
            warn!(?changed, "Move changed the wrong cells");
            return Err(InvalidMoveError::InvariantViolation(format!(
                "Postcondition failed: expected one empty cell to become {:?}, saw {:?}",
                mover, changed
            )));
        }

        // Only legal play from a live, reachable board is required to stay reachable.
        if winner(before).is_some() || ReachableBoard::check_all(before).is_err() {
            return Ok(());
        }

        ReachableBoard::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Board invariants violated after move");
            InvalidMoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
