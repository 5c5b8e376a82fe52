//! First-class action types for tic-tac-toe.
//!
//! An action names a cell by `(row, col)`. It says nothing about who plays
//! it: the mover is always inferred from the board.

use crate::types::{Cell, SIDE};
use serde::{Deserialize, Serialize};

/// A move target: the cell at `(row, col)`.
///
/// Actions order row-major, which is the order the rules enumerate them in
/// and therefore the search's tie-break order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Action {
    /// Row, top to bottom.
    pub row: usize,
    /// Column, left to right.
    pub col: usize,
}

impl Action {
    /// Creates a new action. Coordinates are not checked here; the rules
    /// reject off-board actions when they are played.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the row.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Returns the column.
    pub fn col(&self) -> usize {
        self.col
    }

    /// Whether both coordinates fall inside the 3x3 grid.
    pub fn in_bounds(&self) -> bool {
        self.row < SIDE && self.col < SIDE
    }

    /// Row-major cell index (0-8), or `None` when off the board.
    pub fn index(&self) -> Option<usize> {
        self.in_bounds().then(|| self.row * SIDE + self.col)
    }

    /// Creates an action from a row-major cell index.
    pub fn from_index(index: usize) -> Option<Self> {
        (index < SIDE * SIDE).then(|| Self::new(index / SIDE, index % SIDE))
    }

    /// All nine on-board actions in row-major order.
    pub fn all() -> impl Iterator<Item = Action> {
        (0..SIDE * SIDE).map(|index| Self::new(index / SIDE, index % SIDE))
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Action {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// Error raised when an action cannot be played on a board.
///
/// This is the rules engine's only error. It is returned to the immediate
/// caller unchanged: an illegal move is a caller bug or bad user input.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvalidMoveError {
    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied by {:?}", action, occupant)]
    Occupied {
        /// The rejected action.
        action: Action,
        /// What the cell holds.
        occupant: Cell,
    },

    /// The target coordinates are outside the 3x3 grid.
    #[display("Cell {} is off the board", action)]
    OutOfBounds {
        /// The rejected action.
        action: Action,
    },

    /// A postcondition failed after the move was applied.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}
