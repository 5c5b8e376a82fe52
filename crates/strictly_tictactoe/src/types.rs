//! Core domain types for tic-tac-toe.

use crate::action::Action;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first, maximizes utility).
    X,
    /// Player O (goes second, minimizes utility).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Character used for this player's mark in board text.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell holding a player's mark.
    Occupied(Player),
}

impl Cell {
    /// Character used for this cell in board text.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(player) => player.symbol(),
        }
    }
}

/// Side length of the board.
pub const SIDE: usize = 3;

/// Number of cells on the board.
pub const CELLS: usize = SIDE * SIDE;

/// 3x3 tic-tac-toe board.
///
/// Boards are plain values: every rule that "changes" a board returns a
/// fresh copy, so no caller ever observes another caller's edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; CELLS],
}

impl Board {
    /// Creates a new empty board.
    pub const fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELLS],
        }
    }

    /// Creates a board from cells in row-major order.
    pub const fn from_cells(cells: [Cell; CELLS]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given action, or `None` when it is off the board.
    pub fn get(&self, action: Action) -> Option<Cell> {
        action.index().map(|index| self.cells[index])
    }

    /// Checks if the cell at the given action exists and is empty.
    pub fn is_empty(&self, action: Action) -> bool {
        matches!(self.get(action), Some(Cell::Empty))
    }

    /// Returns a copy of this board with `cell` written at `index`.
    ///
    /// Callers must pass an index below [`CELLS`].
    pub(crate) fn with_cell(mut self, index: usize, cell: Cell) -> Self {
        self.cells[index] = cell;
        self
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; CELLS] {
        &self.cells
    }

    /// Counts the cells holding `player`'s mark.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Cell::Occupied(player))
            .count()
    }

    /// Counts the empty cells.
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| **cell == Cell::Empty).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..SIDE {
            for col in 0..SIDE {
                write!(f, "{}", self.cells[row * SIDE + col].symbol())?;
                if col < SIDE - 1 {
                    write!(f, "|")?;
                }
            }
            if row < SIDE - 1 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardParseError {
    /// A character that is neither a mark nor an empty marker.
    #[display("Invalid cell {:?} at position {}", found, index)]
    InvalidCell {
        /// Zero-based cell index where the character appeared.
        index: usize,
        /// The offending character.
        found: char,
    },
    /// The text did not describe exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongCellCount(#[error(not(source))] usize),
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cells in row-major order.
    ///
    /// `X`/`O` (either case) are marks, `.`, `-` and `_` are empty cells.
    /// Whitespace and `/` are row separators and are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Cell::Empty; CELLS];
        let mut count = 0;

        for ch in s.chars().filter(|c| !c.is_whitespace() && *c != '/') {
            let cell = match ch {
                'X' | 'x' => Cell::Occupied(Player::X),
                'O' | 'o' => Cell::Occupied(Player::O),
                '.' | '-' | '_' => Cell::Empty,
                found => {
                    return Err(BoardParseError::InvalidCell {
                        index: count,
                        found,
                    });
                }
            };
            if count < CELLS {
                cells[count] = cell;
            }
            count += 1;
        }

        if count != CELLS {
            return Err(BoardParseError::WrongCellCount(count));
        }
        Ok(Self { cells })
    }
}

/// Current status of the game, derived from a board on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(player) => write!(f, "Player {} wins", player),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}
