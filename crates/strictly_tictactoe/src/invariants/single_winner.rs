//! Single winner invariant: at most one player ever completes a line.

use super::Invariant;
use crate::rules::win::has_line;
use crate::{Board, Player};

/// Invariant: X and O never both hold a completed line.
pub struct SingleWinnerInvariant;

impl Invariant<Board> for SingleWinnerInvariant {
    fn holds(board: &Board) -> bool {
        !(has_line(board, Player::X) && has_line(board, Player::O))
    }

    fn description() -> &'static str {
        "At most one player has three in a row"
    }
}
