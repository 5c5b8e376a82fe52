//! Mark balance invariant: X is never behind O, and never more than one ahead.

use super::Invariant;
use crate::{Board, Player};

/// Invariant: X count minus O count is 0 or 1.
///
/// X moves first and the players alternate, so after every move X has
/// either the same number of marks as O or exactly one more.
pub struct MarkBalanceInvariant;

impl Invariant<Board> for MarkBalanceInvariant {
    fn holds(board: &Board) -> bool {
        let x = board.count(Player::X);
        let o = board.count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has as many marks as O, or one more"
    }
}
