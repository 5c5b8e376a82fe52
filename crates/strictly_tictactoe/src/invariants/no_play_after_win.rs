//! No play after a win: the winner made the last move.

use super::Invariant;
use crate::rules::winner;
use crate::{Board, Player};

/// Invariant: a won board ends on the winner's move.
///
/// If X won, X has one more mark than O. If O won, the counts are equal.
/// Anything else means somebody kept playing after the game was over.
pub struct NoPlayAfterWinInvariant;

impl Invariant<Board> for NoPlayAfterWinInvariant {
    fn holds(board: &Board) -> bool {
        let x = board.count(Player::X);
        let o = board.count(Player::O);
        match winner(board) {
            Some(Player::X) => x == o + 1,
            Some(Player::O) => x == o,
            None => true,
        }
    }

    fn description() -> &'static str {
        "Nobody moves after the game is won"
    }
}
