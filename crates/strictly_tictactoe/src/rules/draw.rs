//! End-of-game detection.

use super::win::winner;
use crate::{Board, Cell, GameStatus};
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
#[instrument(level = "trace")]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|cell| *cell != Cell::Empty)
}

/// Returns true if the game is over: somebody won or no cell is left.
#[instrument(level = "trace")]
pub fn terminal(board: &Board) -> bool {
    winner(board).is_some() || is_full(board)
}

/// Derives the game status from the board.
#[instrument]
pub fn status(board: &Board) -> GameStatus {
    match winner(board) {
        Some(player) => GameStatus::Won(player),
        None if is_full(board) => GameStatus::Draw,
        None => GameStatus::InProgress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn test_empty_board_not_terminal() {
        let board = Board::new();
        assert!(!is_full(&board));
        assert!(!terminal(&board));
        assert_eq!(status(&board), GameStatus::InProgress);
    }

    #[test]
    fn test_partial_board_not_full() {
        let board: Board = "....X....".parse().unwrap();
        assert!(!is_full(&board));
        assert!(!terminal(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board: Board = "XOX OXX OXO".parse().unwrap();
        assert!(is_full(&board));
        assert!(terminal(&board));
        assert_eq!(status(&board), GameStatus::Draw);
    }

    #[test]
    fn test_win_before_full_is_terminal() {
        let board: Board = "XXX OO. ...".parse().unwrap();
        assert!(!is_full(&board));
        assert!(terminal(&board));
        assert_eq!(status(&board), GameStatus::Won(Player::X));
    }

    #[test]
    fn test_win_on_last_cell_is_not_draw() {
        let board: Board = "XOX OXO XOX".parse().unwrap();
        assert!(is_full(&board));
        assert_eq!(status(&board), GameStatus::Won(Player::X));
    }
}
