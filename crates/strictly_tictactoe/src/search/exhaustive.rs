//! Plain minimax that expands every node.

use super::{INFINITY, NEG_INFINITY, SearchStats};
use crate::rules::{actions, result, terminal, utility};
use crate::{Action, Board, InvalidMoveError};

/// Returns `(value, best action)` for `board` without pruning.
pub(super) fn search(
    board: &Board,
    maximizing: bool,
    stats: &mut SearchStats,
) -> Result<(i32, Option<Action>), InvalidMoveError> {
    stats.visit();

    if terminal(board) {
        return Ok((utility(board), None));
    }

    let mut best_value = if maximizing { NEG_INFINITY } else { INFINITY };
    let mut best_action = None;

    for action in actions(board) {
        let child = result(board, action)?;
        let (value, _) = search(&child, !maximizing, stats)?;

        let improves = if maximizing {
            value > best_value
        } else {
            value < best_value
        };
        if improves {
            best_value = value;
            best_action = Some(action);
        }
    }

    Ok((best_value, best_action))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_every_node() {
        // O to move with two cells left: root + 2 children + 2 grandchildren.
        let board: Board = "XOX XOO .X.".parse().unwrap();
        let mut stats = SearchStats::default();
        let (value, action) = search(&board, false, &mut stats).unwrap();
        assert_eq!(*stats.nodes(), 5);
        assert_eq!(*stats.cutoffs(), 0);
        assert_eq!(value, 0);
        assert_eq!(action, Some(Action::new(2, 0)));
    }

    #[test]
    fn test_minimizer_picks_lowest() {
        // O to move: (2,2) wins for O via the diagonal.
        let board: Board = "OXX XO. ...".parse().unwrap();
        let mut stats = SearchStats::default();
        let (value, action) = search(&board, false, &mut stats).unwrap();
        assert_eq!(value, -1);
        assert_eq!(action, Some(Action::new(2, 2)));
    }
}
