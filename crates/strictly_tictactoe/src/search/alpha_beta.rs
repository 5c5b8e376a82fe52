//! Minimax with alpha-beta pruning.

use super::{INFINITY, NEG_INFINITY, SearchStats};
use crate::rules::{actions, result, terminal, utility};
use crate::{Action, Board, InvalidMoveError};
use tracing::trace;

/// Returns `(value, best action)` for `board`.
///
/// `alpha` is the best value the maximizer can already guarantee on the path
/// to the root, `beta` the best the minimizer can. A node stops expanding as
/// soon as a child proves the other side would never let play reach it.
pub(super) fn search(
    board: &Board,
    maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
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
        let (value, _) = search(&child, !maximizing, alpha, beta, stats)?;

        // Strict comparison keeps the first action that reached the best value.
        let improves = if maximizing {
            value > best_value
        } else {
            value < best_value
        };
        if improves {
            best_value = value;
            best_action = Some(action);
        }

        if maximizing {
            if value >= beta {
                trace!(%action, value, beta, "Beta cutoff");
                stats.cutoff();
                break;
            }
            alpha = alpha.max(value);
        } else {
            if value <= alpha {
                trace!(%action, value, alpha, "Alpha cutoff");
                stats.cutoff();
                break;
            }
            beta = beta.min(value);
        }
    }

    Ok((best_value, best_action))
}
