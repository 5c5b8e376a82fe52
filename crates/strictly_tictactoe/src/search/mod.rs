//! Adversarial search over the tic-tac-toe game tree.
//!
//! X maximizes utility and O minimizes it. Both strategies walk the full
//! tree below the given board and break ties in favor of the first action
//! in row-major order that reaches the best value.

mod alpha_beta;
mod exhaustive;

use crate::rules::{player, terminal};
use crate::{Action, Board, InvalidMoveError, Player};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Lower bound seed, strictly below every utility.
pub const NEG_INFINITY: i32 = -i32::MAX;

/// Upper bound seed, strictly above every utility.
pub const INFINITY: i32 = i32::MAX;

/// Which search variant evaluates a board.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum SearchStrategy {
    /// Minimax with alpha-beta pruning.
    #[default]
    #[display("alpha-beta")]
    AlphaBeta,
    /// Plain minimax that visits every node.
    #[display("exhaustive")]
    Exhaustive,
}

/// Work done by one search call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct SearchStats {
    /// Boards visited, root included.
    nodes: u64,
    /// Times a node stopped early because of an alpha or beta bound.
    cutoffs: u64,
}

impl SearchStats {
    pub(crate) fn visit(&mut self) {
        self.nodes += 1;
    }

    pub(crate) fn cutoff(&mut self) {
        self.cutoffs += 1;
    }
}

/// Outcome of searching a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct Evaluation {
    /// Minimax value of the board under optimal play, from X's side.
    value: i32,
    /// Best action for the player to move, `None` on a terminal board.
    action: Option<Action>,
    /// Search effort.
    stats: SearchStats,
}

/// Searches `board` with the given strategy.
///
/// # Errors
///
/// Only what [`crate::rules::result`] can raise. The search plays actions
/// produced by [`crate::rules::actions`], so this does not happen for
/// boards of the right shape.
#[instrument(skip(board), fields(board = %board))]
pub fn evaluate(board: &Board, strategy: SearchStrategy) -> Result<Evaluation, InvalidMoveError> {
    let maximizing = player(board) == Player::X;
    let mut stats = SearchStats::default();

    let (value, action) = match strategy {
        SearchStrategy::AlphaBeta => {
            alpha_beta::search(board, maximizing, NEG_INFINITY, INFINITY, &mut stats)?
        }
        SearchStrategy::Exhaustive => exhaustive::search(board, maximizing, &mut stats)?,
    };

    debug!(
        value,
        action = ?action,
        nodes = stats.nodes,
        cutoffs = stats.cutoffs,
        "Search finished"
    );
    Ok(Evaluation::new(value, action, stats))
}

/// Returns the optimal action for the player to move, using alpha-beta
/// pruning.
///
/// Returns `Ok(None)` on a terminal board.
#[instrument(skip(board), fields(board = %board))]
pub fn minimax(board: &Board) -> Result<Option<Action>, InvalidMoveError> {
    if terminal(board) {
        return Ok(None);
    }
    Ok(*evaluate(board, SearchStrategy::AlphaBeta)?.action())
}

/// Returns the optimal action using plain minimax without pruning.
///
/// Same answer and tie-break as [`minimax`], at the cost of visiting the
/// whole tree.
#[instrument(skip(board), fields(board = %board))]
pub fn minimax_exhaustive(board: &Board) -> Result<Option<Action>, InvalidMoveError> {
    if terminal(board) {
        return Ok(None);
    }
    Ok(*evaluate(board, SearchStrategy::Exhaustive)?.action())
}
