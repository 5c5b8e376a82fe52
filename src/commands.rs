//! Command logic behind the binary.
//!
//! Each command returns a serializable report; rendering to text or JSON
//! is a separate step so the same report can feed either format.

use clap::ValueEnum;
use derive_getters::Getters;
use derive_new::new;
use serde::Serialize;
use std::fmt;
use strictly_tictactoe::{
    Board, Evaluation, GameOutcome, GameStatus, InvalidMoveError, Player, SearchStrategy,
    actions, evaluate, player, status, terminal, utility,
};
use tracing::{info, instrument};

/// How reports are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Answer to a status query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters, new)]
pub struct StatusReport {
    /// The board queried.
    board: Board,
    /// Player to move, `None` once the game is over.
    to_move: Option<Player>,
    /// Game status.
    status: GameStatus,
    /// Utility, only for finished games.
    utility: Option<i32>,
    /// Number of legal actions.
    legal_actions: usize,
}

/// Builds the status report for `board`.
#[instrument(skip(board), fields(board = %board))]
pub fn status_report(board: &Board) -> StatusReport {
    let finished = terminal(board);
    StatusReport::new(
        *board,
        (!finished).then(|| player(board)),
        status(board),
        finished.then(|| utility(board)),
        actions(board).len(),
    )
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        writeln!(f)?;
        writeln!(f, "Status: {}", self.status)?;
        match self.to_move {
            Some(player) => writeln!(f, "To move: {}", player)?,
            None => writeln!(f, "To move: nobody")?,
        }
        if let Some(utility) = self.utility {
            writeln!(f, "Utility: {}", utility)?;
        }
        write!(f, "Legal actions: {}", self.legal_actions)
    }
}

/// Answer to a best-move query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters, new)]
pub struct MoveReport {
    /// The board searched.
    board: Board,
    /// Search variant used.
    strategy: SearchStrategy,
    /// Player the move is for, `None` on a finished board.
    to_move: Option<Player>,
    /// Search result.
    evaluation: Evaluation,
}

/// Searches `board` for the engine's move.
///
/// # Errors
///
/// Propagates [`InvalidMoveError`] from the search.
#[instrument(skip(board), fields(board = %board))]
pub fn best_move(board: &Board, strategy: SearchStrategy) -> Result<MoveReport, InvalidMoveError> {
    let evaluation = evaluate(board, strategy)?;
    info!(
        action = ?evaluation.action(),
        value = *evaluation.value(),
        nodes = *evaluation.stats().nodes(),
        cutoffs = *evaluation.stats().cutoffs(),
        "Best move found"
    );
    let to_move = (!terminal(board)).then(|| player(board));
    Ok(MoveReport::new(*board, strategy, to_move, evaluation))
}

impl fmt::Display for MoveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        writeln!(f)?;
        match (self.to_move, self.evaluation.action()) {
            (Some(player), Some(action)) => writeln!(f, "Best move for {}: {}", player, action)?,
            _ => writeln!(f, "Best move: none (game over)")?,
        }
        writeln!(f, "Value: {}", self.evaluation.value())?;
        write!(
            f,
            "Search: {} visited {} nodes, {} cutoffs",
            self.strategy,
            self.evaluation.stats().nodes(),
            self.evaluation.stats().cutoffs()
        )
    }
}

/// Text rendering of a finished self-play game.
pub struct SelfPlayText<'a>(pub &'a GameOutcome);

impl fmt::Display for SelfPlayText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let game = self.0;
        for (turn, action) in game.history().iter().enumerate() {
            writeln!(f, "{:>2}. {}", turn + 1, action)?;
        }
        if !game.history().is_empty() {
            writeln!(f)?;
        }
        writeln!(f, "{}", game.board())?;
        writeln!(f)?;
        write!(f, "Result: {}", game.outcome())
    }
}

/// Renders a report in the requested format.
///
/// # Errors
///
/// Returns the `serde_json` error if JSON encoding fails.
pub fn render<T>(report: &T, format: OutputFormat) -> Result<String, serde_json::Error>
where
    T: Serialize + fmt::Display,
{
    match format {
        OutputFormat::Text => Ok(report.to_string()),
        OutputFormat::Json => serde_json::to_string_pretty(report),
    }
}

impl Serialize for SelfPlayText<'_> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}
