//! Typestate game driver for collaborators.
//!
//! The game phase is encoded in the type parameter, so a finished game has
//! no `place()` and only a won game has `winner()`. Every transition goes
//! through the rules engine; this module adds history and phase routing.

use crate::rules::{self, actions, player};
use crate::search::{SearchStrategy, evaluate};
use crate::{Action, Board, InvalidMoveError, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, info, instrument};

/// Phase marker: game is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InProgress;

/// Phase: game ended in a win.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Won {
    winner: Player,
}

/// Phase marker: game ended in a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Draw;

/// Game state with typestate phase encoding.
///
/// - `Game<InProgress>` - game is ongoing, moves can be made
/// - `Game<Won>` - game ended with a winner
/// - `Game<Draw>` - game ended in a draw
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game<S> {
    board: Board,
    history: Vec<Action>,
    phase: S,
}

/// Result of placing a mark - explicit state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameTransition {
    /// Game continues with next player.
    InProgress(Game<InProgress>),
    /// Game ended with a winner.
    Won(Game<Won>),
    /// Game ended in a draw.
    Draw(Game<Draw>),
}

impl GameTransition {
    /// Routes a board to the phase the rules say it is in.
    fn route(board: Board, history: Vec<Action>) -> Self {
        match rules::winner(&board) {
            Some(winner) => GameTransition::Won(Game {
                board,
                history,
                phase: Won { winner },
            }),
            None if rules::is_full(&board) => GameTransition::Draw(Game {
                board,
                history,
                phase: Draw,
            }),
            None => GameTransition::InProgress(Game {
                board,
                history,
                phase: InProgress,
            }),
        }
    }

    /// Returns the board, whatever the phase.
    pub fn board(&self) -> &Board {
        match self {
            GameTransition::InProgress(game) => game.board(),
            GameTransition::Won(game) => game.board(),
            GameTransition::Draw(game) => game.board(),
        }
    }

    /// Returns true if the game is over.
    pub fn is_finished(&self) -> bool {
        !matches!(self, GameTransition::InProgress(_))
    }
}

// ─────────────────────────────────────────────────────────────
//  Constructors
// ─────────────────────────────────────────────────────────────

impl Game<InProgress> {
    /// Creates a new game from the initial board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: rules::initial_state(),
            history: Vec::new(),
            phase: InProgress,
        }
    }

    /// Picks up a game from an arbitrary board.
    ///
    /// A terminal board lands directly in `Won` or `Draw`.
    #[instrument(skip(board), fields(board = %board))]
    pub fn from_board(board: Board) -> GameTransition {
        GameTransition::route(board, Vec::new())
    }
}

impl Default for Game<InProgress> {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  Only InProgress can accept moves (consuming transition)
// ─────────────────────────────────────────────────────────────

impl Game<InProgress> {
    /// Places the next mark at `action`, consuming the game.
    ///
    /// # Errors
    ///
    /// Returns whatever [`rules::result`] rejects: occupied or off-board
    /// cells. The game is consumed either way; callers keep a clone if they
    /// want to retry.
    #[instrument(skip(self), fields(player = %self.to_move()))]
    pub fn place(self, action: Action) -> Result<GameTransition, InvalidMoveError> {
        let board = rules::result(&self.board, action)?;
        let mut history = self.history;
        history.push(action);
        debug!(%action, "Mark placed");
        Ok(GameTransition::route(board, history))
    }

    /// Lets the search choose the next action and places it.
    ///
    /// # Errors
    ///
    /// Propagates [`InvalidMoveError`] from the search or the placement.
    #[instrument(skip(self), fields(player = %self.to_move()))]
    pub fn engine_move(self, strategy: SearchStrategy) -> Result<GameTransition, InvalidMoveError> {
        let evaluation = evaluate(&self.board, strategy)?;
        match *evaluation.action() {
            Some(action) => {
                info!(
                    player = %self.to_move(),
                    %action,
                    value = *evaluation.value(),
                    nodes = *evaluation.stats().nodes(),
                    "Engine move"
                );
                self.place(action)
            }
            None => Ok(GameTransition::route(self.board, self.history)),
        }
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        player(&self.board)
    }

    /// Returns the legal actions.
    pub fn legal_actions(&self) -> BTreeSet<Action> {
        actions(&self.board)
    }
}

// ─────────────────────────────────────────────────────────────
//  Common methods available on all phases
// ─────────────────────────────────────────────────────────────

impl<S> Game<S> {
    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the actions played since this game was created.
    pub fn history(&self) -> &[Action] {
        &self.history
    }
}

impl Game<Won> {
    /// Returns the winner of the game.
    pub fn winner(&self) -> Player {
        self.phase.winner
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished games
// ─────────────────────────────────────────────────────────────

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won the game.
    Winner(Player),
    /// Game ended in a draw.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// A finished game: final board, the actions that led there, and the result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GameOutcome {
    /// Final board.
    board: Board,
    /// Actions played, in order.
    history: Vec<Action>,
    /// Who won, if anyone.
    outcome: Outcome,
}

impl From<Game<Won>> for GameOutcome {
    fn from(game: Game<Won>) -> Self {
        let outcome = Outcome::Winner(game.winner());
        Self {
            board: game.board,
            history: game.history,
            outcome,
        }
    }
}

impl From<Game<Draw>> for GameOutcome {
    fn from(game: Game<Draw>) -> Self {
        Self {
            board: game.board,
            history: game.history,
            outcome: Outcome::Draw,
        }
    }
}

/// Plays the engine against itself from `board` until the game ends.
///
/// # Errors
///
/// Propagates [`InvalidMoveError`] from the rules engine.
#[instrument(skip(board), fields(board = %board))]
pub fn self_play(board: Board, strategy: SearchStrategy) -> Result<GameOutcome, InvalidMoveError> {
    let mut state = Game::<InProgress>::from_board(board);
    loop {
        state = match state {
            GameTransition::InProgress(game) => game.engine_move(strategy)?,
            GameTransition::Won(game) => {
                info!(winner = %game.winner(), moves = game.history().len(), "Self-play finished");
                return Ok(game.into());
            }
            GameTransition::Draw(game) => {
                info!(moves = game.history().len(), "Self-play finished in a draw");
                return Ok(game.into());
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_progress(transition: GameTransition) -> Game<InProgress> {
        match transition {
            GameTransition::InProgress(game) => game,
            other => panic!("Expected game in progress, got {:?}", other),
        }
    }

    #[test]
    fn test_new_game_starts_with_x() {
        let game = Game::<InProgress>::new();
        assert_eq!(game.to_move(), Player::X);
        assert!(game.history().is_empty());
        assert_eq!(game.legal_actions().len(), 9);
    }

    #[test]
    fn test_place_alternates_players() {
        let game = in_progress(Game::<InProgress>::new().place(Action::new(1, 1)).unwrap());
        assert_eq!(game.to_move(), Player::O);
        assert_eq!(game.history(), &[Action::new(1, 1)]);
    }

    #[test]
    fn test_place_occupied_is_rejected() {
        let game = in_progress(Game::<InProgress>::new().place(Action::new(1, 1)).unwrap());
        let err = game.place(Action::new(1, 1)).unwrap_err();
        assert!(err.to_string().contains("occupied"));
    }

    #[test]
    fn test_transition_to_won() {
        let mut game = Game::<InProgress>::new();
        for action in [
            Action::new(0, 0),
            Action::new(1, 1),
            Action::new(0, 1),
            Action::new(2, 2),
        ] {
            game = in_progress(game.place(action).unwrap());
        }
        match game.place(Action::new(0, 2)).unwrap() {
            GameTransition::Won(won) => {
                assert_eq!(won.winner(), Player::X);
                assert_eq!(won.history().len(), 5);
            }
            other => panic!("Should have won, got {:?}", other),
        }
    }

    #[test]
    fn test_transition_to_draw() {
        let board: Board = "XOX XOO OX.".parse().unwrap();
        let game = in_progress(Game::<InProgress>::from_board(board));
        let transition = game.place(Action::new(2, 2)).unwrap();
        assert!(matches!(transition, GameTransition::Draw(_)));
        assert!(transition.is_finished());
    }

    #[test]
    fn test_from_terminal_board() {
        let board: Board = "OOO XX. X..".parse().unwrap();
        match Game::<InProgress>::from_board(board) {
            GameTransition::Won(won) => assert_eq!(won.winner(), Player::O),
            other => panic!("Expected won game, got {:?}", other),
        }
    }

    #[test]
    fn test_engine_move_takes_win() {
        let board: Board = "XX. OO. ...".parse().unwrap();
        let game = in_progress(Game::<InProgress>::from_board(board));
        match game.engine_move(SearchStrategy::AlphaBeta).unwrap() {
            GameTransition::Won(won) => assert_eq!(won.history(), &[Action::new(0, 2)]),
            other => panic!("Engine should have won, got {:?}", other),
        }
    }

    #[test]
    fn test_self_play_from_empty_board_draws() {
        let outcome = self_play(Board::new(), SearchStrategy::AlphaBeta).unwrap();
        assert!(outcome.outcome().is_draw());
        assert_eq!(outcome.history().len(), 9);
        assert_eq!(outcome.board().empty_count(), 0);
    }

    #[test]
    fn test_self_play_on_finished_board() {
        let board: Board = "XOX XOO OXX".parse().unwrap();
        let outcome = self_play(board, SearchStrategy::Exhaustive).unwrap();
        assert_eq!(*outcome.outcome(), Outcome::Draw);
        assert!(outcome.history().is_empty());
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::Winner(Player::O).to_string(), "Player O wins");
        assert_eq!(Outcome::Draw.to_string(), "Draw");
        assert_eq!(Outcome::Winner(Player::X).winner(), Some(Player::X));
    }
}
