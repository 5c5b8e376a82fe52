//! First-class invariants for tic-tac-toe boards.
//!
//! Invariants are logical properties that every board reachable by legal
//! play satisfies. They are testable on their own and double as
//! documentation of what the rules guarantee.

pub mod mark_balance;
pub mod no_play_after_win;
pub mod single_winner;

#[cfg(kani)]
mod verification;

pub use mark_balance::MarkBalanceInvariant;
pub use no_play_after_win::NoPlayAfterWinInvariant;
pub use single_winner::SingleWinnerInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants so sets compose by type.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn finish(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        collect::<S, I1>(state, &mut violations);
        collect::<S, I2>(state, &mut violations);
        collect::<S, I3>(state, &mut violations);
        finish(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        collect::<S, I1>(state, &mut violations);
        collect::<S, I2>(state, &mut violations);
        finish(violations)
    }
}

/// Every board reachable from the initial state by legal play.
pub type ReachableBoard = (
    MarkBalanceInvariant,
    SingleWinnerInvariant,
    NoPlayAfterWinInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Action, Board, rules};

    #[test]
    fn test_invariant_set_holds_for_empty_board() {
        assert!(ReachableBoard::check_all(&Board::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut board = rules::initial_state();
        for action in [Action::new(0, 0), Action::new(1, 1), Action::new(0, 2)] {
            board = rules::result(&board, action).unwrap();
        }
        assert!(ReachableBoard::check_all(&board).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        // Two O rows, no X: unbalanced, and O kept playing after winning.
        let board: Board = "OOO OOO ...".parse().unwrap();
        let violations = ReachableBoard::check_all(&board).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert!(
            violations
                .iter()
                .any(|v| v.description == MarkBalanceInvariant::description())
        );
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (MarkBalanceInvariant, SingleWinnerInvariant);
        assert!(TwoInvariants::check_all(&Board::new()).is_ok());
    }
}
