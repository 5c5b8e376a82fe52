//! Kani proof harnesses for the board invariants.
//!
//! These harnesses check that legal play preserves reachability for every
//! board Kani can construct, not just the ones the tests happen to visit.

use super::{InvariantSet, ReachableBoard};
use crate::{Action, Board, Cell, Player, rules};

impl kani::Arbitrary for Player {
    fn any() -> Self {
        if kani::any() { Player::X } else { Player::O }
    }
}

impl kani::Arbitrary for Cell {
    fn any() -> Self {
        if kani::any() {
            Cell::Empty
        } else {
            Cell::Occupied(kani::any())
        }
    }
}

impl kani::Arbitrary for Board {
    fn any() -> Self {
        let cells: [Cell; 9] = kani::any();
        Board::from_cells(cells)
    }
}

impl kani::Arbitrary for Action {
    fn any() -> Self {
        let index: usize = kani::any();
        kani::assume(index < 9);
        Action::new(index / 3, index % 3)
    }
}

/// Legal play from a live, reachable board lands on a reachable board.
#[kani::proof]
#[kani::unwind(10)]
fn verify_result_preserves_reachability() {
    let board: Board = kani::any();
    let action: Action = kani::any();

    kani::assume(ReachableBoard::check_all(&board).is_ok());
    kani::assume(!rules::terminal(&board));
    kani::assume(board.is_empty(action));

    let next = rules::result(&board, action);
    assert!(next.is_ok());
    if let Ok(next) = next {
        assert!(ReachableBoard::check_all(&next).is_ok());
    }
}

/// Occupied cells are always rejected and never overwritten.
#[kani::proof]
#[kani::unwind(10)]
fn verify_occupied_cell_rejected() {
    let board: Board = kani::any();
    let action: Action = kani::any();

    kani::assume(!board.is_empty(action));

    assert!(rules::result(&board, action).is_err());
}
