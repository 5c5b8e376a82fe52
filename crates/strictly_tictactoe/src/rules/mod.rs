//! Game rules for tic-tac-toe.
//!
//! Pure functions over board values. Rules are kept apart from board
//! storage so the search and the contracts can compose them freely.

pub mod draw;
pub mod transition;
pub mod turn;
pub mod win;

pub use draw::{is_full, status, terminal};
pub use transition::result;
pub use turn::{actions, initial_state, player};
pub use win::{utility, winner};
