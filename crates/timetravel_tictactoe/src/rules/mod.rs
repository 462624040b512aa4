//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single board snapshot. Rules are kept apart from
//! history so the state machine and the presentation layer can both use
//! them.

mod draw;
mod win;

pub use draw::{is_draw, is_full};
pub use win::{evaluate, winning_line};
