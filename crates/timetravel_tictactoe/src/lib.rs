//! Tic-tac-toe on 3×3, 4×4 and 5×5 boards with move history and time travel.
//!
//! # Architecture
//!
//! - **Lines**: parametric winning-line generator, cached per board size
//! - **Rules**: pure win and draw evaluation over a board snapshot
//! - **Game**: history of snapshots, a step pointer, and value-returning
//!   transitions (`apply_move`, `jump_to`, `set_board_config`)
//! - **Invariants**: first-class properties checked after every transition
//!
//! # Example
//!
//! ```
//! use timetravel_tictactoe::{BoardSize, Game, Player};
//!
//! # fn example() -> Result<(), timetravel_tictactoe::GameError> {
//! let game = Game::new(BoardSize::Three)
//!     .apply_move(0)?
//!     .apply_move(4)?
//!     .apply_move(1)?;
//! assert_eq!(game.active_player(), Player::O);
//!
//! let rewound = game.jump_to(1)?;
//! assert_eq!(rewound.active_player(), Player::O);
//! assert_eq!(rewound.history_length(), 4);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
mod invariants;
mod lines;
mod rules;
mod types;

pub use error::{GameError, GameErrorKind};
pub use game::{Game, Move};
pub use invariants::{
    EmptyOriginInvariant, GameInvariants, Invariant, InvariantSet, InvariantViolation,
    SingleCellDeltaInvariant, StepInRangeInvariant,
};
pub use lines::{Line, LineKind, lines_for};
pub use rules::{evaluate, is_draw, is_full, winning_line};
pub use types::{Board, BoardSize, Player, Square};
