//! Tic-tac-toe with move history and time travel.
//!
//! The crate holds the game-state machine only: board snapshots, move
//! validation, turn alternation, win/draw detection and navigation through
//! the history. A presentation layer drives it through a handful of
//! commands and reads everything it renders from queries.
//!
//! # Example
//!
//! ```
//! use timetravel_tictactoe::GameState;
//!
//! let mut game = GameState::new();
//! for cell in [0, 4, 1, 3, 8] {
//!     game.apply_move(cell).unwrap();
//! }
//! assert_eq!(game.current_status(), "Next player is O");
//!
//! game.jump_to_step(1).unwrap();
//! assert_eq!(game.current_status(), "Next player is O");
//! assert_eq!(game.history_len(), 6);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod game;
mod history;
mod invariants;
mod position;
mod rules;
mod status;
mod types;
mod view;

pub use action::{InvalidState, JumpError, Move, MoveError};
pub use contracts::{
    Contract, GameUndecided, JumpContract, MoveContract, SquareIsEmpty, StepInRange,
};
pub use game::GameState;
pub use history::{History, Snapshot};
pub use invariants::{
    AlternatingMarksInvariant, CursorInBoundsInvariant, Invariant, InvariantSet,
    InvariantViolation, MonotonicHistoryInvariant, TimelineInvariants,
};
pub use position::{Location, Position};
pub use rules::{LINES, WinningLine, detect, is_full};
pub use status::GameStatus;
pub use types::{Board, Mark, Square};
pub use view::{MoveDescription, MoveDescriptions, START_LABEL, SortOrder, describe};
