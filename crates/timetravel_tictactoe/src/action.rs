//! Recorded moves and the errors returned when a command is rejected.

use super::{Board, Location, Mark, Position};
use serde::{Deserialize, Serialize};

/// A move as recorded in the history: where the mark went, which mark it
/// was, and the board that resulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The cell that was played.
    pub position: Position,
    /// The mark that was placed.
    pub mark: Mark,
    /// Board snapshot after the mark was placed.
    pub board: Board,
}

impl Move {
    /// Creates a move record.
    pub fn new(position: Position, mark: Mark, board: Board) -> Self {
        Self {
            position,
            mark,
            board,
        }
    }

    /// 1-based `(col, row)` of the played cell.
    pub fn location(&self) -> Location {
        self.position.location()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Why a move was not applied. The game state is untouched in every case.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell index is not on the board.
    #[display("Cell {} is outside the board (0-8)", _0)]
    OutOfBounds(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The viewed snapshot already has a winner.
    #[display("Game is already over")]
    GameOver,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

/// Why a jump through history was not applied.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum JumpError {
    /// The requested step does not exist.
    #[display("Step {step} is out of range (history has {len} entries)")]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// Current history length.
        len: usize,
    },

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for JumpError {}

/// Why a serialized game was not accepted.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invalid game state: {}", _0)]
pub struct InvalidState(pub(crate) String);

impl std::error::Error for InvalidState {}
