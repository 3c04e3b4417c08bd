//! Status of the viewed snapshot.

use super::rules::{self, WinningLine};
use super::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Where the game stands on a given board.
///
/// Computed from a snapshot on demand, never stored, so viewing an earlier
/// step of a finished game reports that step as in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves remain; `next` plays on this board.
    InProgress {
        /// Mark to place next.
        next: Mark,
    },
    /// A line was completed.
    Won(WinningLine),
    /// Board is full with no completed line.
    Draw,
}

impl GameStatus {
    /// Evaluates `board`, with `next` as the mark to move if play continues.
    #[instrument(skip(board))]
    pub fn evaluate(board: &Board, next: Mark) -> Self {
        if let Some(line) = rules::detect(board) {
            GameStatus::Won(line)
        } else if rules::is_full(board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress { next }
        }
    }

    /// Whether further moves are rejected on this board.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }

    /// The completed line, if the game is won.
    pub fn winning_line(&self) -> Option<WinningLine> {
        match self {
            GameStatus::Won(line) => Some(*line),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress { next } => write!(f, "Next player is {}", next),
            GameStatus::Won(line) => write!(f, "The Winner is {}", line.winner),
            GameStatus::Draw => write!(f, "draw"),
        }
    }
}
