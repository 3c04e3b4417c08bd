//! Contract-based validation for game commands.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{JumpError, MoveError};
use super::game::GameState;
use super::invariants::{InvariantSet, InvariantViolation, TimelineInvariants};
use super::rules;
use super::{Board, Position};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Error reported when either side of the contract fails.
    type Error;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Self::Error>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Self::Error>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the viewed board has no completed line.
pub struct GameUndecided;

impl GameUndecided {
    /// Rejects moves on a board that already has a winner.
    #[instrument(skip(board))]
    pub fn check(board: &Board) -> Result<(), MoveError> {
        match rules::detect(board) {
            Some(_) => Err(MoveError::GameOver),
            None => Ok(()),
        }
    }
}

/// Precondition: the square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects moves onto an occupied square.
    #[instrument(skip(board))]
    pub fn check(pos: Position, board: &Board) -> Result<(), MoveError> {
        if board.is_empty(pos) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(pos))
        }
    }
}

/// Contract for placing a mark on the viewed board.
///
/// Preconditions:
/// - Board has no winner
/// - Square is empty
///
/// Postconditions:
/// - Timeline invariants hold
/// - Exactly one snapshot was added after the old cursor
pub struct MoveContract;

impl Contract<GameState, Position> for MoveContract {
    type Error = MoveError;

    fn pre(game: &GameState, pos: &Position) -> Result<(), MoveError> {
        let board = game.current_board();
        GameUndecided::check(&board)?;
        SquareIsEmpty::check(*pos, &board)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        check_timeline(after).map_err(MoveError::InvariantViolation)?;

        let expected = before.current_step() + 1;
        if after.current_step() != expected || after.history_len() != expected + 1 {
            warn!(
                expected,
                cursor = after.current_step(),
                len = after.history_len(),
                "Move did not land right after the viewed step"
            );
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: move must directly follow the viewed step".to_string(),
            ));
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Jump Contract
// ─────────────────────────────────────────────────────────────

/// Precondition: the requested step is recorded.
pub struct StepInRange;

impl StepInRange {
    /// Rejects steps past the end of the history.
    #[instrument(skip(game))]
    pub fn check(step: usize, game: &GameState) -> Result<(), JumpError> {
        let len = game.history_len();
        if step < len {
            Ok(())
        } else {
            Err(JumpError::StepOutOfRange { step, len })
        }
    }
}

/// Contract for moving the cursor.
///
/// Preconditions:
/// - Step is in range
///
/// Postconditions:
/// - Timeline invariants hold
/// - History is unchanged
pub struct JumpContract;

impl Contract<GameState, usize> for JumpContract {
    type Error = JumpError;

    fn pre(game: &GameState, step: &usize) -> Result<(), JumpError> {
        StepInRange::check(*step, game)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), JumpError> {
        check_timeline(after).map_err(JumpError::InvariantViolation)?;
        if before.history() != after.history() {
            return Err(JumpError::InvariantViolation(
                "Postcondition failed: jumping must not alter history".to_string(),
            ));
        }
        Ok(())
    }
}

fn check_timeline(game: &GameState) -> Result<(), String> {
    TimelineInvariants::check_all(game).map_err(|violations| {
        let descriptions = violations
            .iter()
            .map(|v: &InvariantViolation| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        warn!(%descriptions, "Timeline invariant violated");
        format!("Postcondition failed: {}", descriptions)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::Snapshot;
    use crate::{Mark, Move};

    #[test]
    fn test_precondition_empty_square() {
        let game = GameState::new();
        assert!(MoveContract::pre(&game, &Position::Center).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let mut game = GameState::new();
        game.apply_move(4).expect("legal move");
        assert_eq!(
            MoveContract::pre(&game, &Position::Center),
            Err(MoveError::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_precondition_won_board() {
        let mut game = GameState::new();
        for cell in [0, 3, 1, 4, 2] {
            game.apply_move(cell).expect("legal move");
        }
        assert_eq!(
            MoveContract::pre(&game, &Position::BottomRight),
            Err(MoveError::GameOver)
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = GameState::new();
        let mut after = before.clone();
        after.apply_move(4).expect("legal move");
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = GameState::new();
        let mut after = before.clone();
        after.apply_move(4).expect("legal move");

        // X recorded again where O should have moved.
        let board = after.current_board().with_mark(Position::TopLeft, Mark::X);
        after
            .history
            .push_unchecked(Snapshot::Played(Move::new(Position::TopLeft, Mark::X, board)));
        after.cursor = 2;

        assert!(MoveContract::post(&before, &after).is_err());
    }

    #[test]
    fn test_jump_precondition() {
        let game = GameState::new();
        assert!(JumpContract::pre(&game, &0).is_ok());
        assert_eq!(
            JumpContract::pre(&game, &1),
            Err(JumpError::StepOutOfRange { step: 1, len: 1 })
        );
    }
}
