//! Cursor invariant: the viewed step exists.

use super::super::GameState;
use super::Invariant;

/// Invariant: the cursor addresses a recorded snapshot.
pub struct CursorInBoundsInvariant;

impl Invariant<GameState> for CursorInBoundsInvariant {
    fn holds(game: &GameState) -> bool {
        game.current_step() < game.history_len()
    }

    fn description() -> &'static str {
        "Cursor addresses a recorded step"
    }
}
