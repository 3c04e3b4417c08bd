//! Alternating marks invariant: X and O take turns from the start.

use super::super::{GameState, Mark};
use super::Invariant;

/// Invariant: the move recorded at step `n` placed X for odd `n`, O for even `n`.
///
/// Together with [`MonotonicHistoryInvariant`](super::MonotonicHistoryInvariant)
/// this keeps X's count on any snapshot equal to O's or one ahead.
pub struct AlternatingMarksInvariant;

impl Invariant<GameState> for AlternatingMarksInvariant {
    fn holds(game: &GameState) -> bool {
        game.history()
            .snapshots()
            .iter()
            .enumerate()
            .skip(1)
            .all(|(step, snapshot)| {
                snapshot
                    .played()
                    .is_some_and(|mv| mv.mark == Mark::for_step(step - 1))
            })
    }

    fn description() -> &'static str {
        "Marks alternate starting with X"
    }
}
