//! Monotonic history invariant: each snapshot adds exactly one mark.

use super::super::history::Snapshot;
use super::super::{Board, GameState};
use super::Invariant;

/// Invariant: the history starts empty and grows one mark per step.
///
/// Snapshot `n` equals snapshot `n - 1` with the recorded mark placed on a
/// square that was empty, so no square is ever overwritten and snapshot `n`
/// holds exactly `n` marks.
pub struct MonotonicHistoryInvariant;

impl Invariant<GameState> for MonotonicHistoryInvariant {
    fn holds(game: &GameState) -> bool {
        let snapshots = game.history().snapshots();
        if snapshots.first() != Some(&Snapshot::Start) {
            return false;
        }

        snapshots.windows(2).all(|pair| {
            let prev: Board = pair[0].board();
            match pair[1].played() {
                Some(mv) => {
                    prev.is_empty(mv.position) && mv.board == prev.with_mark(mv.position, mv.mark)
                }
                None => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each step places one mark on an empty square"
    }
}
