//! Board snapshots recorded over the course of a game.

use super::{Board, Move};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One entry in the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Snapshot {
    /// The empty board every game starts from.
    Start,
    /// The board after a recorded move.
    Played(Move),
}

impl Snapshot {
    /// Board at this point of the game.
    pub fn board(&self) -> Board {
        match self {
            Snapshot::Start => Board::new(),
            Snapshot::Played(mv) => mv.board,
        }
    }

    /// Move that produced this snapshot, if any.
    pub fn played(&self) -> Option<&Move> {
        match self {
            Snapshot::Start => None,
            Snapshot::Played(mv) => Some(mv),
        }
    }
}

/// Ordered snapshots, starting with [`Snapshot::Start`].
///
/// Never empty. Recording a move from an earlier step drops every snapshot
/// after that step before appending, so the history is always one linear
/// timeline. Only [`GameState`](super::GameState) deserializes one, after
/// checking it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct History {
    snapshots: Vec<Snapshot>,
}

impl History {
    /// Creates a history holding only the starting board.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Snapshot::Start],
        }
    }

    /// Wraps snapshots read from outside; the caller validates them.
    pub(crate) fn from_snapshots(snapshots: Vec<Snapshot>) -> Self {
        Self { snapshots }
    }

    /// Number of snapshots, including the start.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Snapshot at `step`.
    pub fn get(&self, step: usize) -> Option<&Snapshot> {
        self.snapshots.get(step)
    }

    /// Snapshots in chronological order.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Records `mv` as the successor of `step`, discarding any later snapshots.
    ///
    /// Returns the step of the new snapshot.
    #[instrument(skip(self, mv))]
    pub fn branch(&mut self, step: usize, mv: Move) -> usize {
        let keep = (step + 1).min(self.snapshots.len());
        if keep < self.snapshots.len() {
            debug!(
                discarded = self.snapshots.len() - keep,
                "Overwriting alternate future"
            );
        }
        self.snapshots.truncate(keep);
        self.snapshots.push(Snapshot::Played(mv));
        self.snapshots.len() - 1
    }

    #[cfg(test)]
    pub(crate) fn push_unchecked(&mut self, snapshot: Snapshot) {
        self.snapshots.push(snapshot);
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
