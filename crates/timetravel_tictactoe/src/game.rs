//! Game state with time travel.
//!
//! `GameState` owns the history of board snapshots, the cursor selecting
//! the viewed snapshot, and the display order of the move list. Everything
//! else (whose turn it is, the status, the winning cells) is derived from
//! those three on every query.

use super::action::{InvalidState, JumpError, Move, MoveError};
use super::contracts::{Contract, JumpContract, MoveContract};
use super::history::{History, Snapshot};
use super::invariants::{InvariantSet, TimelineInvariants};
use super::rules::WinningLine;
use super::status::GameStatus;
use super::view::{MoveDescriptions, SortOrder};
use super::{Board, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// A tic-tac-toe game with navigable history.
///
/// Commands either apply completely or return an error and leave the
/// state exactly as it was. Deserialization runs the timeline invariants,
/// so a loaded game satisfies the same guarantees as a played one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    pub(crate) history: History,
    pub(crate) cursor: usize,
    pub(crate) order: SortOrder,
}

impl GameState {
    /// Creates a new game at the empty board, move list ascending.
    #[instrument]
    pub fn new() -> Self {
        Self::with_order(SortOrder::default())
    }

    /// Creates a new game with the given move-list order.
    #[instrument]
    pub fn with_order(order: SortOrder) -> Self {
        Self {
            history: History::new(),
            cursor: 0,
            order,
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Commands
    // ─────────────────────────────────────────────────────────────

    /// Plays the next mark at `cell` (0-8) on the viewed board.
    ///
    /// If the cursor is not at the newest step, every later step is
    /// discarded and the move becomes the new end of the history.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfBounds`] if `cell > 8`
    /// - [`MoveError::GameOver`] if the viewed board already has a winner
    /// - [`MoveError::SquareOccupied`] if the cell holds a mark
    #[instrument(skip(self), fields(step = self.cursor))]
    pub fn apply_move(&mut self, cell: usize) -> Result<Move, MoveError> {
        let result = self.try_apply(cell);
        match &result {
            Ok(mv) => info!(step = self.cursor, mv = %mv, "Move applied"),
            Err(e) => debug!(error = %e, "Move rejected"),
        }
        result
    }

    fn try_apply(&mut self, cell: usize) -> Result<Move, MoveError> {
        let position = Position::from_index(cell).ok_or(MoveError::OutOfBounds(cell))?;
        MoveContract::pre(self, &position)?;

        let mark = self.next_mark();
        let mv = Move::new(position, mark, self.current_board().with_mark(position, mark));

        let mut next = self.clone();
        next.cursor = next.history.branch(self.cursor, mv);

        #[cfg(debug_assertions)]
        MoveContract::post(self, &next)?;

        *self = next;
        Ok(mv)
    }

    /// Moves the cursor to `step` without touching the history.
    ///
    /// # Errors
    ///
    /// [`JumpError::StepOutOfRange`] if `step` is not a recorded step.
    #[instrument(skip(self), fields(from = self.cursor))]
    pub fn jump_to_step(&mut self, step: usize) -> Result<(), JumpError> {
        if let Err(e) = JumpContract::pre(self, &step) {
            debug!(error = %e, "Jump rejected");
            return Err(e);
        }

        let mut next = self.clone();
        next.cursor = step;

        #[cfg(debug_assertions)]
        JumpContract::post(self, &next)?;

        *self = next;
        debug!(step, "Cursor moved");
        Ok(())
    }

    /// Flips the move-list order.
    #[instrument(skip(self))]
    pub fn toggle_sort(&mut self) {
        self.order = self.order.toggle();
        debug!(order = ?self.order, "Sort order toggled");
    }

    /// Starts over from the empty board. The move-list order is kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(discarded = self.history.len().saturating_sub(1), "Game reset");
        *self = Self::with_order(self.order);
    }

    // ─────────────────────────────────────────────────────────────
    //  Queries
    // ─────────────────────────────────────────────────────────────

    /// Returns the full history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Number of recorded steps, including the start.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Step currently viewed.
    pub fn current_step(&self) -> usize {
        self.cursor
    }

    /// Snapshot currently viewed.
    pub fn current_snapshot(&self) -> Snapshot {
        self.history
            .get(self.cursor)
            .copied()
            .unwrap_or(Snapshot::Start)
    }

    /// Board currently viewed.
    pub fn current_board(&self) -> Board {
        self.current_snapshot().board()
    }

    /// Mark that plays next from the viewed step.
    pub fn next_mark(&self) -> Mark {
        Mark::for_step(self.cursor)
    }

    /// Status of the viewed board.
    #[instrument(skip(self))]
    pub fn status(&self) -> GameStatus {
        GameStatus::evaluate(&self.current_board(), self.next_mark())
    }

    /// Status line: `The Winner is X`, `draw`, or `Next player is O`.
    pub fn current_status(&self) -> String {
        self.status().to_string()
    }

    /// Completed line on the viewed board, if any.
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.status().winning_line()
    }

    /// Board indices of the completed line on the viewed board, if any.
    pub fn winning_cells(&self) -> Option<[usize; 3]> {
        self.winning_line().map(|line| line.indices())
    }

    /// Move list in display order.
    pub fn move_descriptions(&self) -> MoveDescriptions<'_> {
        MoveDescriptions::new(&self.history, self.cursor, self.order)
    }

    /// Current move-list order.
    pub fn sort_order(&self) -> SortOrder {
        self.order
    }

    /// Whether the move list shows the oldest step first.
    pub fn is_ascending(&self) -> bool {
        self.order == SortOrder::Ascending
    }

    /// Caption for the sort toggle, naming the order it switches to.
    pub fn sort_toggle_label(&self) -> String {
        format!("sort by {}", self.order.toggle().label())
    }
}

/// Wire shape of [`GameState`], checked before it becomes one.
#[derive(Deserialize)]
struct RawGameState {
    history: RawHistory,
    cursor: usize,
    order: SortOrder,
}

#[derive(Deserialize)]
struct RawHistory {
    snapshots: Vec<Snapshot>,
}

impl TryFrom<RawGameState> for GameState {
    type Error = InvalidState;

    #[instrument(skip(raw), fields(len = raw.history.snapshots.len(), cursor = raw.cursor))]
    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let game = Self {
            history: History::from_snapshots(raw.history.snapshots),
            cursor: raw.cursor,
            order: raw.order,
        };
        TimelineInvariants::check_all(&game).map_err(|violations| {
            let reasons: Vec<String> = violations.into_iter().map(|v| v.description).collect();
            warn!(?reasons, "Rejected serialized game");
            InvalidState(reasons.join("; "))
        })?;
        Ok(game)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
