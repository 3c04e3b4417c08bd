//! Read-only view data for the move list.

use super::history::{History, Snapshot};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Label of the first history entry.
pub const START_LABEL: &str = "go to game start";

/// Display order of the move list. Does not affect the history itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortOrder {
    /// Oldest step first.
    #[default]
    Ascending,
    /// Newest step first.
    Descending,
}

impl SortOrder {
    /// Returns the opposite order.
    pub fn toggle(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    /// Name of the order, as shown on the sort toggle.
    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Ascending => "Ascending",
            SortOrder::Descending => "Descending",
        }
    }
}

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MoveDescription {
    /// History step this row jumps to.
    step: usize,
    /// Human-readable text for the row.
    label: String,
    /// Whether this step is the one currently viewed.
    is_current: bool,
}

/// Text for the history entry at `step`.
pub fn describe(step: usize, snapshot: &Snapshot) -> String {
    match snapshot.played() {
        None => START_LABEL.to_string(),
        Some(mv) => format!(
            "turn #{}, player {} move to {}",
            step,
            mv.mark,
            mv.location()
        ),
    }
}

/// Lazy iterator over the move list, in display order.
///
/// Built fresh from the history on every call to
/// [`GameState::move_descriptions`](crate::GameState::move_descriptions);
/// descending order walks the same range from the back.
#[derive(Debug, Clone)]
pub struct MoveDescriptions<'a> {
    history: &'a History,
    current: usize,
    order: SortOrder,
    steps: Range<usize>,
}

impl<'a> MoveDescriptions<'a> {
    pub(crate) fn new(history: &'a History, current: usize, order: SortOrder) -> Self {
        Self {
            history,
            current,
            order,
            steps: 0..history.len(),
        }
    }

    fn describe_step(&self, step: usize) -> Option<MoveDescription> {
        let snapshot = self.history.get(step)?;
        Some(MoveDescription {
            step,
            label: describe(step, snapshot),
            is_current: step == self.current,
        })
    }
}

impl Iterator for MoveDescriptions<'_> {
    type Item = MoveDescription;

    fn next(&mut self) -> Option<Self::Item> {
        let step = match self.order {
            SortOrder::Ascending => self.steps.next()?,
            SortOrder::Descending => self.steps.next_back()?,
        };
        self.describe_step(step)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.steps.size_hint()
    }
}

impl DoubleEndedIterator for MoveDescriptions<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let step = match self.order {
            SortOrder::Ascending => self.steps.next_back()?,
            SortOrder::Descending => self.steps.next()?,
        };
        self.describe_step(step)
    }
}

impl ExactSizeIterator for MoveDescriptions<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Mark, Move, Position};

    fn two_move_history() -> History {
        let mut history = History::new();
        let first = Board::new().with_mark(Position::Center, Mark::X);
        history.branch(0, Move::new(Position::Center, Mark::X, first));
        let second = first.with_mark(Position::MiddleRight, Mark::O);
        history.branch(1, Move::new(Position::MiddleRight, Mark::O, second));
        history
    }

    #[test]
    fn test_labels() {
        let history = two_move_history();
        let labels: Vec<_> = MoveDescriptions::new(&history, 2, SortOrder::Ascending)
            .map(|d| d.label().clone())
            .collect();
        assert_eq!(
            labels,
            vec![
                "go to game start".to_string(),
                "turn #1, player X move to (2, 2)".to_string(),
                "turn #2, player O move to (3, 2)".to_string(),
            ]
        );
    }

    #[test]
    fn test_descending_is_reversed_ascending() {
        let history = two_move_history();
        let mut ascending: Vec<_> =
            MoveDescriptions::new(&history, 1, SortOrder::Ascending).collect();
        let descending: Vec<_> =
            MoveDescriptions::new(&history, 1, SortOrder::Descending).collect();
        ascending.reverse();
        assert_eq!(ascending, descending);
    }

    #[test]
    fn test_current_flag_and_len() {
        let history = two_move_history();
        let rows = MoveDescriptions::new(&history, 1, SortOrder::Descending);
        assert_eq!(rows.len(), 3);
        let current: Vec<_> = rows.filter(|d| *d.is_current()).map(|d| *d.step()).collect();
        assert_eq!(current, vec![1]);
    }

    #[test]
    fn test_toggle() {
        assert_eq!(SortOrder::default(), SortOrder::Ascending);
        assert_eq!(SortOrder::Ascending.toggle(), SortOrder::Descending);
        assert_eq!(SortOrder::Descending.toggle(), SortOrder::Ascending);
    }
}
