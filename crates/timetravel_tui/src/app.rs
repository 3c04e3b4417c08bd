//! Application state and key handling.
//!
//! `App` owns the game and the bits of UI state the game does not care
//! about: which pane has focus, where the board cursor sits, and which row
//! of the move list is highlighted. Every rule lives in the game crate; the
//! app only forwards commands and ignores the ones the game rejects.

use crossterm::event::KeyCode;
use derive_getters::Getters;
use timetravel_tictactoe::{GameState, Position, SortOrder};
use tracing::{debug, instrument};

use crate::input::{digit_cell, move_cursor};

/// Pane receiving arrow keys and Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrows move over the board, Enter plays.
    #[default]
    Board,
    /// Arrows walk the move list, Enter jumps.
    History,
}

impl Focus {
    /// Switches to the other pane.
    pub fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::History,
            Focus::History => Focus::Board,
        }
    }
}

/// Main application state.
#[derive(Debug, Getters)]
pub struct App {
    game: GameState,
    cursor: Position,
    focus: Focus,
    /// Highlighted row of the move list, in display order.
    selected_row: usize,
    should_quit: bool,
}

impl App {
    /// Creates an app with a fresh game.
    #[instrument]
    pub fn new(order: SortOrder) -> Self {
        let mut app = Self {
            game: GameState::with_order(order),
            cursor: Position::Center,
            focus: Focus::default(),
            selected_row: 0,
            should_quit: false,
        };
        app.sync_selection();
        app
    }

    /// Handles one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.focus = self.focus.toggle(),
            KeyCode::Char('s') => {
                self.game.toggle_sort();
                self.sync_selection();
            }
            KeyCode::Char('r') => {
                self.game.reset();
                self.sync_selection();
            }
            KeyCode::Char(c) if digit_cell(c).is_some() => {
                if let Some(cell) = digit_cell(c) {
                    self.play(cell);
                }
            }
            code => match self.focus {
                Focus::Board => self.handle_board_key(code),
                Focus::History => self.handle_history_key(code),
            },
        }
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor.to_index()),
            arrow => self.cursor = move_cursor(self.cursor, arrow),
        }
    }

    fn handle_history_key(&mut self, key: KeyCode) {
        let rows = self.game.history_len();
        match key {
            KeyCode::Up => self.selected_row = self.selected_row.saturating_sub(1),
            KeyCode::Down => self.selected_row = (self.selected_row + 1).min(rows - 1),
            KeyCode::Enter | KeyCode::Char(' ') => self.jump_to_selected(),
            _ => {}
        }
    }

    fn play(&mut self, cell: usize) {
        match self.game.apply_move(cell) {
            Ok(mv) => {
                self.cursor = mv.position;
                self.sync_selection();
            }
            Err(e) => debug!(error = %e, cell, "Ignoring rejected move"),
        }
    }

    fn jump_to_selected(&mut self) {
        let Some(step) = self
            .game
            .move_descriptions()
            .nth(self.selected_row)
            .map(|row| *row.step())
        else {
            return;
        };
        if let Err(e) = self.game.jump_to_step(step) {
            debug!(error = %e, "Ignoring rejected jump");
        }
    }

    /// Points the list highlight at the viewed step.
    fn sync_selection(&mut self) {
        if let Some(row) = self.game.move_descriptions().position(|row| *row.is_current()) {
            self.selected_row = row;
        }
    }
}
