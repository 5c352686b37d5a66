//! Application state and key handling.

use crate::input::{digit_to_cell, move_cursor};
use crossterm::event::KeyCode;
use strictly_timetravel::{GameHistory, Position};
use tracing::{debug, info, instrument};

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move through the history list.
    History,
}

impl Focus {
    /// Switches to the other panel.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::History,
            Self::History => Self::Board,
        }
    }
}

/// Main application state.
///
/// The game itself lives in [`GameHistory`]; everything else here is
/// presentation state.
#[derive(Debug, Clone)]
pub struct App {
    game: GameHistory,
    cursor: Position,
    focus: Focus,
    history_selected: usize,
    show_coordinates: bool,
    message: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new(show_coordinates: bool) -> Self {
        Self {
            game: GameHistory::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            history_selected: 0,
            show_coordinates,
            message: None,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameHistory {
        &self.game
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Highlighted entry of the history list.
    pub fn history_selected(&self) -> usize {
        self.history_selected
    }

    /// Whether empty squares show their key.
    pub fn show_coordinates(&self) -> bool {
        self.show_coordinates
    }

    /// Feedback from the last action, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = self.focus.toggle();
                self.history_selected = self.game.current_move();
            }
            KeyCode::Char('n') => self.restart(),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(cell) = digit_to_cell(c) {
                    if let Some(position) = Position::from_index(cell) {
                        self.cursor = position;
                    }
                    self.place(cell);
                }
            }
            _ => match self.focus {
                Focus::Board => self.handle_board_key(key),
                Focus::History => self.handle_history_key(key),
            },
        }
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor.to_index()),
            _ => self.cursor = move_cursor(self.cursor, key),
        }
    }

    fn handle_history_key(&mut self, key: KeyCode) {
        let last = self.game.len() - 1;
        match key {
            KeyCode::Up => self.history_selected = self.history_selected.saturating_sub(1),
            KeyCode::Down => self.history_selected = (self.history_selected + 1).min(last),
            KeyCode::Home => self.history_selected = 0,
            KeyCode::End => self.history_selected = last,
            KeyCode::Enter | KeyCode::Char(' ') => self.jump(self.history_selected),
            _ => {}
        }
    }

    /// Places the current player's mark on `cell`.
    pub fn place(&mut self, cell: usize) {
        match self.game.apply_move(cell) {
            Ok(action) => {
                self.message = Some(format!("{} played {}", action.player, action.position));
            }
            Err(error) => {
                debug!(%error, "Move ignored");
                self.message = Some(error.to_string());
            }
        }
        self.history_selected = self.game.current_move();
    }

    /// Jumps to history entry `move_index`.
    pub fn jump(&mut self, move_index: usize) {
        match self.game.jump_to(move_index) {
            Ok(()) => {
                self.history_selected = move_index;
                self.message = None;
            }
            Err(error) => {
                debug!(%error, "Jump ignored");
                self.message = Some(error.to_string());
            }
        }
    }

    /// Starts a new game.
    pub fn restart(&mut self) {
        self.game.reset();
        self.history_selected = 0;
        self.message = Some("New game".to_string());
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(true)
    }
}
