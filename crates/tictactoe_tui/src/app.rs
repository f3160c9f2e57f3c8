//! Application state and input handling.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use tictactoe::{Game, Position};
use tracing::{debug, instrument};

use crate::input::{digit_cell, move_cursor};
use crate::layout::{ScreenLayout, list_offset};

/// Which pane receives arrow keys and Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The 3x3 board.
    #[default]
    Board,
    /// The move list.
    Moves,
}

impl Focus {
    /// Returns the other pane.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::Moves,
            Self::Moves => Self::Board,
        }
    }
}

/// The result of handling an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Keep running.
    Stay,
    /// Leave the event loop.
    Quit,
}

/// Main application state.
///
/// Wraps the game controller with the purely visual state: the board
/// cursor, the focused pane and the highlighted move-list entry.
#[derive(Debug, Clone)]
pub struct App {
    game: Game,
    cursor: Position,
    focus: Focus,
    selected_move: usize,
    show_help: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    #[instrument]
    pub fn new(show_help: bool) -> Self {
        Self {
            game: Game::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            selected_move: 0,
            show_help,
        }
    }

    /// Gets the game controller.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Board cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Whether the help bar is shown.
    pub fn show_help(&self) -> bool {
        self.show_help
    }

    /// History index of the highlighted move-list entry.
    pub fn selected_move(&self) -> usize {
        self.selected_move
    }

    /// Display row of the highlighted move-list entry.
    pub fn selected_row(&self) -> usize {
        self.game.display_row(self.selected_move)
    }

    /// Handles a key press.
    #[instrument(skip(self, key), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) -> Transition {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Transition::Quit,
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = self.focus.toggle();
                debug!(focus = ?self.focus, "Focus changed");
            }
            KeyCode::Char('s') | KeyCode::Char('S') => self.toggle_sort(),
            code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
                match self.focus {
                    Focus::Board => self.cursor = move_cursor(self.cursor, code),
                    Focus::Moves => match code {
                        KeyCode::Up => self.select_row(self.selected_row().checked_sub(1)),
                        KeyCode::Down => self.select_row(Some(self.selected_row() + 1)),
                        _ => {}
                    },
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.focus {
                Focus::Board => self.click_cell(self.cursor),
                Focus::Moves => self.activate_row(self.selected_row()),
            },
            code => {
                if let Some(pos) = digit_cell(code) {
                    self.cursor = pos;
                    self.click_cell(pos);
                }
            }
        }
        Transition::Stay
    }

    /// Handles a mouse event against the layout of the last frame.
    #[instrument(skip(self, mouse, layout), fields(column = mouse.column, row = mouse.row))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent, layout: &ScreenLayout) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        if let Some(pos) = layout.cell_at(mouse.column, mouse.row) {
            self.focus = Focus::Board;
            self.cursor = pos;
            self.click_cell(pos);
        } else if layout.is_sort_button(mouse.column, mouse.row) {
            self.toggle_sort();
        } else if let Some(visible_row) = layout.move_row_at(mouse.column, mouse.row) {
            let offset = list_offset(self.selected_row(), layout.moves_inner().height);
            self.focus = Focus::Moves;
            self.activate_row(offset + visible_row);
        }
    }

    /// Clicks a board cell; illegal clicks change nothing.
    #[instrument(skip(self))]
    pub fn click_cell(&mut self, pos: Position) {
        match self.game.click(pos) {
            Ok(()) => self.selected_move = self.game.current_move(),
            Err(e) => debug!(error = %e, "Click ignored"),
        }
    }

    /// Activates the move-list entry at display `row`.
    ///
    /// The entry for the displayed move is not clickable and rows past the
    /// end are ignored.
    #[instrument(skip(self))]
    pub fn activate_row(&mut self, row: usize) {
        let Some(entry) = self.game.move_list().get(row).copied() else {
            debug!("Click below the move list ignored");
            return;
        };
        self.selected_move = entry.move_number;
        if !entry.is_clickable() {
            debug!(move_number = entry.move_number, "Current move is not clickable");
            return;
        }
        if let Err(e) = self.game.jump_to(entry.move_number) {
            debug!(error = %e, "Jump ignored");
        }
    }

    /// Flips the move-list order, keeping the same entry highlighted.
    pub fn toggle_sort(&mut self) {
        self.game.toggle_sort();
    }

    fn select_row(&mut self, row: Option<usize>) {
        if let Some(entry) = row.and_then(|row| self.game.move_list().get(row).copied()) {
            self.selected_move = entry.move_number;
        }
    }
}
