//! Application state and event handling for the terminal shell.

use crate::game::view::{GameView, SortOrder};
use crate::game::{GameEvent, Position, Timeline};
use crossterm::event::KeyCode;
use tracing::debug;

/// Which pane keyboard input is directed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The board grid.
    Board,
    /// The move history list.
    History,
}

/// Main application state.
///
/// Owns the timeline and the shell-only state around it: the board
/// cursor, the move-list selection, the display sort order, and which
/// pane has focus.
pub struct App {
    timeline: Timeline,
    sort: SortOrder,
    cursor: Position,
    focus: Focus,
    selected: usize,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new() -> Self {
        Self {
            timeline: Timeline::new(),
            sort: SortOrder::default(),
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            should_quit: false,
        }
    }

    /// Builds the render snapshot for the current frame.
    pub fn view(&self) -> GameView {
        GameView::new(&self.timeline, self.sort)
    }

    /// The board cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// The focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// The selected row of the displayed move list.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => {
                debug!("User quit");
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Focus::Board => Focus::History,
                    Focus::History => Focus::Board,
                };
            }
            KeyCode::Char('s') => self.apply(GameEvent::ToggleSort),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if let Some(pos) = Position::from_index(index) {
                    self.cursor = pos;
                    self.apply(GameEvent::Play(pos));
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.focus {
                Focus::Board => self.apply(GameEvent::Play(self.cursor)),
                Focus::History => {
                    if let Some(entry) = self.view().moves.get(self.selected) {
                        self.apply(GameEvent::Jump(entry.index));
                    }
                }
            },
            KeyCode::Up => self.navigate(0, -1),
            KeyCode::Down => self.navigate(0, 1),
            KeyCode::Left => self.navigate(-1, 0),
            KeyCode::Right => self.navigate(1, 0),
            _ => {}
        }
    }

    /// Applies a game event. Rejected plays and jumps are inert.
    pub fn apply(&mut self, event: GameEvent) {
        match event {
            GameEvent::Play(pos) => {
                if let Err(e) = self.timeline.play(pos) {
                    debug!(error = %e, "Play ignored");
                }
            }
            GameEvent::Jump(index) => {
                if let Err(e) = self.timeline.jump_to(index) {
                    debug!(error = %e, "Jump ignored");
                }
            }
            GameEvent::ToggleSort => {
                self.sort = self.sort.toggle();
            }
        }

        self.clamp_selection();
    }

    fn navigate(&mut self, dx: isize, dy: isize) {
        match self.focus {
            Focus::Board => {
                let row = (self.cursor.row() as isize + dy).clamp(0, 2) as usize;
                let col = (self.cursor.col() as isize + dx).clamp(0, 2) as usize;
                if let Some(pos) = Position::from_index(row * 3 + col) {
                    self.cursor = pos;
                }
            }
            Focus::History => {
                let len = self.timeline.history().len();
                let next = self.selected as isize + dy;
                self.selected = next.clamp(0, len as isize - 1) as usize;
            }
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.timeline.history().len();
        if self.selected >= len {
            self.selected = len - 1;
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
