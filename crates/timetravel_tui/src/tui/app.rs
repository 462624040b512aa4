//! Application state and key handling.

use super::input::{move_cursor, move_selection};
use crossterm::event::KeyCode;
use strum::IntoEnumIterator;
use timetravel_tictactoe::{BoardSize, Game};
use tracing::{debug, info, instrument};

/// Which pane receives arrow keys and `Enter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::EnumIter)]
pub enum Focus {
    /// The board grid.
    #[default]
    Board,
    /// The move history list.
    History,
    /// The board-size selectors.
    Config,
}

impl Focus {
    /// Returns the next pane in `Tab` order.
    pub fn next(self) -> Self {
        match self {
            Focus::Board => Focus::History,
            Focus::History => Focus::Config,
            Focus::Config => Focus::Board,
        }
    }

    /// Returns the previous pane in `Tab` order.
    pub fn previous(self) -> Self {
        match self {
            Focus::Board => Focus::Config,
            Focus::History => Focus::Board,
            Focus::Config => Focus::History,
        }
    }
}

/// Main application state.
///
/// Owns the game exclusively; every key press runs to completion before
/// the next redraw.
#[derive(Debug, Clone)]
pub struct App {
    game: Game,
    focus: Focus,
    cursor: usize,
    history_cursor: usize,
    size_cursor: usize,
    should_quit: bool,
}

impl App {
    /// Creates a new application with an empty board of the given size.
    #[instrument]
    pub fn new(size: BoardSize) -> Self {
        let mut app = Self {
            game: Game::new(size),
            focus: Focus::default(),
            cursor: 0,
            history_cursor: 0,
            size_cursor: 0,
            should_quit: false,
        };
        app.sync_cursors();
        app
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gets the focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Gets the board cursor (cell index).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Gets the highlighted history entry.
    pub fn history_cursor(&self) -> usize {
        self.history_cursor
    }

    /// Gets the highlighted board-size selector.
    pub fn size_cursor(&self) -> usize {
        self.size_cursor
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.previous(),
            KeyCode::Char(c @ '3'..='5') => {
                if let Some(size) = c
                    .to_digit(10)
                    .and_then(|side| BoardSize::try_from(side as usize).ok())
                {
                    self.set_board_size(size);
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(),
            code => self.navigate(code),
        }
    }

    /// Places a mark for the active player; illegal moves are ignored.
    #[instrument(skip(self))]
    pub fn place(&mut self, index: usize) {
        match self.game.apply_move(index) {
            Ok(game) => {
                self.game = game;
                self.sync_cursors();
            }
            Err(e) => debug!(error = %e, "Move ignored"),
        }
    }

    /// Jumps to a stored history step; unknown steps are ignored.
    #[instrument(skip(self))]
    pub fn jump(&mut self, step: usize) {
        match self.game.jump_to(step) {
            Ok(game) => {
                self.game = game;
                self.sync_cursors();
            }
            Err(e) => debug!(error = %e, "Jump ignored"),
        }
    }

    /// Starts a new game on a board of the given size.
    #[instrument(skip(self))]
    pub fn set_board_size(&mut self, size: BoardSize) {
        info!(%size, "Board size selected");
        self.game = self.game.set_board_config(size);
        self.cursor = 0;
        self.sync_cursors();
    }

    fn activate(&mut self) {
        match self.focus {
            Focus::Board => self.place(self.cursor),
            Focus::History => self.jump(self.history_cursor),
            Focus::Config => {
                if let Some(size) = BoardSize::iter().nth(self.size_cursor) {
                    self.set_board_size(size);
                }
            }
        }
    }

    fn navigate(&mut self, key: KeyCode) {
        match self.focus {
            Focus::Board => {
                self.cursor = move_cursor(self.cursor, self.game.board_size().side(), key);
            }
            Focus::History => {
                self.history_cursor =
                    move_selection(self.history_cursor, self.game.history_length(), key);
            }
            Focus::Config => {
                self.size_cursor = move_selection(self.size_cursor, BoardSize::iter().count(), key);
            }
        }
    }

    fn sync_cursors(&mut self) {
        self.history_cursor = self.game.step();
        self.size_cursor = BoardSize::iter()
            .position(|size| size == self.game.board_size())
            .unwrap_or_default();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(BoardSize::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use timetravel_tictactoe::Player;

    fn press(app: &mut App, keys: &[KeyCode]) {
        for &key in keys {
            app.handle_key(key);
        }
    }

    #[test]
    fn test_focus_cycles() {
        let focus: Vec<Focus> = Focus::iter().collect();
        for f in focus {
            assert_eq!(f.next().previous(), f);
        }
        assert_eq!(Focus::Config.next(), Focus::Board);
    }

    #[test]
    fn test_enter_places_mark_at_cursor() {
        let mut app = App::default();
        press(&mut app, &[KeyCode::Right, KeyCode::Down, KeyCode::Enter]);
        let square = app.game().current_snapshot().get(4);
        assert_eq!(square.and_then(|s| s.player()), Some(Player::X));
        assert_eq!(app.history_cursor(), 1);
    }

    #[test]
    fn test_occupied_cell_is_ignored() {
        let mut app = App::default();
        press(&mut app, &[KeyCode::Enter, KeyCode::Enter]);
        assert_eq!(app.game().history_length(), 2);
        assert_eq!(app.game().active_player(), Player::O);
    }

    #[test]
    fn test_history_jump_via_keys() {
        let mut app = App::default();
        app.place(0);
        app.place(4);
        app.place(8);
        press(&mut app, &[KeyCode::Tab, KeyCode::Up, KeyCode::Up, KeyCode::Enter]);
        assert_eq!(app.game().step(), 1);
        assert_eq!(app.game().history_length(), 4);
    }

    #[test]
    fn test_config_selection_resets_game() {
        let mut app = App::default();
        app.place(0);
        press(&mut app, &[KeyCode::BackTab, KeyCode::Down, KeyCode::Down, KeyCode::Enter]);
        assert_eq!(app.game().board_size(), BoardSize::Five);
        assert_eq!(app.game().history_length(), 1);
        assert_eq!(app.size_cursor(), 2);
    }

    #[test]
    fn test_digit_shortcut_sets_size() {
        let mut app = App::default();
        app.handle_key(KeyCode::Char('4'));
        assert_eq!(app.game().board_size(), BoardSize::Four);
        app.handle_key(KeyCode::Char('9'));
        assert_eq!(app.game().board_size(), BoardSize::Four);
    }

    #[test]
    fn test_quit() {
        let mut app = App::default();
        assert!(!app.should_quit());
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit());
    }
}
