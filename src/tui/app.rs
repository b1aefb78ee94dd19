//! Application state and logic.

use crossterm::event::KeyCode;
use derive_getters::Getters;
use tictactoe_core::{GameEngine, GameStatus, Position};
use tracing::{debug, info, instrument};

use super::input::{self, Command};
use super::theme::Theme;

/// Main application state.
///
/// Holds the engine plus the view-only bits (cursor, quit flag). Every key
/// press turns into at most one engine call.
#[derive(Debug, Getters)]
pub struct App {
    engine: GameEngine,
    cursor: Position,
    theme: Theme,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh engine.
    #[instrument]
    pub fn new(theme: Theme) -> Self {
        Self {
            engine: GameEngine::new(),
            cursor: Position::Center,
            theme,
            should_quit: false,
        }
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match input::command_for(key) {
            Some(command) => self.apply(command),
            None => debug!(?key, "Unbound key"),
        }
    }

    /// Applies a command to the app and engine.
    #[instrument(skip(self))]
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::MoveCursor(key) => self.cursor = input::move_cursor(self.cursor, key),
            Command::PlayCursor => self.play(self.cursor),
            Command::PlayCell(pos) => {
                self.cursor = pos;
                self.play(pos);
            }
            Command::NewGame => {
                // Only offered once the round has ended
                if self.engine.can_start_new_round() {
                    self.engine.start_new_round();
                } else {
                    debug!("New game ignored while round in progress");
                }
            }
            Command::ResetScore => self.engine.reset_score(),
            Command::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }

    fn play(&mut self, pos: Position) {
        match self.engine.play(pos) {
            Ok(status) => debug!(?pos, ?status, "Move applied"),
            Err(e) => debug!(?pos, error = %e, "Move declined"),
        }
    }

    /// Status line text for the current round.
    pub fn status_text(&self) -> String {
        status_text(self.engine.status(), self.engine.current_player())
    }
}

/// Status line text: winner, draw, or whose turn it is.
pub fn status_text(status: GameStatus, current: tictactoe_core::Player) -> String {
    match status {
        GameStatus::Won(winner) => format!("Player {} wins!", winner),
        GameStatus::Draw => "It's a draw!".to_string(),
        GameStatus::InProgress => format!("Next: {}", current),
    }
}
