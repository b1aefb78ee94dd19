//! Minimal Tic Tac Toe - two players, one keyboard, a running score.
//!
//! The game rules live in [`tictactoe_core`]; this crate is the terminal
//! front end that renders the engine's state and turns key presses into
//! engine calls.
//!
//! # Architecture
//!
//! - **Engine**: [`GameEngine`] (re-exported from `tictactoe_core`)
//! - **TUI**: [`App`] state, stateless [`draw`], and the [`run`] loop
//! - **Settings**: optional TOML file for colours and logging
//! - **Logging**: `tracing` to a file, so the board is never overwritten
//!
//! # Example
//!
//! ```
//! use minimal_tictactoe::{App, Theme};
//! use crossterm::event::KeyCode;
//!
//! let mut app = App::new(Theme::default());
//! app.handle_key(KeyCode::Char('5'));
//! assert_eq!(app.status_text(), "Next: O");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod logging;
mod settings;
mod tui;

// Crate-level exports - CLI
pub use cli::Cli;

// Crate-level exports - Logging
pub use logging::{init_file_logging, resolve_filter};

// Crate-level exports - Settings
pub use settings::{LoggingSettings, Settings, SettingsError, ThemeSettings};

// Crate-level exports - Terminal UI
pub use tui::{App, Command, KEY_HINT, Theme, command_for, draw, move_cursor, run, status_text};

// Crate-level exports - Game types
pub use tictactoe_core::{
    Board, EngineSnapshot, GameEngine, GameStatus, Line, MoveError, Player, Position, Score,
    Square,
};
