//! Keyboard mapping for the game screen.

use crossterm::event::KeyCode;
use tictactoe_core::Position;

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the cursor one cell.
    MoveCursor(KeyCode),
    /// Play at the cursor.
    PlayCursor,
    /// Play at a specific cell.
    PlayCell(Position),
    /// Start a new round.
    NewGame,
    /// Zero the score and start a new round.
    ResetScore,
    /// Leave the application.
    Quit,
}

/// Maps a key to a command, or `None` for keys with no binding.
pub fn command_for(key: KeyCode) -> Option<Command> {
    match key {
        KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => Some(Command::MoveCursor(key)),
        KeyCode::Char('h') => Some(Command::MoveCursor(KeyCode::Left)),
        KeyCode::Char('l') => Some(Command::MoveCursor(KeyCode::Right)),
        KeyCode::Char('k') => Some(Command::MoveCursor(KeyCode::Up)),
        KeyCode::Char('j') => Some(Command::MoveCursor(KeyCode::Down)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::PlayCursor),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|n| Position::from_index(n as usize - 1))
            .map(Command::PlayCell),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(Command::NewGame),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::ResetScore),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

/// Moves cursor based on arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = cursor.coords();
    let (row, col) = match key {
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, col + 1),
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => (row + 1, col),
        _ => (row, col),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}
