//! Resolved UI colours.

use ratatui::style::Color;
use tictactoe_core::Player;

/// Colour palette for the board and status text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Player X, title, and draw text.
    pub primary: Color,
    /// Player O.
    pub accent: Color,
    /// Winning-cell highlight and board lines.
    pub secondary: Color,
}

impl Theme {
    /// Colour for a player's marks and messages.
    pub fn player(&self, player: Player) -> Color {
        match player {
            Player::X => self.primary,
            Player::O => self.accent,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color::Rgb(0x1e, 0x90, 0xff),
            accent: Color::Rgb(0xff, 0x45, 0x00),
            secondary: Color::Rgb(0xf5, 0xf5, 0xf5),
        }
    }
}
