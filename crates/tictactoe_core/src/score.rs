//! Cumulative win counts across rounds.

use super::Player;
use serde::{Deserialize, Serialize};

/// Wins per player since the score was last reset.
///
/// Draws are not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Score {
    x: u32,
    o: u32,
}

impl Score {
    /// Creates a zeroed score.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wins recorded for `player`.
    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    /// Adds one win for `player`.
    pub(crate) fn record_win(&mut self, player: Player) {
        let slot = match player {
            Player::X => &mut self.x,
            Player::O => &mut self.o,
        };
        *slot = slot.saturating_add(1);
    }

    /// Zeroes both counts.
    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "X: {}  O: {}", self.x, self.o)
    }
}
