//! User settings loaded from an optional TOML file.
//!
//! Every field has a default, so an empty or partial file is valid:
//!
//! ```toml
//! [theme]
//! primary = "#1e90ff"
//! accent = "#ff4500"
//! secondary = "#f5f5f5"
//!
//! [logging]
//! file = "minimal_tictactoe.log"
//! filter = "info"
//! ```

use std::path::{Path, PathBuf};
use std::str::FromStr;

use derive_getters::Getters;
use derive_more::{Display, Error};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::tui::Theme;

/// Settings error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Settings error: {} at {}:{}", message, file, line)]
pub struct SettingsError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SettingsError {
    /// Creates a new settings error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<toml::de::Error> for SettingsError {
    #[track_caller]
    fn from(err: toml::de::Error) -> Self {
        Self::new(format!("Invalid TOML: {}", err))
    }
}

/// Colours used by the terminal UI, as written in the settings file.
///
/// Accepts anything ratatui parses as a [`Color`]: `#rrggbb` hex, named
/// colours such as `"red"`, or indexed colours such as `"42"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(default)]
pub struct ThemeSettings {
    /// Player X, title, and draw text.
    primary: String,
    /// Player O.
    accent: String,
    /// Winning-cell highlight and board lines.
    secondary: String,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            primary: "#1e90ff".to_string(),
            accent: "#ff4500".to_string(),
            secondary: "#f5f5f5".to_string(),
        }
    }
}

impl ThemeSettings {
    /// Parses the configured colours.
    #[instrument]
    pub fn resolve(&self) -> Result<Theme, SettingsError> {
        Ok(Theme {
            primary: parse_color("primary", &self.primary)?,
            accent: parse_color("accent", &self.accent)?,
            secondary: parse_color("secondary", &self.secondary)?,
        })
    }
}

#[track_caller]
fn parse_color(name: &str, value: &str) -> Result<Color, SettingsError> {
    Color::from_str(value.trim())
        .map_err(|_| SettingsError::new(format!("theme.{name}: '{value}' is not a colour")))
}

/// Where and how much to log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log file path. The terminal is busy drawing the board, so logs never go to stdout.
    file: PathBuf,
    /// Tracing filter used when neither `--log-filter` nor `RUST_LOG` is set.
    filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file: PathBuf::from("minimal_tictactoe.log"),
            filter: "info".to_string(),
        }
    }
}

/// All user-configurable settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(default)]
pub struct Settings {
    /// UI colours.
    theme: ThemeSettings,
    /// Log destination and default filter.
    logging: LoggingSettings,
}

impl Settings {
    /// Parses settings from TOML text.
    #[instrument(skip(text))]
    pub fn from_toml_str(text: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads settings from a TOML file.
    #[instrument(fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::new(format!("Cannot read {}: {}", path.display(), e)))?;
        let settings = Self::from_toml_str(&text)?;
        debug!(?settings, "Loaded settings");
        Ok(settings)
    }

    /// Replaces the log file path when `file` is given.
    pub fn with_log_file(mut self, file: Option<PathBuf>) -> Self {
        if let Some(file) = file {
            self.logging.file = file;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_resolves_to_palette() {
        let theme = ThemeSettings::default().resolve().unwrap();
        assert_eq!(theme.primary, Color::Rgb(0x1e, 0x90, 0xff));
        assert_eq!(theme.accent, Color::Rgb(0xff, 0x45, 0x00));
        assert_eq!(theme.secondary, Color::Rgb(0xf5, 0xf5, 0xf5));
    }

    #[test]
    fn test_named_colours_accepted() {
        let settings = Settings::from_toml_str("[theme]\nprimary = \"blue\"\n").unwrap();
        let theme = settings.theme().resolve().unwrap();
        assert_eq!(theme.primary, Color::Blue);
    }

    #[test]
    fn test_bad_colour_names_the_field() {
        let settings = Settings::from_toml_str("[theme]\naccent = \"not-a-colour\"\n").unwrap();
        let err = settings.theme().resolve().unwrap_err();
        assert!(err.message.contains("theme.accent"));
        assert!(err.to_string().starts_with("Settings error:"));
    }

    #[test]
    fn test_log_file_override() {
        let settings = Settings::default().with_log_file(Some(PathBuf::from("other.log")));
        assert_eq!(settings.logging().file(), &PathBuf::from("other.log"));

        let settings = Settings::default().with_log_file(None);
        assert_eq!(settings.logging().file(), &PathBuf::from("minimal_tictactoe.log"));
    }
}
