//! Terminal UI for minimal_tictactoe.

mod app;
mod input;
mod theme;
mod ui;

pub use app::{App, status_text};
pub use input::{Command, command_for, move_cursor};
pub use theme::Theme;
pub use ui::{KEY_HINT, draw};

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, error, info, instrument};

/// Runs the game until the user quits.
///
/// Once raw mode is on, the terminal is restored on every exit path before
/// any error is returned.
#[instrument]
pub fn run(theme: Theme) -> Result<()> {
    info!("Starting terminal UI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let res = restoring(
        || {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
            let backend = CrosstermBackend::new(stdout);
            let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
            run_app(&mut terminal, App::new(theme))
        },
        restore_terminal,
    );

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Terminal UI closed");
    res
}

/// Runs `body`, then `restore` no matter how `body` ended.
///
/// An error from `body` takes precedence over one from `restore`.
fn restoring<T>(
    body: impl FnOnce() -> Result<T>,
    restore: impl FnOnce() -> Result<()>,
) -> Result<T> {
    let res = body();
    let restored = restore();
    let value = res?;
    restored?;
    Ok(value)
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    // Harmless if the alternate screen was never entered
    execute!(io::stdout(), LeaveAlternateScreen, Show).context("Failed to restore terminal")?;
    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| draw(f, &app))?;

        if *app.should_quit() {
            return Ok(());
        }

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
        {
            // Windows also reports releases
            if key.kind == KeyEventKind::Press {
                app.handle_key(key.code);
            } else {
                debug!(?key, "Ignoring non-press key event");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_restore_runs_after_failed_setup() {
        let restored = Cell::new(false);
        let res: Result<()> = restoring(
            || Err(anyhow::anyhow!("no alternate screen")),
            || {
                restored.set(true);
                Ok(())
            },
        );
        assert!(restored.get());
        assert_eq!(res.unwrap_err().to_string(), "no alternate screen");
    }

    #[test]
    fn test_body_error_wins_over_restore_error() {
        let res: Result<()> = restoring(
            || Err(anyhow::anyhow!("loop failed")),
            || Err(anyhow::anyhow!("restore failed")),
        );
        assert_eq!(res.unwrap_err().to_string(), "loop failed");
    }

    #[test]
    fn test_restore_error_reported_after_clean_run() {
        let res = restoring(|| Ok(7), || Err(anyhow::anyhow!("restore failed")));
        assert_eq!(res.unwrap_err().to_string(), "restore failed");

        assert_eq!(restoring(|| Ok(7), || Ok(())).unwrap(), 7);
    }
}
