//! Minimal Tic Tac Toe - terminal launcher.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use minimal_tictactoe::{Cli, Settings, init_file_logging, run};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    }
    .with_log_file(cli.log_file.clone());

    init_file_logging(settings.logging(), cli.log_filter.as_deref())?;
    info!(config = ?cli.config, log_file = %settings.logging().file().display(), "Starting Minimal Tic Tac Toe");

    let theme = settings.theme().resolve()?;
    run(theme)
}
