//! Command-line interface for minimal_tictactoe.

use clap::Parser;
use std::path::PathBuf;

/// Minimal Tic Tac Toe - two players, one keyboard, a running score
#[derive(Parser, Debug)]
#[command(name = "minimal_tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file (theme colours, logging)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write logs here instead of the configured file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Tracing filter directive, e.g. "debug" or "tictactoe_core=trace"
    #[arg(long)]
    pub log_filter: Option<String>,
}
