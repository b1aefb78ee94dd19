//! File-backed tracing setup.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::LoggingSettings;

/// Picks the filter: explicit directive, then `RUST_LOG`, then the settings file.
pub fn resolve_filter(explicit: Option<&str>, settings: &LoggingSettings) -> Result<EnvFilter> {
    match explicit {
        Some(directive) => EnvFilter::try_new(directive)
            .with_context(|| format!("Invalid log filter '{}'", directive)),
        None => EnvFilter::try_from_default_env().or_else(|_| {
            EnvFilter::try_new(settings.filter())
                .with_context(|| format!("Invalid log filter '{}' in settings", settings.filter()))
        }),
    }
}

/// Installs a global subscriber that writes to the configured log file.
///
/// Logging to the terminal would tear the board apart, so output goes to a
/// file with ANSI colours disabled. Returns `false` when another global
/// subscriber was already installed; the file is created but stays empty.
pub fn init_file_logging(settings: &LoggingSettings, explicit_filter: Option<&str>) -> Result<bool> {
    let filter = resolve_filter(explicit_filter, settings)?;
    let log_file = std::fs::File::create(settings.file())
        .with_context(|| format!("Failed to create log file {}", settings.file().display()))?;

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    if let Err(e) = &installed {
        // Events keep going to the subscriber that is already installed
        debug!(error = %e, file = %settings.file().display(), "Global subscriber already set, log file unused");
    }

    Ok(installed.is_ok())
}
