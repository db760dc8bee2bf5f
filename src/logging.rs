use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::Settings;

/// Log to a file so output does not interfere with the TUI.
///
/// `RUST_LOG` takes precedence over the configured filter.
pub fn init(settings: &Settings) -> Result<()> {
    let log_file = std::fs::File::create(&settings.log_file)
        .with_context(|| format!("cannot create log file {}", settings.log_file.display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.log_filter)),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't fail if already initialized

    Ok(())
}
