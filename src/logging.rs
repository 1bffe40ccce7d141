//! `tracing` subscriber setup.
//!
//! The terminal UI owns the screen, so it only logs when a file is configured.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::error::ConfigError;

/// Filter from `RUST_LOG`, falling back to the configured directives.
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter))
}

/// Install the global subscriber.
///
/// Logs go to `config.file` when set, otherwise to stderr if
/// `stderr_available`. Returns whether a subscriber was installed by this call.
pub fn init(config: &LoggingConfig, stderr_available: bool) -> Result<bool, ConfigError> {
    let filter = env_filter(config);

    let installed = match &config.file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| ConfigError::LogFile {
                    path: path.clone(),
                    source,
                })?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .is_ok()
        }
        None if stderr_available => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .is_ok(),
        None => false,
    };

    Ok(installed)
}
