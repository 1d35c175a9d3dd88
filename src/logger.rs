//! Logging setup.
//!
//! All modules log through the `log` macros. This module wires them to an
//! output with `fern`: the log file when logging is enabled in the config,
//! otherwise warnings and errors on stderr.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use log::LevelFilter;

use crate::config::LoggingConfig;
use crate::constants::{APP_DIR_NAME, LOG_FILE_NAME};

/// Path of the log file: `<data dir>/taskaio/taskaio.log`
pub fn log_file_path() -> Result<PathBuf> {
    dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
        .map(|dir| dir.join(APP_DIR_NAME).join(LOG_FILE_NAME))
}

fn base_dispatch(level: LevelFilter) -> fern::Dispatch {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {:<5} {}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        // Keep the HTTP stack quiet unless explicitly debugging
        .level_for("hyper", LevelFilter::Warn)
        .level_for("reqwest", LevelFilter::Warn)
}

/// Dispatch writing every record at or above `level` to the file at `path`.
///
/// The parent directory is created when missing.
pub fn file_dispatch(level: LevelFilter, path: &Path) -> Result<fern::Dispatch> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }
    let file = fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;
    Ok(base_dispatch(level).chain(file))
}

/// Dispatch writing warnings and errors to stderr.
pub fn stderr_dispatch() -> fern::Dispatch {
    base_dispatch(LevelFilter::Warn).chain(std::io::stderr())
}

/// Install the global logger according to `config`.
///
/// Returns the log file path when file logging is enabled.
///
/// # Errors
/// Returns an error for an invalid level, an unwritable log file, or when
/// a global logger is already installed
pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    let level = config.level_filter()?;

    let (dispatch, path) = if config.enabled {
        let path = log_file_path()?;
        (file_dispatch(level, &path)?, Some(path))
    } else {
        (stderr_dispatch(), None)
    };

    dispatch.apply().context("Failed to install logger")?;
    Ok(path)
}
