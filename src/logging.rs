//! File-backed tracing setup
//!
//! The terminal belongs to the TUI, so log events go to a file. Nothing is
//! installed unless a log file is configured.

use crate::error::AppError;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Install a global subscriber writing to `path`.
///
/// `RUST_LOG` wins over `default_filter` when set.
pub fn init(path: &Path, default_filter: &str) -> Result<(), AppError> {
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path.file_name().ok_or_else(|| {
        AppError::Logging(format!("'{}' has no file name", path.display()))
    })?;

    let appender = tracing_appender::rolling::never(directory, file_name);
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .map_err(|e| AppError::Logging(e.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(appender)
        .with_ansi(false)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))?;

    tracing::info!(path = %path.display(), "logging initialised");
    Ok(())
}
