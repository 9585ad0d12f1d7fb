//! Top-level error type returned from `main`

use crate::config::ConfigError;
use crate::replay::ReplayError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Replay(#[from] ReplayError),

    #[error("failed to set up logging: {0}")]
    Logging(String),

    /// Terminal setup, drawing or event polling failed
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),
}
