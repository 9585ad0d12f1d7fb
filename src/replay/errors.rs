//! Errors reported by the replay engine
//!
//! None of these are fatal: the UI turns them into a status bar message and
//! the engine stays usable.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplayError {
    /// A searching algorithm was asked to run with a target that has no number
    #[error("target '{input}' is not a number")]
    InvalidTarget { input: String },

    /// Stepping backward with nothing revealed
    #[error("already at the beginning of the trace")]
    AtStart,
}
