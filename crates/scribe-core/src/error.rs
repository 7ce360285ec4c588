//! Façade error types

use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced to callers of [`crate::Scribe`]
///
/// I/O trouble while writing a record is never reported here; it shows up as
/// a `false` result instead.
#[derive(Error, Debug)]
pub enum ScribeError {
    /// `log` was called with no backend configured
    #[error("No logging backend configured")]
    BackendUnavailable,

    /// The process-wide logger was initialized twice
    #[error("Global logger is already initialized")]
    AlreadyInitialized,

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type ScribeResult<T> = Result<T, ScribeError>;
