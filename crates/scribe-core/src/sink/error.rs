//! File sink error types

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Why an append did not complete
///
/// These are for diagnostics only. At the public boundary every variant
/// collapses into a `false` result.
#[derive(Error, Debug)]
pub enum SinkError {
    /// Clearing the file before the write failed
    #[error("Failed to delete log file {}: {source}", .path.display())]
    DeleteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The log directory was missing and could not be created
    #[error("Failed to create log directory {}: {source}", .path.display())]
    DirectoryCreateFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The log file could not be opened for appending
    #[error("Failed to open log file {}: {source}", .path.display())]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The exclusive lock could not be acquired
    #[error("Failed to lock log file {}: {source}", .path.display())]
    LockFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing or flushing the locked file failed
    #[error("Failed to write log file {}: {source}", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SinkError {
    pub fn delete_failed(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::DeleteFailed { path: path.into(), source }
    }

    pub fn directory_create_failed(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::DirectoryCreateFailed { path: path.into(), source }
    }

    pub fn open_failed(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::OpenFailed { path: path.into(), source }
    }

    pub fn lock_failed(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::LockFailed { path: path.into(), source }
    }

    pub fn write_failed(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::WriteFailed { path: path.into(), source }
    }

    /// Path the failing operation was working on
    pub fn path(&self) -> &Path {
        match self {
            Self::DeleteFailed { path, .. }
            | Self::DirectoryCreateFailed { path, .. }
            | Self::OpenFailed { path, .. }
            | Self::LockFailed { path, .. }
            | Self::WriteFailed { path, .. } => path,
        }
    }
}

pub type SinkResult<T> = Result<T, SinkError>;
