//! Host logger trait definition

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::level::LogLevel;
use super::{ConsoleLogger, ErrorLog, NoOpLogger};

/// Logging facility provided by the embedding application
///
/// Used two ways: as the destination of [`crate::backend::HostBackend`], and
/// as the diagnostic channel where sinks report their own failures.
///
/// Implementations:
/// - `NoOpLogger`: Discards everything
/// - `ConsoleLogger`: Writes to stderr
/// - `MemoryLogger`: Keeps entries in memory
/// - `ErrorLog`: Appends to a fallback error file
pub trait HostLogger: Send + Sync {
    /// Record one entry at `level`
    fn log(&self, level: LogLevel, message: &str);

    /// Log a debug message
    fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    /// Log an info message
    fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    /// Log a warning message
    fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    /// Log an error message
    fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }
}

/// Type alias for an Arc-wrapped host logger
pub type SharedHostLogger = Arc<dyn HostLogger>;

/// Diagnostic channel selectable from settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticsKind {
    /// Failures are dropped
    #[default]
    None,
    /// Failures go to stderr
    Console,
    /// Failures go to the fallback error file, configured from the environment
    ErrorLog,
}

impl DiagnosticsKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticsKind::None => "none",
            DiagnosticsKind::Console => "console",
            DiagnosticsKind::ErrorLog => "error_log",
        }
    }

    /// Build the logger this kind names
    pub fn build(&self) -> SharedHostLogger {
        match self {
            DiagnosticsKind::None => Arc::new(NoOpLogger::new()),
            DiagnosticsKind::Console => Arc::new(ConsoleLogger::new()),
            DiagnosticsKind::ErrorLog => Arc::new(ErrorLog::from_env()),
        }
    }
}
