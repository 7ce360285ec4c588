//! Host-side logging facility
//!
//! The [`HostLogger`] trait is what an embedding application hands to scribe:
//! the target of the host backend and the channel sinks report failures on.

mod console;
mod error_log;
mod level;
mod memory;
mod noop;
mod traits;

pub use console::{ConsoleLogger, DEFAULT_CONSOLE_PREFIX};
pub use error_log::{ErrorLog, DIAGNOSTICS_ENV, LOG_LEVEL_ENV};
pub use level::LogLevel;
pub use memory::{MemoryEntry, MemoryLogger};
pub use noop::NoOpLogger;
pub use traits::{DiagnosticsKind, HostLogger, SharedHostLogger};
