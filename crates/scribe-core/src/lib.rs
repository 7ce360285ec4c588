//! Scribe Core
//!
//! A small diagnostic logger: one access point that renders arbitrary values
//! into readable text, labels each record with where it came from, and hands
//! it to an interchangeable backend.
//!
//! ## Pieces
//!
//! - `render`: pure value-to-text rendering (`Plain`, `Exported`, `PrettyExported`)
//! - `sink`: locked append-only file writes with gap markers
//! - `backend`: the `Backend` trait plus file, `tracing` and host implementations
//! - `host`: the `HostLogger` trait an embedding application provides
//! - `config`: settings and their YAML file
//!
//! ```rust,no_run
//! use scribe_core::{LogSettings, RenderMode, Scribe};
//!
//! let scribe = Scribe::new(
//!     LogSettings::new("orders")
//!         .with_module("OrderModule")
//!         .with_log_directory("/tmp/x/logs"),
//! );
//!
//! // appends "<OrderModule> created #42" to /tmp/x/logs/log_orders.txt
//! scribe.log("created #42", false)?;
//!
//! scribe.set_render_mode(RenderMode::PrettyExported);
//! scribe.log(&serde_json::json!({"id": 7, "tags": ["a", "b"]}), false)?;
//! # Ok::<(), scribe_core::ScribeError>(())
//! ```

pub mod backend;
pub mod config;
pub mod error;
pub mod global;
pub mod host;
pub mod render;
pub mod sink;
pub mod target;
pub mod trace;

mod scribe;

/// Line terminator written after every log line
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
/// Line terminator written after every log line
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

pub use scribe::Scribe;

pub use error::{ScribeError, ScribeResult};

pub use render::{render, render_value, RenderMode};

pub use sink::{AppendOutcome, FileAppendSink, SinkError, SinkResult};

pub use backend::{
    Backend, BackendKind, Context, FileBackend, HostBackend, SharedBackend, TracingBackend,
};

pub use host::{
    ConsoleLogger, DiagnosticsKind, ErrorLog, HostLogger, LogLevel, MemoryLogger, NoOpLogger,
    SharedHostLogger,
};

pub use config::{ConfigError, ConfigResult, LogSettings, SettingsFile};

pub use target::LogTarget;
pub use trace::TraceLabel;
