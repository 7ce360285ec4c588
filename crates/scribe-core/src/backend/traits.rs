//! Backend trait definition

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::target::LogTarget;

/// Extra key/value pairs travelling with a record
pub type Context = BTreeMap<String, String>;

/// Context key holding the record's trace label
pub const TRACE_KEY: &str = "trace";

/// Context key holding the active topic
pub const TOPIC_KEY: &str = "topic";

/// Destination for rendered records
///
/// Implementations:
/// - `FileBackend`: Locked appends to `log_<topic>.txt`
/// - `TracingBackend`: Forwards to the `tracing` ecosystem
/// - `HostBackend`: Forwards to the embedding application's logger
pub trait Backend: Send + Sync {
    /// Short name of this backend
    fn name(&self) -> &str;

    /// Write one rendered record
    ///
    /// Returns `false` if the record could not be persisted. Backends that
    /// cannot truncate their history ignore `clear_before`.
    fn log(&self, message: &str, context: &Context, clear_before: bool) -> bool;

    /// Point the backend at a new log target
    ///
    /// Returns `true` if the backend writes to files and switched over.
    fn retarget(&self, _target: &LogTarget) -> bool {
        false
    }
}

/// Type alias for an Arc-wrapped backend
pub type SharedBackend = Arc<dyn Backend>;

/// Backend selector used by configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    #[default]
    File,
    Tracing,
    Host,
}

impl BackendKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::File => "file",
            BackendKind::Tracing => "tracing",
            BackendKind::Host => "host",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackendKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "file" => Ok(BackendKind::File),
            "tracing" => Ok(BackendKind::Tracing),
            "host" => Ok(BackendKind::Host),
            _ => Err(ConfigError::InvalidBackend(s.to_string())),
        }
    }
}
