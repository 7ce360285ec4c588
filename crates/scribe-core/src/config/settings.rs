//! Logger settings

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::backend::BackendKind;
use crate::host::DiagnosticsKind;
use crate::render::RenderMode;
use crate::target::{default_directory, LogTarget};

/// Topic used when none is configured
pub const DEFAULT_TOPIC: &str = "default";

/// Everything a [`crate::Scribe`] is built from
///
/// ```yaml
/// topic: orders
/// module: OrderModule
/// log_directory: /srv/www/logs
/// render_mode: pretty_exported
/// backend: file
/// diagnostics: error_log
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Selects the target file (`log_<topic>.txt`) or channel
    pub topic: String,
    /// Fixed trace label; when absent the caller location is used
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    /// Overrides the default log directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_directory: Option<PathBuf>,
    pub render_mode: RenderMode,
    pub backend: BackendKind,
    /// Where the file backend reports its own failures
    pub diagnostics: DiagnosticsKind,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            topic: DEFAULT_TOPIC.to_string(),
            module: None,
            log_directory: None,
            render_mode: RenderMode::default(),
            backend: BackendKind::default(),
            diagnostics: DiagnosticsKind::default(),
        }
    }
}

impl LogSettings {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            ..Self::default()
        }
    }

    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }

    pub fn with_log_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.log_directory = Some(directory.into());
        self
    }

    pub fn with_render_mode(mut self, mode: RenderMode) -> Self {
        self.render_mode = mode;
        self
    }

    pub fn with_backend(mut self, backend: BackendKind) -> Self {
        self.backend = backend;
        self
    }

    pub fn with_diagnostics(mut self, diagnostics: DiagnosticsKind) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Configured directory, or the default one
    pub fn directory(&self) -> PathBuf {
        self.log_directory.clone().unwrap_or_else(default_directory)
    }

    /// Module name if one is set and non-blank
    pub fn module(&self) -> Option<&str> {
        self.module.as_deref().filter(|m| !m.trim().is_empty())
    }

    /// Target file for the configured topic
    pub fn target(&self) -> LogTarget {
        LogTarget::new(self.directory(), self.topic.clone())
    }
}
