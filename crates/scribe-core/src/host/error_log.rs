//! Fallback error log
//!
//! An independent file the file sink reports its own failures to. It never
//! goes through the sink it is reporting on, so a broken log directory can
//! still be diagnosed.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;
use parking_lot::Mutex;

use super::level::LogLevel;
use super::traits::HostLogger;

/// Enables or disables the error log (`1`/`true`, default on)
pub const DIAGNOSTICS_ENV: &str = "SCRIBE_DIAGNOSTICS";

/// Minimum level written (`trace`, `debug`, `info`, `warn`, `error`)
pub const LOG_LEVEL_ENV: &str = "SCRIBE_LOG_LEVEL";

/// Appends `[HH:MM:SS.mmm] [LEVEL] message` lines to a file
pub struct ErrorLog {
    path: PathBuf,
    min_level: LogLevel,
    enabled: bool,
    file: Mutex<Option<File>>,
}

impl ErrorLog {
    /// Error log at `path`, writing warnings and errors
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            min_level: LogLevel::Warn,
            enabled: true,
            file: Mutex::new(None),
        }
    }

    /// Error log at the default path, configured from the environment
    pub fn from_env() -> Self {
        let enabled = std::env::var(DIAGNOSTICS_ENV)
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(true);
        let min_level = std::env::var(LOG_LEVEL_ENV)
            .ok()
            .and_then(|v| LogLevel::parse(&v))
            .unwrap_or(LogLevel::Warn);

        Self::new(Self::default_path())
            .with_min_level(min_level)
            .with_enabled(enabled)
    }

    /// `<temp dir>/scribe-errors.log`
    pub fn default_path() -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push("scribe-errors.log");
        path
    }

    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }
}

impl HostLogger for ErrorLog {
    /// Write one entry; failures here are dropped, there is nowhere left to report them
    fn log(&self, level: LogLevel, message: &str) {
        if !self.enabled || level < self.min_level {
            return;
        }

        let mut guard = self.file.lock();
        if guard.is_none() {
            if let Some(parent) = self.path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            *guard = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)
                .ok();
        }

        if let Some(ref mut file) = *guard {
            let timestamp = Utc::now().format("%H:%M:%S%.3f");
            let _ = writeln!(file, "[{}] [{}] {}", timestamp, level, message);
            let _ = file.flush();
        }
    }
}

impl std::fmt::Debug for ErrorLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ErrorLog")
            .field("path", &self.path)
            .field("min_level", &self.min_level)
            .field("enabled", &self.enabled)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_error_log_filters_by_level() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("errors.log");
        let log = ErrorLog::new(&path);

        log.info("skipped");
        log.error("disk on fire");

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(!content.contains("skipped"));
        assert!(content.contains("[ERROR] disk on fire"));
    }

    #[test]
    fn test_disabled_error_log_writes_nothing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("errors.log");
        let log = ErrorLog::new(&path).with_enabled(false);

        log.error("ignored");

        assert!(!path.exists());
    }

    #[test]
    fn test_min_level_lowered() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("errors.log");
        let log = ErrorLog::new(&path).with_min_level(LogLevel::Info);

        log.info("kept");
        log.debug("dropped");

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("[INFO ] kept"));
        assert!(!content.contains("dropped"));
    }

    #[test]
    fn test_default_path() {
        assert!(ErrorLog::default_path().ends_with("scribe-errors.log"));
    }
}
