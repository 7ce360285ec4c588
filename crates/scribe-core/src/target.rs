//! Log file naming
//!
//! A topic maps to `<directory>/log_<topic>.txt`. When no directory is given
//! the logs live under `$DOCUMENT_ROOT/logs`, falling back to the platform
//! data directory.

use std::path::{Path, PathBuf};

/// Environment variable naming the document root logs are placed under
pub const DOCUMENT_ROOT_ENV: &str = "DOCUMENT_ROOT";

/// Directory name appended to the root
pub const LOGS_DIR_NAME: &str = "logs";

/// Destination file for one topic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogTarget {
    directory: PathBuf,
    topic: String,
    path: PathBuf,
}

impl LogTarget {
    /// Target for `topic` inside `directory`
    pub fn new(directory: impl Into<PathBuf>, topic: impl Into<String>) -> Self {
        let directory = directory.into();
        let topic = topic.into();
        let path = directory.join(file_name(&topic));
        Self { directory, topic, path }
    }

    /// Target for `topic` inside [`default_directory`]
    pub fn for_topic(topic: impl Into<String>) -> Self {
        Self::new(default_directory(), topic)
    }

    /// Same directory, different topic
    pub fn with_topic(&self, topic: impl Into<String>) -> Self {
        Self::new(self.directory.clone(), topic)
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Full path of the log file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// File name used for a topic
pub fn file_name(topic: &str) -> String {
    format!("log_{}.txt", topic)
}

/// Directory used when none is configured
pub fn default_directory() -> PathBuf {
    let root = std::env::var(DOCUMENT_ROOT_ENV)
        .ok()
        .filter(|root| !root.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::data_local_dir().map(|dir| dir.join("scribe")))
        .unwrap_or_else(|| PathBuf::from("."));
    root.join(LOGS_DIR_NAME)
}
