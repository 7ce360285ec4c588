//! In-memory host logger

use parking_lot::RwLock;

use super::level::LogLevel;
use super::traits::HostLogger;

/// One captured entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryEntry {
    pub level: LogLevel,
    pub message: String,
}

/// Keeps every entry in memory
///
/// Handy for tests and for hosts that drain log entries themselves.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    entries: RwLock<Vec<MemoryEntry>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all captured entries
    pub fn entries(&self) -> Vec<MemoryEntry> {
        self.entries.read().clone()
    }

    /// Messages captured at `level`
    pub fn messages(&self, level: LogLevel) -> Vec<String> {
        self.entries
            .read()
            .iter()
            .filter(|entry| entry.level == level)
            .map(|entry| entry.message.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove and return all entries
    pub fn drain(&self) -> Vec<MemoryEntry> {
        std::mem::take(&mut *self.entries.write())
    }
}

impl HostLogger for MemoryLogger {
    fn log(&self, level: LogLevel, message: &str) {
        self.entries.write().push(MemoryEntry {
            level,
            message: message.to_string(),
        });
    }
}
