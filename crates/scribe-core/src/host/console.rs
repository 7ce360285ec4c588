//! Console host logger

use super::level::LogLevel;
use super::traits::HostLogger;

/// Prefix used by [`ConsoleLogger::new`]
pub const DEFAULT_CONSOLE_PREFIX: &str = "[scribe]";

/// Writes `<prefix> LEVEL: message` lines to stderr
///
/// Entries below the minimum level (warn by default) are skipped.
#[derive(Debug, Clone)]
pub struct ConsoleLogger {
    prefix: String,
    min_level: LogLevel,
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleLogger {
    /// Console logger with the `[scribe]` prefix
    pub fn new() -> Self {
        Self::with_prefix(DEFAULT_CONSOLE_PREFIX)
    }

    /// Console logger with a custom prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            min_level: LogLevel::default(),
        }
    }

    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The line written for an entry, or `None` when it is filtered out
    pub fn format_line(&self, level: LogLevel, message: &str) -> Option<String> {
        if level < self.min_level {
            return None;
        }
        Some(format!("{} {}: {}", self.prefix, level.to_string().trim_end(), message))
    }
}

impl HostLogger for ConsoleLogger {
    fn log(&self, level: LogLevel, message: &str) {
        if let Some(line) = self.format_line(level, message) {
            eprintln!("{}", line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixes() {
        assert_eq!(ConsoleLogger::new().prefix(), DEFAULT_CONSOLE_PREFIX);
        assert_eq!(ConsoleLogger::with_prefix("[shop]").prefix(), "[shop]");
    }

    #[test]
    fn test_format_line() {
        let logger = ConsoleLogger::with_prefix("[shop]");
        assert_eq!(
            logger.format_line(LogLevel::Error, "disk full").as_deref(),
            Some("[shop] ERROR: disk full")
        );
        assert_eq!(
            logger.format_line(LogLevel::Warn, "slow").as_deref(),
            Some("[shop] WARN: slow")
        );
    }

    #[test]
    fn test_below_min_level_is_skipped() {
        let logger = ConsoleLogger::new();
        assert!(logger.format_line(LogLevel::Info, "chatter").is_none());

        let verbose = ConsoleLogger::new().with_min_level(LogLevel::Debug);
        assert!(verbose.format_line(LogLevel::Debug, "detail").is_some());
        assert!(verbose.format_line(LogLevel::Trace, "noise").is_none());
    }
}
