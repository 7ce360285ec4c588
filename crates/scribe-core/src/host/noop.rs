//! No-op host logger

use super::level::LogLevel;
use super::traits::HostLogger;

/// A logger that does nothing
///
/// The default diagnostic channel when settings name none.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl NoOpLogger {
    pub fn new() -> Self {
        Self
    }
}

impl HostLogger for NoOpLogger {
    fn log(&self, _level: LogLevel, _message: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::SharedHostLogger;
    use std::sync::Arc;

    #[test]
    fn test_noop_accepts_every_level_through_shared_handle() {
        let logger: SharedHostLogger = Arc::new(NoOpLogger::new());
        logger.log(LogLevel::Trace, "trace message");
        logger.warn("warn message");
        logger.error("error message");
    }
}
