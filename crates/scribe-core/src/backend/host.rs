//! Host-framework backend

use super::traits::{Backend, Context, TRACE_KEY};
use crate::host::SharedHostLogger;

/// Forwards records to the embedding application's [`crate::host::HostLogger`]
///
/// Each record is passed to `info` as `<trace> message`. `clear_before` is
/// ignored: the host owns its history.
pub struct HostBackend {
    logger: SharedHostLogger,
}

impl HostBackend {
    pub fn new(logger: SharedHostLogger) -> Self {
        Self { logger }
    }
}

impl std::fmt::Debug for HostBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostBackend").finish_non_exhaustive()
    }
}

impl Backend for HostBackend {
    fn name(&self) -> &str {
        "host"
    }

    fn log(&self, message: &str, context: &Context, _clear_before: bool) -> bool {
        let trace = context.get(TRACE_KEY).map(String::as_str).unwrap_or("unknown");
        self.logger.info(&format!("<{}> {}", trace, message));
        true
    }
}
