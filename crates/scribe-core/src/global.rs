//! Process-scoped default logger
//!
//! Nothing is created lazily: the application builds a [`Scribe`] at startup
//! and installs it once with [`init`]. Library code that wants the shared
//! instance asks for it with [`get`] and copes with `None`.

use once_cell::sync::OnceCell;

use crate::error::{ScribeError, ScribeResult};
use crate::scribe::Scribe;

static GLOBAL: OnceCell<Scribe> = OnceCell::new();

/// Install the process-wide logger
///
/// Fails with [`ScribeError::AlreadyInitialized`] on every call after the first.
pub fn init(scribe: Scribe) -> ScribeResult<&'static Scribe> {
    GLOBAL
        .try_insert(scribe)
        .map_err(|_| ScribeError::AlreadyInitialized)
}

/// The process-wide logger, if one was installed
pub fn get() -> Option<&'static Scribe> {
    GLOBAL.get()
}
