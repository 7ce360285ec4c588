//! Pluggable log destinations
//!
//! A [`Backend`] receives rendered text plus a small context map. The façade
//! picks one through [`BackendKind`] or takes any custom implementation.

mod file;
mod host;
mod tracing_backend;
mod traits;

pub use file::FileBackend;
pub use host::HostBackend;
pub use tracing_backend::TracingBackend;
pub use traits::{Backend, BackendKind, Context, SharedBackend, TOPIC_KEY, TRACE_KEY};
