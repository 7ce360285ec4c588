//! File backend

use std::path::PathBuf;

use parking_lot::RwLock;

use super::traits::{Backend, Context, TRACE_KEY};
use crate::sink::FileAppendSink;
use crate::target::LogTarget;
use crate::trace::TraceLabel;

/// Appends records to a topic file through a [`FileAppendSink`]
///
/// Only the `trace` entry of the context is used, to label the record; a
/// module fixed on the sink takes precedence over it.
#[derive(Debug)]
pub struct FileBackend {
    sink: RwLock<FileAppendSink>,
}

impl FileBackend {
    pub fn new(sink: FileAppendSink) -> Self {
        Self {
            sink: RwLock::new(sink),
        }
    }

    /// Backend with a default sink for `target`
    pub fn for_target(target: LogTarget) -> Self {
        Self::new(FileAppendSink::new(target))
    }

    /// Path currently written to
    pub fn path(&self) -> PathBuf {
        self.sink.read().path().to_path_buf()
    }
}

impl Backend for FileBackend {
    fn name(&self) -> &str {
        "file"
    }

    fn log(&self, message: &str, context: &Context, clear_before: bool) -> bool {
        let sink = self.sink.read();
        let trace = match sink.module() {
            Some(module) => TraceLabel::Module(module.to_string()),
            None => context
                .get(TRACE_KEY)
                .map(|trace| TraceLabel::parse(trace))
                .unwrap_or(TraceLabel::Unknown),
        };
        sink.append_rendered(message, &trace, clear_before)
    }

    fn retarget(&self, target: &LogTarget) -> bool {
        let mut sink = self.sink.write();
        *sink = sink.retarget(target.clone());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LINE_ENDING;
    use tempfile::tempdir;

    fn context(trace: &str) -> Context {
        let mut context = Context::new();
        context.insert(TRACE_KEY.to_string(), trace.to_string());
        context.insert("ignored".to_string(), "value".to_string());
        context
    }

    #[test]
    fn test_file_backend_writes_record() {
        let dir = tempdir().unwrap();
        let backend = FileBackend::for_target(LogTarget::new(dir.path(), "orders"));

        assert!(backend.log("created #42", &context("OrderModule"), false));

        let content = std::fs::read_to_string(backend.path()).unwrap();
        assert!(content.ends_with(&format!("<OrderModule> created #42{}", LINE_ENDING)));
        assert!(!content.contains("ignored"));
    }

    #[test]
    fn test_sink_module_overrides_context() {
        let dir = tempdir().unwrap();
        let sink = FileAppendSink::new(LogTarget::new(dir.path(), "m")).with_module("Fixed");
        let backend = FileBackend::new(sink);

        assert!(backend.log("hello", &context("elsewhere.rs:3"), false));

        let content = std::fs::read_to_string(backend.path()).unwrap();
        assert!(content.contains("<Fixed> hello"));
    }

    #[test]
    fn test_caller_location_from_context() {
        let dir = tempdir().unwrap();
        let backend = FileBackend::for_target(LogTarget::new(dir.path(), "c"));
        let label = TraceLabel::parse("src/orders.rs:42");
        assert_eq!(label, TraceLabel::Caller { file: "src/orders.rs".into(), line: 42 });

        assert!(backend.log("placed", &context(&label.to_string()), false));
        assert!(backend.log("scoped", &context("app::orders"), false));

        let content = std::fs::read_to_string(backend.path()).unwrap();
        assert!(content.contains("<src/orders.rs:42> placed"));
        assert!(content.contains("<app::orders> scoped"));
    }

    #[test]
    fn test_missing_trace_is_unknown() {
        let dir = tempdir().unwrap();
        let backend = FileBackend::for_target(LogTarget::new(dir.path(), "u"));

        assert!(backend.log("anon", &Context::new(), false));

        let content = std::fs::read_to_string(backend.path()).unwrap();
        assert!(content.contains("<unknown> anon"));
    }

    #[test]
    fn test_retarget() {
        let dir = tempdir().unwrap();
        let backend = FileBackend::for_target(LogTarget::new(dir.path(), "a"));
        assert!(backend.log("first", &context("T"), false));

        assert!(backend.retarget(&LogTarget::new(dir.path(), "b")));
        assert!(backend.log("second", &context("T"), false));

        assert_eq!(backend.path(), dir.path().join("log_b.txt"));
        let old = std::fs::read_to_string(dir.path().join("log_a.txt")).unwrap();
        assert!(old.contains("first") && !old.contains("second"));
    }
}
