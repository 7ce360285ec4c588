//! Locked, append-only log file
//!
//! [`FileAppendSink`] owns one target path. Every append runs the whole
//! protocol on its own: optional clear, directory creation, gap marker,
//! exclusive advisory lock, write, flush, unlock. Nothing is held open between
//! calls, so one sink can be shared across threads and several processes can
//! append to the same file.

mod error;
mod gap;

use std::fmt::Write as _;
use std::fs::{self, DirBuilder, File, OpenOptions};
use std::io::{self, Write};
use std::panic::Location;
use std::path::Path;
use std::sync::Arc;
use std::time::SystemTime;

use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::Serialize;

use crate::host::{NoOpLogger, SharedHostLogger};
use crate::render::{render, RenderMode};
use crate::target::LogTarget;
use crate::trace::TraceLabel;
use crate::LINE_ENDING;

pub use error::{SinkError, SinkResult};
pub use gap::{
    elapsed_since_modified, gap_marker, GAP_DELTA_LIMIT_SECS, GAP_MARKER_PREFIX,
    GAP_THRESHOLD_SECS, GAP_TIMESTAMP_FORMAT,
};

/// Permissions for directories the sink creates (rwxr-xr-x)
pub const DIRECTORY_MODE: u32 = 0o755;

/// What a successful append wrote
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppendOutcome {
    /// Bytes appended, marker line included
    pub bytes_written: usize,
    /// Whether a gap marker preceded the record
    pub gap_marker: bool,
}

/// Append-only writer for a single log file
pub struct FileAppendSink {
    target: LogTarget,
    module: Option<String>,
    mode: RenderMode,
    diagnostics: SharedHostLogger,
}

impl FileAppendSink {
    /// Sink writing plain records to `target`, labelling them by caller
    pub fn new(target: LogTarget) -> Self {
        Self {
            target,
            module: None,
            mode: RenderMode::default(),
            diagnostics: Arc::new(NoOpLogger::new()),
        }
    }

    /// Label every record with `module` instead of the caller location
    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        let module = module.into();
        self.module = if module.trim().is_empty() { None } else { Some(module) };
        self
    }

    pub fn with_render_mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }

    /// Where append failures are reported
    pub fn with_diagnostics(mut self, diagnostics: SharedHostLogger) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn target(&self) -> &LogTarget {
        &self.target
    }

    pub fn path(&self) -> &Path {
        self.target.path()
    }

    pub fn module(&self) -> Option<&str> {
        self.module.as_deref()
    }

    pub fn render_mode(&self) -> RenderMode {
        self.mode
    }

    /// Sink for another target with the same settings
    ///
    /// The file behind the current target is left as it is.
    pub fn retarget(&self, target: LogTarget) -> Self {
        Self {
            target,
            module: self.module.clone(),
            mode: self.mode,
            diagnostics: Arc::clone(&self.diagnostics),
        }
    }

    /// Render `message` and append it, labelled by module or by the caller
    ///
    /// Returns `false` on any failure; the reason goes to the diagnostic logger.
    #[track_caller]
    pub fn append<T: Serialize + ?Sized>(&self, message: &T, clear_before: bool) -> bool {
        let trace = TraceLabel::resolve(self.module(), Some(Location::caller()));
        let rendered = render(message, self.mode);
        self.append_rendered(&rendered, &trace, clear_before)
    }

    /// Append already-rendered text under `trace`
    pub fn append_rendered(&self, rendered: &str, trace: &TraceLabel, clear_before: bool) -> bool {
        match self.try_append_rendered(rendered, trace, clear_before) {
            Ok(_) => true,
            Err(e) => {
                self.diagnostics.error(&e.to_string());
                false
            }
        }
    }

    /// Append already-rendered text, reporting why it failed
    pub fn try_append_rendered(
        &self,
        rendered: &str,
        trace: &TraceLabel,
        clear_before: bool,
    ) -> SinkResult<AppendOutcome> {
        let path = self.target.path();

        if clear_before {
            remove_existing(path)?;
        }

        if let Some(parent) = path.parent() {
            ensure_directory(parent)?;
        }

        let now = SystemTime::now();
        let marker = gap_marker(elapsed_since_modified(path, now), DateTime::<Utc>::from(now));
        let record = compose_record(marker.as_deref(), trace, rendered);

        write_locked(path, record.as_bytes())?;

        Ok(AppendOutcome {
            bytes_written: record.len(),
            gap_marker: marker.is_some(),
        })
    }
}

impl std::fmt::Debug for FileAppendSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileAppendSink")
            .field("path", &self.target.path())
            .field("module", &self.module)
            .field("mode", &self.mode)
            .finish()
    }
}

/// Optional marker line, then `<trace> message`, each line terminated
pub fn compose_record(marker: Option<&str>, trace: &TraceLabel, rendered: &str) -> String {
    let mut record = String::with_capacity(rendered.len() + 64);
    if let Some(marker) = marker {
        record.push_str(marker);
        record.push_str(LINE_ENDING);
    }
    let _ = write!(record, "<{}> {}{}", trace, rendered, LINE_ENDING);
    record
}

fn remove_existing(path: &Path) -> SinkResult<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(SinkError::delete_failed(path, e)),
    }
}

fn ensure_directory(dir: &Path) -> SinkResult<()> {
    if dir.as_os_str().is_empty() || dir.is_dir() {
        return Ok(());
    }

    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIRECTORY_MODE);
    }
    builder
        .create(dir)
        .map_err(|e| SinkError::directory_create_failed(dir, e))
}

/// Releases the advisory lock when dropped
struct LockGuard(File);

impl Drop for LockGuard {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.0);
    }
}

fn write_locked(path: &Path, record: &[u8]) -> SinkResult<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| SinkError::open_failed(path, e))?;

    // Blocks until other writers are done; there is no timeout.
    FileExt::lock_exclusive(&file).map_err(|e| SinkError::lock_failed(path, e))?;
    let mut guard = LockGuard(file);

    guard
        .0
        .write_all(record)
        .and_then(|_| guard.0.flush())
        .and_then(|_| guard.0.sync_data())
        .map_err(|e| SinkError::write_failed(path, e))
}
