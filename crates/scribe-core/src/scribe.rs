//! The logging façade
//!
//! A [`Scribe`] ties settings, rendering and a backend together. It is an
//! ordinary value: construct one, share it by reference or `Arc`, and install
//! it with [`crate::global::init`] if a process-wide default is wanted.

use std::panic::Location;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::Serialize;

use crate::backend::{
    Backend, BackendKind, Context, FileBackend, HostBackend, SharedBackend, TracingBackend,
    TOPIC_KEY, TRACE_KEY,
};
use crate::config::{LogSettings, SettingsFile};
use crate::error::{ScribeError, ScribeResult};
use crate::host::SharedHostLogger;
use crate::render::{render, RenderMode};
use crate::sink::FileAppendSink;
use crate::target::LogTarget;
use crate::trace::TraceLabel;

struct State {
    settings: LogSettings,
    backend: Option<SharedBackend>,
    /// Set by `set_backend`; a custom backend is never rebuilt from settings
    custom_backend: bool,
    host_logger: Option<SharedHostLogger>,
    diagnostics: SharedHostLogger,
}

impl State {
    fn new(settings: LogSettings) -> Self {
        let diagnostics = settings.diagnostics.build();
        Self {
            settings,
            backend: None,
            custom_backend: false,
            host_logger: None,
            diagnostics,
        }
    }

    /// Replace the backend with the built-in kind named in the settings
    ///
    /// The host kind has no backend until a host logger is attached.
    fn rebuild_backend(&mut self) {
        self.custom_backend = false;
        self.backend = match self.settings.backend {
            BackendKind::File => {
                let sink = FileAppendSink::new(self.settings.target())
                    .with_render_mode(self.settings.render_mode)
                    .with_diagnostics(Arc::clone(&self.diagnostics));
                Some(Arc::new(FileBackend::new(sink)) as SharedBackend)
            }
            BackendKind::Tracing => Some(Arc::new(TracingBackend::new()) as SharedBackend),
            BackendKind::Host => self
                .host_logger
                .as_ref()
                .map(|logger| Arc::new(HostBackend::new(Arc::clone(logger))) as SharedBackend),
        };
    }
}

/// Single access point for logging
///
/// # Example
///
/// ```no_run
/// use scribe_core::{LogSettings, RenderMode, Scribe};
///
/// let scribe = Scribe::new(
///     LogSettings::new("orders")
///         .with_module("OrderModule")
///         .with_render_mode(RenderMode::PrettyExported),
/// );
/// scribe.log("created #42", false).unwrap();
/// ```
pub struct Scribe {
    state: RwLock<State>,
}

impl Scribe {
    /// Logger using the backend and diagnostics named in `settings`
    ///
    /// The host backend needs the host's logger, so with
    /// [`BackendKind::Host`] `log` returns [`ScribeError::BackendUnavailable`]
    /// until [`Scribe::set_host_logger`] is called.
    pub fn new(settings: LogSettings) -> Self {
        let mut state = State::new(settings);
        state.rebuild_backend();
        Self {
            state: RwLock::new(state),
        }
    }

    /// Logger with no backend; `log` fails until one is set
    pub fn unconfigured(settings: LogSettings) -> Self {
        Self {
            state: RwLock::new(State::new(settings)),
        }
    }

    /// Logger built from a YAML settings file
    pub fn from_settings_file(file: &SettingsFile) -> ScribeResult<Self> {
        Ok(Self::new(file.load()?))
    }

    /// Report file-backend failures to `diagnostics`
    ///
    /// A built-in file backend is rebuilt to pick the channel up. Custom
    /// backends installed with [`Scribe::set_backend`] are left alone.
    pub fn with_diagnostics(self, diagnostics: SharedHostLogger) -> Self {
        {
            let mut state = self.state.write();
            state.diagnostics = diagnostics;
            if state.backend.is_some()
                && !state.custom_backend
                && state.settings.backend == BackendKind::File
            {
                state.rebuild_backend();
            }
        }
        self
    }

    /// Use a custom backend
    pub fn set_backend(&self, backend: SharedBackend) {
        let mut state = self.state.write();
        state.backend = Some(backend);
        state.custom_backend = true;
    }

    /// Switch to one of the built-in backends
    ///
    /// Switching to [`BackendKind::Host`] reuses the logger from an earlier
    /// [`Scribe::set_host_logger`]; without one there is no backend.
    pub fn set_backend_kind(&self, kind: BackendKind) {
        let mut state = self.state.write();
        state.settings.backend = kind;
        state.rebuild_backend();
    }

    /// Forward records to the embedding application's logger
    pub fn set_host_logger(&self, logger: SharedHostLogger) {
        let mut state = self.state.write();
        state.settings.backend = BackendKind::Host;
        state.host_logger = Some(logger);
        state.rebuild_backend();
    }

    /// Drop the backend; subsequent `log` calls fail
    pub fn clear_backend(&self) {
        let mut state = self.state.write();
        state.backend = None;
        state.custom_backend = false;
    }

    pub fn backend_name(&self) -> Option<String> {
        self.state
            .read()
            .backend
            .as_ref()
            .map(|backend| backend.name().to_string())
    }

    pub fn set_render_mode(&self, mode: RenderMode) {
        self.state.write().settings.render_mode = mode;
    }

    pub fn render_mode(&self) -> RenderMode {
        self.state.read().settings.render_mode
    }

    /// Change the topic
    ///
    /// A file backend moves to the new topic's file; what was already written
    /// to the old file stays there.
    pub fn set_topic(&self, topic: impl Into<String>) {
        let mut state = self.state.write();
        state.settings.topic = topic.into();
        let target = state.settings.target();
        if let Some(backend) = &state.backend {
            backend.retarget(&target);
        }
    }

    pub fn topic(&self) -> String {
        self.state.read().settings.topic.clone()
    }

    /// File the topic maps to (used by the file backend)
    pub fn target(&self) -> LogTarget {
        self.state.read().settings.target()
    }

    pub fn settings(&self) -> LogSettings {
        self.state.read().settings.clone()
    }

    /// Render `value` and hand it to the backend
    ///
    /// Returns `Ok(false)` when the backend could not persist the record and
    /// `Err(BackendUnavailable)` when there is no backend at all.
    #[track_caller]
    pub fn log<T: Serialize + ?Sized>(&self, value: &T, clear_before: bool) -> ScribeResult<bool> {
        self.dispatch(value, Context::new(), clear_before, Location::caller())
    }

    /// Like [`Scribe::log`], with extra context for backends that use it
    #[track_caller]
    pub fn log_with_context<T: Serialize + ?Sized>(
        &self,
        value: &T,
        context: Context,
        clear_before: bool,
    ) -> ScribeResult<bool> {
        self.dispatch(value, context, clear_before, Location::caller())
    }

    fn dispatch<T: Serialize + ?Sized>(
        &self,
        value: &T,
        mut context: Context,
        clear_before: bool,
        caller: &Location<'_>,
    ) -> ScribeResult<bool> {
        let (backend, mode, trace, topic) = {
            let state = self.state.read();
            let backend = state.backend.clone().ok_or(ScribeError::BackendUnavailable)?;
            (
                backend,
                state.settings.render_mode,
                TraceLabel::resolve(state.settings.module(), Some(caller)),
                state.settings.topic.clone(),
            )
        };

        let message = render(value, mode);
        context.insert(TRACE_KEY.to_string(), trace.to_string());
        context.insert(TOPIC_KEY.to_string(), topic);
        Ok(backend.log(&message, &context, clear_before))
    }
}

impl std::fmt::Debug for Scribe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read();
        f.debug_struct("Scribe")
            .field("settings", &state.settings)
            .field("backend", &state.backend.as_ref().map(|b| b.name().to_string()))
            .finish()
    }
}

/// Log formatted text through a [`Scribe`], labelled with the call site
///
/// ```no_run
/// # let scribe = scribe_core::Scribe::new(scribe_core::LogSettings::default());
/// scribe_core::scribe_log!(scribe, "order {} created", 42).unwrap();
/// ```
#[macro_export]
macro_rules! scribe_log {
    ($scribe:expr, $($arg:tt)*) => {
        $scribe.log(&format!($($arg)*), false)
    };
}
