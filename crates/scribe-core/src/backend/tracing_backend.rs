//! Structured-logging backend built on `tracing`

use std::collections::BTreeMap;

use super::traits::{Backend, Context, TOPIC_KEY, TRACE_KEY};

/// Emits each record as an INFO event with target `scribe`
///
/// The topic and trace label become event fields; remaining context entries
/// are attached as one `context` field. `clear_before` is ignored: a
/// subscriber's history cannot be truncated from here.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingBackend;

impl TracingBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Backend for TracingBackend {
    fn name(&self) -> &str {
        "tracing"
    }

    fn log(&self, message: &str, context: &Context, _clear_before: bool) -> bool {
        let topic = context.get(TOPIC_KEY).map(String::as_str).unwrap_or("");
        let trace = context.get(TRACE_KEY).map(String::as_str).unwrap_or("unknown");
        let extra: BTreeMap<&str, &str> = context
            .iter()
            .filter(|(key, _)| key.as_str() != TOPIC_KEY && key.as_str() != TRACE_KEY)
            .map(|(key, value)| (key.as_str(), value.as_str()))
            .collect();

        if extra.is_empty() {
            tracing::info!(target: "scribe", topic, trace, "{}", message);
        } else {
            tracing::info!(target: "scribe", topic, trace, context = ?extra, "{}", message);
        }
        true
    }
}
