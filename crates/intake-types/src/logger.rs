//! Logging capability handed to the validator and the append store.
//!
//! Components never reach for a global logger. The composition root builds
//! one [`Logger`] and passes (named) clones of it into every collaborator.
//! In production the sink is [`TracingSink`]; tests use [`MemorySink`] to
//! assert on what was reported.

use std::fmt;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

/// Severity of a logged event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Debug,
    Info,
    Warn,
    Error,
}

/// A single structured log event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEvent {
    pub severity: Severity,
    pub component: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Destination for log events.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: LogEvent);
}

/// Forwards events to `tracing`, with the component and detail as fields.
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&self, event: LogEvent) {
        let component = event.component.as_str();
        let detail = event.detail.as_deref().unwrap_or("");
        match event.severity {
            Severity::Debug => tracing::debug!(component, detail, "{}", event.message),
            Severity::Info => tracing::info!(component, detail, "{}", event.message),
            Severity::Warn => tracing::warn!(component, detail, "{}", event.message),
            Severity::Error => tracing::error!(component, detail, "{}", event.message),
        }
    }
}

/// Records events in memory. Intended for tests.
#[derive(Default)]
pub struct MemorySink {
    events: Mutex<Vec<LogEvent>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all events recorded so far.
    pub fn events(&self) -> Vec<LogEvent> {
        self.events.lock().expect("lock poisoned").clone()
    }

    /// Events at exactly the given severity.
    pub fn at(&self, severity: Severity) -> Vec<LogEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.severity == severity)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().expect("lock poisoned").is_empty()
    }
}

impl EventSink for MemorySink {
    fn emit(&self, event: LogEvent) {
        self.events.lock().expect("lock poisoned").push(event);
    }
}

/// A named handle onto an [`EventSink`].
#[derive(Clone)]
pub struct Logger {
    component: String,
    sink: Arc<dyn EventSink>,
}

impl Logger {
    pub fn new(component: impl Into<String>, sink: Arc<dyn EventSink>) -> Self {
        Self {
            component: component.into(),
            sink,
        }
    }

    /// A logger that forwards to `tracing`.
    pub fn tracing(component: impl Into<String>) -> Self {
        Self::new(component, Arc::new(TracingSink))
    }

    /// Same sink, different component name.
    pub fn named(&self, component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            sink: Arc::clone(&self.sink),
        }
    }

    pub fn component(&self) -> &str {
        &self.component
    }

    pub fn log(&self, severity: Severity, message: &str, detail: Option<String>) {
        self.sink.emit(LogEvent {
            severity,
            component: self.component.clone(),
            message: message.to_string(),
            detail,
        });
    }

    pub fn debug(&self, message: &str) {
        self.log(Severity::Debug, message, None);
    }

    pub fn info(&self, message: &str) {
        self.log(Severity::Info, message, None);
    }

    pub fn info_with(&self, message: &str, detail: &dyn fmt::Display) {
        self.log(Severity::Info, message, Some(detail.to_string()));
    }

    pub fn warn(&self, message: &str) {
        self.log(Severity::Warn, message, None);
    }

    pub fn warn_with(&self, message: &str, detail: &dyn fmt::Display) {
        self.log(Severity::Warn, message, Some(detail.to_string()));
    }

    pub fn error_with(&self, message: &str, detail: &dyn fmt::Display) {
        self.log(Severity::Error, message, Some(detail.to_string()));
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("component", &self.component)
            .finish_non_exhaustive()
    }
}
