use crate::traits::diagnostics::{DiagnosticSink, Severity};
use log::Level;
use parking_lot::Mutex;

const LOG_TARGET: &str = "ray_scene::diagnostics";

/// Forwards diagnostics to the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl LogSink {
    pub fn level_for(severity: Severity) -> Level {
        match severity.0 {
            0 | 1 => Level::Trace,
            2 => Level::Debug,
            3 => Level::Info,
            4 => Level::Warn,
            _ => Level::Error,
        }
    }
}

impl DiagnosticSink for LogSink {
    fn post(&self, message: &str, severity: Severity) {
        log::log!(target: LOG_TARGET, Self::level_for(severity), "{}", message.trim_end());
    }
}

/// Discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn post(&self, _message: &str, _severity: Severity) {}
}

/// A message captured by `RecordingSink`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub message: String,
    pub severity: Severity,
}

/// Keeps every posted message in order
#[derive(Debug, Default)]
pub struct RecordingSink {
    messages: Mutex<Vec<Diagnostic>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<Diagnostic> {
        self.messages.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.messages.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.lock().is_empty()
    }

    pub fn clear(&self) {
        self.messages.lock().clear();
    }
}

impl DiagnosticSink for RecordingSink {
    fn post(&self, message: &str, severity: Severity) {
        self.messages.lock().push(Diagnostic {
            message: message.to_owned(),
            severity,
        });
    }
}
