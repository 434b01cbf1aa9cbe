//! # Diagnostics Sink
//!
//! Components that report progress or stream errors (the command runner
//! and the debug service stubs) do not reach for a process-wide logger
//! directly. They hold a [`Diagnostics`] handle injected at construction
//! time, so callers decide where diagnostic text goes.
//!
//! Two implementations are provided:
//!
//! - [`LogDiagnostics`] forwards to the `log` facade, which the `cikit`
//!   binary wires to `env_logger`.
//! - [`MemoryDiagnostics`] records messages in memory for inspection,
//!   primarily in tests.

use std::sync::{Mutex, PoisonError};

/// Severity-split sink for diagnostic messages.
///
/// Mirrors the two entry points the helpers actually use: informational
/// progress and error text. Implementations must be safe to share across
/// tasks, since the command runner logs from a concurrently polled future.
pub trait Diagnostics: Send + Sync {
    /// Report an informational message.
    fn info(&self, message: &str);

    /// Report an error message.
    fn error(&self, message: &str);
}

/// Diagnostics implementation backed by the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn info(&self, message: &str) {
        log::info!("{message}");
    }

    fn error(&self, message: &str) {
        log::error!("{message}");
    }
}

/// Diagnostics implementation that records every message in memory.
///
/// Messages are stored in arrival order together with their severity.
#[derive(Debug, Default)]
pub struct MemoryDiagnostics {
    messages: Mutex<Vec<(Severity, String)>>,
}

/// Severity tag for recorded messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

impl MemoryDiagnostics {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded messages, in arrival order.
    pub fn messages(&self) -> Vec<(Severity, String)> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Recorded messages of one severity, in arrival order.
    pub fn messages_at(&self, severity: Severity) -> Vec<String> {
        self.messages()
            .into_iter()
            .filter(|(s, _)| *s == severity)
            .map(|(_, m)| m)
            .collect()
    }

    fn record(&self, severity: Severity, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((severity, message.to_string()));
    }
}

impl Diagnostics for MemoryDiagnostics {
    fn info(&self, message: &str) {
        self.record(Severity::Info, message);
    }

    fn error(&self, message: &str) {
        self.record(Severity::Error, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_diagnostics_records_in_order() {
        let diag = MemoryDiagnostics::new();
        diag.info("first");
        diag.error("second");
        diag.info("third");

        let messages = diag.messages();
        assert_eq!(
            messages,
            vec![
                (Severity::Info, "first".to_string()),
                (Severity::Error, "second".to_string()),
                (Severity::Info, "third".to_string()),
            ]
        );
    }

    #[test]
    fn test_memory_diagnostics_filters_by_severity() {
        let diag = MemoryDiagnostics::new();
        diag.info("progress");
        diag.error("boom");

        assert_eq!(diag.messages_at(Severity::Info), vec!["progress"]);
        assert_eq!(diag.messages_at(Severity::Error), vec!["boom"]);
    }

    #[test]
    fn test_memory_diagnostics_starts_empty() {
        let diag = MemoryDiagnostics::new();
        assert!(diag.messages().is_empty());
    }
}
