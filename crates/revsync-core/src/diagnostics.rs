//! Diagnostic sinks for non-fatal problems.
//!
//! A backend reports recoverable failures (a reset that could not align the
//! working tree, a submodule update that failed, a listing command that
//! could not run) to the sink it was constructed with. Errors that abort an
//! operation are returned as [`RevsyncError`](crate::RevsyncError) instead.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::warn;

/// A recoverable problem reported by a backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Primitive that reported the problem (`reset`, `submodule`, `tags`, ...).
    pub operation: &'static str,
    /// Human-readable description.
    pub message: String,
}

impl Diagnostic {
    /// Creates a new diagnostic.
    pub fn new(operation: &'static str, message: impl Into<String>) -> Self {
        Self {
            operation,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.operation, self.message)
    }
}

/// Receives warnings from a backend.
pub trait DiagnosticSink: Send + Sync {
    /// Records a recoverable problem.
    fn warn(&self, diagnostic: Diagnostic);
}

/// Forwards diagnostics to `tracing` at warn level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn warn(&self, diagnostic: Diagnostic) {
        warn!(operation = diagnostic.operation, "{}", diagnostic.message);
    }
}

/// Discards every diagnostic.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn warn(&self, _diagnostic: Diagnostic) {}
}

/// Keeps diagnostics in memory so they can be inspected later.
///
/// Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    entries: Arc<Mutex<Vec<Diagnostic>>>,
}

impl MemorySink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of everything recorded so far.
    pub fn entries(&self) -> Vec<Diagnostic> {
        self.entries.lock().clone()
    }

    /// Returns the diagnostics reported by one operation.
    pub fn for_operation(&self, operation: &str) -> Vec<Diagnostic> {
        self.entries
            .lock()
            .iter()
            .filter(|d| d.operation == operation)
            .cloned()
            .collect()
    }

    /// Returns the number of recorded diagnostics.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Returns true if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Drops all recorded diagnostics.
    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

impl DiagnosticSink for MemorySink {
    fn warn(&self, diagnostic: Diagnostic) {
        self.entries.lock().push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_records_in_order() {
        let sink = MemorySink::new();
        sink.warn(Diagnostic::new("submodule", "sync failed"));
        sink.warn(Diagnostic::new("reset", "exit code 128"));

        let entries = sink.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].operation, "submodule");
        assert_eq!(entries[1].message, "exit code 128");
        assert_eq!(sink.for_operation("reset").len(), 1);
    }

    #[test]
    fn test_memory_sink_clones_share_buffer() {
        let sink = MemorySink::new();
        let shared: Arc<dyn DiagnosticSink> = Arc::new(sink.clone());

        shared.warn(Diagnostic::new("tags", "git not found"));

        assert_eq!(sink.len(), 1);
        sink.clear();
        assert!(sink.is_empty());
    }

    #[test]
    fn test_diagnostic_display() {
        let diagnostic = Diagnostic::new("reset", "branch missing");
        assert_eq!(diagnostic.to_string(), "[reset] branch missing");
    }

    #[test]
    fn test_other_sinks_accept_diagnostics() {
        TracingSink.warn(Diagnostic::new("reset", "logged"));
        NullSink.warn(Diagnostic::new("reset", "dropped"));
    }
}
