//! revsync Core - Domain types and traits
//!
//! This crate provides the foundational types shared by every revsync
//! backend: the revision model, the command runner seam, diagnostic sinks
//! and the [`VcsBackend`] capability trait.

pub mod backend;
pub mod diagnostics;
pub mod error;
pub mod revision;
pub mod runner;
pub mod types;

pub use backend::VcsBackend;
pub use diagnostics::{Diagnostic, DiagnosticSink, MemorySink, NullSink, TracingSink};
pub use error::{Result, RevsyncError};
pub use revision::{Revision, RevisionKind};
pub use runner::{CommandRunner, ProcessRunner};
pub use types::{BackendId, CommandOutput};

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_defined() {
        assert!(!version().is_empty());
    }

    #[test]
    fn version_is_semver() {
        let v = version();
        assert_eq!(v.split('.').count(), 3, "Version should be semver");
    }
}
