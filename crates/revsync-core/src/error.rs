//! Error types for revsync.
//!
//! Only failures that leave the working directory unusable for the
//! requested operation are errors. Reset and submodule failures are
//! reported as diagnostics instead, and listing failures collapse to
//! empty collections.
//!
//! # Example
//!
//! ```
//! use revsync_core::{Result, RevsyncError};
//!
//! fn fetch(code: i32) -> Result<()> {
//!     if code != 0 {
//!         return Err(RevsyncError::import_failed(
//!             "https://github.com/org/docs.git",
//!             "fetch",
//!             code,
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(fetch(128).unwrap_err().is_import_failure());
//! ```

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for revsync operations.
#[derive(Debug, Error)]
pub enum RevsyncError {
    /// A clone or fetch exited with a non-zero status.
    #[error("Failed to get code from '{repo_url}' (git {operation}): {code}")]
    ImportFailed {
        /// Remote the operation was run against
        repo_url: String,
        /// Which primitive failed (`clone` or `fetch`)
        operation: &'static str,
        /// Exit code reported by the command
        code: i32,
    },

    /// The working directory could not be discarded or created.
    #[error("Working directory '{}' is unusable: {source}", path.display())]
    WorkingDirectory {
        /// Directory that was being removed or created
        path: PathBuf,
        /// Underlying filesystem error
        #[source]
        source: io::Error,
    },

    /// The command runner could not start a program.
    #[error("Failed to run '{program}': {source}")]
    CommandSpawn {
        /// Program that was being started
        program: String,
        /// Underlying spawn error
        #[source]
        source: io::Error,
    },

    /// A checkout target was rejected before reaching git.
    #[error("Invalid revision '{identifier}': {reason}")]
    InvalidRevision {
        /// The rejected identifier
        identifier: String,
        /// Why it was rejected
        reason: String,
    },
}

impl RevsyncError {
    /// Creates an ImportFailed error.
    pub fn import_failed(repo_url: impl Into<String>, operation: &'static str, code: i32) -> Self {
        Self::ImportFailed {
            repo_url: repo_url.into(),
            operation,
            code,
        }
    }

    /// Creates a WorkingDirectory error.
    pub fn working_directory(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::WorkingDirectory {
            path: path.into(),
            source,
        }
    }

    /// Creates a CommandSpawn error.
    pub fn command_spawn(program: impl Into<String>, source: io::Error) -> Self {
        Self::CommandSpawn {
            program: program.into(),
            source,
        }
    }

    /// Creates an InvalidRevision error.
    pub fn invalid_revision(identifier: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRevision {
            identifier: identifier.into(),
            reason: reason.into(),
        }
    }

    /// Returns true if a clone or fetch failed.
    pub fn is_import_failure(&self) -> bool {
        matches!(self, Self::ImportFailed { .. })
    }

    /// Returns true if the working directory could not be discarded or created.
    pub fn is_working_directory_error(&self) -> bool {
        matches!(self, Self::WorkingDirectory { .. })
    }

    /// Returns true if a checkout target was rejected.
    pub fn is_invalid_revision(&self) -> bool {
        matches!(self, Self::InvalidRevision { .. })
    }

    /// Returns the exit code carried by an import failure.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::ImportFailed { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// Type alias for Results with RevsyncError.
pub type Result<T> = std::result::Result<T, RevsyncError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_failed_display() {
        let error = RevsyncError::import_failed("https://example.com/repo.git", "clone", 128);
        let msg = error.to_string();

        assert_eq!(
            msg,
            "Failed to get code from 'https://example.com/repo.git' (git clone): 128"
        );
        assert!(error.is_import_failure());
        assert_eq!(error.exit_code(), Some(128));
    }

    #[test]
    fn test_working_directory_keeps_source() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let error = RevsyncError::working_directory("/srv/checkouts/docs", io_error);

        use std::error::Error;
        assert!(error.source().is_some());
        assert!(error.is_working_directory_error());
        assert!(error.to_string().contains("/srv/checkouts/docs"));
        assert_eq!(error.exit_code(), None);
    }

    #[test]
    fn test_invalid_revision() {
        let error = RevsyncError::invalid_revision("--upload-pack=evil", "cannot start with '-'");

        assert!(error.is_invalid_revision());
        assert!(error.to_string().contains("--upload-pack=evil"));
    }

    #[test]
    fn test_result_with_question_mark() {
        fn inner() -> Result<()> {
            Err(RevsyncError::invalid_revision("", "empty"))
        }

        fn outer() -> Result<String> {
            inner()?;
            Ok("synced".into())
        }

        assert!(matches!(outer(), Err(RevsyncError::InvalidRevision { .. })));
    }
}
