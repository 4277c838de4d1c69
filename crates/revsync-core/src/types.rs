//! Common type definitions and newtypes for revsync.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Handle naming the backend instance that produced a value.
///
/// A backend is identified by the working directory it operates on, so the
/// handle is enough to find the backend again without owning it.
///
/// # Example
///
/// ```
/// use revsync_core::BackendId;
///
/// let id = BackendId::new("/srv/checkouts/docs");
/// assert_eq!(id.working_dir().to_str(), Some("/srv/checkouts/docs"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BackendId(PathBuf);

impl BackendId {
    /// Creates a handle for the backend bound to `working_dir`.
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self(working_dir.into())
    }

    /// Returns the working directory this handle refers to.
    pub fn working_dir(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for BackendId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

impl From<&Path> for BackendId {
    fn from(path: &Path) -> Self {
        Self::new(path)
    }
}

/// Raw result of an external command: exit code and captured streams.
///
/// A process terminated by a signal reports code `-1`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CommandOutput {
    /// Exit code of the process.
    pub code: i32,
    /// Captured standard output.
    pub stdout: String,
    /// Captured standard error.
    pub stderr: String,
}

impl CommandOutput {
    /// Creates a new output triple.
    pub fn new(code: i32, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            code,
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    /// Creates a successful output with the given stdout.
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self::new(0, stdout, "")
    }

    /// Creates a failed output with the given code and stderr.
    pub fn failed(code: i32, stderr: impl Into<String>) -> Self {
        Self::new(code, "", stderr)
    }

    /// Returns true if the command exited with status zero.
    pub fn success(&self) -> bool {
        self.code == 0
    }

    /// Splits the output into the `(code, stdout, stderr)` triple.
    pub fn into_parts(self) -> (i32, String, String) {
        (self.code, self.stdout, self.stderr)
    }
}
