//! Version-control backend trait definition.

use std::collections::HashMap;

use crate::error::Result;
use crate::revision::Revision;
use crate::types::{BackendId, CommandOutput};

/// A version-control backend bound to one working directory and one remote.
///
/// Callers depend on this trait only, so the orchestration layer never needs
/// to know which VCS is behind a project.
///
/// # Implementors
///
/// - `GitBackend` (in `revsync-git`) - drives the system `git` executable
///
/// # Example
///
/// ```ignore
/// use revsync_core::VcsBackend;
///
/// fn sync_docs(backend: &dyn VcsBackend, version: Option<&str>) -> revsync_core::Result<()> {
///     let output = backend.checkout(version)?;
///     if !output.success() {
///         eprintln!("could not align to {:?}: {}", version, output.stderr);
///     }
///     for tag in backend.tags() {
///         println!("{}", tag.slug());
///     }
///     Ok(())
/// }
/// ```
pub trait VcsBackend: Send + Sync {
    /// Returns the handle stamped on every revision this backend produces.
    fn id(&self) -> &BackendId;

    /// Returns the name of this backend.
    ///
    /// This is used for logging and identification purposes.
    fn name(&self) -> &str;

    /// Brings the working directory to the tip of the default branch.
    ///
    /// Returns the raw output of the final alignment step. A non-zero code in
    /// that output is not an error.
    ///
    /// # Errors
    ///
    /// - `RevsyncError::ImportFailed` if retrieving code from the remote fails
    /// - `RevsyncError::WorkingDirectory` if a stale checkout cannot be removed
    fn update(&self) -> Result<CommandOutput>;

    /// Updates, then aligns the working directory to `identifier`.
    ///
    /// `None` selects the default branch.
    ///
    /// # Errors
    ///
    /// Everything [`update`](Self::update) can return, plus
    /// `RevsyncError::InvalidRevision` for identifiers the backend refuses.
    fn checkout(&self, identifier: Option<&str>) -> Result<CommandOutput>;

    /// Lists tags. Failures yield an empty collection.
    fn tags(&self) -> Vec<Revision>;

    /// Lists remote branches. Failures yield an empty collection.
    fn branches(&self) -> Vec<Revision>;

    /// Returns the environment every backend command runs with.
    fn environment(&self) -> HashMap<String, String>;

    /// Returns whether [`tags`](Self::tags) is meaningful for this backend.
    fn supports_tags(&self) -> bool {
        false
    }

    /// Returns whether [`branches`](Self::branches) is meaningful for this backend.
    fn supports_branches(&self) -> bool {
        false
    }
}
