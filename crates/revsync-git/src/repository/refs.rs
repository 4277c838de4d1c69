//! Git reference names used by the sync engine.

use revsync_core::{Result, RevsyncError};

/// Name of the remote every checkout is cloned from.
pub const REMOTE: &str = "origin";

/// Returns the remote-tracking name of `branch` (`origin/<branch>`).
pub fn remote_branch(branch: &str) -> String {
    format!("{}/{}", REMOTE, branch)
}

/// Validates a revision before it is handed to git as an argument.
///
/// Rejects:
/// - Strings starting with `-` (would be read as an option)
/// - Strings containing null bytes or control characters
///
/// Anything else is left for git to resolve.
pub fn validate_identifier(identifier: &str) -> Result<()> {
    if identifier.starts_with('-') {
        return Err(RevsyncError::invalid_revision(
            identifier,
            "cannot start with '-'",
        ));
    }
    if identifier.chars().any(|c| c.is_control()) {
        return Err(RevsyncError::invalid_revision(
            identifier,
            "cannot contain null or control characters",
        ));
    }
    Ok(())
}
