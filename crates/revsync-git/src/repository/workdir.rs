//! Working-directory state management.
//!
//! A working directory is bound to exactly one remote. When a caller asks
//! for a different remote, the old checkout is removed before anything is
//! cloned or fetched into it.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use revsync_core::{CommandRunner, Result, RevsyncError};
use tracing::{debug, info};

/// Outcome of [`ensure_consistent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkdirState {
    /// The directory does not exist yet.
    Absent,
    /// The directory is bound to the requested remote and was kept.
    Reused,
    /// The directory was bound elsewhere (or unreadable) and was removed.
    Discarded {
        /// Origin URL found in the old checkout, if any.
        previous_url: Option<String>,
    },
}

/// Returns the path of the git config file inside a working directory.
pub fn git_config_path(working_dir: &Path) -> PathBuf {
    working_dir.join(".git").join("config")
}

/// Reads `remote.origin.url` from the checkout in `working_dir`.
///
/// Returns `None` when the value is missing or unreadable.
///
/// # Errors
///
/// Returns an error only if the runner cannot start git.
pub fn configured_origin(
    runner: &dyn CommandRunner,
    git_program: &str,
    working_dir: &Path,
    env: &HashMap<String, String>,
) -> Result<Option<String>> {
    let config_path = git_config_path(working_dir);
    let config_path = config_path.to_string_lossy();
    let output = runner.run(
        git_program,
        &["config", "-f", &config_path, "--get", "remote.origin.url"],
        working_dir,
        env,
    )?;

    let url = output.stdout.trim();
    if !output.success() || url.is_empty() {
        return Ok(None);
    }
    Ok(Some(url.to_string()))
}

/// Makes sure `working_dir` is either absent or bound to `desired_url`.
///
/// An existing directory whose origin differs from `desired_url`, or whose
/// origin cannot be read, is removed recursively.
///
/// # Errors
///
/// - `RevsyncError::WorkingDirectory` if the stale directory cannot be removed
/// - `RevsyncError::CommandSpawn` if git cannot be started
pub fn ensure_consistent(
    runner: &dyn CommandRunner,
    git_program: &str,
    working_dir: &Path,
    desired_url: &str,
    env: &HashMap<String, String>,
) -> Result<WorkdirState> {
    if !working_dir.exists() {
        debug!("Working directory {:?} does not exist yet", working_dir);
        return Ok(WorkdirState::Absent);
    }

    let previous_url = configured_origin(runner, git_program, working_dir, env)?;
    if previous_url.as_deref() == Some(desired_url) {
        debug!("Working directory {:?} already tracks {}", working_dir, desired_url);
        return Ok(WorkdirState::Reused);
    }

    info!(
        "Removing {:?}: origin {:?} does not match {}",
        working_dir, previous_url, desired_url
    );
    std::fs::remove_dir_all(working_dir)
        .map_err(|e| RevsyncError::working_directory(working_dir, e))?;

    Ok(WorkdirState::Discarded { previous_url })
}

#[cfg(test)]
mod tests {
    use super::*;
    use revsync_core::CommandOutput;

    /// Answers every command with the same output.
    struct FixedRunner(CommandOutput);

    impl CommandRunner for FixedRunner {
        fn run(
            &self,
            _program: &str,
            _args: &[&str],
            _cwd: &Path,
            _env: &HashMap<String, String>,
        ) -> Result<CommandOutput> {
            Ok(self.0.clone())
        }
    }

    const URL: &str = "https://github.com/org/docs.git";

    fn checkout_with_marker() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("marker.txt"), "old").unwrap();
        dir
    }

    #[test]
    fn test_absent_directory_is_left_alone() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        let runner = FixedRunner(CommandOutput::ok(URL));

        let state = ensure_consistent(&runner, "git", &missing, URL, &HashMap::new()).unwrap();

        assert_eq!(state, WorkdirState::Absent);
        assert!(!missing.exists());
    }

    #[test]
    fn test_matching_origin_is_reused() {
        let dir = checkout_with_marker();
        let runner = FixedRunner(CommandOutput::ok(format!("{}\n", URL)));

        let state = ensure_consistent(&runner, "git", dir.path(), URL, &HashMap::new()).unwrap();

        assert_eq!(state, WorkdirState::Reused);
        assert!(dir.path().join("marker.txt").exists());
    }

    #[test]
    fn test_different_origin_is_discarded() {
        let dir = checkout_with_marker();
        let runner = FixedRunner(CommandOutput::ok("https://github.com/org/old.git\n"));

        let state = ensure_consistent(&runner, "git", dir.path(), URL, &HashMap::new()).unwrap();

        assert_eq!(
            state,
            WorkdirState::Discarded {
                previous_url: Some("https://github.com/org/old.git".to_string())
            }
        );
        assert!(!dir.path().exists());
    }

    #[test]
    fn test_unreadable_origin_is_discarded() {
        let dir = checkout_with_marker();
        let runner = FixedRunner(CommandOutput::failed(1, ""));

        let state = ensure_consistent(&runner, "git", dir.path(), URL, &HashMap::new()).unwrap();

        assert_eq!(state, WorkdirState::Discarded { previous_url: None });
        assert!(!dir.path().exists());
    }

    #[test]
    fn test_removal_failure_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let not_a_dir = dir.path().join("checkout");
        std::fs::write(&not_a_dir, "plain file").unwrap();
        let runner = FixedRunner(CommandOutput::failed(1, ""));

        let err = ensure_consistent(&runner, "git", &not_a_dir, URL, &HashMap::new()).unwrap_err();

        assert!(err.is_working_directory_error());
        assert!(not_a_dir.exists());
    }

    #[test]
    fn test_config_path() {
        assert_eq!(
            git_config_path(Path::new("/srv/docs")),
            PathBuf::from("/srv/docs/.git/config")
        );
    }
}
