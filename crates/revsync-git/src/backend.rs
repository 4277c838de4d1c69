//! Git backend implementation.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use revsync_core::{
    BackendId, CommandOutput, CommandRunner, Diagnostic, DiagnosticSink, ProcessRunner, Result,
    Revision, RevsyncError, TracingSink, VcsBackend,
};
use tracing::{debug, info};

use crate::env;
use crate::reader;
use crate::repository::{
    GitBackendConfig, WorkdirState, ensure_consistent, remote_branch, validate_identifier,
};

/// A Git backend bound to one working directory and one remote.
///
/// Every operation is a sequence of blocking `git` invocations through the
/// configured [`CommandRunner`]. Callers must not run two operations against
/// the same working directory at once.
pub struct GitBackend {
    /// The backend configuration.
    config: GitBackendConfig,
    /// Handle stamped on produced revisions.
    id: BackendId,
    /// Runs git.
    runner: Arc<dyn CommandRunner>,
    /// Receives non-fatal problems.
    sink: Arc<dyn DiagnosticSink>,
}

impl GitBackend {
    /// Creates a backend that runs git through `runner` and logs warnings
    /// with `tracing`.
    pub fn new(config: GitBackendConfig, runner: Arc<dyn CommandRunner>) -> Self {
        let id = BackendId::new(config.working_dir().clone());
        Self {
            config,
            id,
            runner,
            sink: Arc::new(TracingSink),
        }
    }

    /// Creates a backend that spawns the system git.
    pub fn with_process_runner(config: GitBackendConfig) -> Self {
        Self::new(config, Arc::new(ProcessRunner::new()))
    }

    /// Replaces the diagnostic sink.
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Returns the configuration.
    pub fn config(&self) -> &GitBackendConfig {
        &self.config
    }

    /// Returns the working directory.
    pub fn working_dir(&self) -> &Path {
        self.config.working_dir()
    }

    /// Returns the remote URL.
    pub fn repo_url(&self) -> &str {
        self.config.repo_url()
    }

    /// Runs git with `args` in the working directory.
    fn git(&self, args: &[&str]) -> Result<CommandOutput> {
        debug!("git {}", args.join(" "));
        self.runner.run(
            self.config.git_program(),
            args,
            self.working_dir(),
            &self.environment(),
        )
    }

    fn warn(&self, operation: &'static str, message: impl Into<String>) {
        self.sink.warn(Diagnostic::new(operation, message));
    }

    /// Discards a checkout bound to another remote, then creates the
    /// working directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `RevsyncError::WorkingDirectory` if the directory cannot be
    /// removed or created.
    pub fn prepare_working_dir(&self) -> Result<WorkdirState> {
        let state = ensure_consistent(
            self.runner.as_ref(),
            self.config.git_program(),
            self.working_dir(),
            self.repo_url(),
            &self.environment(),
        )?;

        if !self.working_dir().exists() {
            std::fs::create_dir_all(self.working_dir())
                .map_err(|e| RevsyncError::working_directory(self.working_dir(), e))?;
        }

        Ok(state)
    }

    /// Returns true if the working directory holds a usable repository.
    pub fn repo_exists(&self) -> Result<bool> {
        Ok(self.git(&["status"])?.success())
    }

    /// Fetches all remote refs, pruning the ones deleted upstream.
    ///
    /// # Errors
    ///
    /// Returns `RevsyncError::ImportFailed` if git exits non-zero.
    pub fn fetch(&self) -> Result<()> {
        info!("Fetching {} into {:?}", self.repo_url(), self.working_dir());
        let output = self.git(&["fetch", "--prune"])?;
        if !output.success() {
            return Err(RevsyncError::import_failed(
                self.repo_url(),
                "fetch",
                output.code,
            ));
        }
        Ok(())
    }

    /// Clones the remote, submodules included, into the working directory.
    ///
    /// # Errors
    ///
    /// Returns `RevsyncError::ImportFailed` if git exits non-zero.
    pub fn clone_repo(&self) -> Result<()> {
        info!("Cloning {} into {:?}", self.repo_url(), self.working_dir());
        let output = self.git(&["clone", "--recursive", "--quiet", self.repo_url(), "."])?;
        if !output.success() {
            return Err(RevsyncError::import_failed(
                self.repo_url(),
                "clone",
                output.code,
            ));
        }
        Ok(())
    }

    /// Syncs submodule URLs and checks out the recorded submodule commits.
    ///
    /// Failures are reported to the diagnostic sink and otherwise ignored.
    pub fn sync_submodules(&self) {
        let steps: [&[&str]; 2] = [
            &["submodule", "sync"],
            &["submodule", "update", "--init", "--recursive"],
        ];

        for args in steps {
            match self.git(args) {
                Ok(output) if output.success() => {},
                Ok(output) => self.warn(
                    "submodule",
                    format!(
                        "Failed to update submodules of '{}' (git {}): {}",
                        self.repo_url(),
                        args.join(" "),
                        output.code
                    ),
                ),
                Err(e) => self.warn("submodule", e.to_string()),
            }
        }
    }

    /// Hard-resets to the tip of the default (or fallback) branch on the remote.
    ///
    /// A non-zero exit is reported to the diagnostic sink and returned as is.
    ///
    /// # Errors
    ///
    /// Returns an error only if git cannot be started.
    pub fn reset(&self) -> Result<CommandOutput> {
        let revision = remote_branch(self.config.effective_branch());
        let output = self.git(&["reset", "--hard", revision.as_str()])?;
        if !output.success() {
            self.warn(
                "reset",
                format!(
                    "Failed to get code from '{}' (git reset): {}",
                    self.repo_url(),
                    output.code
                ),
            );
        }
        Ok(output)
    }

    /// Runs a listing command, treating any failure as "nothing listed".
    fn list(&self, operation: &'static str, args: &[&str]) -> Option<String> {
        if !self.working_dir().exists() {
            debug!("No checkout at {:?}, nothing to list", self.working_dir());
            return None;
        }

        match self.git(args) {
            Ok(output) if output.success() => Some(output.stdout),
            Ok(output) => {
                debug!("git {} exited with {}", args.join(" "), output.code);
                None
            },
            Err(e) => {
                self.warn(operation, e.to_string());
                None
            },
        }
    }
}

impl VcsBackend for GitBackend {
    fn id(&self) -> &BackendId {
        &self.id
    }

    fn name(&self) -> &str {
        "git"
    }

    fn update(&self) -> Result<CommandOutput> {
        if let WorkdirState::Discarded { previous_url } = self.prepare_working_dir()? {
            self.warn(
                "workdir",
                format!(
                    "Discarded checkout at {:?} bound to {}, recloning from '{}'",
                    self.working_dir(),
                    previous_url.as_deref().unwrap_or("an unreadable origin"),
                    self.repo_url()
                ),
            );
        }

        if self.repo_exists()? {
            self.fetch()?;
        } else {
            self.clone_repo()?;
        }

        self.sync_submodules();
        self.reset()
    }

    fn checkout(&self, identifier: Option<&str>) -> Result<CommandOutput> {
        let target = identifier
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| self.config.effective_branch());
        validate_identifier(target)?;

        self.update()?;

        info!("Checking out {} in {:?}", target, self.working_dir());
        let output = self.git(&["reset", "--hard", target, "--"])?;
        if !output.success() {
            self.warn(
                "checkout",
                format!(
                    "Failed to check out '{}' from '{}' (git reset): {}",
                    target,
                    self.repo_url(),
                    output.code
                ),
            );
        }
        Ok(output)
    }

    fn tags(&self) -> Vec<Revision> {
        let Some(stdout) = self.list("tags", &["show-ref", "--tags"]) else {
            return Vec::new();
        };

        let listing = reader::read_tags(&self.id, &stdout);
        if !listing.rejected.is_empty() {
            self.warn(
                "tags",
                format!(
                    "Skipped {} malformed tag line(s): {:?}",
                    listing.rejected.len(),
                    listing.rejected
                ),
            );
        }
        listing.revisions
    }

    fn branches(&self) -> Vec<Revision> {
        match self.list("branches", &["branch", "-r"]) {
            Some(stdout) => reader::parse_branches(&self.id, &stdout),
            None => Vec::new(),
        }
    }

    fn environment(&self) -> HashMap<String, String> {
        env::compose(
            env::ambient(),
            self.working_dir(),
            self.config.terminal_prompt(),
        )
    }

    fn supports_tags(&self) -> bool {
        true
    }

    fn supports_branches(&self) -> bool {
        true
    }
}

impl std::fmt::Debug for GitBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitBackend")
            .field("repo_url", &self.config.repo_url())
            .field("working_dir", &self.config.working_dir())
            .field("default_branch", &self.config.default_branch())
            .finish()
    }
}
