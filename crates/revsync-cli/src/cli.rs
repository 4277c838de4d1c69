//! Command-line arguments and command dispatch.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use revsync_core::{CommandOutput, Revision, VcsBackend};
use revsync_git::GitBackendConfig;

/// Keep a working directory in sync with a remote Git repository.
#[derive(Debug, Parser)]
#[command(name = "revsync", version)]
pub struct Cli {
    /// Remote repository URL.
    #[arg(long, env = "REVSYNC_REPO_URL")]
    pub repo_url: String,

    /// Local directory holding the checkout.
    #[arg(long, env = "REVSYNC_WORKING_DIR")]
    pub working_dir: PathBuf,

    /// Branch the repository treats as canonical.
    #[arg(long, env = "REVSYNC_DEFAULT_BRANCH")]
    pub default_branch: Option<String>,

    /// Branch used when no default branch is configured.
    #[arg(long, env = "REVSYNC_FALLBACK_BRANCH")]
    pub fallback_branch: Option<String>,

    /// Git executable.
    #[arg(long, env = "REVSYNC_GIT", default_value = "git")]
    pub git: String,

    /// Print machine-readable JSON.
    #[arg(long)]
    pub json: bool,

    #[command(subcommand)]
    pub action: Action,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Action {
    /// Bring the checkout to the tip of the default branch.
    Update,
    /// Update, then reset to a branch, tag or commit.
    Checkout {
        /// Revision to check out (defaults to the default branch).
        identifier: Option<String>,
    },
    /// List tags.
    Tags,
    /// List remote branches.
    Branches,
}

impl Cli {
    /// Builds the backend configuration from the parsed arguments.
    pub fn backend_config(&self) -> anyhow::Result<GitBackendConfig> {
        let mut builder = GitBackendConfig::builder()
            .repo_url(&self.repo_url)
            .working_dir(&self.working_dir)
            .maybe_default_branch(self.default_branch.clone())
            .git_program(&self.git);
        if let Some(branch) = &self.fallback_branch {
            builder = builder.fallback_branch(branch);
        }
        builder.build().map_err(anyhow::Error::msg)
    }
}

/// Runs `action` against `backend`, writing results to `out`.
///
/// Returns `false` when the final reset exited non-zero.
pub fn run(
    action: &Action,
    json: bool,
    backend: &dyn VcsBackend,
    out: &mut impl Write,
) -> anyhow::Result<bool> {
    match action {
        Action::Update => {
            let output = backend.update().context("update failed")?;
            print_output(&output, json, out)?;
            Ok(output.success())
        },
        Action::Checkout { identifier } => {
            let output = backend
                .checkout(identifier.as_deref())
                .context("checkout failed")?;
            print_output(&output, json, out)?;
            Ok(output.success())
        },
        Action::Tags => {
            print_revisions(&backend.tags(), json, out)?;
            Ok(true)
        },
        Action::Branches => {
            print_revisions(&backend.branches(), json, out)?;
            Ok(true)
        },
    }
}

fn print_output(output: &CommandOutput, json: bool, out: &mut impl Write) -> anyhow::Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, output)?;
        writeln!(out)?;
    } else {
        write!(out, "{}", output.stdout)?;
        if !output.success() {
            write!(out, "{}", output.stderr)?;
        }
    }
    Ok(())
}

fn print_revisions(revisions: &[Revision], json: bool, out: &mut impl Write) -> anyhow::Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, revisions)?;
        writeln!(out)?;
    } else {
        for revision in revisions {
            writeln!(out, "{}\t{}", revision.slug(), revision.identifier())?;
        }
    }
    Ok(())
}
