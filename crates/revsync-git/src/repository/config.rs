//! Git backend configuration.

use std::path::PathBuf;

use serde::{Deserialize, Deserializer, Serialize};

/// Branch used when a repository has no configured default branch.
pub const FALLBACK_BRANCH: &str = "master";

/// Configuration for the Git backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitBackendConfig {
    /// The remote repository URL (HTTPS, SSH or local path).
    repo_url: String,

    /// Local directory holding the checkout, always absolute.
    #[serde(deserialize_with = "deserialize_absolute")]
    working_dir: PathBuf,

    /// Branch the repository treats as canonical, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    default_branch: Option<String>,

    /// Branch used when `default_branch` is not set.
    #[serde(default = "default_fallback_branch")]
    fallback_branch: String,

    /// Name or path of the git executable.
    #[serde(default = "default_git_program")]
    git_program: String,

    /// Whether git may prompt on the terminal (for credentials).
    #[serde(default)]
    terminal_prompt: bool,
}

fn default_fallback_branch() -> String {
    FALLBACK_BRANCH.to_string()
}

fn default_git_program() -> String {
    "git".to_string()
}

// Git runs with the working directory as cwd, so a relative path would be
// resolved twice.
fn deserialize_absolute<'de, D>(deserializer: D) -> Result<PathBuf, D::Error>
where
    D: Deserializer<'de>,
{
    let path = PathBuf::deserialize(deserializer)?;
    std::path::absolute(&path).map_err(serde::de::Error::custom)
}

impl GitBackendConfig {
    /// Creates a new builder for GitBackendConfig.
    pub fn builder() -> GitBackendConfigBuilder {
        GitBackendConfigBuilder::default()
    }

    /// Returns the remote repository URL.
    pub fn repo_url(&self) -> &str {
        &self.repo_url
    }

    /// Returns the local working directory.
    pub fn working_dir(&self) -> &PathBuf {
        &self.working_dir
    }

    /// Returns the configured default branch.
    pub fn default_branch(&self) -> Option<&str> {
        self.default_branch.as_deref()
    }

    /// Returns the fallback branch.
    pub fn fallback_branch(&self) -> &str {
        &self.fallback_branch
    }

    /// Returns the default branch, or the fallback branch if none is set.
    pub fn effective_branch(&self) -> &str {
        self.default_branch().unwrap_or(&self.fallback_branch)
    }

    /// Returns the git executable.
    pub fn git_program(&self) -> &str {
        &self.git_program
    }

    /// Returns whether git may prompt on the terminal.
    pub fn terminal_prompt(&self) -> bool {
        self.terminal_prompt
    }
}

/// Builder for GitBackendConfig.
#[derive(Debug, Default)]
pub struct GitBackendConfigBuilder {
    repo_url: Option<String>,
    working_dir: Option<PathBuf>,
    default_branch: Option<String>,
    fallback_branch: Option<String>,
    git_program: Option<String>,
    terminal_prompt: bool,
}

impl GitBackendConfigBuilder {
    /// Sets the remote repository URL.
    pub fn repo_url(mut self, url: impl Into<String>) -> Self {
        self.repo_url = Some(url.into());
        self
    }

    /// Sets the local working directory.
    pub fn working_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(path.into());
        self
    }

    /// Sets the default branch.
    pub fn default_branch(mut self, branch: impl Into<String>) -> Self {
        self.default_branch = Some(branch.into());
        self
    }

    /// Sets the default branch from an optional value.
    pub fn maybe_default_branch(mut self, branch: Option<impl Into<String>>) -> Self {
        self.default_branch = branch.map(Into::into);
        self
    }

    /// Sets the fallback branch.
    pub fn fallback_branch(mut self, branch: impl Into<String>) -> Self {
        self.fallback_branch = Some(branch.into());
        self
    }

    /// Sets the git executable.
    pub fn git_program(mut self, program: impl Into<String>) -> Self {
        self.git_program = Some(program.into());
        self
    }

    /// Sets whether git may prompt on the terminal.
    pub fn terminal_prompt(mut self, allow: bool) -> Self {
        self.terminal_prompt = allow;
        self
    }

    /// Builds the configuration.
    ///
    /// Empty branch names are treated as unset. A relative working directory
    /// is resolved against the current directory.
    ///
    /// # Errors
    ///
    /// Returns an error if required fields are missing or empty, or if the
    /// working directory cannot be made absolute.
    pub fn build(self) -> Result<GitBackendConfig, &'static str> {
        let repo_url = self
            .repo_url
            .filter(|u| !u.trim().is_empty())
            .ok_or("repo_url is required")?;
        let working_dir = self
            .working_dir
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or("working_dir is required")?;
        let working_dir =
            std::path::absolute(&working_dir).map_err(|_| "working_dir cannot be resolved")?;

        Ok(GitBackendConfig {
            repo_url,
            working_dir,
            default_branch: self.default_branch.filter(|b| !b.is_empty()),
            fallback_branch: self
                .fallback_branch
                .filter(|b| !b.is_empty())
                .unwrap_or_else(default_fallback_branch),
            git_program: self.git_program.unwrap_or_else(default_git_program),
            terminal_prompt: self.terminal_prompt,
        })
    }
}
