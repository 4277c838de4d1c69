//! Git repository management.
//!
//! This module holds the backend configuration, reference helpers and the
//! working-directory state manager.

mod config;
mod refs;
mod workdir;

pub use config::{FALLBACK_BRANCH, GitBackendConfig, GitBackendConfigBuilder};
pub use refs::{REMOTE, remote_branch, validate_identifier};
pub use workdir::{WorkdirState, configured_origin, ensure_consistent, git_config_path};
