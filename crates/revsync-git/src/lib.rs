//! # revsync Git Backend
//!
//! Keeps a local working directory aligned with a remote Git repository and
//! reports its tags and branches as normalized revisions.
//!
//! ## Features
//!
//! - Git operations via the system `git` CLI, behind a swappable command runner
//! - Stale checkouts are discarded when the remote URL changes
//! - Clone-or-fetch, submodule sync and hard reset to the default branch
//! - Checkout of arbitrary branches, tags and commits
//! - Pure parsers for tag and remote-branch listings
//!
//! ## Example
//!
//! ```ignore
//! use revsync_core::VcsBackend;
//! use revsync_git::{GitBackend, GitBackendConfig};
//!
//! let config = GitBackendConfig::builder()
//!     .repo_url("https://github.com/org/docs.git")
//!     .working_dir("/var/lib/revsync/docs")
//!     .default_branch("main")
//!     .build()?;
//!
//! let backend = GitBackend::with_process_runner(config);
//! backend.checkout(Some("v2.0.0"))?;
//!
//! for tag in backend.tags() {
//!     println!("{} -> {}", tag.slug(), tag.identifier());
//! }
//! ```

pub mod backend;
pub mod env;
pub mod reader;
pub mod repository;

// Re-exports
pub use backend::GitBackend;
pub use reader::{parse_branches, parse_tags};
pub use repository::{GitBackendConfig, GitBackendConfigBuilder, WorkdirState};

// Re-export revsync_core for consumers
pub use revsync_core;
