//! Normalized revisions reported by a backend.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::BackendId;

/// Kind of checkable point a revision names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevisionKind {
    /// A tag; the identifier is the commit hash it points at.
    Tag,
    /// A remote branch; the identifier is the qualified branch name.
    Branch,
}

impl fmt::Display for RevisionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tag => write!(f, "tag"),
            Self::Branch => write!(f, "branch"),
        }
    }
}

/// A named, checkable point in a repository's history.
///
/// The identifier was resolvable by the backend when the revision was
/// produced. The remote may move or delete it afterwards.
///
/// # Example
///
/// ```
/// use revsync_core::{BackendId, Revision, RevisionKind};
///
/// let owner = BackendId::new("/srv/checkouts/docs");
/// let rev = Revision::branch(owner.clone(), "origin/release/2.0.0", "release-2.0.0");
///
/// assert_eq!(rev.identifier(), "origin/release/2.0.0");
/// assert_eq!(rev.slug(), "release-2.0.0");
/// assert_eq!(rev.kind(), RevisionKind::Branch);
/// assert!(rev.belongs_to(&owner));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Revision {
    owner: BackendId,
    identifier: String,
    verbose_name: String,
    kind: RevisionKind,
}

impl Revision {
    /// Creates a revision of the given kind.
    pub fn new(
        owner: BackendId,
        kind: RevisionKind,
        identifier: impl Into<String>,
        verbose_name: impl Into<String>,
    ) -> Self {
        Self {
            owner,
            identifier: identifier.into(),
            verbose_name: verbose_name.into(),
            kind,
        }
    }

    /// Creates a tag revision.
    pub fn tag(owner: BackendId, commit: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(owner, RevisionKind::Tag, commit, name)
    }

    /// Creates a branch revision.
    pub fn branch(owner: BackendId, branch: impl Into<String>, slug: impl Into<String>) -> Self {
        Self::new(owner, RevisionKind::Branch, branch, slug)
    }

    /// Returns the handle of the backend that produced this revision.
    pub fn owner(&self) -> &BackendId {
        &self.owner
    }

    /// Returns the string the VCS tool uses to address this revision.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Returns the human-presentable name.
    pub fn verbose_name(&self) -> &str {
        &self.verbose_name
    }

    /// Returns the filesystem/URL-safe name.
    ///
    /// Parsers already normalize the verbose name, so both are the same value.
    pub fn slug(&self) -> &str {
        &self.verbose_name
    }

    /// Returns whether this is a tag or a branch.
    pub fn kind(&self) -> RevisionKind {
        self.kind
    }

    /// Returns true if this revision was produced by the backend `id`.
    pub fn belongs_to(&self, id: &BackendId) -> bool {
        &self.owner == id
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.kind, self.verbose_name, self.identifier)
    }
}
