//! Parsing of git listing output into revisions.

use revsync_core::{BackendId, Revision};

use crate::repository::REMOTE;

/// Result of parsing `git show-ref --tags` output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagListing {
    /// Tags in the order git listed them.
    pub revisions: Vec<Revision>,
    /// Non-blank lines that did not have exactly two columns.
    pub rejected: Vec<String>,
}

/// Parses `git show-ref --tags` output, keeping track of malformed lines.
///
/// Each line is `<hash> <ref-path>`; the tag name is the last path segment:
///
/// ```text
/// 3b32886c8d3cb815df3793b3937b2e91d0fb00f1 refs/tags/2.0.0
/// c0288a17899b2c6818f74e3a90b77e2a1779f96a refs/tags/2.0.2
/// ```
pub fn read_tags(owner: &BackendId, data: &str) -> TagListing {
    let mut listing = TagListing::default();

    for line in data.lines() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        match fields.as_slice() {
            [] => continue,
            [commit, ref_path] => {
                let name = ref_path.rsplit('/').next().unwrap_or(*ref_path);
                listing
                    .revisions
                    .push(Revision::tag(owner.clone(), *commit, name));
            },
            _ => listing.rejected.push(line.trim().to_string()),
        }
    }

    listing
}

/// Parses `git show-ref --tags` output into tag revisions.
///
/// Malformed lines are dropped; see [`read_tags`] to inspect them.
pub fn parse_tags(owner: &BackendId, data: &str) -> Vec<Revision> {
    read_tags(owner, data).revisions
}

/// Parses `git branch -r` output into branch revisions.
///
/// ```text
///   origin/2.0.X
///   origin/HEAD -> origin/master
///   origin/release/2.0.0
/// ```
///
/// The identifier is the branch as listed (`origin/release/2.0.0`); the slug
/// drops the remote prefix and replaces slashes (`release-2.0.0`). The
/// `origin/HEAD` alias is skipped.
pub fn parse_branches(owner: &BackendId, data: &str) -> Vec<Revision> {
    let prefix = format!("{}/", REMOTE);
    let mut branches = Vec::new();

    for line in data.lines() {
        let Some(branch) = line.split_whitespace().find(|field| *field != "*") else {
            continue;
        };

        let slug = match branch.strip_prefix(&prefix) {
            Some("HEAD") => continue,
            Some(name) => name.replace('/', "-"),
            None => branch.replace('/', "-"),
        };
        branches.push(Revision::branch(owner.clone(), branch, slug));
    }

    branches
}
