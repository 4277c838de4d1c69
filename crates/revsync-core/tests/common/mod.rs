#![allow(dead_code)]
use revsync_core::{BackendId, Revision};

/// Handle used by every fixture in this suite.
pub fn owner() -> BackendId {
    BackendId::new("/srv/checkouts/docs")
}

/// Returns a mixed list of tags and branches owned by [`owner`].
pub fn revisions() -> Vec<Revision> {
    vec![
        Revision::tag(owner(), "3b32886c8d3cb815df3793b3937b2e91d0fb00f1", "2.0.0"),
        Revision::tag(owner(), "c0288a17899b2c6818f74e3a90b77e2a1779f96a", "2.0.2"),
        Revision::branch(owner(), "origin/develop", "develop"),
        Revision::branch(owner(), "origin/release/2.0.0", "release-2.0.0"),
    ]
}
