//! Reading git listings.
//!
//! Pure functions that turn the text printed by git's tag and remote-branch
//! listings into [`Revision`](revsync_core::Revision) values.

mod parser;

pub use parser::{TagListing, parse_branches, parse_tags, read_tags};
