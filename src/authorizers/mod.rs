//! Authorizers-file patching for cluster node identities

pub mod identity;
pub mod patcher;

pub use identity::{node_identities, NodeIdentity};
pub use patcher::{patch_document, patch_file, render_file};
