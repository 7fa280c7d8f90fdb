//! nifi-bootstrap - deployment-time bootstrap helper for clustered NiFi
//!
//! Patches a NiFi `authorizers.xml` so every node in the cluster is
//! authorized to join: one `property` element per node is appended under the
//! `authorizer` element, carrying the node's identity. Runs once per task
//! launch inside the scheduler sandbox, configured entirely through the
//! environment.

pub mod authorizers;
pub mod config;
pub mod error;

pub use error::{BootstrapError, Result};
