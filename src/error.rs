//! Error types for the bootstrap helper

use thiserror::Error;

/// Result type for bootstrap operations
pub type Result<T> = std::result::Result<T, BootstrapError>;

/// Bootstrap error types
#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Element not found: {0}")]
    ElementNotFound(String),

    #[error("XML parse error: {0}")]
    XmlParse(#[from] xmltree::ParseError),

    #[error("XML write error: {0}")]
    XmlWrite(#[from] xmltree::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}
