//! Calendar service error types
//!
//! Service-level failures only (configuration, startup). Store-level error
//! kinds live in [`crate::events::StoreError`] and are always recoverable.

use thiserror::Error;

/// Calendar service error type
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parse error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type alias for calendar service operations
pub type Result<T> = std::result::Result<T, Error>;
