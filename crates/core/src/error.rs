//! Error types for the core domain

use thiserror::Error;

/// Result type alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;

/// Core domain errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A change-kind string did not match any known kind
    #[error("Unknown change kind: {0}")]
    InvalidChangeKind(String),

    /// A path pattern could not be parsed
    #[error("Invalid path pattern: {0}")]
    InvalidPattern(String),

    /// A document path did not match the registered pattern
    #[error("Path does not match pattern {pattern}: {path}")]
    PathMismatch {
        /// The registered pattern
        pattern: String,
        /// The concrete document path
        path: String,
    },
}

impl CoreError {
    /// Create an invalid-pattern error
    pub fn invalid_pattern(msg: impl Into<String>) -> Self {
        Self::InvalidPattern(msg.into())
    }
}
