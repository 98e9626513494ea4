//! Error types for trigger dispatch

use itemcast_core::CoreError;
use itemcast_messaging::MessagingError;
use thiserror::Error;

/// Result type alias for trigger operations
pub type TriggerResult<T> = Result<T, TriggerError>;

/// Trigger dispatch errors
#[derive(Error, Debug)]
pub enum TriggerError {
    /// The event did not carry the expected path parameter, or it was empty
    #[error("Missing or empty event parameter: {0}")]
    MissingParam(String),

    /// No registered trigger matched the document path
    #[error("No trigger registered for path: {0}")]
    UnmatchedPath(String),

    /// Pattern parsing or path matching failed
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The gateway rejected or failed the dispatch
    #[error(transparent)]
    Dispatch(#[from] MessagingError),
}
