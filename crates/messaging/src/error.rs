//! Error types for the messaging gateway client

use thiserror::Error;

/// Result type alias for messaging operations
pub type MessagingResult<T> = Result<T, MessagingError>;

/// Messaging gateway errors
#[derive(Error, Debug)]
pub enum MessagingError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Missing environment variable
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    /// Gateway returned an error response
    #[error("Gateway error ({status}): {message}")]
    GatewayResponse {
        /// HTTP status code
        status: u16,
        /// Error message from the gateway
        message: String,
    },

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl MessagingError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a missing env var error
    pub fn missing_env(var: impl Into<String>) -> Self {
        Self::MissingEnvVar(var.into())
    }

    /// Create a gateway response error
    pub fn gateway_response(status: u16, message: impl Into<String>) -> Self {
        Self::GatewayResponse {
            status,
            message: message.into(),
        }
    }

    /// Check if this is a client error (4xx)
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::GatewayResponse { status, .. } if (400..500).contains(status))
    }

    /// Check if this is a server error (5xx)
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::GatewayResponse { status, .. } if *status >= 500)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        let quota = MessagingError::gateway_response(429, "quota exceeded");
        assert!(quota.is_client_error());
        assert!(!quota.is_server_error());

        let unavailable = MessagingError::gateway_response(503, "unavailable");
        assert!(unavailable.is_server_error());
        assert!(!unavailable.is_client_error());

        let config = MessagingError::config("bad url");
        assert!(!config.is_client_error());
        assert!(!config.is_server_error());
    }

    #[test]
    fn test_error_display() {
        let err = MessagingError::gateway_response(401, "invalid token");
        assert_eq!(err.to_string(), "Gateway error (401): invalid token");

        let err = MessagingError::missing_env("FCM_PROJECT_ID");
        assert!(err.to_string().contains("FCM_PROJECT_ID"));
    }
}
