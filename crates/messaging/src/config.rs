//! Configuration for the messaging gateway client
//!
//! Supports environment-based configuration with sensible defaults.

use crate::error::{MessagingError, MessagingResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Default FCM API base URL
const DEFAULT_FCM_URL: &str = "https://fcm.googleapis.com";

/// Messaging client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagingConfig {
    /// Cloud project the messages are sent under
    pub project_id: String,
    /// Base URL of the gateway API
    pub base_url: String,
    /// OAuth bearer token for the service account
    ///
    /// Token acquisition/refresh is the deployment environment's concern;
    /// this client only attaches whatever it is given.
    pub access_token: Option<String>,
    /// Request timeout
    #[serde(with = "duration_secs")]
    pub timeout: Duration,
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

impl Default for MessagingConfig {
    fn default() -> Self {
        Self {
            project_id: String::new(),
            base_url: DEFAULT_FCM_URL.to_string(),
            access_token: None,
            timeout: Duration::from_secs(30),
        }
    }
}

impl MessagingConfig {
    /// Create configuration from environment variables
    ///
    /// Reads the following environment variables:
    /// - `FCM_PROJECT_ID`: Cloud project id (required)
    /// - `FCM_API_URL`: Gateway base URL (optional, defaults to the public API)
    /// - `FCM_ACCESS_TOKEN`: OAuth bearer token
    /// - `FCM_TIMEOUT_SECS`: Request timeout in seconds
    pub fn from_env() -> MessagingResult<Self> {
        let project_id =
            env::var("FCM_PROJECT_ID").map_err(|_| MessagingError::missing_env("FCM_PROJECT_ID"))?;

        let base_url = env::var("FCM_API_URL").unwrap_or_else(|_| DEFAULT_FCM_URL.to_string());
        let access_token = env::var("FCM_ACCESS_TOKEN").ok();

        let timeout = env::var("FCM_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(30));

        Ok(Self {
            project_id,
            base_url,
            access_token,
            timeout,
        })
    }

    /// Create a configuration pointed at a local emulator
    #[must_use]
    pub fn emulator(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            base_url: "http://localhost:9099".to_string(),
            access_token: None,
            timeout: Duration::from_secs(5),
        }
    }

    /// Builder-style method to set the project id
    #[must_use]
    pub fn with_project_id(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = project_id.into();
        self
    }

    /// Builder-style method to set the base URL
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Builder-style method to set the access token
    #[must_use]
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Builder-style method to set the timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The fully-qualified send endpoint for this project
    #[must_use]
    pub fn send_url(&self) -> String {
        format!(
            "{}/v1/projects/{}/messages:send",
            self.base_url.trim_end_matches('/'),
            self.project_id
        )
    }

    /// Validate the configuration
    pub fn validate(&self) -> MessagingResult<()> {
        if self.project_id.is_empty() {
            return Err(MessagingError::config("project_id cannot be empty"));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(MessagingError::config(
                "base_url must start with http:// or https://",
            ));
        }

        if self.timeout.is_zero() {
            return Err(MessagingError::config("timeout cannot be zero"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MessagingConfig::default();
        assert_eq!(config.base_url, "https://fcm.googleapis.com");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.access_token.is_none());
    }

    #[test]
    fn test_emulator_config() {
        let config = MessagingConfig::emulator("demo-project");
        assert!(config.base_url.contains("localhost"));
        assert_eq!(config.project_id, "demo-project");
    }

    #[test]
    fn test_builder_pattern() {
        let config = MessagingConfig::default()
            .with_project_id("items-demo")
            .with_base_url("https://fcm.example.test")
            .with_timeout(Duration::from_secs(60));

        assert_eq!(config.project_id, "items-demo");
        assert_eq!(config.base_url, "https://fcm.example.test");
        assert_eq!(config.timeout, Duration::from_secs(60));
    }

    #[test]
    fn test_send_url() {
        let config = MessagingConfig::default()
            .with_project_id("items-demo")
            .with_base_url("https://fcm.googleapis.com/");

        assert_eq!(
            config.send_url(),
            "https://fcm.googleapis.com/v1/projects/items-demo/messages:send"
        );
    }

    #[test]
    fn test_validation() {
        let valid = MessagingConfig::default().with_project_id("items-demo");
        assert!(valid.validate().is_ok());

        let no_project = MessagingConfig::default();
        assert!(no_project.validate().is_err());

        let bad_url = MessagingConfig::default()
            .with_project_id("items-demo")
            .with_base_url("ftp://nope");
        assert!(bad_url.validate().is_err());

        let zero_timeout = MessagingConfig::default()
            .with_project_id("items-demo")
            .with_timeout(Duration::ZERO);
        assert!(zero_timeout.validate().is_err());
    }
}
