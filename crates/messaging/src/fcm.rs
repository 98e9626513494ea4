//! FCM v1 implementation of the messaging gateway

use crate::config::MessagingConfig;
use crate::error::{MessagingError, MessagingResult};
use crate::gateway::{MessageId, MessagingGateway};
use async_trait::async_trait;
use itemcast_core::NotificationPayload;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use uuid::Uuid;

/// Request correlation ID header
const X_REQUEST_ID: &str = "X-Request-ID";

/// Request body for the `messages:send` endpoint
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    message: &'a NotificationPayload,
}

/// Successful response from the `messages:send` endpoint
#[derive(Debug, Deserialize)]
struct SendResponse {
    /// Resource name of the accepted message,
    /// e.g. "projects/items-demo/messages/0:12345"
    name: String,
}

/// FCM HTTP client
///
/// Wraps `reqwest` and performs exactly one outbound call per dispatch.
/// Retry, backoff, and quota handling are left to the managed platform;
/// any gateway failure is returned to the caller as-is.
#[derive(Clone)]
pub struct FcmClient {
    inner: Client,
    config: MessagingConfig,
}

impl FcmClient {
    /// Create a new client with the given configuration
    pub fn new(config: MessagingConfig) -> MessagingResult<Self> {
        config.validate()?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        default_headers.insert(USER_AGENT, HeaderValue::from_static("itemcast-messaging/0.3"));

        let inner = Client::builder()
            .timeout(config.timeout)
            .default_headers(default_headers)
            .build()
            .map_err(MessagingError::Request)?;

        Ok(Self { inner, config })
    }

    /// Create a new client with configuration from the environment
    pub fn from_env() -> MessagingResult<Self> {
        Self::new(MessagingConfig::from_env()?)
    }

    /// Get the current configuration
    #[must_use]
    pub fn config(&self) -> &MessagingConfig {
        &self.config
    }
}

#[async_trait]
impl MessagingGateway for FcmClient {
    #[instrument(skip(self, payload), fields(topic = %payload.topic))]
    async fn send(&self, payload: &NotificationPayload) -> MessagingResult<MessageId> {
        let request_id = Uuid::new_v4().to_string();
        let url = self.config.send_url();

        let mut request = self
            .inner
            .post(&url)
            .header(X_REQUEST_ID, &request_id)
            .json(&SendRequest { message: payload });

        if let Some(ref token) = self.config.access_token {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(MessagingError::gateway_response(status.as_u16(), message));
        }

        let body: SendResponse = response.json().await?;
        debug!(
            request_id = %request_id,
            message_name = %body.name,
            "Gateway accepted message"
        );

        Ok(MessageId(body.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itemcast_core::{ChangeEvent, ChangeKind};

    #[test]
    fn test_client_creation() {
        let config = MessagingConfig::emulator("demo-project");
        assert!(FcmClient::new(config).is_ok());
    }

    #[test]
    fn test_client_rejects_invalid_config() {
        let config = MessagingConfig::default(); // no project id
        assert!(FcmClient::new(config).is_err());
    }

    #[test]
    fn test_send_request_wire_shape() {
        let event = ChangeEvent::new(ChangeKind::Create, "items", "abc123");
        let payload = NotificationPayload::for_change(&event, "Item");
        let json = serde_json::to_value(SendRequest { message: &payload }).unwrap();

        assert_eq!(json["message"]["topic"], "firestore_changes");
        assert_eq!(
            json["message"]["notification"]["title"],
            "Items Demo: Firestore CREATE"
        );
        assert_eq!(json["message"]["data"]["docId"], "abc123");
    }

    #[test]
    fn test_send_response_parses() {
        let body = r#"{"name": "projects/items-demo/messages/0:12345"}"#;
        let parsed: SendResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.name, "projects/items-demo/messages/0:12345");
    }
}
