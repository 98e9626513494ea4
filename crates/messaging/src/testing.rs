//! Testing utilities for gateway consumers
//!
//! Provides a mock gateway that records every dispatched payload and can
//! be switched into a failing mode to exercise error propagation.

use crate::error::{MessagingError, MessagingResult};
use crate::gateway::{MessageId, MessagingGateway};
use async_trait::async_trait;
use itemcast_core::NotificationPayload;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// In-memory gateway for tests
///
/// Successful sends are recorded in order; a configured failure is
/// returned instead of recording.
#[derive(Debug, Default)]
pub struct MockGateway {
    sent: Mutex<Vec<NotificationPayload>>,
    send_calls: AtomicU64,
    fail_with: Mutex<Option<(u16, String)>>,
}

impl MockGateway {
    /// Create a mock gateway that accepts every send
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock gateway that rejects every send with the given
    /// status/message, mimicking a gateway-side failure
    #[must_use]
    pub fn failing(status: u16, message: impl Into<String>) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            send_calls: AtomicU64::new(0),
            fail_with: Mutex::new(Some((status, message.into()))),
        }
    }

    /// Payloads accepted so far, in dispatch order
    #[must_use]
    pub fn sent(&self) -> Vec<NotificationPayload> {
        self.sent.lock().unwrap().clone()
    }

    /// Total send attempts, including rejected ones
    #[must_use]
    pub fn send_calls(&self) -> u64 {
        self.send_calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl MessagingGateway for MockGateway {
    async fn send(&self, payload: &NotificationPayload) -> MessagingResult<MessageId> {
        let seq = self.send_calls.fetch_add(1, Ordering::Relaxed);

        if let Some((status, message)) = self.fail_with.lock().unwrap().clone() {
            return Err(MessagingError::gateway_response(status, message));
        }

        self.sent.lock().unwrap().push(payload.clone());
        Ok(MessageId(format!("projects/mock/messages/{seq}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itemcast_core::{ChangeEvent, ChangeKind};

    fn sample_payload() -> NotificationPayload {
        let event = ChangeEvent::new(ChangeKind::Create, "items", "abc123");
        NotificationPayload::for_change(&event, "Item")
    }

    #[tokio::test]
    async fn test_mock_records_sends() {
        let gateway = MockGateway::new();
        let payload = sample_payload();

        let id = gateway.send(&payload).await.unwrap();
        assert_eq!(id.to_string(), "projects/mock/messages/0");
        assert_eq!(gateway.sent(), vec![payload]);
        assert_eq!(gateway.send_calls(), 1);
    }

    #[tokio::test]
    async fn test_mock_failure_mode() {
        let gateway = MockGateway::failing(503, "unavailable");

        let err = gateway.send(&sample_payload()).await.unwrap_err();
        assert!(err.is_server_error());
        assert!(gateway.sent().is_empty());
        assert_eq!(gateway.send_calls(), 1);
    }
}
