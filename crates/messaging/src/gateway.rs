//! The messaging gateway seam
//!
//! Adapters hold the gateway as `Arc<dyn MessagingGateway>` so that the
//! production client and the test fake are interchangeable. The trait is
//! intentionally a single operation: this module dispatches messages, it
//! does not manage topics, devices, or delivery state.

use crate::error::MessagingResult;
use async_trait::async_trait;
use itemcast_core::NotificationPayload;
use std::fmt;

/// Identifier the gateway assigns to an accepted message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageId(pub String);

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A push-messaging gateway that fans a payload out to topic subscribers
///
/// Implementations must be `Send + Sync`: adapter invocations for
/// different documents may run concurrently and share one gateway handle.
#[async_trait]
pub trait MessagingGateway: Send + Sync {
    /// Dispatch one payload; exactly one outbound call, no retries
    ///
    /// A failed dispatch propagates to the caller unchanged. Delivery to
    /// individual subscribers is the gateway's responsibility once the
    /// message is accepted.
    async fn send(&self, payload: &NotificationPayload) -> MessagingResult<MessageId>;
}
