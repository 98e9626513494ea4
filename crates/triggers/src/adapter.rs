//! The parametrized change-event adapter
//!
//! One adapter type covers create, update, and delete: the change kind is
//! configuration, not code. Each `handle` call is an independent unit of
//! work with a single suspension point (the gateway send).

use crate::error::{TriggerError, TriggerResult};
use crate::event::DocumentEvent;
use itemcast_core::{ChangeEvent, ChangeKind, NotificationPayload};
use itemcast_messaging::{MessageId, MessagingGateway};
use std::sync::Arc;
use tracing::info;

/// Forwards one kind of document change to the push gateway
pub struct ChangeAdapter {
    kind: ChangeKind,
    collection_name: String,
    collection_label: String,
    param_name: String,
    gateway: Arc<dyn MessagingGateway>,
}

impl ChangeAdapter {
    /// Create an adapter for one change kind on one collection
    ///
    /// `collection_name` goes into the message metadata ("items");
    /// `collection_label` is the display form used in the body ("Item");
    /// `param_name` names the path parameter carrying the document id
    /// ("itemId"). The gateway handle is injected so tests can substitute
    /// a fake.
    pub fn new(
        kind: ChangeKind,
        collection_name: impl Into<String>,
        collection_label: impl Into<String>,
        param_name: impl Into<String>,
        gateway: Arc<dyn MessagingGateway>,
    ) -> Self {
        Self {
            kind,
            collection_name: collection_name.into(),
            collection_label: collection_label.into(),
            param_name: param_name.into(),
            gateway,
        }
    }

    /// The change kind this adapter is registered for
    #[must_use]
    pub fn kind(&self) -> ChangeKind {
        self.kind
    }

    /// Handle one document event
    ///
    /// Extracts the document id, formats the notification, performs
    /// exactly one gateway send, and logs the success. A missing or empty
    /// id fails fast before any outbound call; a gateway failure
    /// propagates unchanged and produces no success log.
    pub async fn handle(&self, event: &DocumentEvent) -> TriggerResult<MessageId> {
        let doc_id = event
            .param(&self.param_name)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| TriggerError::MissingParam(self.param_name.clone()))?;

        let change = ChangeEvent::new(self.kind, self.collection_name.clone(), doc_id);
        let payload = NotificationPayload::for_change(&change, &self.collection_label);

        let message_id = self.gateway.send(&payload).await?;

        info!(
            change_kind = %self.kind,
            doc_id = %doc_id,
            message_id = %message_id,
            "Sent change notification"
        );

        Ok(message_id)
    }
}
