//! Notification formatting and the push-gateway wire payload
//!
//! The formatter is a pure function: the same (kind, label, id) triple
//! always produces the same title/body pair. The payload struct serializes
//! to the exact message shape the gateway's `messages:send` endpoint
//! expects.

use crate::change::{ChangeEvent, ChangeKind};
use serde::{Deserialize, Serialize};

/// Display name of the application, used as the title prefix
pub const APP_NAME: &str = "Items Demo";

/// Broadcast topic all subscribing devices listen on
pub const CHANGES_TOPIC: &str = "firestore_changes";

/// A formatted display title/body pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Display title, e.g. "Items Demo: Firestore CREATE"
    pub title: String,
    /// Display body, e.g. "Item: abc123"
    pub body: String,
}

/// Format a display notification for a document change
///
/// Total over non-empty inputs and side-effect free; callers are expected
/// to pass a non-empty collection label and document id.
#[must_use]
pub fn build_notification(kind: ChangeKind, collection_label: &str, doc_id: &str) -> Notification {
    Notification {
        title: format!("{APP_NAME}: Firestore {kind}"),
        body: format!("{collection_label}: {doc_id}"),
    }
}

/// Structured metadata attached to every dispatched message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageData {
    /// Wire form of the change kind ("CREATE" / "UPDATE" / "DELETE")
    #[serde(rename = "changeType")]
    pub change_type: ChangeKind,
    /// Collection the document belongs to
    pub collection: String,
    /// Identifier of the affected document
    #[serde(rename = "docId")]
    pub doc_id: String,
}

/// The complete message handed to the push gateway
///
/// Derived deterministically from a [`ChangeEvent`]; immutable once built
/// and discarded after dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPayload {
    /// Broadcast topic to fan the message out on
    pub topic: String,
    /// Display title/body shown on subscribing devices
    pub notification: Notification,
    /// Structured metadata for client-side handling
    pub data: MessageData,
}

impl NotificationPayload {
    /// Build the payload for a change event, using `collection_label` for
    /// the display body (e.g. "Item") and the event's collection name in
    /// the metadata (e.g. "items")
    #[must_use]
    pub fn for_change(event: &ChangeEvent, collection_label: &str) -> Self {
        Self {
            topic: CHANGES_TOPIC.to_string(),
            notification: build_notification(event.change_kind, collection_label, &event.document_id),
            data: MessageData {
                change_type: event.change_kind,
                collection: event.collection_name.clone(),
                doc_id: event.document_id.clone(),
            },
        }
    }
}
