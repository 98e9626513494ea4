//! Change kinds and change events

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of document mutation that triggered an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChangeKind {
    /// A document was created
    Create,
    /// An existing document was updated
    Update,
    /// A document was deleted
    Delete,
}

impl ChangeKind {
    /// All change kinds, in the order triggers are conventionally registered
    pub const ALL: [ChangeKind; 3] = [Self::Create, Self::Update, Self::Delete];

    /// Canonical wire form ("CREATE" / "UPDATE" / "DELETE")
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "CREATE",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChangeKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CREATE" => Ok(Self::Create),
            "UPDATE" => Ok(Self::Update),
            "DELETE" => Ok(Self::Delete),
            other => Err(CoreError::InvalidChangeKind(other.to_string())),
        }
    }
}

/// A single document lifecycle event as seen by this module
///
/// Ephemeral: constructed per triggering change by the event source and
/// discarded once the derived notification has been dispatched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEvent {
    /// What happened to the document
    pub change_kind: ChangeKind,
    /// Collection the document belongs to (e.g. "items")
    pub collection_name: String,
    /// Identifier of the affected document
    pub document_id: String,
}

impl ChangeEvent {
    /// Create a new change event
    pub fn new(
        change_kind: ChangeKind,
        collection_name: impl Into<String>,
        document_id: impl Into<String>,
    ) -> Self {
        Self {
            change_kind,
            collection_name: collection_name.into(),
            document_id: document_id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_kind_roundtrip() {
        for kind in ChangeKind::ALL {
            let parsed: ChangeKind = kind.as_str().parse().unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn test_change_kind_serde_wire_form() {
        let json = serde_json::to_string(&ChangeKind::Create).unwrap();
        assert_eq!(json, "\"CREATE\"");

        let parsed: ChangeKind = serde_json::from_str("\"DELETE\"").unwrap();
        assert_eq!(parsed, ChangeKind::Delete);
    }

    #[test]
    fn test_change_kind_rejects_unknown() {
        let err = "UPSERT".parse::<ChangeKind>().unwrap_err();
        assert!(err.to_string().contains("UPSERT"));
    }

    #[test]
    fn test_change_event_new() {
        let event = ChangeEvent::new(ChangeKind::Update, "items", "abc123");
        assert_eq!(event.collection_name, "items");
        assert_eq!(event.document_id, "abc123");
        assert_eq!(event.change_kind, ChangeKind::Update);
    }
}
