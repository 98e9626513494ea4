//! Trigger registration and dispatch

use crate::adapter::ChangeAdapter;
use crate::error::{TriggerError, TriggerResult};
use crate::event::DocumentEvent;
use itemcast_core::{ChangeKind, PathPattern};
use itemcast_messaging::{MessageId, MessagingGateway};
use std::sync::Arc;

/// One registered trigger: a path pattern bound to an adapter
struct Registration {
    pattern: PathPattern,
    adapter: ChangeAdapter,
}

/// Routes incoming document changes to their registered adapters
///
/// Stands in for the hosting platform's trigger table: the runtime tells
/// us which kind of change happened on which document path, and the
/// registry finds the matching adapter and runs it.
#[derive(Default)]
pub struct TriggerRegistry {
    registrations: Vec<Registration>,
}

impl TriggerRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an adapter for a path pattern
    pub fn register(&mut self, pattern: PathPattern, adapter: ChangeAdapter) {
        self.registrations.push(Registration { pattern, adapter });
    }

    /// Register create/update/delete adapters for one collection pattern
    ///
    /// Mirrors the conventional trio of document lifecycle triggers: one
    /// registration per change kind, all dispatching through the same
    /// gateway handle.
    pub fn register_document_triggers(
        &mut self,
        pattern: &PathPattern,
        collection_name: &str,
        collection_label: &str,
        param_name: &str,
        gateway: Arc<dyn MessagingGateway>,
    ) {
        for kind in ChangeKind::ALL {
            self.register(
                pattern.clone(),
                ChangeAdapter::new(
                    kind,
                    collection_name,
                    collection_label,
                    param_name,
                    gateway.clone(),
                ),
            );
        }
    }

    /// Number of registered triggers
    #[must_use]
    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    /// Whether the registry has no registrations
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// Dispatch one document change
    ///
    /// Finds the first registration whose kind and pattern match, builds
    /// the event from the extracted path parameters, and runs the
    /// adapter. An unmatched path is an error: a change we were invoked
    /// for but have no trigger for indicates a misconfigured deployment.
    pub async fn dispatch(&self, kind: ChangeKind, path: &str) -> TriggerResult<MessageId> {
        for registration in &self.registrations {
            if registration.adapter.kind() != kind {
                continue;
            }
            let Ok(params) = registration.pattern.match_path(path) else {
                continue;
            };

            let event = DocumentEvent::new(path, params);
            return registration.adapter.handle(&event).await;
        }

        Err(TriggerError::UnmatchedPath(path.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itemcast_messaging::testing::MockGateway;

    fn registry_with(gateway: Arc<MockGateway>) -> TriggerRegistry {
        let pattern = PathPattern::parse("items/{itemId}").unwrap();
        let mut registry = TriggerRegistry::new();
        registry.register_document_triggers(&pattern, "items", "Item", "itemId", gateway);
        registry
    }

    #[test]
    fn test_registers_all_three_kinds() {
        let registry = registry_with(Arc::new(MockGateway::new()));
        assert_eq!(registry.len(), 3);
    }

    #[tokio::test]
    async fn test_dispatch_routes_by_kind() {
        let gateway = Arc::new(MockGateway::new());
        let registry = registry_with(gateway.clone());

        registry
            .dispatch(ChangeKind::Update, "items/abc123")
            .await
            .unwrap();

        let sent = gateway.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].data.change_type, ChangeKind::Update);
    }

    #[tokio::test]
    async fn test_unmatched_path_is_an_error() {
        let registry = registry_with(Arc::new(MockGateway::new()));

        let err = registry
            .dispatch(ChangeKind::Create, "orders/xyz")
            .await
            .unwrap_err();
        assert!(matches!(err, TriggerError::UnmatchedPath(_)));
    }
}
