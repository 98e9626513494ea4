//! Incoming document events

use std::collections::HashMap;

/// A document lifecycle event as delivered by the trigger runtime
///
/// Carries the concrete document path and the parameters extracted by
/// matching it against the registered pattern. Ephemeral: lives for one
/// adapter invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentEvent {
    /// Concrete document path, e.g. "items/abc123"
    pub path: String,
    /// Parameters extracted from the path, e.g. {"itemId": "abc123"}
    pub params: HashMap<String, String>,
}

impl DocumentEvent {
    /// Create an event from a path and its extracted parameters
    #[must_use]
    pub fn new(path: impl Into<String>, params: HashMap<String, String>) -> Self {
        Self {
            path: path.into(),
            params,
        }
    }

    /// Look up a path parameter
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}
