//! Document change-event adapters for itemcast
//!
//! The hosting trigger runtime watches a collection path and invokes this
//! crate once per matching document change. Each invocation is a
//! stateless, straight-line transformation: extract the document id from
//! the event, format a notification, dispatch it to the push gateway,
//! log the success. Failures are not retried or compensated here; they
//! propagate to the hosting runtime's own error handling.
//!
//! One parametrized [`ChangeAdapter`] covers all three change kinds; the
//! [`TriggerRegistry`] binds (pattern, kind) pairs to adapters and routes
//! incoming document paths.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapter;
pub mod error;
pub mod event;
pub mod registry;

pub use adapter::ChangeAdapter;
pub use error::{TriggerError, TriggerResult};
pub use event::DocumentEvent;
pub use registry::TriggerRegistry;
