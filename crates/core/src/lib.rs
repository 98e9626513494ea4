//! Domain types for the itemcast fan-out pipeline
//!
//! This crate holds everything that is pure data or pure computation:
//! change kinds, the notification formatter, the wire payload sent to the
//! push gateway, and document-path pattern matching. Nothing here performs
//! I/O; the messaging and trigger crates build on these types.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod change;
pub mod error;
pub mod notification;
pub mod path;

pub use change::{ChangeEvent, ChangeKind};
pub use error::{CoreError, CoreResult};
pub use notification::{build_notification, Notification, NotificationPayload};
pub use path::PathPattern;
