//! Push-messaging gateway client for itemcast
//!
//! This crate is the seam between the pure domain types in
//! `itemcast-core` and the managed push-messaging service. It provides:
//!
//! - **`MessagingGateway`**: an object-safe async trait for dispatching a
//!   notification payload, so adapters can be handed a real client in
//!   production and a fake in tests
//! - **`FcmClient`**: a `reqwest`-based implementation against the FCM v1
//!   `messages:send` endpoint
//! - **Environment-based configuration** with builder methods and
//!   validation
//!
//! Retry, backoff, and delivery guarantees are deliberately absent: the
//! hosting trigger runtime and the gateway own those policies, and a failed
//! send propagates to the caller unchanged.
//!
//! # Example
//!
//! ```rust,no_run
//! use itemcast_core::{ChangeEvent, ChangeKind, NotificationPayload};
//! use itemcast_messaging::{FcmClient, MessagingConfig, MessagingGateway};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FcmClient::new(MessagingConfig::from_env()?)?;
//!
//!     let event = ChangeEvent::new(ChangeKind::Create, "items", "abc123");
//!     let payload = NotificationPayload::for_change(&event, "Item");
//!
//!     let message_id = client.send(&payload).await?;
//!     println!("dispatched as {message_id}");
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod fcm;
pub mod gateway;
pub mod testing;

pub use config::MessagingConfig;
pub use error::{MessagingError, MessagingResult};
pub use fcm::FcmClient;
pub use gateway::{MessageId, MessagingGateway};
