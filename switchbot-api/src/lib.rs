//! Type-safe client for the SwitchBot v1.1 cloud API
//!
//! This crate covers the webhook management surface of the cloud API:
//! registering a URL to receive device change reports, querying and
//! updating the registration, and removing it. Requests are signed with
//! the token and secret from the vendor app's developer options.
//!
//! # Managing a webhook subscription
//!
//! ```no_run
//! use switchbot_api::{SwitchBotClient, WebhookQuery, WebhookQueryResponse};
//!
//! fn main() -> switchbot_api::Result<()> {
//!     let client = SwitchBotClient::new("token", "secret");
//!     let webhook = client.webhook();
//!
//!     webhook.setup("https://example.com/hook", "ALL")?;
//!
//!     if let WebhookQueryResponse::Urls(urls) = webhook.query(WebhookQuery::Urls)? {
//!         println!("registered: {:?}", urls);
//!     }
//!
//!     webhook.update("https://example.com/hook", false)?;
//!     webhook.delete("https://example.com/hook")?;
//!     Ok(())
//! }
//! ```
//!
//! Decoding the change reports that arrive at the registered URL is the
//! job of the companion events crate; this one only manages the
//! subscription itself.

pub mod auth;
pub mod client;
pub mod envelope;
pub mod error;
pub mod operation;
pub mod operations;
pub mod webhook;

pub use auth::Credentials;
pub use client::{SwitchBotClient, DEFAULT_ENDPOINT};
pub use envelope::{ResponseEnvelope, STATUS_SUCCESS};
pub use error::{ApiError, Result};
pub use operation::WebhookOperation;
pub use webhook::{
    WebhookQuery, WebhookQueryResponse, WebhookService, WebhookSubscription, DEVICE_LIST_ALL,
};
