//! Webhook subscription actions
//!
//! The four management actions dispatched through the single webhook
//! endpoint.

mod delete;
mod query;
mod setup;
mod update;

pub use delete::{DeleteWebhookOperation, DeleteWebhookRequest, DeleteWebhookResponse};
pub use query::{
    QueryDetailsOperation, QueryDetailsRequest, QueryUrlOperation, QueryUrlRequest,
    QueryUrlResponse,
};
pub use setup::{SetupWebhookOperation, SetupWebhookRequest, SetupWebhookResponse};
pub use update::{UpdateWebhookOperation, UpdateWebhookRequest, UpdateWebhookResponse, WebhookConfig};
