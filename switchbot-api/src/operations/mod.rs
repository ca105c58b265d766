//! Management API operations organized by service
//!
//! This module contains the individual API operations, organized by the
//! cloud surface they belong to. Webhook subscription management is the
//! only surface today.

pub mod webhook;

// Re-export commonly used operations
pub use webhook::{
    DeleteWebhookOperation, QueryDetailsOperation, QueryUrlOperation, SetupWebhookOperation,
    UpdateWebhookOperation,
};
