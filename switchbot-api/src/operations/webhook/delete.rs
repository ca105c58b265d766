//! deleteWebhook action

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Result, WebhookOperation};

/// Delete operation, removes a subscription by URL
pub struct DeleteWebhookOperation;

/// Request for the delete action; `url` stays flat, unlike update
#[derive(Debug, Clone, Serialize)]
pub struct DeleteWebhookRequest {
    pub url: String,
}

/// Response for the delete action
#[derive(Debug, Deserialize)]
pub struct DeleteWebhookResponse;

impl WebhookOperation for DeleteWebhookOperation {
    type Request = DeleteWebhookRequest;
    type Response = DeleteWebhookResponse;

    const ACTION: &'static str = "deleteWebhook";

    fn parse_body(_body: Value) -> Result<Self::Response> {
        // Delete returns no meaningful body
        Ok(DeleteWebhookResponse)
    }
}
