//! updateWebhook action

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Result, WebhookOperation};

/// Update operation, flips the enable flag of an existing subscription
pub struct UpdateWebhookOperation;

/// The `{url, enable}` pair nested under `config` on the wire
#[derive(Debug, Clone, Serialize)]
pub struct WebhookConfig {
    pub url: String,
    pub enable: bool,
}

/// Request for the update action
#[derive(Debug, Clone, Serialize)]
pub struct UpdateWebhookRequest {
    pub config: WebhookConfig,
}

/// Response for the update action
#[derive(Debug, Deserialize)]
pub struct UpdateWebhookResponse;

impl WebhookOperation for UpdateWebhookOperation {
    type Request = UpdateWebhookRequest;
    type Response = UpdateWebhookResponse;

    const ACTION: &'static str = "updateWebhook";

    fn parse_body(_body: Value) -> Result<Self::Response> {
        // Update returns no meaningful body
        Ok(UpdateWebhookResponse)
    }
}
