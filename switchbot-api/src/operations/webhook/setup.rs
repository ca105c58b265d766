//! setupWebhook action

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Result, WebhookOperation};

/// Setup operation, registers a URL as a push-notification target
pub struct SetupWebhookOperation;

/// Request for the setup action
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupWebhookRequest {
    pub url: String,
    pub device_list: String,
}

/// Response for the setup action
#[derive(Debug, Deserialize)]
pub struct SetupWebhookResponse;

impl WebhookOperation for SetupWebhookOperation {
    type Request = SetupWebhookRequest;
    type Response = SetupWebhookResponse;

    const ACTION: &'static str = "setupWebhook";

    fn parse_body(_body: Value) -> Result<Self::Response> {
        // Setup returns no meaningful body
        Ok(SetupWebhookResponse)
    }
}
