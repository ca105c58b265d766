//! queryWebhook actions
//!
//! The vendor exposes two query types behind the same endpoint, and their
//! request shapes disagree on purpose: `queryUrl` sends `urls` as an empty
//! string, while `queryDetails` sends it as a list of URL strings. The two
//! operations here keep those wire shapes separate.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::webhook::WebhookSubscription;
use crate::{ApiError, Result, WebhookOperation};

/// Query operation listing every registered webhook URL
pub struct QueryUrlOperation;

/// Request for the queryUrl action
#[derive(Debug, Clone, Default, Serialize)]
pub struct QueryUrlRequest {
    pub urls: String,
}

/// Response for the queryUrl action
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryUrlResponse {
    #[serde(default)]
    pub urls: Vec<String>,
}

impl WebhookOperation for QueryUrlOperation {
    type Request = QueryUrlRequest;
    type Response = QueryUrlResponse;

    const ACTION: &'static str = "queryUrl";

    fn parse_body(body: Value) -> Result<Self::Response> {
        match body {
            Value::Null => Ok(QueryUrlResponse::default()),
            other => serde_json::from_value(other).map_err(ApiError::Decode),
        }
    }
}

/// Query operation fetching full subscription records for given URLs
pub struct QueryDetailsOperation;

/// Request for the queryDetails action
#[derive(Debug, Clone, Serialize)]
pub struct QueryDetailsRequest {
    pub urls: Vec<String>,
}

impl WebhookOperation for QueryDetailsOperation {
    type Request = QueryDetailsRequest;
    type Response = Vec<WebhookSubscription>;

    const ACTION: &'static str = "queryDetails";

    fn parse_body(body: Value) -> Result<Self::Response> {
        match body {
            Value::Null => Ok(Vec::new()),
            Value::Object(fields) if fields.is_empty() => Ok(Vec::new()),
            other => serde_json::from_value(other).map_err(ApiError::Decode),
        }
    }
}
