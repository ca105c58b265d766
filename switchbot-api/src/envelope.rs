//! The common response envelope wrapped around every management action

use serde::Deserialize;
use serde_json::Value;

use crate::error::{ApiError, Result};

/// Vendor status code reported for a successful action
pub const STATUS_SUCCESS: i64 = 100;

/// The `{statusCode, body, message}` wrapper on every response
///
/// The vendor reports success through `statusCode`, not the HTTP status
/// line. `body` is operation-specific and frequently absent or empty;
/// absence decodes as [`Value::Null`] rather than an error. `statusCode`
/// and `message` are required keys.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub status_code: i64,
    #[serde(default)]
    pub body: Value,
    pub message: String,
}

impl ResponseEnvelope {
    /// Decode an envelope from raw response bytes
    pub fn from_slice(raw: &[u8]) -> Result<Self> {
        serde_json::from_slice(raw).map_err(ApiError::Decode)
    }

    /// Whether the vendor reported the action as successful
    pub fn is_success(&self) -> bool {
        self.status_code == STATUS_SUCCESS
    }

    /// Consume the envelope, yielding its body on success
    ///
    /// A non-success status code becomes [`ApiError::Rejected`] carrying
    /// the vendor's code and message.
    pub fn into_body(self) -> Result<Value> {
        if !self.is_success() {
            return Err(ApiError::Rejected {
                status_code: self.status_code,
                message: self.message,
            });
        }
        Ok(self.body)
    }
}
