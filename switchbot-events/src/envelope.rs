//! Outer envelope of inbound push notifications
//!
//! Every notification arrives as `{"eventType": ..., "eventVersion": ...,
//! "context": {...}}`. The context is kept as raw JSON here; it is only
//! decoded into a typed shape once the registry has resolved the
//! `deviceType` discriminator inside it.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{EventError, EventResult};

/// The only event type the vendor currently emits
pub const CHANGE_REPORT: &str = "changeReport";

/// The only event version the vendor currently emits
pub const EVENT_VERSION: &str = "1";

/// Parsed outer envelope with the context still undecoded
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationEnvelope {
    pub event_type: String,
    pub event_version: String,
    pub context: Value,
}

impl NotificationEnvelope {
    /// Parse the raw notification body
    ///
    /// Malformed JSON or a missing envelope key is an [`EventError::Envelope`].
    pub fn from_slice(body: &[u8]) -> EventResult<Self> {
        serde_json::from_slice(body).map_err(EventError::Envelope)
    }

    /// Whether this envelope carries the known change-report type/version pair
    pub fn is_change_report(&self) -> bool {
        self.event_type == CHANGE_REPORT && self.event_version == EVENT_VERSION
    }

    /// The `deviceType` discriminator inside the context, if present
    pub fn device_type(&self) -> Option<&str> {
        self.context.get("deviceType").and_then(Value::as_str)
    }
}
