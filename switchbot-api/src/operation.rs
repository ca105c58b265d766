//! Operation framework for the single-endpoint management API
//!
//! Every management action travels over the same HTTP surface: a JSON
//! object POSTed to the webhook path, discriminated by an `action` key,
//! answered inside the common `{statusCode, body, message}` envelope.
//! Operations therefore only declare their action name, request shape,
//! and body shape; the client owns transport and envelope handling.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ApiError, Result};

/// Base trait for all webhook management operations
///
/// This trait defines the common interface that all management actions
/// implement. It provides type safety through associated types and keeps
/// request/response handling consistent across operations.
pub trait WebhookOperation {
    /// The request type for this operation, must be serializable
    type Request: Serialize;

    /// The response type for this operation, decoded from the envelope body
    type Response: for<'de> Deserialize<'de>;

    /// The `action` discriminator for this operation
    const ACTION: &'static str;

    /// Build the JSON request body from the request data
    ///
    /// Serializes the request to a JSON object and tags it with the
    /// operation's `action` discriminator. Requests must serialize to
    /// objects; anything else is an encoding error.
    ///
    /// # Arguments
    /// * `request` - The typed request data
    ///
    /// # Returns
    /// The complete action-tagged JSON body
    fn request_body(request: &Self::Request) -> Result<Value> {
        let mut fields = match serde_json::to_value(request).map_err(ApiError::Encode)? {
            Value::Object(fields) => fields,
            other => {
                return Err(ApiError::Encode(<serde_json::Error as serde::ser::Error>::custom(
                    format!("action request must serialize to a JSON object, got {}", other),
                )));
            }
        };
        fields.insert("action".to_string(), Value::String(Self::ACTION.to_string()));
        Ok(Value::Object(fields))
    }

    /// Parse the envelope body into the typed response
    ///
    /// Receives the `body` field of a successful envelope. Implementations
    /// must tolerate the degenerate bodies the vendor sends when an action
    /// has nothing to report (absent, `null`, or an empty object).
    ///
    /// # Arguments
    /// * `body` - The envelope's `body` value
    ///
    /// # Returns
    /// The typed response data or an error if decoding fails
    fn parse_body(body: Value) -> Result<Self::Response>;
}
