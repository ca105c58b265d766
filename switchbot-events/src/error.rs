//! Error types for webhook notification decoding

use crate::category::DeviceCategory;
use thiserror::Error;

/// Errors that can occur while decoding a webhook notification body
#[derive(Debug, Error)]
pub enum EventError {
    /// Notification body is not valid JSON or lacks a required envelope key
    #[error("malformed notification envelope: {0}")]
    Envelope(#[source] serde_json::Error),

    /// Change report context carries no deviceType discriminator
    #[error("change report context has no deviceType")]
    MissingDeviceType,

    /// Context failed validation for the resolved category, either a missing
    /// required field or an enumeration value outside its closed set
    #[error("invalid {category} context: {source}")]
    Context {
        category: DeviceCategory,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type alias for decoding operations
pub type EventResult<T> = Result<T, EventError>;
