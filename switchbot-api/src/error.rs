use thiserror::Error;

/// High-level errors for management API operations
///
/// This enum separates transport-level failures from rejections issued by
/// the cloud itself, so callers can tell a dead network apart from a
/// request the vendor understood but refused.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network communication error
    ///
    /// This error occurs when the request never produces a readable
    /// response, such as connection timeouts, DNS resolution failures,
    /// or the endpoint being unreachable.
    #[error("Network error: {0}")]
    Network(String),

    /// Non-success HTTP status without a decodable response envelope
    ///
    /// The cloud normally wraps rejections in its JSON envelope; when a
    /// proxy or gateway answers with something else entirely, only the
    /// HTTP status code is available.
    #[error("HTTP error: status {0}")]
    Http(u16),

    /// Rejection reported inside the response envelope
    ///
    /// The request reached the cloud and was understood, but the action
    /// itself failed. Carries the vendor's own status code and message
    /// verbatim.
    #[error("API error: status {status_code}: {message}")]
    Rejected { status_code: i64, message: String },

    /// Response decoding error
    ///
    /// The cloud answered with something that does not match the
    /// documented envelope or body shape for the operation.
    #[error("Malformed response: {0}")]
    Decode(#[source] serde_json::Error),

    /// Request serialization error
    #[error("Request encoding failed: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Type alias for results that can return an ApiError
pub type Result<T> = std::result::Result<T, ApiError>;
