//! HTTP client for the v1.1 management API

use std::time::Duration;

use serde_json::Value;
use tracing::{debug, error};

use crate::auth::Credentials;
use crate::envelope::{ResponseEnvelope, STATUS_SUCCESS};
use crate::error::{ApiError, Result};
use crate::operation::WebhookOperation;
use crate::webhook::WebhookService;

/// Production endpoint of the vendor cloud
pub const DEFAULT_ENDPOINT: &str = "https://api.switch-bot.com";

/// The single path every management action is dispatched through
const WEBHOOK_PATH: &str = "/v1.1/webhook";

/// A client for executing management operations against the cloud
///
/// This client bridges the gap between the stateless operation
/// definitions and actual network requests. Every request is signed with
/// the account credentials and POSTed to the single webhook path; the
/// response envelope is checked before the operation sees its body.
///
/// ```no_run
/// use switchbot_api::SwitchBotClient;
///
/// fn main() -> switchbot_api::Result<()> {
///     let client = SwitchBotClient::new("token", "secret");
///     let urls = client.webhook().query_urls()?;
///     println!("registered: {:?}", urls);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SwitchBotClient {
    agent: ureq::Agent,
    credentials: Credentials,
    endpoint: String,
}

impl SwitchBotClient {
    /// Create a client for the production endpoint
    ///
    /// `token` and `secret` are the pair issued by the vendor app's
    /// developer options.
    pub fn new(token: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            agent: ureq::AgentBuilder::new()
                .timeout_connect(Duration::from_secs(5))
                .timeout_read(Duration::from_secs(10))
                .build(),
            credentials: Credentials::new(token, secret),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    /// Point the client at a different base endpoint
    ///
    /// Intended for test servers; the webhook path is appended to
    /// whatever base is given here.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// The webhook subscription management surface
    pub fn webhook(&self) -> WebhookService<'_> {
        WebhookService::new(self)
    }

    /// Execute a management operation
    ///
    /// This method takes any operation that implements
    /// [`WebhookOperation`], builds its action-tagged body, sends the
    /// signed request, and parses the envelope body into the typed
    /// response.
    ///
    /// # Arguments
    /// * `request` - The operation request data
    ///
    /// # Returns
    /// The parsed response data or an error
    pub fn execute<Op: WebhookOperation>(&self, request: &Op::Request) -> Result<Op::Response> {
        let body = Op::request_body(request)?;

        debug!(action = Op::ACTION, "dispatching management action");
        let envelope = self.post(&body)?;

        let body = match envelope.into_body() {
            Ok(body) => body,
            Err(err) => {
                error!(action = Op::ACTION, %err, "management action rejected");
                return Err(err);
            }
        };
        Op::parse_body(body)
    }

    /// POST an action body to the webhook path and decode the envelope
    fn post(&self, body: &Value) -> Result<ResponseEnvelope> {
        let url = format!("{}{}", self.endpoint, WEBHOOK_PATH);
        let headers = self.credentials.sign_headers();

        let response = self
            .agent
            .post(&url)
            .set("Authorization", self.credentials.token())
            .set("sign", &headers.sign)
            .set("t", &headers.t)
            .set("nonce", &headers.nonce)
            .set("Content-Type", "application/json; charset=utf8")
            .send_json(body);

        let response = match response {
            Ok(response) => response,
            Err(ureq::Error::Status(code, response)) => {
                let raw = response
                    .into_string()
                    .map_err(|e| ApiError::Network(e.to_string()))?;
                return Err(rejection(code, &raw));
            }
            Err(e) => return Err(ApiError::Network(e.to_string())),
        };

        let raw = response
            .into_string()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        ResponseEnvelope::from_slice(raw.as_bytes())
    }
}

/// Classify a non-2xx response
///
/// The cloud wraps most rejections in its JSON envelope even when the
/// HTTP status is non-success; prefer the envelope's code and message
/// and fall back to the bare HTTP status when no envelope is present.
fn rejection(code: u16, raw: &str) -> ApiError {
    match ResponseEnvelope::from_slice(raw.as_bytes()) {
        Ok(envelope) if envelope.status_code != STATUS_SUCCESS => ApiError::Rejected {
            status_code: envelope.status_code,
            message: envelope.message,
        },
        _ => ApiError::Http(code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = SwitchBotClient::new("token", "secret");
        assert_eq!(client.endpoint, DEFAULT_ENDPOINT);

        let client = client.with_endpoint("http://127.0.0.1:8080");
        assert_eq!(client.endpoint, "http://127.0.0.1:8080");
    }

    #[test]
    fn test_rejection_prefers_the_envelope() {
        let err = rejection(401, r#"{"statusCode":401,"body":{},"message":"Unauthorized"}"#);
        match err {
            ApiError::Rejected { status_code, message } => {
                assert_eq!(status_code, 401);
                assert_eq!(message, "Unauthorized");
            }
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[test]
    fn test_rejection_falls_back_to_http_status() {
        let err = rejection(502, "<html>bad gateway</html>");
        assert!(matches!(err, ApiError::Http(502)));
    }

    #[test]
    fn test_rejection_with_success_envelope_keeps_http_status() {
        // A 4xx carrying statusCode 100 is a broken proxy, not a success
        let err = rejection(403, r#"{"statusCode":100,"body":{},"message":"success"}"#);
        assert!(matches!(err, ApiError::Http(403)));
    }
}
