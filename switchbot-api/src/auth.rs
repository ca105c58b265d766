//! Request signing for the v1.1 authentication scheme

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use uuid::Uuid;

type HmacSha256 = Hmac<Sha256>;

/// The open token and signing secret issued by the vendor app
///
/// The secret never leaves this struct: it is only used to derive
/// per-request signatures, and `Debug` output redacts it.
#[derive(Clone)]
pub struct Credentials {
    token: String,
    secret: String,
}

impl Credentials {
    /// Wrap a token and secret pair
    pub fn new(token: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            secret: secret.into(),
        }
    }

    /// The open token, sent verbatim as the `Authorization` header
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Produce a fresh set of signed headers for one request
    ///
    /// Each call samples the current time and a new random nonce, so
    /// signatures are never reused across requests.
    pub(crate) fn sign_headers(&self) -> SignedHeaders {
        let t = now_ms().to_string();
        let nonce = Uuid::new_v4().to_string();
        let sign = signature(&self.token, &self.secret, &t, &nonce);
        SignedHeaders { sign, t, nonce }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &self.token)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// The three signature headers attached to every request
#[derive(Debug, Clone)]
pub(crate) struct SignedHeaders {
    pub sign: String,
    pub t: String,
    pub nonce: String,
}

/// Compute the v1.1 request signature
///
/// The signature is HMAC-SHA256 over the concatenation `token + t + nonce`,
/// keyed by the secret, then base64 encoded and uppercased.
pub fn signature(token: &str, secret: &str, t: &str, nonce: &str) -> String {
    let payload = format!("{}{}{}", token, t, nonce);
    let digest = hmac_sha256(secret.as_bytes(), payload.as_bytes());
    BASE64.encode(digest).to_uppercase()
}

/// Compute HMAC-SHA256 of `data` with the given `key`.
fn hmac_sha256(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC-SHA256 accepts any key length");
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}

/// Milliseconds since the Unix epoch, as the `t` header expects.
fn now_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_else(|_| Duration::from_secs(0))
        .as_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_matches_known_vectors() {
        assert_eq!(
            signature(
                "token123",
                "secret456",
                "1660000000000",
                "19640b40-41a5-4f55-b8f9-5a1a9e0b5b1d"
            ),
            "YIASUFYVNTNEIZYH2VPK4AKDZRYYL8Y0HWAMRSYFYVO="
        );
        assert_eq!(
            signature(
                "cb3cd0c6e2f1a8d5",
                "9a1f0c8e7b6d5a4f",
                "1755820800000",
                "00000000-0000-4000-8000-000000000000"
            ),
            "GHCFD/FICOCUC/RUOGSNWPIA0VOHTK5HN70XVQO4UUG="
        );
    }

    #[test]
    fn test_signature_is_uppercase_base64_of_a_32_byte_digest() {
        let sign = signature("a", "b", "1", "n");
        assert_eq!(sign.len(), 44);
        assert!(sign.chars().all(|c| !c.is_ascii_lowercase()));
    }

    #[test]
    fn test_signed_headers_are_fresh_per_request() {
        let credentials = Credentials::new("token123", "secret456");

        let first = credentials.sign_headers();
        let second = credentials.sign_headers();

        assert_ne!(first.nonce, second.nonce);
        assert_eq!(
            first.sign,
            signature("token123", "secret456", &first.t, &first.nonce)
        );
    }

    #[test]
    fn test_timestamp_header_is_epoch_millis() {
        let headers = Credentials::new("t", "s").sign_headers();
        let t: u128 = headers.t.parse().unwrap();
        // 2022-01-01 in millis; anything earlier means we sampled seconds
        assert!(t > 1_640_995_200_000);
    }

    #[test]
    fn test_debug_output_redacts_the_secret() {
        let credentials = Credentials::new("token123", "secret456");
        let rendered = format!("{:?}", credentials);
        assert!(rendered.contains("token123"));
        assert!(!rendered.contains("secret456"));
    }
}
