//! Webhook subscription management surface
//!
//! High-level entry points for the four management actions. The service
//! borrows a [`SwitchBotClient`] and translates plain arguments into the
//! typed operations under [`crate::operations::webhook`].

use serde::{Deserialize, Serialize};

use crate::client::SwitchBotClient;
use crate::error::Result;
use crate::operations::webhook::{
    DeleteWebhookOperation, DeleteWebhookRequest, QueryDetailsOperation, QueryDetailsRequest,
    QueryUrlOperation, QueryUrlRequest, SetupWebhookOperation, SetupWebhookRequest,
    UpdateWebhookOperation, UpdateWebhookRequest, WebhookConfig,
};

/// Scope string covering every device on the account
///
/// The vendor currently accepts no other value for `deviceList`.
pub const DEVICE_LIST_ALL: &str = "ALL";

/// One vendor-side webhook subscription record
///
/// Returned by detail queries. Timestamps are epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookSubscription {
    pub url: String,
    pub create_time: i64,
    pub last_update_time: i64,
    pub device_list: String,
    pub enable: bool,
}

/// Which query to issue and its arguments
#[derive(Debug, Clone, PartialEq)]
pub enum WebhookQuery {
    /// List every webhook URL registered for the account
    Urls,
    /// Fetch full subscription records for the given URLs
    Details(Vec<String>),
}

/// The result of a [`WebhookQuery`], shaped by the query type
#[derive(Debug, Clone, PartialEq)]
pub enum WebhookQueryResponse {
    Urls(Vec<String>),
    Details(Vec<WebhookSubscription>),
}

/// Webhook management operations, borrowed from a client
///
/// Obtained via [`SwitchBotClient::webhook`]:
///
/// ```no_run
/// use switchbot_api::SwitchBotClient;
///
/// fn main() -> switchbot_api::Result<()> {
///     let client = SwitchBotClient::new("token", "secret");
///     client.webhook().setup("https://example.com/hook", "ALL")?;
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct WebhookService<'a> {
    client: &'a SwitchBotClient,
}

impl<'a> WebhookService<'a> {
    pub(crate) fn new(client: &'a SwitchBotClient) -> Self {
        Self { client }
    }

    /// Register `url` as a push-notification target
    ///
    /// `device_list` scopes which devices report through the webhook; use
    /// [`DEVICE_LIST_ALL`] unless the vendor starts accepting more.
    pub fn setup(&self, url: &str, device_list: &str) -> Result<()> {
        let request = SetupWebhookRequest {
            url: url.to_string(),
            device_list: device_list.to_string(),
        };
        self.client.execute::<SetupWebhookOperation>(&request)?;
        Ok(())
    }

    /// Issue one of the two query actions
    ///
    /// The response variant always matches the query variant: URL queries
    /// yield URL lists, detail queries yield subscription records.
    pub fn query(&self, query: WebhookQuery) -> Result<WebhookQueryResponse> {
        match query {
            WebhookQuery::Urls => Ok(WebhookQueryResponse::Urls(self.query_urls()?)),
            WebhookQuery::Details(urls) => {
                Ok(WebhookQueryResponse::Details(self.query_details(urls)?))
            }
        }
    }

    /// List every webhook URL registered for the account
    pub fn query_urls(&self) -> Result<Vec<String>> {
        let response = self
            .client
            .execute::<QueryUrlOperation>(&QueryUrlRequest::default())?;
        Ok(response.urls)
    }

    /// Fetch the full subscription records for the given URLs
    pub fn query_details(&self, urls: Vec<String>) -> Result<Vec<WebhookSubscription>> {
        self.client
            .execute::<QueryDetailsOperation>(&QueryDetailsRequest { urls })
    }

    /// Flip the enable flag of an existing subscription
    pub fn update(&self, url: &str, enable: bool) -> Result<()> {
        let request = UpdateWebhookRequest {
            config: WebhookConfig {
                url: url.to_string(),
                enable,
            },
        };
        self.client.execute::<UpdateWebhookOperation>(&request)?;
        Ok(())
    }

    /// Remove the subscription registered for `url`
    pub fn delete(&self, url: &str) -> Result<()> {
        let request = DeleteWebhookRequest {
            url: url.to_string(),
        };
        self.client.execute::<DeleteWebhookOperation>(&request)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_subscription_record_decoding() {
        let record: WebhookSubscription = serde_json::from_value(json!({
            "url": "url1",
            "createTime": 123456789,
            "lastUpdateTime": 123456790,
            "deviceList": "ALL",
            "enable": true
        }))
        .unwrap();

        assert_eq!(
            record,
            WebhookSubscription {
                url: "url1".to_string(),
                create_time: 123456789,
                last_update_time: 123456790,
                device_list: "ALL".to_string(),
                enable: true,
            }
        );
    }

    #[test]
    fn test_subscription_record_rejects_missing_fields() {
        let result: std::result::Result<WebhookSubscription, _> =
            serde_json::from_value(json!({"url": "url1"}));
        assert!(result.is_err());
    }
}
