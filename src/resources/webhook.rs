//! Webhook endpoints

use serde::{Deserialize, Serialize};

use super::{BaseResource, impl_base_resource};
use crate::encode::FormEncode;
use crate::webhook::EventType;

/// An HTTPS endpoint PayRex delivers events to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookEndpoint {
    #[serde(flatten)]
    pub base: BaseResource,
    /// Signing secret for [`WebhookVerifier`](crate::webhook::WebhookVerifier)
    pub secret_key: String,
    pub status: WebhookStatus,
    pub description: Option<String>,
    pub url: String,
    #[serde(default)]
    pub events: Vec<EventType>,
}

impl_base_resource!(WebhookEndpoint);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WebhookStatus {
    Enabled,
    Disabled,
}

/// Parameters for creating a webhook endpoint
#[derive(Debug, Clone, PartialEq, Eq, FormEncode)]
pub struct WebhookCreateParams {
    #[form(key = "url")]
    pub url: String,
    #[form(key = "description")]
    pub description: Option<String>,
    #[form(key = "events")]
    pub events: Vec<EventType>,
}

impl WebhookCreateParams {
    pub fn new(url: impl Into<String>, events: Vec<EventType>) -> Self {
        Self {
            url: url.into(),
            description: None,
            events,
        }
    }
}

/// Parameters for updating a webhook endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, FormEncode)]
pub struct WebhookUpdateParams {
    #[form(key = "url")]
    pub url: Option<String>,
    #[form(key = "description")]
    pub description: Option<String>,
    #[form(key = "events")]
    pub events: Option<Vec<EventType>>,
}

/// Parameters for listing webhook endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq, FormEncode)]
pub struct WebhookListParams {
    #[form(key = "limit")]
    pub limit: Option<u32>,
    #[form(key = "before")]
    pub before: Option<String>,
    #[form(key = "after")]
    pub after: Option<String>,
    #[form(key = "url")]
    pub url: Option<String>,
    #[form(key = "description")]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::encode;

    #[test]
    fn test_create_params_events() {
        let params = WebhookCreateParams::new(
            "https://shop.test/hooks",
            vec![EventType::PaymentIntentSucceeded, EventType::RefundCreated],
        );

        let values = encode(&params);
        assert_eq!(
            values.get_all("events[]"),
            vec!["payment_intent.succeeded", "refund.created"]
        );
    }

    #[test]
    fn test_list_params_filters() {
        let params = WebhookListParams {
            limit: Some(5),
            url: Some("https://shop.test/hooks".into()),
            ..Default::default()
        };

        assert_eq!(
            encode(&params).to_string(),
            "limit=5&url=https%3A%2F%2Fshop.test%2Fhooks"
        );
    }
}
