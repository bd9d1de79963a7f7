//! Checkout sessions

use serde::{Deserialize, Serialize};

use super::{BaseResource, Currency, Metadata, PaymentIntent, PaymentMethod, impl_base_resource};
use crate::encode::FormEncode;

/// A hosted checkout page for a fixed set of line items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutSession {
    #[serde(flatten)]
    pub base: BaseResource,
    pub url: String,
    #[serde(default)]
    pub billing_details_collection: String,
    pub customer_reference_id: Option<String>,
    pub client_secret: String,
    pub status: CheckoutSessionStatus,
    pub currency: Currency,
    #[serde(default)]
    pub line_items: Vec<CheckoutSessionLineItem>,
    pub payment_intent: Option<PaymentIntent>,
    pub metadata: Option<Metadata>,
    pub success_url: String,
    pub cancel_url: String,
    #[serde(default)]
    pub payment_methods: Vec<PaymentMethod>,
    pub description: Option<String>,
    #[serde(default)]
    pub submit_type: String,
    #[serde(default)]
    pub expires_at: i64,
}

impl_base_resource!(CheckoutSession);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutSessionStatus {
    Active,
    Completed,
    Expired,
}

/// A line item shown on the checkout page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSessionLineItem {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub amount: i64,
    pub quantity: u32,
    pub description: Option<String>,
    pub image: Option<String>,
}

/// Line item to put on a new checkout session
#[derive(Debug, Clone, PartialEq, Eq, FormEncode)]
pub struct CheckoutSessionLineItemParams {
    #[form(key = "name")]
    pub name: String,
    /// Unit amount in minor units
    #[form(key = "amount")]
    pub amount: i64,
    #[form(key = "quantity")]
    pub quantity: u32,
    #[form(key = "description")]
    pub description: Option<String>,
    #[form(key = "image")]
    pub image: Option<String>,
}

impl CheckoutSessionLineItemParams {
    pub fn new(name: impl Into<String>, amount: i64, quantity: u32) -> Self {
        Self {
            name: name.into(),
            amount,
            quantity,
            description: None,
            image: None,
        }
    }
}

/// Parameters for creating a checkout session
#[derive(Debug, Clone, PartialEq, Eq, FormEncode)]
pub struct CheckoutSessionCreateParams {
    #[form(key = "customer_reference_id")]
    pub customer_reference_id: Option<String>,
    #[form(key = "currency")]
    pub currency: Currency,
    #[form(key = "line_items")]
    pub line_items: Vec<CheckoutSessionLineItemParams>,
    #[form(key = "metadata")]
    pub metadata: Option<Metadata>,
    #[form(key = "success_url")]
    pub success_url: String,
    #[form(key = "cancel_url")]
    pub cancel_url: String,
    /// Unix timestamp after which the session can no longer be paid
    #[form(key = "expires_at")]
    pub expires_at: Option<i64>,
    #[form(key = "payment_methods")]
    pub payment_methods: Vec<PaymentMethod>,
    #[form(key = "billing_details_collection")]
    pub billing_details_collection: Option<String>,
    #[form(key = "description")]
    pub description: Option<String>,
    #[form(key = "submit_type")]
    pub submit_type: Option<String>,
}

impl CheckoutSessionCreateParams {
    pub fn new(
        line_items: Vec<CheckoutSessionLineItemParams>,
        payment_methods: Vec<PaymentMethod>,
        success_url: impl Into<String>,
        cancel_url: impl Into<String>,
    ) -> Self {
        Self {
            customer_reference_id: None,
            currency: Currency::Php,
            line_items,
            metadata: None,
            success_url: success_url.into(),
            cancel_url: cancel_url.into(),
            expires_at: None,
            payment_methods,
            billing_details_collection: None,
            description: None,
            submit_type: None,
        }
    }

    /// Tie the session to the merchant's own reference
    pub fn customer_reference_id(mut self, id: impl Into<String>) -> Self {
        self.customer_reference_id = Some(id.into());
        self
    }
}

/// Parameters for listing checkout sessions
pub type CheckoutSessionListParams = super::ListParams;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::encode;

    #[test]
    fn test_line_items_encode_as_repeated_groups() {
        let params = CheckoutSessionCreateParams::new(
            vec![
                CheckoutSessionLineItemParams::new("Dino plush", 50_000, 2),
                CheckoutSessionLineItemParams::new("Gift wrap", 2_000, 1),
            ],
            vec![PaymentMethod::Card, PaymentMethod::Gcash],
            "https://shop.test/ok",
            "https://shop.test/cancel",
        );

        let values = encode(&params);
        assert_eq!(
            values.get_all("line_items[][name]"),
            vec!["Dino plush", "Gift wrap"]
        );
        assert_eq!(values.get_all("line_items[][amount]"), vec!["50000", "2000"]);
        assert_eq!(values.get_all("payment_methods[]"), vec!["card", "gcash"]);
        assert!(!values.contains_prefix("line_items[][image]"));
        assert!(!values.contains_prefix("expires_at"));
    }

    #[test]
    fn test_decode_with_embedded_intent_absent() {
        let json = r#"{
            "id": "cs_1", "livemode": false, "created_at": 1, "updated_at": 1,
            "url": "https://checkout.payrexhq.com/c/cs_1",
            "billing_details_collection": "always",
            "customer_reference_id": null,
            "client_secret": "cs_1_secret",
            "status": "active",
            "currency": "PHP",
            "line_items": [{"id":"li_1","name":"Dino plush","amount":50000,"quantity":2}],
            "payment_intent": null,
            "metadata": null,
            "success_url": "https://shop.test/ok",
            "cancel_url": "https://shop.test/cancel",
            "payment_methods": ["card"],
            "description": null,
            "submit_type": "pay",
            "expires_at": 1700086400
        }"#;

        let session: CheckoutSession = serde_json::from_str(json).unwrap();
        assert_eq!(session.status, CheckoutSessionStatus::Active);
        assert_eq!(session.line_items[0].quantity, 2);
        assert!(session.payment_intent.is_none());
    }
}
