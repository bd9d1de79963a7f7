//! Payment intents

use serde::{Deserialize, Serialize};

use super::{
    BaseResource, Currency, Metadata, PaymentMethod, PaymentMethodOptions, impl_base_resource,
};
use crate::encode::FormEncode;

/// Tracks a customer's payment lifecycle so they are charged at most once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentIntent {
    #[serde(flatten)]
    pub base: BaseResource,
    /// Amount in minor units
    pub amount: i64,
    #[serde(default)]
    pub amount_received: i64,
    #[serde(default)]
    pub amount_capturable: i64,
    #[serde(default)]
    pub client_secret: String,
    pub currency: Currency,
    pub description: Option<String>,
    pub metadata: Option<Metadata>,
    pub payment_method_id: Option<String>,
    #[serde(default)]
    pub payment_methods: Vec<PaymentMethod>,
    pub payment_method_options: Option<PaymentMethodOptions>,
    pub statement_descriptor: Option<String>,
    pub status: PaymentIntentStatus,
    pub next_action: Option<PaymentIntentNextAction>,
    pub return_url: Option<String>,
}

impl_base_resource!(PaymentIntent);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentIntentStatus {
    AwaitingPaymentMethod,
    AwaitingNextAction,
    AwaitingCapture,
    Processing,
    Succeeded,
    Canceled,
}

/// What the customer must do next, e.g. follow a redirect
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentIntentNextAction {
    #[serde(rename = "type")]
    pub action_type: String,
    pub redirect_url: Option<String>,
}

/// Parameters for creating a payment intent
#[derive(Debug, Clone, PartialEq, Eq, FormEncode)]
pub struct PaymentIntentCreateParams {
    /// Amount in minor units
    #[form(key = "amount")]
    pub amount: i64,
    #[form(key = "payment_methods")]
    pub payment_methods: Vec<PaymentMethod>,
    #[form(key = "currency")]
    pub currency: Currency,
    #[form(key = "description")]
    pub description: Option<String>,
    #[form(key = "payment_method_options")]
    pub payment_method_options: Option<PaymentMethodOptions>,
    #[form(key = "statement_descriptor")]
    pub statement_descriptor: Option<String>,
    #[form(key = "return_url")]
    pub return_url: Option<String>,
    #[form(key = "metadata")]
    pub metadata: Option<Metadata>,
}

impl PaymentIntentCreateParams {
    /// Create parameters for an amount in minor units
    pub fn new(amount: i64, payment_methods: Vec<PaymentMethod>) -> Self {
        Self {
            amount,
            payment_methods,
            currency: Currency::Php,
            description: None,
            payment_method_options: None,
            statement_descriptor: None,
            return_url: None,
            metadata: None,
        }
    }

    /// With description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// With card options
    pub fn payment_method_options(mut self, options: PaymentMethodOptions) -> Self {
        self.payment_method_options = Some(options);
        self
    }
}

/// Parameters for capturing a payment intent
#[derive(Debug, Clone, PartialEq, Eq, FormEncode)]
pub struct PaymentIntentCaptureParams {
    /// Amount in minor units
    #[form(key = "amount")]
    pub amount: i64,
}
