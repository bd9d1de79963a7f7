//! Billing statements and their line items

use serde::{Deserialize, Serialize};

use super::{BaseResource, Currency, Metadata, PaymentIntent, PaymentMethod, impl_base_resource};
use crate::encode::FormEncode;

/// An invoice-like statement sent to a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillingStatement {
    #[serde(flatten)]
    pub base: BaseResource,
    pub status: BillingStatementStatus,
    pub amount: i64,
    pub currency: Currency,
    #[serde(default)]
    pub line_items: Vec<BillingStatementLineItemSummary>,
    pub payment_intent: Option<PaymentIntent>,
    #[serde(default)]
    pub billing_details_collection: String,
    pub customer_id: String,
    pub description: Option<String>,
    #[serde(rename = "billing_statement_merchant_name")]
    pub merchant_name: Option<String>,
    #[serde(rename = "billing_statement_merchant_number")]
    pub merchant_number: Option<String>,
    #[serde(rename = "billing_statement_url")]
    pub url: Option<String>,
    pub statement_descriptor: Option<String>,
    #[serde(default)]
    pub payment_settings: PaymentSettings,
    pub metadata: Option<Metadata>,
}

impl_base_resource!(BillingStatement);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingStatementStatus {
    Open,
    Draft,
    Paid,
    Void,
    Uncollectible,
}

/// Line item as embedded in a billing statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingStatementLineItemSummary {
    pub id: String,
    pub billing_statement_id: String,
    pub description: String,
    pub unit_price: i64,
    pub quantity: u32,
}

/// Payment methods a billing statement may be paid with
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FormEncode)]
pub struct PaymentSettings {
    #[serde(default)]
    #[form(key = "payment_methods")]
    pub payment_methods: Vec<PaymentMethod>,
}

/// Parameters for creating a billing statement
#[derive(Debug, Clone, PartialEq, Eq, FormEncode)]
pub struct BillingStatementCreateParams {
    #[form(key = "customer_id")]
    pub customer_id: String,
    #[form(key = "currency")]
    pub currency: Currency,
    #[form(key = "description")]
    pub description: Option<String>,
    #[form(key = "billing_details_collection")]
    pub billing_details_collection: Option<String>,
    #[form(key = "payment_settings")]
    pub payment_settings: PaymentSettings,
    #[form(key = "metadata")]
    pub metadata: Option<Metadata>,
}

impl BillingStatementCreateParams {
    pub fn new(customer_id: impl Into<String>, payment_methods: Vec<PaymentMethod>) -> Self {
        Self {
            customer_id: customer_id.into(),
            currency: Currency::Php,
            description: None,
            billing_details_collection: None,
            payment_settings: PaymentSettings { payment_methods },
            metadata: None,
        }
    }
}

/// Parameters for updating a billing statement
#[derive(Debug, Clone, Default, PartialEq, Eq, FormEncode)]
pub struct BillingStatementUpdateParams {
    #[form(key = "customer_id")]
    pub customer_id: Option<String>,
    #[form(key = "description")]
    pub description: Option<String>,
    #[form(key = "billing_details_collection")]
    pub billing_details_collection: Option<String>,
    #[form(key = "payment_settings")]
    pub payment_settings: Option<PaymentSettings>,
    #[form(key = "metadata")]
    pub metadata: Option<Metadata>,
}

/// Parameters for listing billing statements
pub type BillingStatementListParams = super::ListParams;

/// A standalone billing statement line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingStatementLineItem {
    #[serde(flatten)]
    pub base: BaseResource,
    pub billing_statement_id: String,
    pub description: String,
    pub unit_price: i64,
    pub quantity: u32,
}

impl_base_resource!(BillingStatementLineItem);

#[derive(Debug, Clone, PartialEq, Eq, FormEncode)]
pub struct BillingStatementLineItemCreateParams {
    #[form(key = "billing_statement_id")]
    pub billing_statement_id: String,
    #[form(key = "description")]
    pub description: String,
    /// Unit price in minor units
    #[form(key = "unit_price")]
    pub unit_price: i64,
    #[form(key = "quantity")]
    pub quantity: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, FormEncode)]
pub struct BillingStatementLineItemUpdateParams {
    #[form(key = "description")]
    pub description: Option<String>,
    #[form(key = "unit_price")]
    pub unit_price: Option<i64>,
    #[form(key = "quantity")]
    pub quantity: Option<u32>,
}
