//! Payments

use serde::{Deserialize, Serialize};

use super::{BaseResource, Currency, Customer, Metadata, PaymentMethod, impl_base_resource};
use crate::encode::FormEncode;

/// One attempt to move money into the merchant balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    #[serde(flatten)]
    pub base: BaseResource,
    pub amount: i64,
    #[serde(default)]
    pub amount_refunded: i64,
    pub billing: Option<Billing>,
    pub currency: Currency,
    pub description: Option<String>,
    #[serde(default)]
    pub fee: i64,
    pub metadata: Option<Metadata>,
    #[serde(default)]
    pub net_amount: i64,
    pub payment_intent_id: String,
    #[serde(alias = "payment_status")]
    pub status: PaymentStatus,
    pub customer: Option<Customer>,
    pub payment_method: Option<PaymentMethodDetails>,
    #[serde(default)]
    pub refunded: bool,
}

impl_base_resource!(Payment);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Billing {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<Address>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub line1: String,
    #[serde(default)]
    pub line2: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub postal_code: String,
    #[serde(default)]
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethodDetails {
    #[serde(rename = "type")]
    pub method_type: PaymentMethod,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Paid,
    Failed,
}

/// Parameters for updating a payment
#[derive(Debug, Clone, Default, PartialEq, Eq, FormEncode)]
pub struct PaymentUpdateParams {
    #[form(key = "description")]
    pub description: Option<String>,
    #[form(key = "metadata")]
    pub metadata: Option<Metadata>,
}
