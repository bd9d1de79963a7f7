//! Refunds

use serde::{Deserialize, Serialize};

use super::{BaseResource, Currency, Metadata, impl_base_resource};
use crate::encode::{FormEncode, impl_form_encode_as_str};

/// A refunded amount of a paid payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Refund {
    #[serde(flatten)]
    pub base: BaseResource,
    pub amount: i64,
    pub currency: Currency,
    pub status: RefundStatus,
    pub description: Option<String>,
    pub reason: RefundReason,
    pub remarks: Option<String>,
    pub payment_id: String,
    pub metadata: Option<Metadata>,
}

impl_base_resource!(Refund);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefundStatus {
    Succeeded,
    Failed,
    Pending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefundReason {
    Fraudulent,
    RequestedByCustomer,
    ProductOutOfStock,
    ServiceNotProvided,
    ProductWasDamaged,
    ServiceMisaligned,
    WrongProductReceived,
    Others,
}

impl RefundReason {
    /// Wire value
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fraudulent => "fraudulent",
            Self::RequestedByCustomer => "requested_by_customer",
            Self::ProductOutOfStock => "product_out_of_stock",
            Self::ServiceNotProvided => "service_not_provided",
            Self::ProductWasDamaged => "product_was_damaged",
            Self::ServiceMisaligned => "service_misaligned",
            Self::WrongProductReceived => "wrong_product_received",
            Self::Others => "others",
        }
    }
}

impl_form_encode_as_str!(RefundReason);

/// Parameters for creating a refund
#[derive(Debug, Clone, PartialEq, Eq, FormEncode)]
pub struct RefundCreateParams {
    /// Amount in minor units
    #[form(key = "amount")]
    pub amount: i64,
    #[form(key = "currency")]
    pub currency: Currency,
    #[form(key = "description")]
    pub description: Option<String>,
    #[form(key = "payment_id")]
    pub payment_id: String,
    #[form(key = "remarks")]
    pub remarks: Option<String>,
    #[form(key = "reason")]
    pub reason: RefundReason,
    #[form(key = "metadata")]
    pub metadata: Option<Metadata>,
}

impl RefundCreateParams {
    /// Refund `amount` minor units of a payment
    pub fn new(payment_id: impl Into<String>, amount: i64, reason: RefundReason) -> Self {
        Self {
            amount,
            currency: Currency::Php,
            description: None,
            payment_id: payment_id.into(),
            remarks: None,
            reason,
            metadata: None,
        }
    }

    /// With remarks
    pub fn remarks(mut self, remarks: impl Into<String>) -> Self {
        self.remarks = Some(remarks.into());
        self
    }
}

/// Parameters for updating a refund
#[derive(Debug, Clone, Default, PartialEq, Eq, FormEncode)]
pub struct RefundUpdateParams {
    #[form(key = "metadata")]
    pub metadata: Option<Metadata>,
}
