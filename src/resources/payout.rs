//! Payouts

use serde::{Deserialize, Serialize};

use super::{BaseResource, impl_base_resource};

/// Money PayRex is scheduled to send to the merchant's bank account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payout {
    #[serde(flatten)]
    pub base: BaseResource,
    pub amount: i64,
    pub destination: Option<PayoutDestination>,
    #[serde(default)]
    pub net_amount: i64,
    pub status: PayoutStatus,
}

impl_base_resource!(Payout);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayoutStatus {
    Pending,
    InTransit,
    Failed,
    Successful,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutDestination {
    pub account_name: String,
    pub account_number: String,
    pub bank_name: String,
}

/// A line item of a payout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutTransaction {
    pub id: String,
    pub amount: i64,
    #[serde(default)]
    pub net_amount: i64,
    pub transaction_type: PayoutTransactionType,
    pub transaction_id: String,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayoutTransactionType {
    Payment,
    Refund,
    Adjustment,
}
