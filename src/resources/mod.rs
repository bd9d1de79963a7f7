//! Typed PayRex resources and their request parameters.
//!
//! Entities mirror the JSON objects the API returns. Parameter structs derive
//! [`FormEncode`](crate::encode::FormEncode) and name every wire key
//! explicitly. Monetary amounts are integer minor units (centavos for PHP)
//! and are never scaled by this crate.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::encode::{FormEncode, impl_form_encode_as_str};

pub mod billing_statement;
pub mod checkout_session;
pub mod customer;
pub mod customer_session;
pub mod payment;
pub mod payment_intent;
pub mod payout;
pub mod refund;
pub mod webhook;

pub use billing_statement::*;
pub use checkout_session::*;
pub use customer::*;
pub use customer_session::*;
pub use payment::*;
pub use payment_intent::*;
pub use payout::*;
pub use refund::*;
pub use webhook::*;

/// Free-form key/value pairs attached to a resource.
pub type Metadata = HashMap<String, String>;

/// Fields shared by every resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseResource {
    /// Unique identifier
    pub id: String,
    /// `true` in live mode, `false` in test mode
    #[serde(default)]
    pub livemode: bool,
    /// Creation time, seconds since the Unix epoch
    #[serde(default)]
    pub created_at: i64,
    /// Last update time, seconds since the Unix epoch
    #[serde(default)]
    pub updated_at: i64,
}

impl BaseResource {
    /// Creation time as a UTC timestamp.
    pub fn created(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.created_at, 0).single()
    }

    /// Last update time as a UTC timestamp.
    pub fn updated(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.updated_at, 0).single()
    }
}

/// Three-letter ISO currency code. PayRex currently settles in PHP only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    #[serde(rename = "PHP")]
    Php,
}

impl Currency {
    /// Wire value
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Php => "PHP",
        }
    }
}

/// Payment methods accepted by PayRex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Bank card
    Card,
    /// GCash wallet
    Gcash,
    /// Maya wallet
    Maya,
    /// QR Ph
    Qrph,
}

impl PaymentMethod {
    /// Wire value
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::Gcash => "gcash",
            Self::Maya => "maya",
            Self::Qrph => "qrph",
        }
    }
}

/// Per-method payment settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FormEncode)]
pub struct PaymentMethodOptions {
    #[form(key = "card")]
    pub card: CardOptions,
}

/// Card payment settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FormEncode)]
pub struct CardOptions {
    #[form(key = "capture_type")]
    pub capture_type: CaptureType,
    /// Card BINs allowed to pay
    #[form(key = "allowed_bins")]
    pub allowed_bins: Option<Vec<String>>,
    #[form(key = "allowed_funding")]
    pub allowed_funding: Option<Vec<AllowedFunding>>,
}

/// When a card payment is captured
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptureType {
    #[default]
    Automatic,
    Manual,
}

impl CaptureType {
    /// Wire value
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Automatic => "automatic",
            Self::Manual => "manual",
        }
    }
}

/// Card funding types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllowedFunding {
    Credit,
    Debit,
}

impl AllowedFunding {
    /// Wire value
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Credit => "credit",
            Self::Debit => "debit",
        }
    }
}

impl_form_encode_as_str!(Currency, PaymentMethod, CaptureType, AllowedFunding);

/// A page of resources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List<T> {
    /// Resources on this page
    pub data: Vec<T>,
    /// Whether more resources are available
    #[serde(default)]
    pub has_more: bool,
}

impl<T> List<T> {
    /// Id of the last resource, for use as the next `after` cursor.
    pub fn last_id(&self) -> Option<&str>
    where
        T: AsRef<BaseResource>,
    {
        self.data.last().map(|r| r.as_ref().id.as_str())
    }
}

/// A deleted resource of any type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletedResource {
    pub id: String,
    pub deleted: bool,
}

/// Cursor parameters shared by list endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, FormEncode)]
pub struct ListParams {
    #[form(key = "limit")]
    pub limit: Option<u32>,
    #[form(key = "before")]
    pub before: Option<String>,
    #[form(key = "after")]
    pub after: Option<String>,
}

impl ListParams {
    /// Empty list parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit the page size
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Resources before this id
    pub fn before(mut self, id: impl Into<String>) -> Self {
        self.before = Some(id.into());
        self
    }

    /// Resources after this id
    pub fn after(mut self, id: impl Into<String>) -> Self {
        self.after = Some(id.into());
        self
    }
}

/// Implement `AsRef<BaseResource>` for entities that flatten a `base` field.
macro_rules! impl_base_resource {
    ($($ty:ty),* $(,)?) => {
        $(
            impl AsRef<$crate::resources::BaseResource> for $ty {
                fn as_ref(&self) -> &$crate::resources::BaseResource {
                    &self.base
                }
            }
        )*
    };
}

pub(crate) use impl_base_resource;
