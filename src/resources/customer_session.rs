//! Customer sessions

use serde::{Deserialize, Serialize};

use super::{BaseResource, impl_base_resource};
use crate::encode::FormEncode;

/// Short-lived session granting client-side access to a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerSession {
    #[serde(flatten)]
    pub base: BaseResource,
    pub customer_id: String,
    pub client_secret: String,
    #[serde(default)]
    pub components: Vec<CustomerSessionComponent>,
    #[serde(default)]
    pub expired: bool,
    pub expired_at: Option<i64>,
}

impl_base_resource!(CustomerSession);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerSessionComponent {
    pub component: String,
    pub feature: String,
    pub value: ComponentValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentValue {
    Enabled,
    Disabled,
}

/// Parameters for creating a customer session
#[derive(Debug, Clone, PartialEq, Eq, FormEncode)]
pub struct CustomerSessionCreateParams {
    #[form(key = "customer_id")]
    pub customer_id: String,
}
