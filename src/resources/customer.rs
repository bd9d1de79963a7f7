//! Customers

use serde::{Deserialize, Serialize};

use super::{BaseResource, Currency, Metadata, impl_base_resource};
use crate::encode::FormEncode;

/// A person or company paying your business.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(flatten)]
    pub base: BaseResource,
    pub currency: Currency,
    pub email: String,
    pub name: String,
    pub billing_statement_prefix: Option<String>,
    pub next_billing_statement_sequence_number: Option<String>,
    pub metadata: Option<Metadata>,
}

impl_base_resource!(Customer);

/// Parameters for creating a customer
#[derive(Debug, Clone, Default, PartialEq, Eq, FormEncode)]
pub struct CustomerCreateParams {
    #[form(key = "currency")]
    pub currency: Currency,
    #[form(key = "name")]
    pub name: String,
    #[form(key = "email")]
    pub email: String,
    #[form(key = "billing_statement_prefix")]
    pub billing_statement_prefix: Option<String>,
    #[form(key = "next_billing_statement_sequence_number")]
    pub next_billing_statement_sequence_number: Option<String>,
    #[form(key = "metadata")]
    pub metadata: Option<Metadata>,
}

impl CustomerCreateParams {
    /// Create parameters with the required fields
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            ..Default::default()
        }
    }

    /// Attach a metadata entry
    pub fn metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata
            .get_or_insert_with(Metadata::new)
            .insert(key.into(), value.into());
        self
    }
}

/// Parameters for updating a customer
#[derive(Debug, Clone, Default, PartialEq, Eq, FormEncode)]
pub struct CustomerUpdateParams {
    #[form(key = "currency")]
    pub currency: Option<Currency>,
    #[form(key = "name")]
    pub name: Option<String>,
    #[form(key = "email")]
    pub email: Option<String>,
    #[form(key = "billing_statement_prefix")]
    pub billing_statement_prefix: Option<String>,
    #[form(key = "next_billing_statement_sequence_number")]
    pub next_billing_statement_sequence_number: Option<String>,
    #[form(key = "metadata")]
    pub metadata: Option<Metadata>,
}

/// Parameters for listing customers
#[derive(Debug, Clone, Default, PartialEq, Eq, FormEncode)]
pub struct CustomerListParams {
    #[form(key = "limit")]
    pub limit: Option<u32>,
    #[form(key = "before")]
    pub before: Option<String>,
    #[form(key = "after")]
    pub after: Option<String>,
    #[form(key = "email")]
    pub email: Option<String>,
    #[form(key = "name")]
    pub name: Option<String>,
    #[form(key = "metadata")]
    pub metadata: Option<Metadata>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::encode;

    #[test]
    fn test_create_params_encoding() {
        let params = CustomerCreateParams::new("Juan dela Cruz", "juan@example.com")
            .metadata("tier", "gold");

        assert_eq!(
            encode(&params).to_string(),
            "currency=PHP&name=Juan+dela+Cruz&email=juan%40example.com&metadata%5Btier%5D=gold"
        );
    }

    #[test]
    fn test_update_params_only_sends_present_fields() {
        let params = CustomerUpdateParams {
            email: Some("new@example.com".into()),
            ..Default::default()
        };

        let values = encode(&params);
        assert_eq!(values.len(), 1);
        assert_eq!(values.get("email"), Some("new@example.com"));
    }

    #[test]
    fn test_customer_decode() {
        let json = r#"{
            "id": "cus_123",
            "livemode": false,
            "created_at": 1700000000,
            "updated_at": 1700000000,
            "currency": "PHP",
            "email": "juan@example.com",
            "name": "Juan",
            "billing_statement_prefix": "ABC",
            "next_billing_statement_sequence_number": "1",
            "metadata": null
        }"#;

        let customer: Customer = serde_json::from_str(json).unwrap();
        assert_eq!(customer.base.id, "cus_123");
        assert_eq!(customer.currency, Currency::Php);
        assert!(customer.metadata.is_none());
    }
}
