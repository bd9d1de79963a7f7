//! Webhook events

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

use crate::encode::impl_form_encode_as_str;
use crate::resources::{BaseResource, BillingStatement, CheckoutSession, PaymentIntent, Payout, Refund};
use crate::{PayrexError, Result};

/// An update in a PayRex account, delivered to webhook endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub base: BaseResource,
    pub event_type: EventType,
    /// Deliveries still outstanding for this event
    pub pending_webhooks: u32,
    /// Attribute values before the change, for `*.updated` events
    pub previous_attributes: HashMap<String, Value>,
    /// The resource the event is about
    pub payload: EventPayload,
}

/// The typed resource carried in an event's `data`.
#[derive(Debug, Clone, PartialEq)]
pub enum EventPayload {
    BillingStatement(Box<BillingStatement>),
    CheckoutSession(Box<CheckoutSession>),
    PaymentIntent(Box<PaymentIntent>),
    Payout(Box<Payout>),
    Refund(Box<Refund>),
}

impl EventPayload {
    /// Category of the carried resource.
    pub fn resource_type(&self) -> EventResourceType {
        match self {
            Self::BillingStatement(_) => EventResourceType::BillingStatement,
            Self::CheckoutSession(_) => EventResourceType::CheckoutSession,
            Self::PaymentIntent(_) => EventResourceType::PaymentIntent,
            Self::Payout(_) => EventResourceType::Payout,
            Self::Refund(_) => EventResourceType::Refund,
        }
    }

    fn decode(resource: EventResourceType, data: Value) -> serde_json::Result<Self> {
        Ok(match resource {
            EventResourceType::BillingStatement => {
                Self::BillingStatement(Box::new(serde_json::from_value(data)?))
            }
            EventResourceType::CheckoutSession => {
                Self::CheckoutSession(Box::new(serde_json::from_value(data)?))
            }
            EventResourceType::PaymentIntent => {
                Self::PaymentIntent(Box::new(serde_json::from_value(data)?))
            }
            EventResourceType::Payout => Self::Payout(Box::new(serde_json::from_value(data)?)),
            EventResourceType::Refund => Self::Refund(Box::new(serde_json::from_value(data)?)),
        })
    }
}

/// Wire shape of an event before `data` is dispatched.
#[derive(Deserialize)]
struct RawEvent {
    #[serde(flatten)]
    base: BaseResource,
    #[serde(rename = "type")]
    event_type: EventType,
    #[serde(default)]
    pending_webhooks: u32,
    #[serde(default)]
    previous_attributes: Option<HashMap<String, Value>>,
    data: Value,
}

impl Event {
    /// Decode an already-verified event body.
    ///
    /// `data.resource` selects the payload type; a missing or unknown value
    /// fails the whole decode.
    pub fn from_slice(payload: &[u8]) -> Result<Self> {
        let raw: RawEvent = serde_json::from_slice(payload).map_err(PayrexError::Decode)?;

        let discriminator = raw
            .data
            .get("resource")
            .and_then(Value::as_str)
            .unwrap_or_default();
        let resource = EventResourceType::from_wire(discriminator)
            .ok_or_else(|| PayrexError::UnrecognizedResource(discriminator.to_string()))?;

        let payload = EventPayload::decode(resource, raw.data).map_err(PayrexError::Decode)?;

        Ok(Self {
            base: raw.base,
            event_type: raw.event_type,
            pending_webhooks: raw.pending_webhooks,
            previous_attributes: raw.previous_attributes.unwrap_or_default(),
            payload,
        })
    }

    /// Category of the resource this event carries.
    pub fn resource_type(&self) -> EventResourceType {
        self.payload.resource_type()
    }

    /// The billing statement, if this event carries one.
    pub fn billing_statement(&self) -> Option<&BillingStatement> {
        match &self.payload {
            EventPayload::BillingStatement(statement) => Some(statement),
            _ => None,
        }
    }

    /// The checkout session, if this event carries one.
    pub fn checkout_session(&self) -> Option<&CheckoutSession> {
        match &self.payload {
            EventPayload::CheckoutSession(session) => Some(session),
            _ => None,
        }
    }

    /// The payment intent, if this event carries one.
    pub fn payment_intent(&self) -> Option<&PaymentIntent> {
        match &self.payload {
            EventPayload::PaymentIntent(intent) => Some(intent),
            _ => None,
        }
    }

    /// The payout, if this event carries one.
    pub fn payout(&self) -> Option<&Payout> {
        match &self.payload {
            EventPayload::Payout(payout) => Some(payout),
            _ => None,
        }
    }

    /// The refund, if this event carries one.
    pub fn refund(&self) -> Option<&Refund> {
        match &self.payload {
            EventPayload::Refund(refund) => Some(refund),
            _ => None,
        }
    }
}

/// Resource categories an event can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventResourceType {
    BillingStatement,
    CheckoutSession,
    PaymentIntent,
    Payout,
    Refund,
}

impl EventResourceType {
    /// Wire value of `data.resource`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BillingStatement => "billing_statement",
            Self::CheckoutSession => "checkout_session",
            Self::PaymentIntent => "payment_intent",
            Self::Payout => "payout",
            Self::Refund => "refund",
        }
    }

    /// Parse a `data.resource` value.
    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "billing_statement" => Some(Self::BillingStatement),
            "checkout_session" => Some(Self::CheckoutSession),
            "payment_intent" => Some(Self::PaymentIntent),
            "payout" => Some(Self::Payout),
            "refund" => Some(Self::Refund),
            _ => None,
        }
    }
}

impl fmt::Display for EventResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

macro_rules! event_types {
    ($($variant:ident => $wire:literal),* $(,)?) => {
        /// Event types a webhook endpoint can subscribe to.
        ///
        /// Types introduced after this release decode as [`EventType::Other`].
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum EventType {
            $($variant,)*
            Other(String),
        }

        impl EventType {
            /// Wire value
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $wire,)*
                    Self::Other(other) => other.as_str(),
                }
            }
        }

        impl From<&str> for EventType {
            fn from(value: &str) -> Self {
                match value {
                    $($wire => Self::$variant,)*
                    other => Self::Other(other.to_string()),
                }
            }
        }
    };
}

event_types! {
    BillingStatementCreated => "billing_statement.created",
    BillingStatementUpdated => "billing_statement.updated",
    BillingStatementDeleted => "billing_statement.deleted",
    BillingStatementFinalized => "billing_statement.finalized",
    BillingStatementSent => "billing_statement.sent",
    BillingStatementMarkedUncollectible => "billing_statement.marked_uncollectible",
    BillingStatementVoided => "billing_statement.voided",
    BillingStatementPaid => "billing_statement.paid",
    BillingStatementWillBeDue => "billing_statement.will_be_due",
    BillingStatementOverdue => "billing_statement.overdue",
    BillingStatementLineItemCreated => "billing_statement_line_item.created",
    BillingStatementLineItemUpdated => "billing_statement_line_item.updated",
    BillingStatementLineItemDeleted => "billing_statement_line_item.deleted",
    CheckoutSessionExpired => "checkout_session.expired",
    PaymentIntentAwaitingCapture => "payment_intent.awaiting_capture",
    PaymentIntentSucceeded => "payment_intent.succeeded",
    PayoutDeposited => "payout.deposited",
    RefundCreated => "refund.created",
    RefundUpdated => "refund.updated",
}

impl_form_encode_as_str!(EventType);

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for EventType {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EventType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(event_type: &str, data: &str) -> String {
        format!(
            r#"{{"id":"evt_1","resource":"event","type":"{event_type}","livemode":false,
                "pending_webhooks":1,"previous_attributes":{{}},
                "created_at":1700000000,"updated_at":1700000000,"data":{data}}}"#
        )
    }

    const PAYOUT: &str = r#"{"id":"po_1","resource":"payout","livemode":false,
        "created_at":1,"updated_at":1,"amount":100000,"net_amount":98000,
        "status":"successful","destination":{"account_name":"Dino Shop",
        "account_number":"1234","bank_name":"BDO"}}"#;

    #[test]
    fn test_payout_dispatch() {
        let body = envelope("payout.deposited", PAYOUT);
        let event = Event::from_slice(body.as_bytes()).unwrap();

        assert_eq!(event.event_type, EventType::PayoutDeposited);
        assert_eq!(event.resource_type(), EventResourceType::Payout);
        assert_eq!(event.payout().unwrap().net_amount, 98_000);
        assert!(event.refund().is_none());
        assert!(event.billing_statement().is_none());
    }

    #[test]
    fn test_missing_discriminator_fails() {
        let body = envelope("payout.deposited", r#"{"id":"po_1"}"#);

        assert!(matches!(
            Event::from_slice(body.as_bytes()),
            Err(PayrexError::UnrecognizedResource(r)) if r.is_empty()
        ));
    }

    #[test]
    fn test_payload_shape_mismatch_is_decode_error() {
        let body = envelope("refund.created", r#"{"resource":"refund","id":"re_1"}"#);

        assert!(matches!(
            Event::from_slice(body.as_bytes()),
            Err(PayrexError::Decode(_))
        ));
    }

    #[test]
    fn test_unknown_event_type_is_kept() {
        let parsed: EventType = serde_json::from_str("\"payout.delayed\"").unwrap();
        assert_eq!(parsed, EventType::Other("payout.delayed".to_string()));
        assert_eq!(parsed.as_str(), "payout.delayed");

        let known: EventType = serde_json::from_str("\"refund.updated\"").unwrap();
        assert_eq!(known, EventType::RefundUpdated);
    }

    #[test]
    fn test_resource_type_wire_values() {
        for resource in [
            EventResourceType::BillingStatement,
            EventResourceType::CheckoutSession,
            EventResourceType::PaymentIntent,
            EventResourceType::Payout,
            EventResourceType::Refund,
        ] {
            assert_eq!(EventResourceType::from_wire(resource.as_str()), Some(resource));
        }
        assert_eq!(EventResourceType::from_wire("event"), None);
    }
}
