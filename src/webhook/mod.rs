//! Inbound webhook verification and event decoding.
//!
//! PayRex signs every delivery with the endpoint's secret and sends the
//! result in the `Payrex-Signature` header:
//!
//! ```text
//! Payrex-Signature: t=1700000000,v0=<hex test-mode hmac>,v1=<hex live-mode hmac>
//! ```
//!
//! The signature is an HMAC-SHA256 over `"<t>.<raw body>"`. Verification
//! happens on the raw bytes before any JSON is parsed, so always hand the
//! verifier the body exactly as it was received.
//!
//! # Example
//!
//! ```rust,ignore
//! use payrex::webhook::{EventPayload, WebhookVerifier};
//!
//! let verifier = WebhookVerifier::new(webhook_secret);
//! let event = verifier.construct_event_from_headers(&body, &headers)?;
//!
//! if let EventPayload::PaymentIntent(intent) = &event.payload {
//!     fulfil_order(&intent.base.id);
//! }
//! ```

mod event;
mod signature;

pub use event::{Event, EventPayload, EventResourceType, EventType};
pub use signature::{SIGNATURE_HEADER, WebhookVerifier, verify_and_decode};
