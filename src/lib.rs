//! Typed client for the PayRex payments API.
//!
//! Provides typed resources, form-encoded requests built from annotated
//! parameter structs, structured API errors, and verified webhook events.
//!
//! ## Overview
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                           Client                             │
//! │  customers | payment_intents | refunds | billing_statements  │
//! └──────────────────────────────────────────────────────────────┘
//!                │ params (#[derive(FormEncode)])
//!                ▼
//! ┌──────────────────────────┐      ┌──────────────────────────┐
//! │        encode            │ ───▶ │        Transport         │
//! │  key / key[sub] / key[]  │      │  Basic auth, form body,  │
//! └──────────────────────────┘      │  2xx → T, else error     │
//!                                   └──────────────────────────┘
//!
//! raw body + Payrex-Signature ─▶ WebhookVerifier ─▶ Event { payload }
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use payrex::{Client, PaymentMethod};
//! use payrex::resources::PaymentIntentCreateParams;
//!
//! let client = Client::from_api_key(std::env::var("PAYREX_API_KEY")?)?;
//!
//! // ₱100.00 is 10000 centavos
//! let params = PaymentIntentCreateParams::new(10_000, vec![PaymentMethod::Gcash]);
//! let intent = client.payment_intents.create(&params).await?;
//!
//! match client.customers.retrieve("cus_missing").await {
//!     Err(payrex::PayrexError::Api(err)) => {
//!         for item in &err.errors {
//!             eprintln!("{}: {}", item.code, item.detail);
//!         }
//!     }
//!     other => { other?; }
//! }
//! ```

// Lets `#[derive(FormEncode)]` expand to `payrex::...` paths inside this crate.
extern crate self as payrex;

pub mod client;
pub mod config;
pub mod encode;
pub mod error;
pub mod resources;
pub mod services;
pub mod transport;
pub mod webhook;

pub use client::Client;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use encode::{FormEncode, FormValues};
pub use error::{ApiError, ApiErrorItem, PayrexError, Result, SignatureError};
pub use resources::{Currency, DeletedResource, List, ListParams, Metadata, PaymentMethod};
pub use transport::Transport;
pub use webhook::{Event, EventPayload, WebhookVerifier};
