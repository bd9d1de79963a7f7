//! The PayRex client.

use tracing::debug;

use crate::services::{
    BillingStatementLineItems, BillingStatements, CheckoutSessions, CustomerSessions, Customers,
    PaymentIntents, Payments, Payouts, Refunds, WebhookEndpoints,
};
use crate::transport::Transport;
use crate::{ClientConfig, Result};

/// Entry point to every PayRex resource.
///
/// All services share one [`Transport`], so cloning the client or any of its
/// services is cheap and the clones may be used from many tasks at once.
#[derive(Debug, Clone)]
pub struct Client {
    transport: Transport,
    pub billing_statements: BillingStatements,
    pub billing_statement_line_items: BillingStatementLineItems,
    pub checkout_sessions: CheckoutSessions,
    pub customers: Customers,
    pub customer_sessions: CustomerSessions,
    pub payment_intents: PaymentIntents,
    pub payments: Payments,
    pub payouts: Payouts,
    pub refunds: Refunds,
    pub webhooks: WebhookEndpoints,
}

impl Client {
    /// Create a client from a validated configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = Transport::new(config)?;

        debug!(base_url = %transport.config().base_url, "PayRex client created");

        Ok(Self {
            billing_statements: BillingStatements::new(transport.clone()),
            billing_statement_line_items: BillingStatementLineItems::new(transport.clone()),
            checkout_sessions: CheckoutSessions::new(transport.clone()),
            customers: Customers::new(transport.clone()),
            customer_sessions: CustomerSessions::new(transport.clone()),
            payment_intents: PaymentIntents::new(transport.clone()),
            payments: Payments::new(transport.clone()),
            payouts: Payouts::new(transport.clone()),
            refunds: Refunds::new(transport.clone()),
            webhooks: WebhookEndpoints::new(transport.clone()),
            transport,
        })
    }

    /// Create a client for the production API with default settings.
    pub fn from_api_key(api_key: impl Into<String>) -> Result<Self> {
        Self::new(ClientConfig::builder().api_key(api_key).build()?)
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        self.transport.config()
    }

    /// The shared transport, for endpoints without a typed service.
    pub fn transport(&self) -> &Transport {
        &self.transport
    }
}
