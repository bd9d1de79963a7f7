//! Payment intent, payment, payout and refund services

use super::ResourceService;
use crate::Result;
use crate::resources::{
    List, ListParams, Payment, PaymentIntent, PaymentIntentCaptureParams,
    PaymentIntentCreateParams, PaymentUpdateParams, Payout, PayoutTransaction, Refund,
    RefundCreateParams, RefundUpdateParams,
};
use crate::transport::Transport;

/// `/payment_intents`
#[derive(Debug, Clone)]
pub struct PaymentIntents {
    service: ResourceService<PaymentIntent>,
}

impl PaymentIntents {
    pub(crate) fn new(transport: Transport) -> Self {
        Self {
            service: ResourceService::new(transport, "payment_intents"),
        }
    }

    /// Create a payment intent.
    pub async fn create(&self, params: &PaymentIntentCreateParams) -> Result<PaymentIntent> {
        self.service.create(params).await
    }

    /// Retrieve a payment intent by id.
    pub async fn retrieve(&self, id: &str) -> Result<PaymentIntent> {
        self.service.retrieve(id).await
    }

    /// Cancel a payment intent that has not been paid yet.
    pub async fn cancel(&self, id: &str) -> Result<PaymentIntent> {
        self.service.action(id, "cancel", None).await
    }

    /// Capture an `awaiting_capture` payment intent.
    pub async fn capture(
        &self,
        id: &str,
        params: &PaymentIntentCaptureParams,
    ) -> Result<PaymentIntent> {
        self.service.action(id, "capture", Some(params)).await
    }
}

/// `/payments`
#[derive(Debug, Clone)]
pub struct Payments {
    service: ResourceService<Payment>,
}

impl Payments {
    pub(crate) fn new(transport: Transport) -> Self {
        Self {
            service: ResourceService::new(transport, "payments"),
        }
    }

    /// Retrieve a payment by id.
    pub async fn retrieve(&self, id: &str) -> Result<Payment> {
        self.service.retrieve(id).await
    }

    /// Update a payment's description or metadata.
    pub async fn update(&self, id: &str, params: &PaymentUpdateParams) -> Result<Payment> {
        self.service.update(id, params).await
    }
}

/// `/payouts`
#[derive(Debug, Clone)]
pub struct Payouts {
    service: ResourceService<Payout>,
}

impl Payouts {
    pub(crate) fn new(transport: Transport) -> Self {
        Self {
            service: ResourceService::new(transport, "payouts"),
        }
    }

    /// List the payments, refunds and adjustments settled by a payout.
    pub async fn list_transactions(
        &self,
        id: &str,
        params: &ListParams,
    ) -> Result<List<PayoutTransaction>> {
        self.service.list_nested(id, "transactions", params).await
    }
}

/// `/refunds`
#[derive(Debug, Clone)]
pub struct Refunds {
    service: ResourceService<Refund>,
}

impl Refunds {
    pub(crate) fn new(transport: Transport) -> Self {
        Self {
            service: ResourceService::new(transport, "refunds"),
        }
    }

    /// Refund part or all of a paid payment.
    pub async fn create(&self, params: &RefundCreateParams) -> Result<Refund> {
        self.service.create(params).await
    }

    /// Update a refund's metadata.
    pub async fn update(&self, id: &str, params: &RefundUpdateParams) -> Result<Refund> {
        self.service.update(id, params).await
    }
}
