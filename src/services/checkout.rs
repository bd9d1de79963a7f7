//! Checkout session service

use super::ResourceService;
use crate::Result;
use crate::resources::{CheckoutSession, CheckoutSessionCreateParams, CheckoutSessionListParams, List};
use crate::transport::Transport;

/// `/checkout_sessions`
#[derive(Debug, Clone)]
pub struct CheckoutSessions {
    service: ResourceService<CheckoutSession>,
}

impl CheckoutSessions {
    pub(crate) fn new(transport: Transport) -> Self {
        Self {
            service: ResourceService::new(transport, "checkout_sessions"),
        }
    }

    /// Create a checkout session.
    pub async fn create(&self, params: &CheckoutSessionCreateParams) -> Result<CheckoutSession> {
        self.service.create(params).await
    }

    /// Retrieve a checkout session by id.
    pub async fn retrieve(&self, id: &str) -> Result<CheckoutSession> {
        self.service.retrieve(id).await
    }

    /// List checkout sessions.
    pub async fn list(&self, params: &CheckoutSessionListParams) -> Result<List<CheckoutSession>> {
        self.service.list(params).await
    }

    /// Expire an active session so it can no longer be paid.
    pub async fn expire(&self, id: &str) -> Result<CheckoutSession> {
        self.service.action(id, "expire", None).await
    }
}
