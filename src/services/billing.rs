//! Billing statement services

use super::ResourceService;
use crate::Result;
use crate::resources::{
    BillingStatement, BillingStatementCreateParams, BillingStatementLineItem,
    BillingStatementLineItemCreateParams, BillingStatementLineItemUpdateParams,
    BillingStatementListParams, BillingStatementUpdateParams, DeletedResource, List,
};
use crate::transport::Transport;

/// `/billing_statements`
#[derive(Debug, Clone)]
pub struct BillingStatements {
    service: ResourceService<BillingStatement>,
}

impl BillingStatements {
    pub(crate) fn new(transport: Transport) -> Self {
        Self {
            service: ResourceService::new(transport, "billing_statements"),
        }
    }

    /// Create a draft billing statement.
    pub async fn create(&self, params: &BillingStatementCreateParams) -> Result<BillingStatement> {
        self.service.create(params).await
    }

    /// Retrieve a billing statement by id.
    pub async fn retrieve(&self, id: &str) -> Result<BillingStatement> {
        self.service.retrieve(id).await
    }

    /// List billing statements.
    pub async fn list(&self, params: &BillingStatementListParams) -> Result<List<BillingStatement>> {
        self.service.list(params).await
    }

    /// Update a draft billing statement.
    pub async fn update(
        &self,
        id: &str,
        params: &BillingStatementUpdateParams,
    ) -> Result<BillingStatement> {
        self.service.update(id, params).await
    }

    /// Delete a draft billing statement.
    pub async fn delete(&self, id: &str) -> Result<DeletedResource> {
        self.service.delete(id).await
    }

    /// Move a draft statement to `open`.
    pub async fn finalize(&self, id: &str) -> Result<BillingStatement> {
        self.service.action(id, "finalize", None).await
    }

    /// Mark an open statement as uncollectible.
    pub async fn mark_uncollectible(&self, id: &str) -> Result<BillingStatement> {
        self.service.action(id, "mark_uncollectible", None).await
    }

    /// Email an open statement to its customer.
    pub async fn send(&self, id: &str) -> Result<BillingStatement> {
        self.service.action(id, "send", None).await
    }

    /// Void an open statement.
    pub async fn void(&self, id: &str) -> Result<BillingStatement> {
        self.service.action(id, "void", None).await
    }
}

/// `/billing_statement_line_items`
#[derive(Debug, Clone)]
pub struct BillingStatementLineItems {
    service: ResourceService<BillingStatementLineItem>,
}

impl BillingStatementLineItems {
    pub(crate) fn new(transport: Transport) -> Self {
        Self {
            service: ResourceService::new(transport, "billing_statement_line_items"),
        }
    }

    /// Add a line item to a draft statement.
    pub async fn create(
        &self,
        params: &BillingStatementLineItemCreateParams,
    ) -> Result<BillingStatementLineItem> {
        self.service.create(params).await
    }

    /// Update a line item.
    pub async fn update(
        &self,
        id: &str,
        params: &BillingStatementLineItemUpdateParams,
    ) -> Result<BillingStatementLineItem> {
        self.service.update(id, params).await
    }

    /// Remove a line item.
    pub async fn delete(&self, id: &str) -> Result<DeletedResource> {
        self.service.delete(id).await
    }
}
