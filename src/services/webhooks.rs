//! Webhook endpoint service

use super::ResourceService;
use crate::Result;
use crate::resources::{
    DeletedResource, List, WebhookCreateParams, WebhookEndpoint, WebhookListParams,
    WebhookUpdateParams,
};
use crate::transport::Transport;

/// `/webhooks`
#[derive(Debug, Clone)]
pub struct WebhookEndpoints {
    service: ResourceService<WebhookEndpoint>,
}

impl WebhookEndpoints {
    pub(crate) fn new(transport: Transport) -> Self {
        Self {
            service: ResourceService::new(transport, "webhooks"),
        }
    }

    /// Register an endpoint. The response carries its signing secret.
    pub async fn create(&self, params: &WebhookCreateParams) -> Result<WebhookEndpoint> {
        self.service.create(params).await
    }

    /// Retrieve a webhook endpoint by id.
    pub async fn retrieve(&self, id: &str) -> Result<WebhookEndpoint> {
        self.service.retrieve(id).await
    }

    /// List webhook endpoints.
    pub async fn list(&self, params: &WebhookListParams) -> Result<List<WebhookEndpoint>> {
        self.service.list(params).await
    }

    /// Update an endpoint's URL, description or events.
    pub async fn update(&self, id: &str, params: &WebhookUpdateParams) -> Result<WebhookEndpoint> {
        self.service.update(id, params).await
    }

    /// Resume deliveries to an endpoint.
    pub async fn enable(&self, id: &str) -> Result<WebhookEndpoint> {
        self.service.action(id, "enable", None).await
    }

    /// Stop deliveries to an endpoint.
    pub async fn disable(&self, id: &str) -> Result<WebhookEndpoint> {
        self.service.action(id, "disable", None).await
    }

    /// Delete a webhook endpoint.
    pub async fn delete(&self, id: &str) -> Result<DeletedResource> {
        self.service.delete(id).await
    }
}
