//! Customer services

use super::ResourceService;
use crate::Result;
use crate::resources::{
    Customer, CustomerCreateParams, CustomerListParams, CustomerSession,
    CustomerSessionCreateParams, CustomerUpdateParams, DeletedResource, List,
};
use crate::transport::Transport;

/// `/customers`
#[derive(Debug, Clone)]
pub struct Customers {
    service: ResourceService<Customer>,
}

impl Customers {
    pub(crate) fn new(transport: Transport) -> Self {
        Self {
            service: ResourceService::new(transport, "customers"),
        }
    }

    /// Create a customer.
    pub async fn create(&self, params: &CustomerCreateParams) -> Result<Customer> {
        self.service.create(params).await
    }

    /// Retrieve a customer by id.
    pub async fn retrieve(&self, id: &str) -> Result<Customer> {
        self.service.retrieve(id).await
    }

    /// List customers, newest first.
    pub async fn list(&self, params: &CustomerListParams) -> Result<List<Customer>> {
        self.service.list(params).await
    }

    /// Update a customer.
    pub async fn update(&self, id: &str, params: &CustomerUpdateParams) -> Result<Customer> {
        self.service.update(id, params).await
    }

    /// Delete a customer.
    pub async fn delete(&self, id: &str) -> Result<DeletedResource> {
        self.service.delete(id).await
    }
}

/// `/customer_sessions`
#[derive(Debug, Clone)]
pub struct CustomerSessions {
    service: ResourceService<CustomerSession>,
}

impl CustomerSessions {
    pub(crate) fn new(transport: Transport) -> Self {
        Self {
            service: ResourceService::new(transport, "customer_sessions"),
        }
    }

    /// Create a session for client-side customer access.
    pub async fn create(&self, params: &CustomerSessionCreateParams) -> Result<CustomerSession> {
        self.service.create(params).await
    }

    /// Retrieve a customer session by id.
    pub async fn retrieve(&self, id: &str) -> Result<CustomerSession> {
        self.service.retrieve(id).await
    }
}
