//! Resource service facade.
//!
//! Each service binds a resource path to the shared [`Transport`] and maps
//! its operations onto HTTP verbs:
//!
//! | operation | request                        |
//! |-----------|--------------------------------|
//! | create    | `POST   /<resource>`           |
//! | retrieve  | `GET    /<resource>/<id>`      |
//! | list      | `GET    /<resource>?<query>`   |
//! | update    | `PUT    /<resource>/<id>`      |
//! | delete    | `DELETE /<resource>/<id>`      |
//! | action    | `POST   /<resource>/<id>/<op>` |
//!
//! Ids are sent as a single percent-encoded path segment.

use reqwest::Method;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;

use crate::Result;
use crate::encode::FormEncode;
use crate::resources::{DeletedResource, List};
use crate::transport::Transport;

mod billing;
mod checkout;
mod customers;
mod payments;
mod webhooks;

pub use billing::{BillingStatementLineItems, BillingStatements};
pub use checkout::CheckoutSessions;
pub use customers::{CustomerSessions, Customers};
pub use payments::{PaymentIntents, Payments, Payouts, Refunds};
pub use webhooks::WebhookEndpoints;

/// Generic CRUD operations for resource `T` under one path.
pub(crate) struct ResourceService<T> {
    transport: Transport,
    path: &'static str,
    _resource: PhantomData<fn() -> T>,
}

impl<T: DeserializeOwned> ResourceService<T> {
    pub(crate) fn new(transport: Transport, path: &'static str) -> Self {
        Self {
            transport,
            path,
            _resource: PhantomData,
        }
    }

    pub(crate) async fn create<P: FormEncode + Sync>(&self, params: &P) -> Result<T> {
        self.transport
            .send(Method::POST, &[self.path], Some(params))
            .await
    }

    pub(crate) async fn retrieve(&self, id: &str) -> Result<T> {
        self.transport
            .send(Method::GET, &[self.path, id], None)
            .await
    }

    pub(crate) async fn list<P: FormEncode + Sync>(&self, params: &P) -> Result<List<T>> {
        self.transport
            .send(Method::GET, &[self.path], Some(params))
            .await
    }

    pub(crate) async fn update<P: FormEncode + Sync>(&self, id: &str, params: &P) -> Result<T> {
        self.transport
            .send(Method::PUT, &[self.path, id], Some(params))
            .await
    }

    pub(crate) async fn delete(&self, id: &str) -> Result<DeletedResource> {
        self.transport
            .send(Method::DELETE, &[self.path, id], None)
            .await
    }

    /// `POST /<resource>/<id>/<action>`, optionally with a form body.
    pub(crate) async fn action(
        &self,
        id: &str,
        action: &str,
        params: Option<&(dyn FormEncode + Sync)>,
    ) -> Result<T> {
        self.transport
            .send(Method::POST, &[self.path, id, action], params)
            .await
    }

    /// `GET /<resource>/<id>/<sub>` returning a page of `U`.
    pub(crate) async fn list_nested<U, P>(&self, id: &str, sub: &str, params: &P) -> Result<List<U>>
    where
        U: DeserializeOwned,
        P: FormEncode + Sync,
    {
        self.transport
            .send(Method::GET, &[self.path, id, sub], Some(params))
            .await
    }
}

impl<T> Clone for ResourceService<T> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            path: self.path,
            _resource: PhantomData,
        }
    }
}

impl<T> std::fmt::Debug for ResourceService<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceService")
            .field("path", &self.path)
            .finish()
    }
}
