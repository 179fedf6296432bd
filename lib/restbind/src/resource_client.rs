//! Resource clients: bound methods and CRUD defaults over an [`HttpService`].

use serde::Serialize;
use tracing::{Instrument, Level, span};

use restbind_core::{
    Args, Decoded, RequestDescriptor, RequestSynthesizer, Resource, Result, Transport, args, crud,
};

use crate::HttpService;

/// Client of one resource.
///
/// Calls are synthesized from the resource bindings, sent through the
/// service interceptors, and decoded for the method media type.
///
/// # Example
///
/// ```no_run
/// use restbind::{HttpService, HyperTransport, Resource, ResourceClient};
/// use serde_json::json;
///
/// struct Users;
///
/// impl Resource for Users {
///     fn base_url(&self) -> &str {
///         "https://api.example.com/users"
///     }
/// }
///
/// # async fn run() -> restbind::Result<()> {
/// let users = ResourceClient::new(Users, HttpService::bare(HyperTransport::new()));
///
/// let alice = users.find_one(&42).await?;
/// let created = users.save(&json!({"name": "Bob"})).await?;
/// let active = users.find(Some(&json!({"active": true}))).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ResourceClient<R, T> {
    resource: R,
    service: HttpService<T>,
}

impl<R: Resource, T: Transport> ResourceClient<R, T> {
    /// Client of `resource` sending through `service`.
    #[must_use]
    pub const fn new(resource: R, service: HttpService<T>) -> Self {
        Self { resource, service }
    }

    /// The resource.
    #[must_use]
    pub const fn resource(&self) -> &R {
        &self.resource
    }

    /// The service calls go through.
    #[must_use]
    pub const fn service(&self) -> &HttpService<T> {
        &self.service
    }

    /// Build the request of `method` without sending it.
    pub fn request(&self, method: &str, args: &Args) -> Result<RequestDescriptor> {
        RequestSynthesizer::new(&self.resource).build(method, args)
    }

    /// Call the bound `method` with `args`.
    pub async fn invoke(&self, method: &str, args: &Args) -> Result<Decoded> {
        let span = span!(
            Level::INFO,
            "resource_call",
            method,
            base_url = self.resource.base_url()
        );

        RequestSynthesizer::new(&self.resource)
            .invoke(&self.service, method, args)
            .instrument(span)
            .await
    }

    /// `GET /{id}`.
    pub async fn find_one<I: Serialize + ?Sized>(&self, id: &I) -> Result<Decoded> {
        self.invoke(crud::FIND_ONE, &args![id]?).await
    }

    /// `POST` of `body` to the base URL.
    pub async fn save<B: Serialize + ?Sized>(&self, body: &B) -> Result<Decoded> {
        self.invoke(crud::SAVE, &args![body]?).await
    }

    /// `PUT /{id}` with `body`.
    pub async fn update<I, B>(&self, id: &I, body: &B) -> Result<Decoded>
    where
        I: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        self.invoke(crud::UPDATE, &args![id, body]?).await
    }

    /// `DELETE /{id}`.
    pub async fn delete<I: Serialize + ?Sized>(&self, id: &I) -> Result<Decoded> {
        self.invoke(crud::DELETE, &args![id]?).await
    }

    /// `GET` of the base URL, with an optional query object.
    pub async fn find<Q: Serialize + ?Sized>(&self, query: Option<&Q>) -> Result<Decoded> {
        self.invoke(crud::FIND, &args![query]?).await
    }
}
