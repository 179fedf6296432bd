//! The transport capability consumed by the request synthesizer.
//!
//! restbind does not perform network I/O itself: a [`Transport`] receives a
//! finished [`RequestDescriptor`] and reports a [`Response`] or an error.
//! Implement it to plug another HTTP client, or to fake the network in tests.

use std::future::Future;
use std::sync::Arc;

use crate::{RequestDescriptor, Response, Result};

/// Issues one request and resolves exactly once.
///
/// Implementations report every HTTP status as a [`Response`]; turning a
/// non-2xx status into an error is done by the caller. Dropping the returned
/// future must abort the request when the underlying client supports it.
///
/// # Example
///
/// ```
/// use bytes::Bytes;
/// use restbind_core::{Headers, RequestDescriptor, Response, Result, Transport};
///
/// struct Echo;
///
/// impl Transport for Echo {
///     async fn send(&self, request: RequestDescriptor) -> Result<Response> {
///         let body = request.body().unwrap_or_default().to_string();
///         Ok(Response::new(200, Headers::new(), Bytes::from(body)))
///     }
/// }
/// ```
pub trait Transport: Send + Sync {
    /// Send the request.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be delivered:
    /// - Network errors
    /// - TLS errors
    /// - Timeouts
    /// - A URL the client cannot use
    fn send(&self, request: RequestDescriptor) -> impl Future<Output = Result<Response>> + Send;
}

impl<T: Transport> Transport for &T {
    fn send(&self, request: RequestDescriptor) -> impl Future<Output = Result<Response>> + Send {
        (**self).send(request)
    }
}

impl<T: Transport> Transport for Arc<T> {
    fn send(&self, request: RequestDescriptor) -> impl Future<Output = Result<Response>> + Send {
        (**self).send(request)
    }
}
