//! Interceptors and the interceptor pipeline.
//!
//! An [`Interceptor`] observes or replaces every outgoing request, every
//! successful response and every transport error, whatever resource issued
//! them. The [`InterceptorPipeline`] folds its interceptors left to right:
//! each one receives the output of its predecessor.
//!
//! Hooks are synchronous. A hook an interceptor does not override is the
//! identity, which is the same as skipping that interceptor.
//!
//! # Example
//!
//! ```
//! use restbind_core::interceptor::{self, InterceptorPipeline};
//! use restbind_core::{Method, RequestDescriptor};
//!
//! let pipeline = InterceptorPipeline::builder()
//!     .interceptor(interceptor::on_request(|mut request: RequestDescriptor| {
//!         request.headers_mut().append("X-Client", "restbind");
//!         request
//!     }))
//!     .build();
//!
//! let request = RequestDescriptor::builder(Method::Get, "/users").build();
//! let request = pipeline.apply_on_request(request);
//! assert_eq!(request.header("X-Client"), Some("restbind"));
//! ```

use std::fmt;
use std::sync::Arc;

use crate::{Error, RequestDescriptor, Response, Result, Transport};

/// Cross-cutting hooks applied to every call.
pub trait Interceptor: Send + Sync {
    /// Replace the request before it is sent.
    fn on_request(&self, request: RequestDescriptor) -> RequestDescriptor {
        request
    }

    /// Replace a successful response before it is decoded.
    fn on_response(&self, response: Response) -> Response {
        response
    }

    /// Replace a transport error before it reaches the caller.
    fn on_response_error(&self, error: Error) -> Error {
        error
    }
}

impl<I: Interceptor + ?Sized> Interceptor for Arc<I> {
    fn on_request(&self, request: RequestDescriptor) -> RequestDescriptor {
        (**self).on_request(request)
    }

    fn on_response(&self, response: Response) -> Response {
        (**self).on_response(response)
    }

    fn on_response_error(&self, error: Error) -> Error {
        (**self).on_response_error(error)
    }
}

/// Ordered, immutable list of interceptors.
///
/// Cloning is cheap: clones share the same interceptors.
#[derive(Clone, Default)]
pub struct InterceptorPipeline {
    interceptors: Arc<[Arc<dyn Interceptor>]>,
}

impl fmt::Debug for InterceptorPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InterceptorPipeline")
            .field("interceptors", &self.interceptors.len())
            .finish()
    }
}

impl InterceptorPipeline {
    /// Pipeline over `interceptors`, in the given order.
    pub fn new(interceptors: impl IntoIterator<Item = Arc<dyn Interceptor>>) -> Self {
        Self {
            interceptors: interceptors.into_iter().collect(),
        }
    }

    /// Pipeline without interceptor.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a new builder.
    #[must_use]
    pub fn builder() -> InterceptorPipelineBuilder {
        InterceptorPipelineBuilder::default()
    }

    /// Number of interceptors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.interceptors.len()
    }

    /// No interceptor.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.interceptors.is_empty()
    }

    /// Fold the request through every `on_request` hook.
    #[must_use]
    pub fn apply_on_request(&self, request: RequestDescriptor) -> RequestDescriptor {
        self.interceptors
            .iter()
            .fold(request, |request, interceptor| interceptor.on_request(request))
    }

    /// Fold a successful response through every `on_response` hook.
    #[must_use]
    pub fn apply_on_response(&self, response: Response) -> Response {
        self.interceptors
            .iter()
            .fold(response, |response, interceptor| {
                interceptor.on_response(response)
            })
    }

    /// Fold a transport error through every `on_response_error` hook.
    #[must_use]
    pub fn apply_on_response_error(&self, error: Error) -> Error {
        self.interceptors
            .iter()
            .fold(error, |error, interceptor| {
                interceptor.on_response_error(error)
            })
    }

    /// Send `request` through `transport` with every hook applied.
    ///
    /// A non-2xx response is turned into [`Error::Http`] first, so it goes
    /// through the error chain. The error chain may replace the error but the
    /// call still fails.
    pub async fn execute<T: Transport>(
        &self,
        transport: &T,
        request: RequestDescriptor,
    ) -> Result<Response> {
        let request = self.apply_on_request(request);
        match transport
            .send(request)
            .await
            .and_then(Response::error_for_status)
        {
            Ok(response) => Ok(self.apply_on_response(response)),
            Err(error) => Err(self.apply_on_response_error(error)),
        }
    }
}

/// Builder for [`InterceptorPipeline`].
#[derive(Default)]
pub struct InterceptorPipelineBuilder {
    interceptors: Vec<Arc<dyn Interceptor>>,
}

impl fmt::Debug for InterceptorPipelineBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InterceptorPipelineBuilder")
            .field("interceptors", &self.interceptors.len())
            .finish()
    }
}

impl InterceptorPipelineBuilder {
    /// Add an interceptor after the ones already added.
    #[must_use]
    pub fn interceptor(mut self, interceptor: impl Interceptor + 'static) -> Self {
        self.interceptors.push(Arc::new(interceptor));
        self
    }

    /// Add a shared interceptor after the ones already added.
    #[must_use]
    pub fn shared(mut self, interceptor: Arc<dyn Interceptor>) -> Self {
        self.interceptors.push(interceptor);
        self
    }

    /// Freeze the interceptor list.
    #[must_use]
    pub fn build(self) -> InterceptorPipeline {
        InterceptorPipeline::new(self.interceptors)
    }
}

/// Interceptor with only an `on_request` hook, see [`on_request`].
#[derive(Debug, Clone, Copy)]
pub struct OnRequest<F>(F);

/// Interceptor with only an `on_response` hook, see [`on_response`].
#[derive(Debug, Clone, Copy)]
pub struct OnResponse<F>(F);

/// Interceptor with only an `on_response_error` hook, see [`on_response_error`].
#[derive(Debug, Clone, Copy)]
pub struct OnResponseError<F>(F);

/// Interceptor from a request hook.
pub fn on_request<F>(hook: F) -> OnRequest<F>
where
    F: Fn(RequestDescriptor) -> RequestDescriptor + Send + Sync,
{
    OnRequest(hook)
}

/// Interceptor from a response hook.
pub fn on_response<F>(hook: F) -> OnResponse<F>
where
    F: Fn(Response) -> Response + Send + Sync,
{
    OnResponse(hook)
}

/// Interceptor from an error hook.
pub fn on_response_error<F>(hook: F) -> OnResponseError<F>
where
    F: Fn(Error) -> Error + Send + Sync,
{
    OnResponseError(hook)
}

impl<F> Interceptor for OnRequest<F>
where
    F: Fn(RequestDescriptor) -> RequestDescriptor + Send + Sync,
{
    fn on_request(&self, request: RequestDescriptor) -> RequestDescriptor {
        (self.0)(request)
    }
}

impl<F> Interceptor for OnResponse<F>
where
    F: Fn(Response) -> Response + Send + Sync,
{
    fn on_response(&self, response: Response) -> Response {
        (self.0)(response)
    }
}

impl<F> Interceptor for OnResponseError<F>
where
    F: Fn(Error) -> Error + Send + Sync,
{
    fn on_response_error(&self, error: Error) -> Error {
        (self.0)(error)
    }
}
