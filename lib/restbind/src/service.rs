//! Intercepted HTTP service.

use restbind_core::{InterceptorPipeline, Method, RequestDescriptor, Response, Result, Transport};

/// A transport wrapped in an interceptor pipeline.
///
/// Every request goes through `on_request`, is sent, and comes back through
/// `on_response` when the status is 2xx or through `on_response_error`
/// otherwise. `HttpService` is itself a [`Transport`], so resources send
/// through it.
///
/// # Example
///
/// ```no_run
/// use restbind::interceptors::{BearerAuthInterceptor, LoggingInterceptor};
/// use restbind::{HttpService, HyperTransport, InterceptorPipeline};
///
/// # async fn run() -> restbind::Result<()> {
/// let service = HttpService::new(
///     HyperTransport::new(),
///     InterceptorPipeline::builder()
///         .interceptor(LoggingInterceptor::new())
///         .interceptor(BearerAuthInterceptor::new("my-token"))
///         .build(),
/// );
///
/// let response = service.get("https://api.example.com/health").await?;
/// println!("{}", response.status());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpService<T> {
    transport: T,
    pipeline: InterceptorPipeline,
}

impl<T: Transport> HttpService<T> {
    /// Service sending through `transport` with the given interceptors.
    #[must_use]
    pub const fn new(transport: T, pipeline: InterceptorPipeline) -> Self {
        Self {
            transport,
            pipeline,
        }
    }

    /// Service without interceptor.
    #[must_use]
    pub fn bare(transport: T) -> Self {
        Self::new(transport, InterceptorPipeline::empty())
    }

    /// The underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// The interceptor pipeline.
    #[must_use]
    pub const fn pipeline(&self) -> &InterceptorPipeline {
        &self.pipeline
    }

    /// Send a request through the interceptors.
    ///
    /// A non-2xx status is an [`Error::Http`](crate::Error::Http).
    pub async fn request(&self, request: RequestDescriptor) -> Result<Response> {
        self.pipeline.execute(&self.transport, request).await
    }

    /// `GET url`.
    pub async fn get(&self, url: impl Into<String>) -> Result<Response> {
        self.request(RequestDescriptor::builder(Method::Get, url).build())
            .await
    }

    /// `DELETE url`.
    pub async fn delete(&self, url: impl Into<String>) -> Result<Response> {
        self.request(RequestDescriptor::builder(Method::Delete, url).build())
            .await
    }

    /// `HEAD url`.
    pub async fn head(&self, url: impl Into<String>) -> Result<Response> {
        self.request(RequestDescriptor::builder(Method::Head, url).build())
            .await
    }

    /// `POST url` with `body`.
    pub async fn post(&self, url: impl Into<String>, body: impl Into<String>) -> Result<Response> {
        self.with_body(Method::Post, url, body).await
    }

    /// `PUT url` with `body`.
    pub async fn put(&self, url: impl Into<String>, body: impl Into<String>) -> Result<Response> {
        self.with_body(Method::Put, url, body).await
    }

    /// `PATCH url` with `body`.
    pub async fn patch(&self, url: impl Into<String>, body: impl Into<String>) -> Result<Response> {
        self.with_body(Method::Patch, url, body).await
    }

    async fn with_body(
        &self,
        method: Method,
        url: impl Into<String>,
        body: impl Into<String>,
    ) -> Result<Response> {
        self.request(RequestDescriptor::builder(method, url).body(body).build())
            .await
    }
}

impl<T: Transport> Transport for HttpService<T> {
    async fn send(&self, request: RequestDescriptor) -> Result<Response> {
        self.request(request).await
    }
}
