//! # Chapter 2: Interceptors
//!
//! Cross-cutting behavior for every call, whatever the resource.
//!
//! ## Installing Interceptors
//!
//! Interceptors are given to the [`HttpService`](crate::HttpService) once, in
//! order. Each hook receives the output of the previous interceptor.
//!
//! ```ignore
//! use restbind::interceptors::{BearerAuthInterceptor, LoggingInterceptor};
//! use restbind::prelude::*;
//!
//! let service = HttpService::new(
//!     HyperTransport::new(),
//!     InterceptorPipeline::builder()
//!         .interceptor(LoggingInterceptor::new())
//!         .interceptor(BearerAuthInterceptor::new("my-secret-token"))
//!         .build(),
//! );
//! ```
//!
//! ## Built-in Interceptors
//!
//! | Interceptor | Feature | Effect |
//! |-------------|---------|--------|
//! | `LoggingInterceptor` | - | `tracing` events for requests, responses, errors |
//! | `BearerAuthInterceptor` | - | `Authorization: Bearer <token>` |
//! | `BasicAuthInterceptor` | `basic-auth` | `Authorization: Basic <base64>` |
//!
//! ## Writing Your Own
//!
//! Implement only the hooks you need, the others are the identity:
//!
//! ```ignore
//! struct TenantHeader(String);
//!
//! impl Interceptor for TenantHeader {
//!     fn on_request(&self, mut request: RequestDescriptor) -> RequestDescriptor {
//!         request.headers_mut().append("X-Tenant", self.0.clone());
//!         request
//!     }
//! }
//! ```
//!
//! Or use a closure:
//!
//! ```ignore
//! use restbind::interceptors::on_response_error;
//!
//! let unauthorized = on_response_error(|error: Error| match error.status() {
//!     Some(401) => Error::connection("session expired"),
//!     _ => error,
//! });
//! ```
//!
//! ## Errors
//!
//! Hooks are synchronous. A non-2xx status becomes
//! [`Error::Http`](crate::Error::Http) before the error hooks run, and the
//! error hooks may replace an error but never turn it into a success.
//!
//! Binding errors, such as a missing path argument, are reported before any
//! request is sent and do not go through the interceptors:
//!
//! ```ignore
//! match users.invoke("find_one", &Args::new()).await {
//!     Err(e) if e.is_binding() => eprintln!("bad call: {e}"),
//!     Err(e) if e.is_server_error() => eprintln!("server error: {e}"),
//!     Err(e) => eprintln!("other error: {e}"),
//!     Ok(value) => println!("{value:?}"),
//! }
//! ```
