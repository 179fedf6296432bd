//! Built-in interceptors.
//!
//! Interceptors are installed once, in order, in an
//! [`InterceptorPipeline`](crate::InterceptorPipeline); each one sees the
//! output of its predecessor.
//!
//! # Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `basic-auth` | [`BasicAuthInterceptor`] |
//!
//! # Available Interceptors
//!
//! - [`LoggingInterceptor`] - Logs requests, responses and errors using `tracing`
//! - [`BearerAuthInterceptor`] - Sets `Authorization: Bearer <token>`
//! - [`BasicAuthInterceptor`] - Sets `Authorization: Basic <base64>`
//! - [`on_request`], [`on_response`], [`on_response_error`] - Single-hook interceptors from closures
//!
//! # Example
//!
//! ```
//! use restbind::InterceptorPipeline;
//! use restbind::interceptors::{BearerAuthInterceptor, LoggingInterceptor, on_response_error};
//!
//! let pipeline = InterceptorPipeline::builder()
//!     .interceptor(LoggingInterceptor::debug())
//!     .interceptor(BearerAuthInterceptor::new("secret"))
//!     .interceptor(on_response_error(|error: restbind::Error| error))
//!     .build();
//!
//! assert_eq!(pipeline.len(), 3);
//! ```

#[cfg(feature = "basic-auth")]
mod basic_auth;
mod bearer_auth;
mod logging;

#[cfg(feature = "basic-auth")]
pub use basic_auth::BasicAuthInterceptor;
pub use bearer_auth::BearerAuthInterceptor;
pub use logging::{LogLevel, LoggingInterceptor};

pub use restbind_core::interceptor::{
    OnRequest, OnResponse, OnResponseError, on_request, on_response, on_response_error,
};
