//! Declarative REST resources for Rust.
//!
//! Describe a remote collection once, as a base URL and a set of method
//! bindings, then call its methods: restbind builds the request, runs it
//! through an interceptor pipeline, and decodes the response.
//!
//! # Example
//!
//! ```no_run
//! use restbind::prelude::*;
//! use restbind::interceptors::LoggingInterceptor;
//!
//! #[derive(Debug, Deserialize)]
//! pub struct User {
//!     id: u64,
//!     name: String,
//! }
//!
//! struct Users;
//!
//! impl Resource for Users {
//!     fn base_url(&self) -> &str {
//!         "https://api.example.com/users"
//!     }
//! }
//!
//! # async fn run() -> restbind::Result<()> {
//! let service = HttpService::new(
//!     HyperTransport::new(),
//!     InterceptorPipeline::builder()
//!         .interceptor(LoggingInterceptor::new())
//!         .build(),
//! );
//! let users = ResourceClient::new(Users, service);
//!
//! let user: User = users.find_one(&42).await?.deserialize()?;
//! # Ok(())
//! # }
//! ```
//!
//! See the [tutorial][_tutorial] for a complete guide.

pub mod _tutorial;
mod config;
mod connector;
pub mod interceptors;
pub mod prelude;
mod resource_client;
mod service;
mod transport;

pub use config::{TransportConfig, TransportConfigBuilder};
pub use resource_client::ResourceClient;
pub use service::HttpService;
pub use transport::HyperTransport;

// Re-export core types
pub use restbind_core::{
    Args, Decoded, Error, Headers, Interceptor, InterceptorPipeline, InterceptorPipelineBuilder,
    MediaType, Method, MethodBinding, MethodBindingSet, MethodBindingSetBuilder, ParamRole,
    ParameterBinding, PathTemplate, QueryParams, RequestDescriptor, RequestDescriptorBuilder,
    RequestSynthesizer, Resource, Response, Result, Transport, args, crud, from_json, headers,
    query, to_value,
};

// Re-export http types for status codes and headers
pub use restbind_core::{StatusCode, header};
