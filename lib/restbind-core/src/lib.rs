//! Core types and engines of the restbind declarative HTTP client.
//!
//! This crate turns a method call on a resource into a transport-ready request
//! and back, without performing any I/O:
//! - [`MethodBindingSet`] - verb, path template and parameter roles per method
//! - [`PathTemplate`] and [`resolve_url`] - `{name}` placeholder substitution
//! - [`query::serialize`] - query objects to an ordered multimap
//! - [`headers::compose`] - default, static and dynamic headers
//! - [`RequestSynthesizer`] - assembles a [`RequestDescriptor`] and decodes the [`Response`]
//! - [`InterceptorPipeline`] - ordered request/response/error hooks
//! - [`Transport`] and [`Resource`] - the capabilities supplied by the caller
//! - [`Error`] and [`Result`] - error handling

mod arguments;
mod binding;
mod error;
pub mod headers;
pub mod interceptor;
mod method;
mod path_template;
pub mod prelude;
pub mod query;
mod request;
mod resource;
mod response;
mod synth;
mod transport;


pub use arguments::{Args, is_falsy, render, to_value};
pub use binding::{
    MethodBinding, MethodBindingSet, MethodBindingSetBuilder, ParamRole, ParameterBinding, crud,
};
pub use error::{Error, Result};
pub use headers::Headers;
pub use interceptor::{Interceptor, InterceptorPipeline, InterceptorPipelineBuilder};
pub use method::Method;
pub use path_template::{PathTemplate, resolve_url};
pub use query::QueryParams;
pub use request::{RequestDescriptor, RequestDescriptorBuilder};
pub use resource::Resource;
pub use response::{Decoded, MediaType, Response, from_json};
pub use synth::RequestSynthesizer;
pub use transport::Transport;

// Re-export http crate types for status codes and headers
pub use http::{StatusCode, header};
