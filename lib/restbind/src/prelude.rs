//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and macros
//! for easy glob importing:
//!
//! ```
//! use restbind::prelude::*;
//! ```

pub use crate::{
    Args, Decoded, Error, Headers, HttpService, HyperTransport, Interceptor, InterceptorPipeline,
    MediaType, Method, MethodBinding, MethodBindingSet, RequestDescriptor, Resource,
    ResourceClient, Response, Result, Transport, TransportConfig, args,
};
pub use serde::{Deserialize, Serialize};
