//! Prelude module for convenient imports.
//!
//! ```
//! use restbind_core::prelude::*;
//! ```

pub use crate::{
    Args, Decoded, Error, Headers, Interceptor, InterceptorPipeline, MediaType, Method,
    MethodBinding, MethodBindingSet, ParamRole, RequestDescriptor, RequestSynthesizer, Resource,
    Response, Result, Transport, args,
};
