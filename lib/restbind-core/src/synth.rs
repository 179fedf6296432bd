//! Request synthesis: from a method name and its arguments to a request.
//!
//! The synthesizer resolves, in order, the body, the URL, the query and the
//! headers of a call, assembles a [`RequestDescriptor`], and on [`invoke`]
//! sends it and decodes the response for the method media type.
//!
//! Binding and serialization failures are reported before the transport is
//! touched: no partial request is ever sent.
//!
//! [`invoke`]: RequestSynthesizer::invoke

use serde_json::Value;

use crate::{
    Args, Decoded, Error, MethodBinding, ParamRole, ParameterBinding, RequestDescriptor, Resource,
    Response, Result, Transport, headers, path_template, query,
};

/// Builds and sends the requests of one resource.
#[derive(Debug)]
pub struct RequestSynthesizer<'r, R: ?Sized> {
    resource: &'r R,
}

impl<'r, R: Resource + ?Sized> RequestSynthesizer<'r, R> {
    /// Synthesizer for `resource`.
    #[must_use]
    pub const fn new(resource: &'r R) -> Self {
        Self { resource }
    }

    /// Binding of `method`, or a binding error if the resource lacks it.
    pub fn binding(&self, method: &str) -> Result<&'r MethodBinding> {
        self.resource
            .bindings()
            .binding(method)
            .ok_or_else(|| Error::binding(format!("unknown method `{method}`")))
    }

    /// Build the request of `method` called with `args`.
    pub fn build(&self, method: &str, args: &Args) -> Result<RequestDescriptor> {
        let binding = self.binding(method)?;

        let body = resolve_body(binding.single(ParamRole::Body), args)?;
        let url = path_template::resolve_url(
            self.resource.base_url(),
            binding.template(),
            binding.single(ParamRole::Url),
            binding.params(ParamRole::Path),
            args,
        )?;
        let query = query::serialize(binding.params(ParamRole::Query), args)?;
        let headers = headers::compose(
            self.resource.default_headers(),
            binding.static_headers(),
            binding.params(ParamRole::Header),
            args,
        );

        Ok(RequestDescriptor::builder(binding.verb(), url)
            .headers(headers)
            .query_params(query)
            .maybe_body(body)
            .build())
    }

    /// Build, send through `transport`, and decode.
    ///
    /// A non-2xx status is reported as [`Error::Http`]. A body that is not
    /// valid JSON decodes to [`Decoded::Raw`] instead of failing.
    pub async fn invoke<T: Transport>(
        &self,
        transport: &T,
        method: &str,
        args: &Args,
    ) -> Result<Decoded> {
        let media_type = self.binding(method)?.media_type();
        let request = self.build(method, args)?;
        let response = transport
            .send(request)
            .await
            .and_then(Response::error_for_status)?;
        Ok(Decoded::decode(response, media_type))
    }
}

fn resolve_body(binding: Option<&ParameterBinding>, args: &Args) -> Result<Option<String>> {
    let Some(binding) = binding else {
        return Ok(None);
    };
    let value = args.get(binding.index).ok_or_else(|| {
        Error::binding(format!("missing body argument {}", binding.index))
    })?;

    match value {
        Value::Null => Ok(None),
        Value::String(text) => Ok(Some(text.clone())),
        other => Ok(Some(serde_json::to_string(other)?)),
    }
}
