//! Bearer token authentication interceptor.
//!
//! Sets an `Authorization: Bearer <token>` header on every outgoing request.

use std::sync::Arc;

use crate::{Interceptor, RequestDescriptor};

/// Interceptor that adds bearer token authentication to requests.
///
/// An `Authorization` header already present is replaced.
///
/// # Example
///
/// ```
/// use restbind::InterceptorPipeline;
/// use restbind::interceptors::BearerAuthInterceptor;
///
/// let pipeline = InterceptorPipeline::builder()
///     .interceptor(BearerAuthInterceptor::new("my-secret-token"))
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct BearerAuthInterceptor {
    token: Arc<str>,
}

impl BearerAuthInterceptor {
    /// Create a new bearer auth interceptor with the given token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Arc::from(token.into()),
        }
    }
}

impl Interceptor for BearerAuthInterceptor {
    fn on_request(&self, mut request: RequestDescriptor) -> RequestDescriptor {
        request
            .headers_mut()
            .insert("Authorization", format!("Bearer {}", self.token));
        request
    }
}

#[cfg(test)]
mod tests {
    use assert2::check;

    use super::*;
    use crate::Method;

    #[test]
    fn sets_authorization_header() {
        let request = RequestDescriptor::builder(Method::Get, "https://api.example.com")
            .header("authorization", "Bearer stale")
            .build();

        let request = BearerAuthInterceptor::new("test-token").on_request(request);

        check!(request.headers().get_all("Authorization").count() == 1);
        check!(request.header("Authorization") == Some("Bearer test-token"));
    }
}
