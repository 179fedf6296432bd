//! Basic authentication interceptor.
//!
//! Sets an `Authorization: Basic <base64(user:pass)>` header on every
//! outgoing request.

use std::sync::Arc;

use base64::Engine;

use crate::{Interceptor, RequestDescriptor};

/// Interceptor that adds basic authentication to requests.
///
/// # Example
///
/// ```
/// use restbind::InterceptorPipeline;
/// use restbind::interceptors::BasicAuthInterceptor;
///
/// let pipeline = InterceptorPipeline::builder()
///     .interceptor(BasicAuthInterceptor::new("username", "password"))
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct BasicAuthInterceptor {
    /// Base64-encoded "username:password".
    encoded_credentials: Arc<str>,
}

impl BasicAuthInterceptor {
    /// Create a new basic auth interceptor with the given username and password.
    pub fn new(username: impl AsRef<str>, password: impl AsRef<str>) -> Self {
        let credentials = format!("{}:{}", username.as_ref(), password.as_ref());
        let encoded = base64::engine::general_purpose::STANDARD.encode(credentials);
        Self {
            encoded_credentials: Arc::from(encoded),
        }
    }
}

impl Interceptor for BasicAuthInterceptor {
    fn on_request(&self, mut request: RequestDescriptor) -> RequestDescriptor {
        request.headers_mut().insert(
            "Authorization",
            format!("Basic {}", self.encoded_credentials),
        );
        request
    }
}
