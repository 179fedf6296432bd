//! Request/response logging interceptor.
//!
//! This interceptor logs requests, responses and transport errors using the
//! `tracing` crate. Events are emitted inside the caller span, so a
//! [`ResourceClient`](crate::ResourceClient) call attaches its method name.

use tracing::{debug, info, warn};

use crate::{Error, Interceptor, RequestDescriptor, Response};

/// Interceptor that logs every call.
///
/// # Example
///
/// ```
/// use restbind::InterceptorPipeline;
/// use restbind::interceptors::LoggingInterceptor;
///
/// let pipeline = InterceptorPipeline::builder()
///     .interceptor(LoggingInterceptor::new())
///     .build();
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingInterceptor {
    level: LogLevel,
}

/// Log level for the logging interceptor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    /// Log at debug level (headers, query and body size).
    Debug,
    /// Log at info level (summary only).
    #[default]
    Info,
}

impl LoggingInterceptor {
    /// Create a new logging interceptor with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a logging interceptor that logs at debug level.
    #[must_use]
    pub fn debug() -> Self {
        Self {
            level: LogLevel::Debug,
        }
    }

    /// The configured level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }
}

impl Interceptor for LoggingInterceptor {
    fn on_request(&self, request: RequestDescriptor) -> RequestDescriptor {
        let method = request.method();
        let url = request.url();

        match self.level {
            LogLevel::Debug => {
                debug!(
                    method = %method,
                    url = %url,
                    query = ?request.query(),
                    headers = ?request.headers(),
                    body_len = request.body().map_or(0, str::len),
                    "sending request"
                );
            }
            LogLevel::Info => {
                info!(method = %method, url = %url, "sending request");
            }
        }

        request
    }

    fn on_response(&self, response: Response) -> Response {
        let status = response.status();

        match self.level {
            LogLevel::Debug => {
                debug!(
                    status,
                    headers = ?response.headers(),
                    body_len = response.body().len(),
                    "request completed"
                );
            }
            LogLevel::Info => {
                info!(status, "request completed");
            }
        }

        response
    }

    fn on_response_error(&self, error: Error) -> Error {
        match error.status() {
            Some(status) => warn!(status, error = %error, "request failed with HTTP error"),
            None => warn!(error = %error, "request failed"),
        }

        error
    }
}
