//! Transport-ready request descriptors.
//!
//! A [`RequestDescriptor`] is built fresh for every call, may be replaced by
//! interceptors, and is moved into the transport.
//!
//! # Example
//!
//! ```
//! use restbind_core::{Method, RequestDescriptor};
//!
//! let request = RequestDescriptor::builder(Method::Get, "https://api.example.com/users")
//!     .header("Accept", "application/json")
//!     .query("page", "1")
//!     .build();
//!
//! assert_eq!(
//!     request.full_url().expect("absolute URL").as_str(),
//!     "https://api.example.com/users?page=1"
//! );
//! ```

use url::Url;

use crate::{Headers, Method, QueryParams, Result};

/// An HTTP request: verb, URL, headers, query parameters and optional body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    method: Method,
    url: String,
    headers: Headers,
    query: QueryParams,
    body: Option<String>,
}

impl RequestDescriptor {
    /// Creates a new [`RequestDescriptorBuilder`].
    #[must_use]
    pub fn builder(method: Method, url: impl Into<String>) -> RequestDescriptorBuilder {
        RequestDescriptorBuilder::new(method, url)
    }

    /// HTTP method.
    #[must_use]
    pub const fn method(&self) -> Method {
        self.method
    }

    /// URL without the query string.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Replace the URL.
    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = url.into();
    }

    /// Request headers.
    #[must_use]
    pub const fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Mutable access to headers.
    pub fn headers_mut(&mut self) -> &mut Headers {
        &mut self.headers
    }

    /// First value of a header.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    /// Query parameters.
    #[must_use]
    pub const fn query(&self) -> &QueryParams {
        &self.query
    }

    /// Mutable access to query parameters.
    pub fn query_mut(&mut self) -> &mut QueryParams {
        &mut self.query
    }

    /// Request body.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Absolute URL with the query parameters appended in order.
    pub fn full_url(&self) -> Result<Url> {
        let mut url = Url::parse(&self.url)?;
        if !self.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in self.query.iter() {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// Consume into (method, url, headers, query, body).
    #[must_use]
    pub fn into_parts(self) -> (Method, String, Headers, QueryParams, Option<String>) {
        (self.method, self.url, self.headers, self.query, self.body)
    }

    /// Rebuild from parts.
    #[must_use]
    pub fn from_parts(
        method: Method,
        url: String,
        headers: Headers,
        query: QueryParams,
        body: Option<String>,
    ) -> Self {
        Self {
            method,
            url,
            headers,
            query,
            body,
        }
    }
}

/// Builder for [`RequestDescriptor`].
#[derive(Debug, Clone)]
pub struct RequestDescriptorBuilder {
    method: Method,
    url: String,
    headers: Headers,
    query: QueryParams,
    body: Option<String>,
}

impl RequestDescriptorBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Headers::new(),
            query: QueryParams::new(),
            body: None,
        }
    }

    /// Appends a header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.append(name, value);
        self
    }

    /// Replaces all headers.
    #[must_use]
    pub fn headers(mut self, headers: Headers) -> Self {
        self.headers = headers;
        self
    }

    /// Appends a query parameter.
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.append(key, value);
        self
    }

    /// Replaces all query parameters.
    #[must_use]
    pub fn query_params(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    /// Sets the request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets or clears the request body.
    #[must_use]
    pub fn maybe_body(mut self, body: Option<String>) -> Self {
        self.body = body;
        self
    }

    /// Set a JSON body.
    pub fn json<T: serde::Serialize + ?Sized>(self, value: &T) -> Result<Self> {
        let body = serde_json::to_string(value)?;
        Ok(self.header("Content-Type", "application/json").body(body))
    }

    /// Builds the [`RequestDescriptor`].
    #[must_use]
    pub fn build(self) -> RequestDescriptor {
        RequestDescriptor {
            method: self.method,
            url: self.url,
            headers: self.headers,
            query: self.query,
            body: self.body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_basic() {
        let request = RequestDescriptor::builder(Method::Get, "/api/users")
            .header("Accept", "application/json")
            .build();

        assert_eq!(request.method(), Method::Get);
        assert_eq!(request.url(), "/api/users");
        assert_eq!(request.header("accept"), Some("application/json"));
        assert!(request.body().is_none());
        assert!(request.query().is_empty());
    }

    #[test]
    fn full_url_appends_query_in_order() {
        let request = RequestDescriptor::builder(Method::Get, "https://api.example.com/search")
            .query("tag", "a")
            .query("q", "rust lang")
            .query("tag", "b")
            .build();

        let url = request.full_url().expect("absolute");
        assert_eq!(
            url.as_str(),
            "https://api.example.com/search?tag=a&q=rust+lang&tag=b"
        );
    }

    #[test]
    fn full_url_rejects_relative_url() {
        let request = RequestDescriptor::builder(Method::Get, "/api/users").build();
        let err = request.full_url().expect_err("relative");
        assert!(err.is_transport());
    }

    #[test]
    fn json_body() {
        #[derive(serde::Serialize)]
        struct User {
            name: String,
        }

        let request = RequestDescriptor::builder(Method::Post, "https://api.example.com/users")
            .json(&User {
                name: "test".to_string(),
            })
            .expect("json")
            .build();

        assert_eq!(request.header("Content-Type"), Some("application/json"));
        assert_eq!(request.body(), Some(r#"{"name":"test"}"#));
    }

    #[test]
    fn parts_round_trip() {
        let request = RequestDescriptor::builder(Method::Delete, "/users/1")
            .header("X-Trace", "1")
            .build();

        let (method, url, mut headers, query, body) = request.clone().into_parts();
        headers.append("X-Extra", "2");
        let rebuilt = RequestDescriptor::from_parts(method, url, headers, query, body);

        assert_eq!(rebuilt.method(), request.method());
        assert_eq!(rebuilt.headers().len(), 2);
    }
}
