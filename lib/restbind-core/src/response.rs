//! HTTP responses and response decoding.
//!
//! [`Response`] is what the transport returns. A bound method then turns it
//! into a [`Decoded`] value according to its declared [`MediaType`].

use bytes::Bytes;
use serde_json::Value;

use crate::{Error, Headers, Result};

/// Media type a bound method produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MediaType {
    /// Parse the body as JSON, keeping the raw response if it is not JSON.
    #[default]
    Json,
    /// Hand the response back untouched.
    Raw,
}

/// HTTP response with status, headers, and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    status: u16,
    headers: Headers,
    body: Bytes,
}

impl Response {
    /// Creates a new response.
    #[must_use]
    pub const fn new(status: u16, headers: Headers, body: Bytes) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Response headers.
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

    /// Response body.
    #[must_use]
    pub const fn body(&self) -> &Bytes {
        &self.body
    }

    /// Consume into body.
    #[must_use]
    pub fn into_body(self) -> Bytes {
        self.body
    }

    /// Consume into (status, headers, body).
    #[must_use]
    pub fn into_parts(self) -> (u16, Headers, Bytes) {
        (self.status, self.headers, self.body)
    }

    /// Status is 2xx.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Status is 4xx.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        self.status >= 400 && self.status < 500
    }

    /// Status is 5xx.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        self.status >= 500 && self.status < 600
    }

    /// Turn a non-2xx response into [`Error::Http`], keeping the body.
    pub fn error_for_status(self) -> Result<Self> {
        if self.is_success() {
            return Ok(self);
        }
        let message = http::StatusCode::from_u16(self.status)
            .ok()
            .and_then(|status| status.canonical_reason())
            .unwrap_or("unexpected status")
            .to_string();
        Err(Error::http_with_body(self.status, message, self.body))
    }

    /// Deserialize the response body as JSON.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T> {
        from_json(&self.body)
    }

    /// Get the response body as text.
    pub fn text(&self) -> std::result::Result<String, std::string::FromUtf8Error> {
        String::from_utf8(self.body.to_vec())
    }
}

/// A response after media-type decoding.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded {
    /// The body parsed as JSON.
    Json(Value),
    /// The response as received: `Raw` media type, or a body that is not JSON.
    Raw(Response),
}

impl Decoded {
    /// Decode `response` for `media_type`.
    ///
    /// Malformed JSON never fails: the raw response is returned instead.
    #[must_use]
    pub fn decode(response: Response, media_type: MediaType) -> Self {
        match media_type {
            MediaType::Raw => Self::Raw(response),
            MediaType::Json => match serde_json::from_slice(response.body()) {
                Ok(value) => Self::Json(value),
                Err(_) => Self::Raw(response),
            },
        }
    }

    /// The parsed JSON, if any.
    #[must_use]
    pub const fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Raw(_) => None,
        }
    }

    /// The raw response, if decoding was skipped or failed.
    #[must_use]
    pub const fn as_raw(&self) -> Option<&Response> {
        match self {
            Self::Raw(response) => Some(response),
            Self::Json(_) => None,
        }
    }

    /// Deserialize into a typed value, reporting the JSON path of failures.
    pub fn deserialize<T: serde::de::DeserializeOwned>(self) -> Result<T> {
        match self {
            Self::Json(value) => serde_path_to_error::deserialize(value).map_err(|e| {
                Error::json_deserialization(e.path().to_string(), e.inner().to_string())
            }),
            Self::Raw(response) => response.json(),
        }
    }
}

/// Deserialize JSON bytes into a type, with path context on errors.
pub fn from_json<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        Error::json_deserialization(e.path().to_string(), e.inner().to_string())
    })
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};
    use serde_json::json;

    use super::*;

    fn response(status: u16, body: &'static str) -> Response {
        Response::new(status, Headers::new(), Bytes::from(body))
    }

    #[test]
    fn status_checks() {
        check!(response(204, "").is_success());
        check!(response(404, "").is_client_error());
        check!(response(503, "").is_server_error());
    }

    #[test]
    fn error_for_status_keeps_body() {
        let err = response(404, r#"{"error":"missing"}"#)
            .error_for_status()
            .expect_err("404");

        check!(err.status() == Some(404));
        check!(err.to_string() == "HTTP error 404: Not Found");
        check!(err.body() == Some(&Bytes::from_static(br#"{"error":"missing"}"#)));

        check!(response(200, "ok").error_for_status().is_ok());
    }

    #[test]
    fn decode_json() {
        let decoded = Decoded::decode(response(200, r#"{"id":42}"#), MediaType::Json);
        check!(decoded.as_json() == Some(&json!({"id": 42})));
    }

    #[test]
    fn malformed_json_degrades_to_raw() {
        let decoded = Decoded::decode(response(200, "<html>oops</html>"), MediaType::Json);

        let_assert!(Decoded::Raw(raw) = decoded);
        check!(raw.text().expect("utf8") == "<html>oops</html>");
    }

    #[test]
    fn empty_body_degrades_to_raw() {
        let decoded = Decoded::decode(response(204, ""), MediaType::Json);
        check!(decoded.as_raw().is_some());
    }

    #[test]
    fn raw_media_type_skips_parsing() {
        let decoded = Decoded::decode(response(200, r#"{"id":42}"#), MediaType::Raw);
        check!(decoded.as_raw().map(Response::status) == Some(200));
    }

    #[test]
    fn deserialize_reports_path() {
        #[derive(Debug, serde::Deserialize)]
        struct Address {
            #[allow(dead_code)]
            city: String,
        }

        #[derive(Debug, serde::Deserialize)]
        struct User {
            #[allow(dead_code)]
            address: Address,
        }

        let decoded = Decoded::Json(json!({"address": {"city": 7}}));
        let err = decoded.deserialize::<User>().expect_err("wrong type");

        let_assert!(Error::JsonDeserialization { path, .. } = err);
        check!(path == "address.city");
    }

    #[test]
    fn deserialize_typed() {
        #[derive(Debug, PartialEq, serde::Deserialize)]
        struct User {
            id: u64,
            name: String,
        }

        let user: User = Decoded::Json(json!({"id": 1, "name": "Alice"}))
            .deserialize()
            .expect("user");
        check!(
            user == User {
                id: 1,
                name: "Alice".to_string()
            }
        );
    }
}
