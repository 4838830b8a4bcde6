use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// HTTP GET method
    Get,
    /// HTTP POST method
    Post,
    /// HTTP PUT method
    Put,
    /// HTTP DELETE method
    Delete,
    /// HTTP PATCH method
    Patch,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpMethod::Get => write!(f, "GET"),
            HttpMethod::Post => write!(f, "POST"),
            HttpMethod::Put => write!(f, "PUT"),
            HttpMethod::Delete => write!(f, "DELETE"),
            HttpMethod::Patch => write!(f, "PATCH"),
        }
    }
}

/// A framework-neutral HTTP request carrying JSON payloads.
///
/// `query` holds the decoded query string and `body` the deserialized body.
/// Either may be absent; [`sanitize_request`](crate::web::sanitize_request)
/// leaves absent fields alone.
///
/// # Examples
///
/// ```
/// use payload_sanitizer::{HttpMethod, HttpRequest};
/// use serde_json::json;
///
/// let request = HttpRequest::new(HttpMethod::Post, "https://api.example.com/notes")
///     .with_body(json!({"text": "hello"}));
///
/// assert!(request.query.is_none());
/// assert_eq!(request.body, Some(json!({"text": "hello"})));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpRequest {
    /// HTTP method used
    pub method: HttpMethod,
    /// Target URL
    pub url: String,
    /// Decoded query parameters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<Value>,
    /// Deserialized request body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

impl HttpRequest {
    /// Creates a request with no query and no body.
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            query: None,
            body: None,
        }
    }

    /// Sets the query payload.
    pub fn with_query(mut self, query: Value) -> Self {
        self.query = Some(query);
        self
    }

    /// Sets the body payload.
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// A framework-neutral HTTP response carrying a JSON body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpResponse {
    /// Status code
    pub status: u16,
    /// Response body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

impl HttpResponse {
    /// Creates a response with no body.
    pub fn new(status: u16) -> Self {
        Self { status, body: None }
    }

    /// Sets the body payload.
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn http_method_display() {
        assert_eq!(format!("{}", HttpMethod::Get), "GET");
        assert_eq!(format!("{}", HttpMethod::Post), "POST");
        assert_eq!(format!("{}", HttpMethod::Put), "PUT");
        assert_eq!(format!("{}", HttpMethod::Delete), "DELETE");
        assert_eq!(format!("{}", HttpMethod::Patch), "PATCH");
    }

    #[test]
    fn http_method_serde_matches_display() {
        let method: HttpMethod = serde_json::from_value(json!("PATCH")).unwrap();

        assert_eq!(method, HttpMethod::Patch);
        assert_eq!(
            serde_json::to_value(HttpMethod::Delete).unwrap(),
            json!("DELETE")
        );
    }

    #[test]
    fn request_builders() {
        let request = HttpRequest::new(HttpMethod::Get, "https://example.com/search")
            .with_query(json!({"q": "rust"}));

        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.url, "https://example.com/search");
        assert_eq!(request.query, Some(json!({"q": "rust"})));
        assert!(request.body.is_none());
    }

    #[test]
    fn request_deserializes_without_payloads() {
        let request: HttpRequest =
            serde_json::from_str(r#"{"method": "POST", "url": "/api/test"}"#).unwrap();

        assert_eq!(request.method, HttpMethod::Post);
        assert!(request.query.is_none());
        assert!(request.body.is_none());
    }

    #[test]
    fn request_serialization_omits_absent_payloads() {
        let request = HttpRequest::new(HttpMethod::Post, "/api/test");

        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value, json!({"method": "POST", "url": "/api/test"}));
    }

    #[test]
    fn response_builders() {
        let response = HttpResponse::new(200).with_body(json!({"ok": true}));

        assert_eq!(response.status, 200);
        assert_eq!(response.body, Some(json!({"ok": true})));
        assert!(HttpResponse::new(204).body.is_none());
    }
}
