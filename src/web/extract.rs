//! Payload access traits for request and response containers.
//!
//! The adapters in this module's parent never look at framework types
//! directly. Anything that can hand out mutable access to its `query`/`body`
//! JSON can be sanitized.

use serde_json::{Map, Value};

use crate::http::{HttpRequest, HttpResponse};

/// A request-like container with optional `query` and `body` payloads.
///
/// Accessors return `None` when the field is absent *or* holds JSON `null`;
/// sanitization skips those fields and never creates them.
///
/// # Examples
///
/// ```
/// use payload_sanitizer::web::RequestPayload;
/// use serde_json::Value;
///
/// // A framework request type exposing only a body.
/// struct FormPost {
///     fields: Value,
/// }
///
/// impl RequestPayload for FormPost {
///     fn query_mut(&mut self) -> Option<&mut Value> {
///         None
///     }
///
///     fn body_mut(&mut self) -> Option<&mut Value> {
///         Some(&mut self.fields).filter(|v| !v.is_null())
///     }
/// }
/// ```
pub trait RequestPayload {
    /// Returns the query payload, if present and not null.
    fn query_mut(&mut self) -> Option<&mut Value>;

    /// Returns the body payload, if present and not null.
    fn body_mut(&mut self) -> Option<&mut Value>;
}

/// A response-like container with an optional `body` payload.
///
/// Same absence rule as [`RequestPayload`].
pub trait ResponsePayload {
    /// Returns the body payload, if present and not null.
    fn body_mut(&mut self) -> Option<&mut Value>;
}

fn present(field: Option<&mut Value>) -> Option<&mut Value> {
    field.filter(|v| !v.is_null())
}

impl RequestPayload for HttpRequest {
    fn query_mut(&mut self) -> Option<&mut Value> {
        present(self.query.as_mut())
    }

    fn body_mut(&mut self) -> Option<&mut Value> {
        present(self.body.as_mut())
    }
}

impl ResponsePayload for HttpResponse {
    fn body_mut(&mut self) -> Option<&mut Value> {
        present(self.body.as_mut())
    }
}

/// Untyped envelopes such as `{"method": "POST", "query": {..}, "body": {..}}`.
impl RequestPayload for Map<String, Value> {
    fn query_mut(&mut self) -> Option<&mut Value> {
        present(self.get_mut("query"))
    }

    fn body_mut(&mut self) -> Option<&mut Value> {
        present(self.get_mut("body"))
    }
}

/// Untyped envelopes such as `{"status": 200, "body": {..}}`.
impl ResponsePayload for Map<String, Value> {
    fn body_mut(&mut self) -> Option<&mut Value> {
        present(self.get_mut("body"))
    }
}
