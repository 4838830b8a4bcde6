//! Web framework integration surface.
//!
//! This module is the boundary where HTTP payloads get sanitized:
//! - [`sanitize_request`] escapes and cleans `query` and `body` on the way in
//! - [`sanitize_response`] cleans `body` on the way out
//!
//! No framework types appear here. A framework integration implements
//! [`RequestPayload`] / [`ResponsePayload`] for its own request and response
//! types (or converts to [`HttpRequest`](crate::HttpRequest) /
//! [`HttpResponse`](crate::HttpResponse)) and calls the two functions from
//! its middleware.
//!
//! # Example Flow
//!
//! ```
//! use payload_sanitizer::web::{sanitize_request, sanitize_response};
//! use payload_sanitizer::{HttpMethod, HttpRequest, HttpResponse, JsonSanitizer};
//! use serde_json::json;
//!
//! let sanitizer = JsonSanitizer::new();
//!
//! let mut request = HttpRequest::new(HttpMethod::Get, "/search")
//!     .with_query(json!({"q": "<b>rust</b><iframe src=x></iframe>"}));
//! sanitize_request(&sanitizer, &mut request)?;
//! assert_eq!(request.query, Some(json!({"q": "<b>rust</b>"})));
//!
//! let mut response = HttpResponse::new(200).with_body(json!({"hits": []}));
//! sanitize_response(&sanitizer, &mut response)?;
//! # Ok::<(), payload_sanitizer::SanitizationError>(())
//! ```

mod extract;
mod middleware;

pub use extract::{RequestPayload, ResponsePayload};
pub use middleware::{sanitize_request, sanitize_response};
