//! Recursive sanitization of untrusted JSON payloads.
//!
//! This crate cleans HTML markup out of JSON data crossing an HTTP boundary:
//! - **Inbound** (`query`/`body` of a request): JSON control characters are
//!   backslash-escaped, then markup is cleaned
//! - **Outbound** (`body` of a response): markup is cleaned only
//!
//! Every object key and every string leaf is sanitized; numbers, booleans and
//! null pass through. Markup is reduced to an inline allow-list
//! (`b`, `i`, `em`, `strong`, `a`) by an `ammonia`-backed [`HtmlCleaner`].
//!
//! # Core Types
//!
//! - [`JsonSanitizer`]: Recursive traversal over `serde_json::Value`
//! - [`SanitizerConfig`]: Depth limit and tag allow-list
//! - [`Tainted<T>`] / [`Verified<T>`]: Type-level markers for unsanitized and sanitized data
//! - [`Sanitizer`]: The only path from `Tainted<T>` to `Verified<T>`
//! - [`web::sanitize_request`] / [`web::sanitize_response`]: HTTP adapters
//!
//! # Examples
//!
//! ```
//! use payload_sanitizer::web::sanitize_request;
//! use payload_sanitizer::{HttpMethod, HttpRequest, JsonSanitizer};
//! use serde_json::json;
//!
//! let sanitizer = JsonSanitizer::new();
//! let mut request = HttpRequest::new(HttpMethod::Post, "/api/test")
//!     .with_body(json!({"<b>title</b>": "<i>kept</i> <script>dropped()</script>"}));
//!
//! sanitize_request(&sanitizer, &mut request).expect("payload within limits");
//!
//! assert_eq!(request.body, Some(json!({"<b>title</b>": "<i>kept</i> "})));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod escape;
mod html;
mod http;
mod sanitizer;
mod tainted;
mod verified;
pub mod web;

#[cfg(test)]
mod test_utils;

pub use config::{SanitizerConfig, DEFAULT_MAX_DEPTH};
pub use error::{SanitizationError, SanitizationErrorKind};
pub use escape::escape_json;
pub use html::{AllowListCleaner, HtmlCleaner, DEFAULT_ALLOWED_TAGS};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use sanitizer::{DirectedSanitizer, Direction, JsonSanitizer, Sanitizer};
pub use tainted::Tainted;
pub use verified::Verified;
