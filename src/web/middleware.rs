//! Request and response sanitization entry points.
//!
//! # Flow
//!
//! ```text
//! HTTP request ──► framework deserializes query/body
//!                    ↓
//!                  sanitize_request()   escape + clean   (Direction::Inbound)
//!                    ↓
//!                  handler
//!                    ↓
//!                  sanitize_response()  clean only       (Direction::Outbound)
//!                    ↓
//! HTTP response ◄── framework serializes body
//! ```
//!
//! Both functions replace payload fields with sanitized copies in place.
//! The container itself is borrowed mutably and keeps its identity; fields
//! that are absent or `null` are skipped.

use serde_json::Value;

use crate::error::SanitizationError;
use crate::html::HtmlCleaner;
use crate::sanitizer::{Direction, JsonSanitizer};

use super::{RequestPayload, ResponsePayload};

/// Sanitizes the `query` and `body` of an incoming request.
///
/// Strings and keys are JSON-escaped and then cleaned of disallowed markup.
///
/// # Errors
///
/// Returns the first [`SanitizationError`] hit. A field that fails keeps its
/// original value; a `query` that was already sanitized stays sanitized.
///
/// # Examples
///
/// ```
/// use payload_sanitizer::web::sanitize_request;
/// use payload_sanitizer::{HttpMethod, HttpRequest, JsonSanitizer};
/// use serde_json::json;
///
/// let sanitizer = JsonSanitizer::new();
/// let mut request = HttpRequest::new(HttpMethod::Post, "/comments")
///     .with_body(json!({"text": "<script>x()</script>hi\n"}));
///
/// sanitize_request(&sanitizer, &mut request).unwrap();
///
/// assert_eq!(request.body, Some(json!({"text": "hi\\n"})));
/// assert!(request.query.is_none());
/// ```
pub fn sanitize_request<C, R>(
    sanitizer: &JsonSanitizer<C>,
    request: &mut R,
) -> Result<(), SanitizationError>
where
    C: HtmlCleaner,
    R: RequestPayload + ?Sized,
{
    let escape = Direction::Inbound.escapes_json();

    let query = replace_field(sanitizer, request.query_mut(), escape)?;
    let body = replace_field(sanitizer, request.body_mut(), escape)?;

    tracing::debug!(direction = %Direction::Inbound, query, body, "sanitized request payload");
    Ok(())
}

/// Sanitizes the `body` of an outgoing response.
///
/// Only markup is cleaned; the body is assumed to be JSON-escaped already.
///
/// # Errors
///
/// Returns a [`SanitizationError`] if the body cannot be sanitized, leaving
/// it unchanged.
///
/// # Examples
///
/// ```
/// use payload_sanitizer::web::sanitize_response;
/// use payload_sanitizer::{HttpResponse, JsonSanitizer};
/// use serde_json::json;
///
/// let sanitizer = JsonSanitizer::new();
/// let mut response = HttpResponse::new(200)
///     .with_body(json!({"value": "ok <script>bad()</script> done \\t"}));
///
/// sanitize_response(&sanitizer, &mut response).unwrap();
///
/// assert_eq!(response.body, Some(json!({"value": "ok  done \\t"})));
/// ```
pub fn sanitize_response<C, R>(
    sanitizer: &JsonSanitizer<C>,
    response: &mut R,
) -> Result<(), SanitizationError>
where
    C: HtmlCleaner,
    R: ResponsePayload + ?Sized,
{
    let escape = Direction::Outbound.escapes_json();

    let body = replace_field(sanitizer, response.body_mut(), escape)?;

    tracing::debug!(direction = %Direction::Outbound, body, "sanitized response payload");
    Ok(())
}

/// Overwrites `field` with its sanitized copy; returns whether it was present.
fn replace_field<C: HtmlCleaner>(
    sanitizer: &JsonSanitizer<C>,
    field: Option<&mut Value>,
    escape: bool,
) -> Result<bool, SanitizationError> {
    let Some(field) = field else {
        return Ok(false);
    };
    *field = sanitizer.sanitize_value(field, escape)?;
    Ok(true)
}
