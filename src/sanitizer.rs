use std::borrow::Cow;
use std::fmt;

use serde_json::{Map, Value};

use crate::config::SanitizerConfig;
use crate::error::SanitizationError;
use crate::escape::escape_json;
use crate::html::{AllowListCleaner, HtmlCleaner};
use crate::{Tainted, Verified};

/// Trait for sanitizing tainted values into verified values.
///
/// Implementations MUST:
/// - Only call `Verified::new_unchecked` on their own sanitized output
/// - Return `Err(SanitizationError)` instead of passing data through unsanitized
/// - Not leak the rejected input in errors
///
/// # Examples
///
/// ```
/// use payload_sanitizer::{JsonSanitizer, Sanitizer, Tainted};
///
/// let sanitizer = JsonSanitizer::new();
/// let verified = sanitizer
///     .outbound()
///     .sanitize(Tainted::new("<em>fine</em><img src=x>".to_string()))
///     .unwrap();
///
/// assert_eq!(verified.as_ref(), "<em>fine</em>");
/// ```
pub trait Sanitizer<T> {
    /// Sanitizes a tainted value, returning a verified value on success.
    ///
    /// # Errors
    ///
    /// Returns `SanitizationError` if the input cannot be sanitized.
    fn sanitize(&self, input: Tainted<T>) -> Result<Verified<T>, SanitizationError>;
}

/// Which way a payload is travelling.
///
/// Inbound data arrives raw and gets JSON control characters escaped before
/// its markup is cleaned. Outbound data is assumed to be JSON-encoded already,
/// so escaping it again would double-escape; only markup is cleaned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Request data entering the service.
    Inbound,
    /// Response data leaving the service.
    Outbound,
}

impl Direction {
    /// Returns whether strings travelling this way are JSON-escaped.
    pub fn escapes_json(self) -> bool {
        matches!(self, Direction::Inbound)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Inbound => write!(f, "inbound"),
            Direction::Outbound => write!(f, "outbound"),
        }
    }
}

/// Recursively sanitizes JSON payloads.
///
/// Every object key and every string leaf is passed through the
/// [`HtmlCleaner`], optionally after JSON-escaping. Objects and arrays are
/// rebuilt with the same shape; numbers, booleans and null are copied as-is.
///
/// A `JsonSanitizer` holds no per-call state and can be shared between
/// threads and requests.
///
/// # Examples
///
/// ```
/// use payload_sanitizer::JsonSanitizer;
/// use serde_json::json;
///
/// let sanitizer = JsonSanitizer::new();
/// let dirty = json!({"name<script>": ["<b>ok</b>", 42, "tab\there"]});
///
/// let clean = sanitizer.sanitize_value(&dirty, true).unwrap();
/// assert_eq!(clean, json!({"name": ["<b>ok</b>", 42, "tab\\there"]}));
/// ```
pub struct JsonSanitizer<C = AllowListCleaner> {
    config: SanitizerConfig,
    cleaner: C,
}

impl JsonSanitizer {
    /// Creates a sanitizer with the default configuration.
    pub fn new() -> Self {
        Self::with_config(SanitizerConfig::default())
    }

    /// Creates a sanitizer whose `ammonia` cleaner uses the configured allow-list.
    pub fn with_config(config: SanitizerConfig) -> Self {
        let cleaner = AllowListCleaner::new(config.allowed_tags());
        Self { config, cleaner }
    }
}

impl Default for JsonSanitizer {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: HtmlCleaner> JsonSanitizer<C> {
    /// Creates a sanitizer around a custom HTML cleaner.
    ///
    /// `config.allowed_tags()` is ignored; the cleaner makes all tag decisions.
    pub fn with_cleaner(config: SanitizerConfig, cleaner: C) -> Self {
        Self { config, cleaner }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &SanitizerConfig {
        &self.config
    }

    /// Returns a [`Sanitizer`] for request data (escapes JSON control characters).
    pub fn inbound(&self) -> DirectedSanitizer<'_, C> {
        self.directed(Direction::Inbound)
    }

    /// Returns a [`Sanitizer`] for response data (cleans markup only).
    pub fn outbound(&self) -> DirectedSanitizer<'_, C> {
        self.directed(Direction::Outbound)
    }

    /// Returns a [`Sanitizer`] bound to `direction`.
    pub fn directed(&self, direction: Direction) -> DirectedSanitizer<'_, C> {
        DirectedSanitizer {
            inner: self,
            direction,
        }
    }

    /// Sanitizes a single string.
    ///
    /// With `escape` set, the string is JSON-escaped first; the cleaner only
    /// ever sees the escaped text.
    pub fn sanitize_str(&self, input: &str, escape: bool) -> String {
        let text = if escape {
            Cow::Owned(escape_json(input))
        } else {
            Cow::Borrowed(input)
        };

        self.cleaner.clean(&text)
    }

    /// Builds a sanitized deep copy of `value`.
    ///
    /// # Errors
    ///
    /// Returns a `DepthExceeded` error if objects/arrays nest deeper than
    /// [`SanitizerConfig::max_depth`].
    pub fn sanitize_value(&self, value: &Value, escape: bool) -> Result<Value, SanitizationError> {
        self.sanitize_at(value, escape, 0)
    }

    fn sanitize_at(
        &self,
        value: &Value,
        escape: bool,
        depth: usize,
    ) -> Result<Value, SanitizationError> {
        match value {
            Value::Object(map) => self
                .traverse_object(map, escape, self.enter(depth)?)
                .map(Value::Object),
            Value::Array(items) => self
                .traverse_array(items, escape, self.enter(depth)?)
                .map(Value::Array),
            Value::String(s) => Ok(Value::String(self.sanitize_str(s, escape))),
            Value::Null | Value::Bool(_) | Value::Number(_) => Ok(value.clone()),
        }
    }

    /// Returns the depth of a container entered from `depth`.
    fn enter(&self, depth: usize) -> Result<usize, SanitizationError> {
        let limit = self.config.max_depth();
        if depth >= limit {
            tracing::warn!(limit, "payload nesting exceeds sanitizer depth limit");
            return Err(SanitizationError::depth_exceeded(limit));
        }
        Ok(depth + 1)
    }

    fn traverse_object(
        &self,
        map: &Map<String, Value>,
        escape: bool,
        depth: usize,
    ) -> Result<Map<String, Value>, SanitizationError> {
        let mut sanitized = Map::with_capacity(map.len());
        for (key, value) in map {
            let clean_key = self.sanitize_str(key, escape);
            let clean_value = self.sanitize_at(value, escape, depth)?;
            let key_len = clean_key.len();
            // Later entries win when two keys sanitize to the same text.
            if sanitized.insert(clean_key, clean_value).is_some() {
                tracing::trace!(
                    key_len,
                    depth,
                    "sanitized key collided; keeping later entry"
                );
            }
        }
        Ok(sanitized)
    }

    fn traverse_array(
        &self,
        items: &[Value],
        escape: bool,
        depth: usize,
    ) -> Result<Vec<Value>, SanitizationError> {
        items
            .iter()
            .map(|item| self.sanitize_at(item, escape, depth))
            .collect()
    }
}

impl<C> fmt::Debug for JsonSanitizer<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonSanitizer")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// A [`JsonSanitizer`] bound to one [`Direction`].
///
/// Obtained from [`JsonSanitizer::inbound`], [`JsonSanitizer::outbound`] or
/// [`JsonSanitizer::directed`].
#[derive(Debug)]
pub struct DirectedSanitizer<'a, C = AllowListCleaner> {
    inner: &'a JsonSanitizer<C>,
    direction: Direction,
}

impl<C> DirectedSanitizer<'_, C> {
    /// Returns the direction this sanitizer is bound to.
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl<C: HtmlCleaner> Sanitizer<Value> for DirectedSanitizer<'_, C> {
    fn sanitize(&self, input: Tainted<Value>) -> Result<Verified<Value>, SanitizationError> {
        let clean = self
            .inner
            .sanitize_value(input.peek(), self.direction.escapes_json())?;
        Ok(Verified::new_unchecked(clean))
    }
}

impl<C: HtmlCleaner> Sanitizer<String> for DirectedSanitizer<'_, C> {
    fn sanitize(&self, input: Tainted<String>) -> Result<Verified<String>, SanitizationError> {
        let clean = self
            .inner
            .sanitize_str(input.peek(), self.direction.escapes_json());
        Ok(Verified::new_unchecked(clean))
    }
}
