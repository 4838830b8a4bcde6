use std::fmt;

/// Untrusted payload data that has not been sanitized yet.
///
/// Wrap anything that arrives from outside (a deserialized request body, a
/// query string, a value read back from storage) in `Tainted<T>`. The only way
/// to get the value back out is through a [`Sanitizer`](crate::Sanitizer),
/// which returns a [`Verified<T>`](crate::Verified).
///
/// # Examples
///
/// ```
/// use payload_sanitizer::{JsonSanitizer, Sanitizer, Tainted};
/// use serde_json::json;
///
/// let body = Tainted::new(json!({"comment": "<script>x()</script>hi"}));
///
/// let sanitizer = JsonSanitizer::new();
/// let clean = sanitizer.inbound().sanitize(body).unwrap();
/// assert_eq!(clean.as_ref()["comment"], "hi");
/// ```
#[derive(Clone)]
pub struct Tainted<T> {
    // Must stay private; sanitizers are the only way out.
    inner: T,
}

impl<T> Tainted<T> {
    /// Marks `value` as untrusted.
    pub fn new(value: T) -> Self {
        Self { inner: value }
    }

    /// Borrows the raw value for a sanitizer to read.
    pub(crate) fn peek(&self) -> &T {
        &self.inner
    }
}

// No Deref, AsRef, Borrow or From/Into: any of them would let raw data skip
// the sanitizer.

impl<T: fmt::Debug> fmt::Debug for Tainted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tainted")
            .field("inner", &self.inner)
            .finish()
    }
}
