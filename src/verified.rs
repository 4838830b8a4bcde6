/// Payload data that has passed through a [`Sanitizer`](crate::Sanitizer).
///
/// There is no public constructor and no `From<T>`. Every `Verified<T>` in a
/// program was produced by sanitizing a [`Tainted<T>`](crate::Tainted), so a
/// function that takes `Verified<T>` can rely on its markup having been
/// cleaned.
///
/// ```compile_fail
/// use payload_sanitizer::Verified;
///
/// let verified = Verified::new("<script>".to_string());
/// ```
///
/// Access is explicit: borrow with [`AsRef::as_ref`] or consume with
/// [`into_inner`](Self::into_inner). There is deliberately no `Deref`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verified<T> {
    inner: T,
}

impl<T> Verified<T> {
    /// Wraps an already-sanitized value.
    ///
    /// Only sanitizer implementations in this crate may call this, and only
    /// with their own output.
    pub(crate) fn new_unchecked(value: T) -> Self {
        Self { inner: value }
    }

    /// Consumes the wrapper and returns the sanitized value.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T> AsRef<T> for Verified<T> {
    fn as_ref(&self) -> &T {
        &self.inner
    }
}
