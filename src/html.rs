//! HTML cleaning collaborator.
//!
//! Tag-level decisions are not made by this crate. [`HtmlCleaner`] is the seam
//! where an HTML sanitizer plugs in; [`AllowListCleaner`] is the default,
//! backed by `ammonia`.

use std::collections::HashSet;
use std::fmt;

/// Inline formatting and link tags kept by the default cleaner.
pub const DEFAULT_ALLOWED_TAGS: &[&str] = &["b", "i", "em", "strong", "a"];

/// Removes disallowed markup from a piece of text.
///
/// Implementations must be total: malformed or partial markup is cleaned on a
/// best-effort basis and never rejected.
pub trait HtmlCleaner {
    /// Returns `text` with every tag outside the allow-list discarded.
    fn clean(&self, text: &str) -> String;
}

/// An `ammonia`-backed cleaner restricted to an allow-list of tags.
///
/// Disallowed tags are discarded and their text content is kept, except for
/// `script` and `style` whose content is dropped too. Attributes on allowed
/// tags follow ammonia's default policy (for example `href` on `a`, with
/// `rel="noopener noreferrer"` added). Text is re-serialized, so a stray `<`,
/// `>` or `&` comes back entity-encoded.
///
/// Input also passes through the HTML parser's preprocessing, which changes
/// some text that has no markup at all: `\r\n` and a lone `\r` become `\n`,
/// U+0000 is dropped, and U+00A0 comes back as `&nbsp;`.
///
/// # Examples
///
/// ```
/// use payload_sanitizer::{AllowListCleaner, HtmlCleaner};
///
/// let cleaner = AllowListCleaner::default();
/// assert_eq!(cleaner.clean("<i>kept</i><u>dropped</u>"), "<i>kept</i>dropped");
/// assert_eq!(cleaner.clean("<script>alert(1)</script>"), "");
/// ```
pub struct AllowListCleaner {
    builder: ammonia::Builder<'static>,
}

impl AllowListCleaner {
    /// Creates a cleaner that keeps exactly the given tags.
    pub fn new(allowed_tags: &[&'static str]) -> Self {
        let mut builder = ammonia::Builder::default();
        builder.tags(allowed_tags.iter().copied().collect::<HashSet<_>>());
        Self { builder }
    }
}

impl Default for AllowListCleaner {
    fn default() -> Self {
        Self::new(DEFAULT_ALLOWED_TAGS)
    }
}

impl fmt::Debug for AllowListCleaner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AllowListCleaner").finish_non_exhaustive()
    }
}

impl HtmlCleaner for AllowListCleaner {
    fn clean(&self, text: &str) -> String {
        self.builder.clean(text).to_string()
    }
}

impl<C: HtmlCleaner + ?Sized> HtmlCleaner for &C {
    fn clean(&self, text: &str) -> String {
        (**self).clean(text)
    }
}
