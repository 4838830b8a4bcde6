use crate::html::DEFAULT_ALLOWED_TAGS;

/// Default limit on nested objects/arrays, matching serde_json's parser limit.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Tunable limits for a [`JsonSanitizer`](crate::JsonSanitizer).
///
/// # Examples
///
/// ```
/// use payload_sanitizer::SanitizerConfig;
///
/// let config = SanitizerConfig::default()
///     .with_max_depth(32)
///     .with_allowed_tags(&["b", "i"]);
///
/// assert_eq!(config.max_depth(), 32);
/// assert_eq!(config.allowed_tags(), &["b", "i"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizerConfig {
    max_depth: usize,
    allowed_tags: Vec<&'static str>,
}

impl SanitizerConfig {
    /// Sets the maximum container nesting depth.
    ///
    /// The top-level object or array counts as depth 1.
    ///
    /// # Panics
    ///
    /// Panics if `max_depth` is 0.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        assert!(max_depth > 0, "max_depth must be greater than 0");
        self.max_depth = max_depth;
        self
    }

    /// Replaces the HTML tag allow-list used by the default cleaner.
    pub fn with_allowed_tags(mut self, tags: &[&'static str]) -> Self {
        self.allowed_tags = tags.to_vec();
        self
    }

    /// Returns the maximum container nesting depth.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Returns the HTML tag allow-list.
    pub fn allowed_tags(&self) -> &[&'static str] {
        &self.allowed_tags
    }
}

impl Default for SanitizerConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            allowed_tags: DEFAULT_ALLOWED_TAGS.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SanitizerConfig::default();

        assert_eq!(config.max_depth(), 128);
        assert_eq!(config.allowed_tags(), &["b", "i", "em", "strong", "a"]);
    }

    #[test]
    fn builder_methods_override_defaults() {
        let config = SanitizerConfig::default()
            .with_max_depth(4)
            .with_allowed_tags(&["p"]);

        assert_eq!(config.max_depth(), 4);
        assert_eq!(config.allowed_tags(), &["p"]);
    }

    #[test]
    #[should_panic(expected = "max_depth must be greater than 0")]
    fn zero_max_depth_panics() {
        let _config = SanitizerConfig::default().with_max_depth(0);
    }
}
