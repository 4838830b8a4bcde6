use std::fmt;

/// Error returned when a payload cannot be sanitized.
///
/// Malformed HTML, unusual scalars and colliding keys never produce an error;
/// only the nesting limit surfaces here. The message never echoes the
/// rejected payload.
///
/// # Examples
///
/// ```
/// use payload_sanitizer::{SanitizationError, SanitizationErrorKind};
///
/// let error = SanitizationError::new(SanitizationErrorKind::DepthExceeded, "nesting limit 4");
/// assert_eq!(error.kind(), SanitizationErrorKind::DepthExceeded);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizationError {
    kind: SanitizationErrorKind,
    message: String,
}

impl SanitizationError {
    /// Creates a new sanitization error.
    pub fn new(kind: SanitizationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub(crate) fn depth_exceeded(limit: usize) -> Self {
        Self::new(
            SanitizationErrorKind::DepthExceeded,
            format!("payload nesting exceeds the limit of {}", limit),
        )
    }

    /// Returns the error kind.
    pub fn kind(&self) -> SanitizationErrorKind {
        self.kind
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for SanitizationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sanitization failed ({}): {}", self.kind, self.message)
    }
}

impl std::error::Error for SanitizationError {}

/// Kind of sanitization error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SanitizationErrorKind {
    /// The payload nests objects/arrays deeper than the configured limit.
    DepthExceeded,
}

impl fmt::Display for SanitizationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DepthExceeded => write!(f, "depth exceeded"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitization_error_creation() {
        let error = SanitizationError::new(SanitizationErrorKind::DepthExceeded, "test message");

        assert_eq!(error.kind(), SanitizationErrorKind::DepthExceeded);
        assert_eq!(error.message(), "test message");
    }

    #[test]
    fn depth_exceeded_names_the_limit() {
        let error = SanitizationError::depth_exceeded(16);

        assert_eq!(error.kind(), SanitizationErrorKind::DepthExceeded);
        assert!(error.message().contains("16"));
    }

    #[test]
    fn sanitization_error_display() {
        let error = SanitizationError::depth_exceeded(3);

        let output = format!("{}", error);
        assert!(output.contains("sanitization failed"));
        assert!(output.contains("depth exceeded"));
        assert!(output.contains('3'));
    }

    #[test]
    fn error_kinds_display() {
        assert_eq!(
            format!("{}", SanitizationErrorKind::DepthExceeded),
            "depth exceeded"
        );
    }
}
