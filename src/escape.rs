//! JSON control-character escaping for raw strings.

use serde_json::Value;

/// Escapes JSON control characters in `input` without adding quotes.
///
/// The string is encoded as a JSON string literal and the surrounding quotes
/// are stripped again, so `a"b<TAB>c` becomes `a\"b\tc`. Quotes, backslashes
/// and the short escapes (`\b \t \n \f \r`) use their two-character form; any
/// other code point below U+0020 becomes `\u00XX`.
///
/// # Examples
///
/// ```
/// use payload_sanitizer::escape_json;
///
/// assert_eq!(escape_json("line\nbreak"), r"line\nbreak");
/// assert_eq!(escape_json(r#"say "hi""#), r#"say \"hi\""#);
/// ```
pub fn escape_json(input: &str) -> String {
    let literal = Value::from(input).to_string();
    // A serialized string is always `"` + escaped body + `"`.
    literal[1..literal.len() - 1].to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_unchanged() {
        assert_eq!(escape_json("hello world"), "hello world");
        assert_eq!(escape_json(""), "");
    }

    #[test]
    fn short_escapes_use_two_characters() {
        let escaped = escape_json("\u{8}\t\u{c}\n\r\\\"");

        assert_eq!(escaped, r#"\b\t\f\n\r\\\""#);
    }

    #[test]
    fn other_control_codes_use_unicode_escapes() {
        assert_eq!(escape_json("a\u{0}b"), r"a\u0000b");
        assert_eq!(escape_json("\u{1f}"), r"\u001f");
    }

    #[test]
    fn only_the_added_quotes_are_stripped() {
        // Leading and trailing quotes in the input survive as escapes.
        assert_eq!(escape_json("\"quoted\""), r#"\"quoted\""#);
    }

    #[test]
    fn markup_and_unicode_pass_through() {
        assert_eq!(escape_json("<b>x</b> & 世界"), "<b>x</b> & 世界");
    }

    #[test]
    fn output_never_contains_raw_control_characters() {
        let input: String = (0u8..0x20).map(char::from).collect();
        let escaped = escape_json(&input);

        assert!(!escaped.chars().any(|c| c.is_control()));
    }
}
