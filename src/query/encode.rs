//! Quoting of raw search input into the literal token format the remote
//! query engine expects.

use std::fmt::Display;

/// Encodes a raw search value as a double-quoted literal.
///
/// `None`, empty and all-whitespace inputs become an empty string, anything
/// else is trimmed and wrapped in one pair of `"` characters. Embedded quotes
/// are not escaped and the function is not idempotent: encoding an already
/// quoted value adds another layer, so encode each raw value exactly once.
pub fn encode_search_value<V: Display>(value: Option<V>) -> String {
    let Some(value) = value else {
        return String::new();
    };

    let raw = value.to_string();
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    format!("\"{trimmed}\"")
}

/// Shorthand for [`encode_search_value`] on a present string.
pub fn encode(value: &str) -> String {
    encode_search_value(Some(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_plain_values_in_quotes() {
        assert_eq!(encode("alice"), "\"alice\"");
        assert_eq!(encode("0xdeadbeef"), "\"0xdeadbeef\"");
    }

    #[test]
    fn trims_before_quoting() {
        assert_eq!(encode("  bob \t"), "\"bob\"");
    }

    #[test]
    fn blank_and_missing_values_encode_to_empty() {
        assert_eq!(encode(""), "");
        assert_eq!(encode("   \n"), "");
        assert_eq!(encode_search_value(None::<&str>), "");
    }

    #[test]
    fn stringifies_non_string_values() {
        assert_eq!(encode_search_value(Some(1232)), "\"1232\"");
    }

    #[test]
    fn re_encoding_adds_another_layer() {
        let once = encode("x");
        assert_eq!(encode(&once), "\"\"x\"\"");
    }

    #[test]
    fn embedded_quotes_are_not_escaped() {
        assert_eq!(encode("a\"b"), "\"a\"b\"");
    }
}
