//! String normalization helpers shared by detection and matching.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Trim the text and collapse every internal whitespace run to one space.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text.trim(), " ").into_owned()
}

/// Whitespace-collapsed, lowercased form used for keyword detection.
///
/// Hangul has no case, so lowercasing only affects Latin keywords
/// (`"MARRIED"` matches `"married"`).
pub fn normalize_for_matching(text: &str) -> String {
    collapse_whitespace(text).to_lowercase()
}

/// True when the text has no non-whitespace character.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  결혼은   언제\t\n하니?  "), "결혼은 언제 하니?");
        assert_eq!(collapse_whitespace(""), "");
        assert_eq!(collapse_whitespace("   "), "");
    }

    #[test]
    fn test_normalize_for_matching_lowercases_latin() {
        assert_eq!(
            normalize_for_matching(" When  are you getting MARRIED? "),
            "when are you getting married?"
        );
        assert_eq!(normalize_for_matching("몇  살이니"), "몇 살이니");
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank(" \t\n"));
        assert!(!is_blank(" 아 "));
    }
}
