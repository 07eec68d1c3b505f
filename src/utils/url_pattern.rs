//! Destination URL shape validation.
//!
//! The gate is deliberately permissive: the scheme and `www.` prefix are
//! optional, and anything after the TLD is accepted. It is a shape check,
//! not a full parse, so bare hosts like `example.com` pass.

use regex::Regex;
use std::sync::LazyLock;

/// Compiled URL shape pattern: optional scheme, optional `www.`, a host of
/// 2-256 characters, a dot-separated TLD of 2-6 letters, optional tail.
/// Anchored at the start only — a prefix match is a match.
static URL_SHAPE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(http(s)?://.)?(www\.)?[-a-zA-Z0-9@:%._+~#=]{2,256}\.[a-z]{2,6}\b([-a-zA-Z0-9@:%_+.~#?&/=]*)",
    )
    .unwrap()
});

/// Returns true when the input looks like a destination URL.
pub fn is_valid_url(input: &str) -> bool {
    URL_SHAPE_REGEX.is_match(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_https_with_www() {
        assert!(is_valid_url("https://www.google.com"));
    }

    #[test]
    fn test_accepts_http() {
        assert!(is_valid_url("http://example.com"));
    }

    #[test]
    fn test_accepts_bare_host() {
        assert!(is_valid_url("example.com"));
    }

    #[test]
    fn test_accepts_path_and_query() {
        assert!(is_valid_url("https://example.com/search?q=rust&lang=en"));
    }

    #[test]
    fn test_accepts_subdomain() {
        assert!(is_valid_url("https://api.example.com/v1/users"));
    }

    #[test]
    fn test_rejects_single_letter_host() {
        // Only one character before the dot.
        assert!(!is_valid_url("w.google"));
    }

    #[test]
    fn test_rejects_missing_tld() {
        assert!(!is_valid_url("localhost"));
    }

    #[test]
    fn test_rejects_uppercase_tld() {
        assert!(!is_valid_url("example.COM"));
    }

    #[test]
    fn test_rejects_long_tld() {
        assert!(!is_valid_url("example.toolongtld"));
    }

    #[test]
    fn test_rejects_empty_string() {
        assert!(!is_valid_url(""));
    }
}
