//! Syntactic URL checks used before any network validation.
//!
//! The accepted shape is `http(s)://` with an optional `www.` prefix followed
//! by at least one character that is not a space, a double quote, or a
//! control character. Nothing is normalized: callers store the string exactly
//! as submitted, and it must stay usable as a `Location` header value.

use regex::Regex;
use std::sync::LazyLock;

static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^https?://(www\.)?[^ "\p{Cc}]+$"#).unwrap());

static HOSTNAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://(?:www\.)?([^/:]+)").unwrap());

/// Returns true if `candidate` looks like an HTTP or HTTPS URL.
pub fn is_http_url(candidate: &str) -> bool {
    URL_PATTERN.is_match(candidate)
}

/// Extracts the host from a URL.
///
/// Strips the scheme and an optional `www.` prefix and stops at the first
/// `/` or `:`. A query or fragment directly after the host stays part of
/// it, so such a host fails the lookup. Returns `None` when nothing is left.
pub fn extract_hostname(url: &str) -> Option<&str> {
    HOSTNAME_PATTERN
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|host| !host.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert!(is_http_url("http://example.com"));
        assert!(is_http_url("https://example.com/path?q=1"));
        assert!(is_http_url("http://www.example.com"));
        assert!(is_http_url("https://localhost:3000/test"));
    }

    #[test]
    fn test_rejects_other_shapes() {
        assert!(!is_http_url("not a url"));
        assert!(!is_http_url("ftp://x.com"));
        assert!(!is_http_url("example.com"));
        assert!(!is_http_url("http://"));
        assert!(!is_http_url("https://exa mple.com"));
        assert!(!is_http_url("https://example.com/\"quoted\""));
        assert!(!is_http_url(""));
    }

    #[test]
    fn test_rejects_control_characters() {
        assert!(!is_http_url("http://localhost/a\nb"));
        assert!(!is_http_url("http://localhost/a\rb"));
        assert!(!is_http_url("http://localhost/a\tb"));
        assert!(!is_http_url("http://localhost/a\u{7f}b"));
        assert!(is_http_url("http://localhost/caf\u{e9}"));
    }

    #[test]
    fn test_scheme_is_case_sensitive() {
        assert!(!is_http_url("HTTP://example.com"));
    }

    #[test]
    fn test_extract_hostname_strips_scheme_and_www() {
        assert_eq!(extract_hostname("http://www.example.com"), Some("example.com"));
        assert_eq!(
            extract_hostname("https://www.freecodecamp.org/learn"),
            Some("freecodecamp.org")
        );
        assert_eq!(
            extract_hostname("https://api.example.com/v1/users"),
            Some("api.example.com")
        );
    }

    #[test]
    fn test_extract_hostname_stops_at_port() {
        assert_eq!(extract_hostname("http://localhost:3000/test"), Some("localhost"));
    }

    #[test]
    fn test_extract_hostname_keeps_query_after_host() {
        assert_eq!(
            extract_hostname("http://example.com?x=1"),
            Some("example.com?x=1")
        );
        assert_eq!(
            extract_hostname("http://example.com/?x=1"),
            Some("example.com")
        );
    }

    #[test]
    fn test_extract_hostname_empty_host() {
        assert_eq!(extract_hostname("http:///path"), None);
        assert_eq!(extract_hostname("https://:8080"), None);
        assert_eq!(extract_hostname(""), None);
    }
}
