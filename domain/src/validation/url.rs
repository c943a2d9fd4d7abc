//! Video URL check for the vocal-mix form.

use regex::Regex;
use std::sync::LazyLock;

static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://[A-Za-z0-9_-]+(\.[A-Za-z0-9_-]+)+[/#?]?.*$")
        .expect("URL pattern is a valid regex")
});

/// Whether `url` looks like an http(s) URL with a dotted host.
pub fn is_well_formed_url(url: &str) -> bool {
    URL_PATTERN.is_match(url)
}

/// Whether to show the "check your URL" warning.
///
/// An empty field never warns; it is caught by the required-field check
/// instead.
pub fn url_warning(url: &str) -> bool {
    !url.is_empty() && !is_well_formed_url(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed() {
        assert!(is_well_formed_url("https://youtu.be/abc123"));
        assert!(is_well_formed_url("http://www.nicovideo.jp/watch/sm9"));
        assert!(is_well_formed_url("https://drive.google.com"));
        assert!(is_well_formed_url("https://example.com?x=1"));
    }

    #[test]
    fn test_malformed() {
        assert!(!is_well_formed_url("youtu.be/abc"));
        assert!(!is_well_formed_url("ftp://example.com"));
        assert!(!is_well_formed_url("https://localhost"));
        assert!(!is_well_formed_url("https://"));
        assert!(!is_well_formed_url(""));
    }

    #[test]
    fn test_warning_only_for_nonempty_malformed() {
        assert!(!url_warning(""));
        assert!(!url_warning("https://youtu.be/abc123"));
        assert!(url_warning("not a url"));
    }
}
