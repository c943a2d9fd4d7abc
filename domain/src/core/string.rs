//! String utilities for the domain layer.

/// Whether a form field counts as empty.
///
/// Whitespace-only input is treated the same as an empty field.
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Return `fallback` when `s` is blank, otherwise `s` itself.
pub fn or_placeholder<'a>(s: &'a str, fallback: &'a str) -> &'a str {
    if is_blank(s) { fallback } else { s }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank("\n\t"));
        assert!(!is_blank("山田"));
        assert!(!is_blank(" a "));
    }

    #[test]
    fn test_or_placeholder() {
        assert_eq!(or_placeholder("", "(未入力)"), "(未入力)");
        assert_eq!(or_placeholder("トップ", "(未入力)"), "トップ");
    }
}
