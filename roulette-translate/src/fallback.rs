/// Fixed marker used when there is no description text at all.
pub const NO_DESCRIPTION: &str = "Description not available.";

/// Notice appended to the truncated original when translation fails.
const FALLBACK_NOTICE: &str = "... [Translation not available. Showing abbreviated original text.]";

/// How much of the original text the fallback keeps, in characters.
const FALLBACK_CHARS: usize = 300;

/// Last-resort strategy in the translation chain: the first 300
/// characters of the original plus a fixed notice. Always succeeds and
/// always produces non-empty output.
pub fn fallback(text: &str) -> String {
    if text.is_empty() {
        return NO_DESCRIPTION.to_string();
    }
    let shortened: String = text.chars().take(FALLBACK_CHARS).collect();
    format!("{shortened}{FALLBACK_NOTICE}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_yields_marker() {
        assert_eq!(fallback(""), NO_DESCRIPTION);
    }

    #[test]
    fn short_text_is_kept_whole() {
        let out = fallback("A great game.");
        assert_eq!(
            out,
            "A great game.... [Translation not available. Showing abbreviated original text.]"
        );
    }

    #[test]
    fn text_at_limit_is_kept_whole() {
        let text = "a".repeat(300);
        let out = fallback(&text);
        assert!(out.starts_with(&text));
        assert!(out.ends_with(FALLBACK_NOTICE));
        assert_eq!(out.len(), 300 + FALLBACK_NOTICE.len());
    }

    #[test]
    fn text_over_limit_is_truncated_to_300_chars() {
        let text = "a".repeat(301);
        let out = fallback(&text);
        assert!(out.starts_with(&"a".repeat(300)));
        assert!(!out.starts_with(&"a".repeat(301)));
        assert!(out.ends_with(FALLBACK_NOTICE));
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let text = "é".repeat(301);
        let out = fallback(&text);
        let kept: String = out.chars().take_while(|&c| c == 'é').collect();
        assert_eq!(kept.chars().count(), 300);
        assert!(out.ends_with(FALLBACK_NOTICE));
    }
}
