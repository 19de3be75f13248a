//! Text helpers for compact table and card layouts

/// Default maximum length for [`truncate`]
pub const DEFAULT_TRUNCATE_LEN: usize = 80;

const ELLIPSIS: &str = "...";

/// Placeholder for missing values in tables and cards
pub const EMPTY_PLACEHOLDER: &str = "-";

/// `value` when present and non-empty, `fallback` otherwise
pub fn non_empty_or(value: Option<&str>, fallback: &str) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or(fallback)
        .to_string()
}

/// Keeps at most `max_len` characters, appending `...` when something was cut
pub fn truncate(text: &str, max_len: usize) -> String {
    match text.char_indices().nth(max_len) {
        Some((byte_idx, _)) => format!("{}{}", &text[..byte_idx], ELLIPSIS),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_unchanged() {
        assert_eq!(truncate("1 Main St", DEFAULT_TRUNCATE_LEN), "1 Main St");
        assert_eq!(truncate("", 5), "");
        assert_eq!(truncate("abcde", 5), "abcde");
    }

    #[test]
    fn test_long_text_cut() {
        assert_eq!(truncate("abcdef", 5), "abcde...");
        assert_eq!(truncate(&"x".repeat(200), 120).len(), 123);
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        assert_eq!(truncate("Zürich Straße 1", 6), "Zürich...");
        assert_eq!(truncate("日本語テキスト", 3), "日本語...");
    }

    #[test]
    fn test_non_empty_or() {
        assert_eq!(non_empty_or(Some("INV-1"), EMPTY_PLACEHOLDER), "INV-1");
        assert_eq!(non_empty_or(Some(""), EMPTY_PLACEHOLDER), "-");
        assert_eq!(non_empty_or(None, "Invoice"), "Invoice");
        assert_eq!(non_empty_or(Some(""), "Invoice"), "Invoice");
    }
}
