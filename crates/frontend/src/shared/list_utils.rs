//! Shared list helpers: search and match highlighting

use std::ops::Range;

use leptos::prelude::*;

/// Trait for records that support free-text search
pub trait Searchable {
    /// Whether the record matches an already normalized query
    /// (see [`normalize_query`])
    fn matches_filter(&self, query: &str) -> bool;
}

/// Trims and lower-cases a search query
pub fn normalize_query(filter: &str) -> String {
    filter.trim().to_lowercase()
}

/// Case-insensitive substring test against an optional field
pub fn field_contains(value: Option<&str>, query: &str) -> bool {
    value
        .map(|v| v.to_lowercase().contains(query))
        .unwrap_or(false)
}

/// Filters a list by a search query, keeping the original order
///
/// A blank query keeps every item.
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    let query = normalize_query(filter);
    if query.is_empty() {
        return items.to_vec();
    }

    items
        .iter()
        .filter(|item| item.matches_filter(&query))
        .cloned()
        .collect()
}

/// Byte ranges of `text` matching `filter` (case-insensitive)
///
/// Ranges always fall on char boundaries of `text`. A match that would start
/// or end inside the lowercase expansion of a single char is skipped.
pub fn match_ranges(text: &str, filter: &str) -> Vec<Range<usize>> {
    let query = normalize_query(filter);
    if query.is_empty() {
        return Vec::new();
    }

    // (offset in `lowered`, offset in `text`) for every char start
    let mut boundaries = Vec::with_capacity(text.len() + 1);
    let mut lowered = String::with_capacity(text.len());
    for (pos, ch) in text.char_indices() {
        boundaries.push((lowered.len(), pos));
        lowered.extend(ch.to_lowercase());
    }
    boundaries.push((lowered.len(), text.len()));

    let original_at = |lowered_pos: usize| {
        boundaries
            .binary_search_by_key(&lowered_pos, |&(lowered, _)| lowered)
            .ok()
            .map(|idx| boundaries[idx].1)
    };

    let mut ranges = Vec::new();
    let mut from = 0;
    while let Some(found) = lowered[from..].find(&query) {
        let start = from + found;
        let end = start + query.len();

        match (original_at(start), original_at(end)) {
            (Some(text_start), Some(text_end)) => {
                ranges.push(text_start..text_end);
                from = end;
            }
            _ => {
                from = start + lowered[start..].chars().next().map_or(1, char::len_utf8);
            }
        }
    }

    ranges
}

/// Highlights matches of `filter` in `text` (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let ranges = match_ranges(text, filter);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;

    for range in ranges {
        if range.start > last_pos {
            parts.push(view! { <span>{text[last_pos..range.start].to_string()}</span> }.into_any());
        }

        parts.push(
            view! { <mark class="search-highlight">{text[range.clone()].to_string()}</mark> }
                .into_any(),
        );

        last_pos = range.end;
    }

    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Item(&'static str);

    impl Searchable for Item {
        fn matches_filter(&self, query: &str) -> bool {
            field_contains(Some(self.0), query)
        }
    }

    #[test]
    fn test_normalize_query() {
        assert_eq!(normalize_query("  INV-12 "), "inv-12");
        assert_eq!(normalize_query("\t\n"), "");
    }

    #[test]
    fn test_filter_list_keeps_order() {
        let items = vec![Item("Alpha"), Item("beta"), Item("ALPHABET")];
        assert_eq!(filter_list(&items, "alpha"), vec![Item("Alpha"), Item("ALPHABET")]);
        assert_eq!(filter_list(&items, "   "), items);
    }

    #[test]
    fn test_field_contains() {
        assert!(field_contains(Some("Billing@Acme.test"), "acme"));
        assert!(!field_contains(None, "acme"));
    }

    #[test]
    fn test_match_ranges() {
        assert_eq!(match_ranges("INV-12 inv-3", " inv "), vec![0..3, 7..10]);
        assert_eq!(match_ranges("INV-12", "   "), Vec::<Range<usize>>::new());
        assert_eq!(match_ranges("INV-12", "xyz"), Vec::<Range<usize>>::new());
    }

    #[test]
    fn test_match_ranges_on_chars_that_change_width_when_lowercased() {
        // 'ẞ' lowercases to a shorter 'ß', 'İ' to the longer "i\u{307}"
        let serial = "\u{1E9E}\u{0130}-7";

        assert!(match_ranges(serial, "i").is_empty());
        assert_eq!(match_ranges(serial, "-7"), vec![5..7]);
        assert_eq!(match_ranges(serial, "\u{DF}"), vec![0..3]);
        assert_eq!(match_ranges("ÄBC äbc", "äb"), vec![0..3, 5..8]);

        for query in ["i", "\u{307}", "-", "7", "\u{DF}i"] {
            for range in match_ranges(serial, query) {
                assert!(serial.is_char_boundary(range.start));
                assert!(serial.is_char_boundary(range.end));
            }
        }
    }

    #[test]
    fn test_highlight_matches_does_not_panic_on_mixed_width_text() {
        let _ = highlight_matches("\u{1E9E}\u{0130}-7", "i");
        let _ = highlight_matches("\u{1E9E}\u{0130}-7", "7");
        let _ = highlight_matches("INV-001", "inv");
    }
}
