//! Renders a computed diff as an HTML fragment.
//!
//! Added text is wrapped in a green span, removed text in a red
//! strikethrough span, and unchanged text passes through bare. Segment text
//! is escaped before wrapping so user input can never break out of the
//! surrounding markup.

use crate::model::diff::change_type::ChangeType;
use crate::model::diff::text_diff::TextDiff;

const ADDED_OPEN: &str = "<span style=\"color:green\">";
const REMOVED_OPEN: &str = "<span style=\"color:red;text-decoration:line-through\">";
const SPAN_CLOSE: &str = "</span>";

/// Render the segments of `diff`, in order, into one HTML fragment.
pub fn render_markup(diff: &TextDiff) -> String {
    let mut markup = String::new();
    for segment in &diff.segments {
        let text = escape(&segment.text);
        match segment.modification {
            ChangeType::Added => {
                markup.push_str(ADDED_OPEN);
                markup.push_str(&text);
                markup.push_str(SPAN_CLOSE);
            }
            ChangeType::Removed => {
                markup.push_str(REMOVED_OPEN);
                markup.push_str(&text);
                markup.push_str(SPAN_CLOSE);
            }
            ChangeType::Unchanged => markup.push_str(&text),
        }
    }
    markup
}

/// Escape the characters that are significant in HTML text content.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::diff_texts;
    use crate::model::diff::text_diff::DiffSegment;

    #[test]
    fn test_render_wraps_added_and_removed() {
        let diff = diff_texts("cat", "cot");
        let markup = render_markup(&diff);

        assert!(markup.contains("<span style=\"color:red;text-decoration:line-through\">a</span>"));
        assert!(markup.contains("<span style=\"color:green\">o</span>"));
        assert!(markup.starts_with('c'));
        assert!(markup.ends_with('t'));
    }

    #[test]
    fn test_render_unchanged_passes_through() {
        let diff = diff_texts("same", "same");
        assert_eq!(render_markup(&diff), "same");
    }

    #[test]
    fn test_render_empty_diff_is_empty() {
        let diff = diff_texts("", "");
        assert_eq!(render_markup(&diff), "");
    }

    #[test]
    fn test_render_escapes_segment_text() {
        let diff = diff_texts("", "<script>alert('x')</script>");
        let markup = render_markup(&diff);

        assert!(!markup.contains("<script>"));
        assert!(markup.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_render_preserves_segment_order() {
        let diff = TextDiff {
            segments: vec![
                DiffSegment {
                    modification: ChangeType::Removed,
                    text: "old".to_string(),
                },
                DiffSegment {
                    modification: ChangeType::Added,
                    text: "new".to_string(),
                },
            ],
        };
        let markup = render_markup(&diff);
        let removed_at = markup.find("old").unwrap();
        let added_at = markup.find("new").unwrap();
        assert!(removed_at < added_at);
    }

    #[test]
    fn test_escape_covers_html_significant_chars() {
        assert_eq!(escape("a & b"), "a &amp; b");
        assert_eq!(escape("<tag>"), "&lt;tag&gt;");
        assert_eq!(escape("\"quoted\""), "&quot;quoted&quot;");
        assert_eq!(escape("it's"), "it&#x27;s");
        assert_eq!(escape("plain"), "plain");
    }
}
