//! Text-editing helpers for the markdown editor

/// Wrap the selection `[start, end)` of `text` in a `(before, after)` pair.
///
/// Offsets are character indices and are clamped to the text length (and
/// reordered if reversed). Returns the new text and the caret position
/// immediately after the inserted `after` marker, matching what a user
/// would get by typing the markers around the selection.
#[must_use]
pub fn wrap_selection(
    text: &str,
    start: usize,
    end: usize,
    before: &str,
    after: &str,
) -> (String, usize) {
    let len = text.chars().count();
    let start = start.min(len);
    let end = end.min(len);
    let (start, end) = if start <= end { (start, end) } else { (end, start) };

    let head: String = text.chars().take(start).collect();
    let selection: String = text.chars().skip(start).take(end - start).collect();
    let tail: String = text.chars().skip(end).collect();

    let new_text = format!("{head}{before}{selection}{after}{tail}");
    let caret = start + before.chars().count() + selection.chars().count() + after.chars().count();

    (new_text, caret)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_selection_in_bold() {
        let (text, caret) = wrap_selection("hello world", 6, 11, "**", "**");
        assert_eq!(text, "hello **world**");
        assert_eq!(caret, 16);
    }

    #[test]
    fn test_empty_selection_inserts_pair() {
        let (text, caret) = wrap_selection("hello", 5, 5, "**", "**");
        assert_eq!(text, "hello****");
        assert_eq!(caret, 9);
    }

    #[test]
    fn test_prefix_only_marker() {
        let (text, caret) = wrap_selection("heading", 0, 0, "# ", "");
        assert_eq!(text, "# heading");
        assert_eq!(caret, 2);
    }

    #[test]
    fn test_clamps_out_of_range_offsets() {
        let (text, caret) = wrap_selection("ab", 10, 20, "*", "*");
        assert_eq!(text, "ab**");
        assert_eq!(caret, 4);
    }

    #[test]
    fn test_reorders_reversed_selection() {
        let (text, caret) = wrap_selection("hello world", 11, 6, "**", "**");
        assert_eq!(text, "hello **world**");
        assert_eq!(caret, 16);
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let (text, caret) = wrap_selection("héllo", 1, 2, "*", "*");
        assert_eq!(text, "h*é*llo");
        assert_eq!(caret, 4);
    }
}
