//! HTML sanitization
//!
//! Note content is untrusted input. Everything headed for the preview pane
//! must pass through [`sanitize`]: script/iframe elements, inline event
//! handlers, and `javascript:` URLs are stripped, nothing else is touched.

use regex::Regex;

/// Sanitize an HTML fragment for insertion into the DOM.
///
/// Idempotent: sanitizing already-sanitized output changes nothing.
#[must_use]
pub fn sanitize(html: &str) -> String {
    let cleaned = strip_dangerous_elements(html);
    let cleaned = strip_event_handlers(&cleaned);
    neutralize_javascript_urls(&cleaned)
}

/// Remove `<script>`/`<iframe>` elements, paired or orphaned.
///
/// Also applied to the markdown source before conversion so a raw-HTML
/// block can never smuggle one of these elements past the output pass.
pub(crate) fn strip_dangerous_elements(input: &str) -> String {
    // (?is): case-insensitive, `.` spans newlines for multi-line elements.
    let paired = Regex::new(r"(?is)<(script|iframe)\b[^>]*>.*?</\s*(script|iframe)\s*>")
        .expect("Invalid regex");
    let orphan = Regex::new(r"(?is)</?\s*(script|iframe)\b[^>]*>").expect("Invalid regex");

    let out = paired.replace_all(input, "");
    orphan.replace_all(&out, "").into_owned()
}

/// Remove inline `on*` event-handler attributes, quoted or bare.
fn strip_event_handlers(input: &str) -> String {
    let quoted = Regex::new(r#"(?i)\s+on\w+\s*=\s*"[^"]*""#).expect("Invalid regex");
    let single = Regex::new(r"(?i)\s+on\w+\s*=\s*'[^']*'").expect("Invalid regex");
    let bare = Regex::new(r"(?i)\s+on\w+\s*=\s*[^\s>'\x22]+").expect("Invalid regex");

    let out = quoted.replace_all(input, "");
    let out = single.replace_all(&out, "");
    bare.replace_all(&out, "").into_owned()
}

/// Replace `javascript:` URLs in `href`/`src` attributes with a dead anchor.
fn neutralize_javascript_urls(input: &str) -> String {
    let quoted = Regex::new(r#"(?i)\b(href|src)\s*=\s*(["'])\s*javascript:[^"']*(["'])"#)
        .expect("Invalid regex");
    let bare =
        Regex::new(r"(?i)\b(href|src)\s*=\s*javascript:[^\s>]*").expect("Invalid regex");

    let out = quoted.replace_all(input, "$1=$2#$3");
    bare.replace_all(&out, "$1=\"#\"").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_paired_script() {
        assert_eq!(sanitize("a<script>alert(1)</script>b"), "ab");
        assert_eq!(sanitize("a<SCRIPT src=x>alert(1)</SCRIPT>b"), "ab");
    }

    #[test]
    fn test_strips_multiline_script() {
        let input = "before\n<script>\nalert(1)\n</script>\nafter";
        assert_eq!(sanitize(input), "before\n\nafter");
    }

    #[test]
    fn test_strips_orphan_tags() {
        assert_eq!(sanitize("x<script>y"), "xy");
        assert_eq!(sanitize("x</script>y"), "xy");
        assert_eq!(sanitize("x<iframe src=\"https://a\">y"), "xy");
    }

    #[test]
    fn test_strips_iframe_element() {
        assert_eq!(
            sanitize("<iframe src=\"https://evil\"></iframe><p>ok</p>"),
            "<p>ok</p>"
        );
    }

    #[test]
    fn test_strips_event_handlers() {
        assert_eq!(
            sanitize(r#"<img src="a.png" onerror="alert(1)">"#),
            r#"<img src="a.png">"#
        );
        assert_eq!(
            sanitize("<div onclick='go()'>x</div>"),
            "<div>x</div>"
        );
        assert_eq!(sanitize("<div onclick=go()>x</div>"), "<div>x</div>");
    }

    #[test]
    fn test_neutralizes_javascript_urls() {
        let out = sanitize(r#"<a href="javascript:alert(1)">x</a>"#);
        assert!(!out.to_lowercase().contains("javascript:"), "{out}");
        assert!(out.contains(">x</a>"));

        let out = sanitize("<img src=javascript:alert(1)>");
        assert!(!out.to_lowercase().contains("javascript:"), "{out}");
    }

    #[test]
    fn test_keeps_ordinary_markup() {
        let input = r#"<p>hello <strong>world</strong> <a href="https://example.com">link</a></p>"#;
        assert_eq!(sanitize(input), input);
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        let inputs = [
            r#"<script>x</script><p onclick="a()">hi</p>"#,
            r#"<a href="javascript:x">y</a>"#,
            "<p>plain</p>",
        ];
        for input in inputs {
            let once = sanitize(input);
            assert_eq!(sanitize(&once), once);
        }
    }
}
