//! Markdown rendering
//!
//! Pure markdown-to-sanitized-HTML conversion for the note preview pane.

mod sanitize;

pub use sanitize::sanitize;

use pulldown_cmark::{html, Parser};

/// Placeholder shown when conversion fails
const RENDER_ERROR_HTML: &str = "<p>Error rendering markdown</p>";

/// Render markdown to sanitized HTML.
///
/// Supports headers, emphasis, links, images, inline and fenced code, lists,
/// blockquotes, and paragraphs. The output has passed through [`sanitize`],
/// and a conversion failure yields a visible placeholder instead of
/// propagating.
#[must_use]
pub fn render(markdown: &str) -> String {
    // Script/iframe elements are dropped from the source first: a raw-HTML
    // block would otherwise swallow the rest of its line before the output
    // pass ever saw it.
    let source = sanitize::strip_dangerous_elements(markdown);

    // A renderer panic must never reach the UI.
    let converted = std::panic::catch_unwind(|| {
        let parser = Parser::new(&source);
        let mut out = String::with_capacity(source.len() * 2);
        html::push_html(&mut out, parser);
        out
    });

    match converted {
        Ok(raw) => sanitize(&raw),
        Err(_) => {
            tracing::error!("Markdown conversion panicked; substituting placeholder");
            RENDER_ERROR_HTML.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_headers() {
        for level in 1..=6 {
            let markdown = format!("{} Title", "#".repeat(level));
            let html = render(&markdown);
            assert!(html.contains(&format!("<h{level}>Title</h{level}>")), "{html}");
        }
    }

    #[test]
    fn test_renders_emphasis() {
        let html = render("**bold** *italic* ***both***");
        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains("<em>italic</em>"));
        assert!(html.contains("<em><strong>both</strong></em>"));
    }

    #[test]
    fn test_renders_links_and_images() {
        let html = render("[site](https://example.com) ![alt](https://example.com/a.png)");
        assert!(html.contains(r#"<a href="https://example.com">site</a>"#));
        assert!(html.contains(r#"<img src="https://example.com/a.png" alt="alt""#));
    }

    #[test]
    fn test_renders_code() {
        let html = render("`inline`\n\n```\nblock\n```");
        assert!(html.contains("<code>inline</code>"));
        assert!(html.contains("<pre><code>block\n</code></pre>"));
    }

    #[test]
    fn test_renders_lists_and_blockquotes() {
        let html = render("- one\n- two\n\n1. first\n\n> quoted");
        assert!(html.contains("<ul>"));
        assert!(html.contains("<li>one</li>"));
        assert!(html.contains("<ol>"));
        assert!(html.contains("<blockquote>"));
    }

    #[test]
    fn test_wraps_plain_lines_in_paragraphs() {
        let html = render("just a line");
        assert!(html.contains("<p>just a line</p>"));
    }

    #[test]
    fn test_strips_script_but_keeps_formatting() {
        let html = render("<script>x</script>**bold**");
        assert!(!html.to_lowercase().contains("<script"));
        assert!(html.contains("<strong>bold</strong>"));
    }

    #[test]
    fn test_empty_input_is_fine() {
        assert_eq!(render(""), "");
    }
}
