//! services/cli/src/adapters/html.rs
//!
//! Renders problem statements from HTML to plain text.
//! It implements the `StatementRenderer` port from the `core` crate.

use html2text::render::text_renderer::TrivialDecorator;
use leetcode_archive_core::ports::{PortError, PortResult, StatementRenderer};
use regex::Regex;

// Wide enough that statements are never wrapped.
const NO_WRAP_WIDTH: usize = 10_000;

/// Renders with `html2text`'s trivial decorator: links become their text,
/// with no URLs or footnotes.
pub struct Html2TextRenderer {
    blank_runs: Regex,
}

impl Html2TextRenderer {
    pub fn new() -> PortResult<Self> {
        let blank_runs = Regex::new(r"\n[ \t]*(\n[ \t]*){2,}")
            .map_err(|e| PortError::Unexpected(e.to_string()))?;
        Ok(Self { blank_runs })
    }
}

impl StatementRenderer for Html2TextRenderer {
    fn render_to_plain_text(&self, html: &str) -> PortResult<String> {
        let text = html2text::config::with_decorator(TrivialDecorator::new())
            .string_from_read(html.as_bytes(), NO_WRAP_WIDTH)
            .map_err(|e| PortError::Unexpected(format!("Failed to render statement: {}", e)))?;
        let lines: Vec<&str> = text.lines().map(str::trim_end).collect();
        let joined = lines.join("\n");
        Ok(self.blank_runs.replace_all(joined.trim(), "\n\n").into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_paragraphs_as_plain_text() {
        let renderer = Html2TextRenderer::new().unwrap();

        let text = renderer
            .render_to_plain_text("<p>Given an array of integers <code>nums</code>.</p>")
            .unwrap();

        assert!(text.contains("Given an array of integers"));
        assert!(text.contains("nums"));
        assert!(!text.contains("<p>"));
    }

    #[test]
    fn links_keep_their_text_but_drop_the_url() {
        let renderer = Html2TextRenderer::new().unwrap();

        let text = renderer
            .render_to_plain_text(r#"<p>See <a href="https://example.com/x">the docs</a>.</p>"#)
            .unwrap();

        assert!(text.contains("the docs"));
        assert!(!text.contains("example.com"));
    }

    #[test]
    fn long_lines_are_not_wrapped() {
        let renderer = Html2TextRenderer::new().unwrap();
        let sentence = "word ".repeat(100);

        let text = renderer
            .render_to_plain_text(&format!("<p>{}</p>", sentence))
            .unwrap();

        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn collapses_runs_of_blank_lines() {
        let renderer = Html2TextRenderer::new().unwrap();

        let text = renderer
            .render_to_plain_text("<p>one</p><br><br><br><br><p>two</p>")
            .unwrap();

        assert!(!text.contains("\n\n\n"));
        assert!(text.starts_with("one"));
        assert!(text.ends_with("two"));
    }
}
