//! Body decorators turn raw page source into HTML.

use pulldown_cmark::{Options, Parser, html};

/// Transforms raw page content into HTML.
pub trait Decorator {
    /// Renders `text` to HTML.
    fn decorate(&self, text: &str) -> String;
}

impl<F> Decorator for F
where
    F: Fn(&str) -> String,
{
    fn decorate(&self, text: &str) -> String {
        self(text)
    }
}

/// CommonMark renderer backed by pulldown-cmark.
///
/// Headings render as bare `<hN>title</hN>`: heading attribute syntax is left
/// disabled so the table of contents substitutions match the output.
#[derive(Debug, Clone, Copy)]
pub struct MarkdownDecorator {
    /// Parser extensions.
    options: Options,
}

impl Default for MarkdownDecorator {
    fn default() -> Self {
        Self {
            options: Options::ENABLE_TABLES
                | Options::ENABLE_STRIKETHROUGH
                | Options::ENABLE_FOOTNOTES
                | Options::ENABLE_TASKLISTS,
        }
    }
}

impl MarkdownDecorator {
    /// Creates a decorator with tables, strikethrough, footnotes and task lists.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Decorator for MarkdownDecorator {
    fn decorate(&self, text: &str) -> String {
        let parser = Parser::new_ext(text, self.options);
        let mut out = String::with_capacity(text.len() * 3 / 2);
        html::push_html(&mut out, parser);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_headings_are_bare() {
        let html = MarkdownDecorator::new().decorate("# Intro\n\n## Setup {#custom}\n");
        assert!(html.contains("<h1>Intro</h1>"));
        assert!(html.contains("<h2>Setup {#custom}</h2>"));
    }

    #[test]
    fn test_markdown_paragraphs_and_links() {
        let html = MarkdownDecorator::new().decorate("Read [the guide](guide).");
        assert_eq!(html, "<p>Read <a href=\"guide\">the guide</a>.</p>\n");
    }

    #[test]
    fn test_markdown_tables_enabled() {
        let html = MarkdownDecorator::new().decorate("| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(html.contains("<table>"));
    }

    #[test]
    fn test_closure_decorator() {
        let upper = |text: &str| text.to_uppercase();
        assert_eq!(upper.decorate("abc"), "ABC");
    }
}
