//! Table of contents ("submenu") generation.
//!
//! The submenu is derived from the raw markdown source: every line starting with `#`
//! is a heading whose level is the number of leading `#` characters. Each heading
//! contributes a list item linking to `#slug`, and a replacement that prefixes the
//! rendered `<hN>title</hN>` with a named anchor.
//!
//! Replacements are literal string matches against the rendered HTML. A renderer that
//! adds attributes, entity-escapes the title or renders inline markup inside the
//! heading produces HTML the replacement does not match, and that heading keeps no
//! anchor.

use crate::slug::slugify;

/// Opens a nested list and its first item.
const OPEN_LEVEL: &str = "<ul>\n<li>";
/// Closes a nested list and the item that holds it.
const CLOSE_NESTED: &str = "</ul>\n</li>\n";
/// Closes the current item and opens a sibling.
const NEXT_ITEM: &str = "</li>\n<li>";
/// Closes the current item and its list.
const CLOSE_LIST: &str = "</li>\n</ul>\n";

/// A generated table of contents with the heading substitutions it needs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submenu {
    /// Nested `<ul>` markup.
    html: String,
    /// Rendered heading to anchored heading, in first-seen order.
    replacements: Vec<(String, String)>,
}

impl Submenu {
    /// Scans markdown source for headings and builds the submenu.
    pub fn generate(content: &str) -> Self {
        let mut html = String::new();
        let mut replacements: Vec<(String, String)> = Vec::new();
        let mut previous = 0;
        let mut depth = 0;

        for (level, title) in content.lines().filter_map(parse_heading) {
            let slug = slugify(title);

            let original = format!("<h{level}>{title}</h{level}>");
            let replacement = format!("<a name=\"{slug}\"></a>{original}");
            match replacements.iter_mut().find(|(key, _)| *key == original) {
                Some(entry) => entry.1 = replacement,
                None => replacements.push((original, replacement)),
            }

            if depth == 0 {
                html.push_str(OPEN_LEVEL);
                depth = 1;
            } else if level > previous {
                html.push_str(&OPEN_LEVEL.repeat(level - previous));
                depth += level - previous;
            } else if level < previous {
                // never close the outermost list
                let close = (previous - level).min(depth - 1);
                html.push_str("</li>\n");
                html.push_str(&CLOSE_NESTED.repeat(close));
                html.push_str("<li>");
                depth -= close;
            } else {
                html.push_str(NEXT_ITEM);
            }

            html.push_str(&format!("<a href=\"#{slug}\">{title}</a>"));
            previous = level;
        }

        html.push_str(&CLOSE_LIST.repeat(depth));

        Self { html, replacements }
    }

    /// Returns true when the content has no headings.
    pub fn is_empty(&self) -> bool {
        self.html.is_empty()
    }

    /// The nested list markup.
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Literal heading substitutions, plain rendered heading first.
    pub fn replacements(&self) -> &[(String, String)] {
        &self.replacements
    }

    /// Substitutes every rendered heading with its anchored version.
    pub fn apply(&self, html: &str) -> String {
        self.replacements
            .iter()
            .fold(html.to_string(), |html, (original, replacement)| {
                html.replace(original, replacement)
            })
    }
}

/// Parses a heading line into its level and trimmed title.
///
/// Only lines with `#` at position 0 qualify.
fn parse_heading(line: &str) -> Option<(usize, &str)> {
    if !line.starts_with('#') {
        return None;
    }
    let level = line.bytes().take_while(|&b| b == b'#').count();
    Some((level, line[level..].trim()))
}
