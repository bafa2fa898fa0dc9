//! Links occurrences of page titles in rendered manual HTML.
//!
//! [`PageLinker`] takes HTML produced by the page renderer and wraps every safe
//! occurrence of a known page title in an anchor to that page. Occurrences inside
//! tag syntax (attribute values, tag names) or inside an existing `<a>` element
//! are left alone, so running the linker over its own output adds nothing.
//!
//! # Example
//!
//! ```
//! use manual_linker::PageLinker;
//!
//! let linker = PageLinker::new("/manual/%page%", ["Getting+Started"]);
//! let html = linker.process("<p>Read getting started first.</p>");
//! assert_eq!(
//!     html,
//!     "<p>Read <a href=\"/manual/Getting+Started\">getting started</a> first.</p>"
//! );
//! ```

#![warn(missing_docs)]

mod scan;

pub use manual_page::PAGE_PLACEHOLDER;
use manual_page::decode_name;
use tracing::debug;

use crate::scan::is_linkable;

/// Inserts links to known pages into rendered HTML.
#[derive(Debug, Clone)]
pub struct PageLinker {
    /// URL template containing [`PAGE_PLACEHOLDER`].
    url: String,
    /// Candidate page names, in the order they are linked.
    names: Vec<String>,
}

impl PageLinker {
    /// Creates a linker for the given URL template and candidate page names.
    ///
    /// Names are URL-encoded page names; their decoded titles are what gets matched.
    pub fn new<I, S>(url: impl Into<String>, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            url: url.into(),
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Links every linkable occurrence of every candidate title in `content`.
    ///
    /// Titles are matched ASCII case-insensitively and the matched text keeps its
    /// original case. Candidates are processed in order; text linked by an earlier
    /// candidate is inside an anchor and is skipped by later ones.
    pub fn process(&self, content: &str) -> String {
        let mut content = content.to_string();

        for name in &self.names {
            let title = decode_name(name);
            if title.is_empty() {
                continue;
            }
            let href = self.url.replace(PAGE_PLACEHOLDER, name);

            let mut linked = 0;
            let mut position = 0;
            while let Some(found) = find_ignore_ascii_case(&content, &title, position) {
                if !is_linkable(&content[..found]) {
                    position = found + 1;
                    continue;
                }

                let end = found + title.len();
                let mut rebuilt = String::with_capacity(content.len() + href.len() + 15);
                rebuilt.push_str(&content[..found]);
                rebuilt.push_str("<a href=\"");
                rebuilt.push_str(&href);
                rebuilt.push_str("\">");
                rebuilt.push_str(&content[found..end]);
                rebuilt.push_str("</a>");
                position = rebuilt.len();
                rebuilt.push_str(&content[end..]);

                content = rebuilt;
                linked += 1;
            }

            if linked > 0 {
                debug!(page = %name, occurrences = linked, "linked page title");
            }
        }

        content
    }
}

/// Finds `needle` in `haystack` at or after byte `from`, ignoring ASCII case.
///
/// Matches always start and end on character boundaries: ASCII folding never maps
/// a multi-byte sequence onto anything but itself.
fn find_ignore_ascii_case(haystack: &str, needle: &str, from: usize) -> Option<usize> {
    let needle = needle.as_bytes();
    if needle.is_empty() {
        return None;
    }
    haystack
        .as_bytes()
        .get(from..)?
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle))
        .map(|offset| from + offset)
}
