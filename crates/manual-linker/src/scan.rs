//! Backward tag-context scanning over rendered HTML.
//!
//! These scanners look only at the text *before* a position and reconstruct which
//! elements are still open there by walking tags from right to left. They are
//! linear text scanners, not parsers: they assume well-formed, properly nested
//! tags and misread comments, CDATA and `<script>`/`<style>` bodies that contain a
//! literal `<` or `>`. Anything they cannot resolve counts as not linkable.

/// The last tag in a slice of HTML.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LastTag<'a> {
    /// No `<` at all before the position.
    None,
    /// The last `<` is not followed by a `>`: the position is inside a tag.
    Unclosed,
    /// A complete tag starting at byte `start`.
    Tag {
        /// Offset of the tag's `<`.
        start: usize,
        /// What kind of tag it is.
        kind: TagKind<'a>,
    },
}

/// Classification of a complete tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TagKind<'a> {
    /// `<br/>`: the character before `>` is `/`.
    SelfClosing,
    /// `</name>`: the character after `<` is `/`.
    Closing(&'a str),
    /// `<name attr>`.
    Opening(&'a str),
}

/// Finds and classifies the last tag in `html`.
fn last_tag(html: &str) -> LastTag<'_> {
    let Some(open) = html.rfind('<') else {
        return LastTag::None;
    };
    let close = match html.rfind('>') {
        Some(close) if close > open => close,
        _ => return LastTag::Unclosed,
    };

    let inner = &html[open + 1..close];
    let kind = if inner.ends_with('/') {
        TagKind::SelfClosing
    } else if let Some(name) = inner.strip_prefix('/') {
        TagKind::Closing(name.trim())
    } else {
        TagKind::Opening(inner.split_ascii_whitespace().next().unwrap_or(""))
    };

    LastTag::Tag { start: open, kind }
}

/// Returns true if a link may be inserted right after `html`.
///
/// A position is linkable when it is outside any tag's syntax and not inside an
/// `<a>` element. Self-closing tags are ignored, a closing tag skips back past its
/// opener, and any other open element is transparent.
pub fn is_linkable(html: &str) -> bool {
    let mut html = html;
    loop {
        match last_tag(html) {
            LastTag::None => return true,
            LastTag::Unclosed => return false,
            LastTag::Tag { start, kind } => match kind {
                TagKind::SelfClosing => html = &html[..start],
                TagKind::Closing(name) => match open_position(&html[..start], name) {
                    Some(opener) => html = &html[..opener],
                    None => return false,
                },
                TagKind::Opening(name) => {
                    if name.eq_ignore_ascii_case("a") {
                        return false;
                    }
                    html = &html[..start];
                }
            },
        }
    }
}

/// Finds the unmatched opening tag named `name` in `html`, scanning backward.
///
/// Nested closing tags met on the way are resolved against their own openers
/// first. Returns the offset of the opener's `<`, or `None` when the text runs out
/// or is malformed.
pub fn open_position(html: &str, name: &str) -> Option<usize> {
    let mut pending = vec![name];
    let mut html = html;
    loop {
        let LastTag::Tag { start, kind } = last_tag(html) else {
            return None;
        };
        match kind {
            TagKind::SelfClosing => {}
            TagKind::Closing(nested) => pending.push(nested),
            TagKind::Opening(opened) => {
                if pending.last() == Some(&opened) {
                    pending.pop();
                    if pending.is_empty() {
                        return Some(start);
                    }
                }
            }
        }
        html = &html[..start];
    }
}
