//! Page names and paths.
//!
//! A page name is the form-urlencoded title: ASCII alphanumerics and `-_.` are kept,
//! spaces become `+` and every other byte is percent-encoded. Names are used as
//! file stems and index keys.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Placeholder for the page name in page URL templates.
pub const PAGE_PLACEHOLDER: &str = "%page%";

/// Bytes escaped in page names.
const NAME_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

/// Encodes a page title into its URL-safe name.
pub fn encode_name(title: &str) -> String {
    title
        .split(' ')
        .map(|part| utf8_percent_encode(part, NAME_ENCODE_SET).to_string())
        .collect::<Vec<_>>()
        .join("+")
}

/// Decodes a page name back into its title.
///
/// Invalid UTF-8 sequences are replaced rather than rejected.
pub fn decode_name(name: &str) -> String {
    let spaced = name.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

/// Normalizes a page path to its canonical `/segment/segment/` form.
///
/// The root, and any path made only of separators, is `/`.
pub fn normalize_path(path: &str) -> String {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{trimmed}/")
    }
}
