//! Anchor slug generation for headings.
//!
//! Slugs name the anchor targets that the table of contents links to:
//! - Lowercase ASCII letters and digits are kept
//! - Every run of other characters becomes a single hyphen
//! - Leading and trailing hyphens are dropped

/// Fallback slug for text without any ASCII alphanumerics.
const EMPTY_SLUG: &str = "heading";

/// Generates an anchor-safe slug from arbitrary text.
///
/// The same text always yields the same slug; duplicates are not disambiguated,
/// so two headings with the same title share an anchor.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    if slug.is_empty() {
        EMPTY_SLUG.to_string()
    } else {
        slug
    }
}
