//! Anchor rewriting for rendered HTML.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Matches the `href` value of an anchor start tag.
static ANCHOR_HREF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(<a\s[^>]*?href\s*=\s*")([^"]*)(")"#).expect("anchor pattern is valid")
});

/// Rewrites relative anchor hrefs to absolute URLs under `base_url`.
///
/// Left untouched: fragments (`#top`), root-relative paths (`/x`), protocol-relative
/// URLs (`//host/x`), anything with a scheme (`https:`, `mailto:`) and empty hrefs.
/// An empty `base_url` leaves the HTML unchanged.
pub fn make_anchors_absolute(html: &str, base_url: &str) -> String {
    if base_url.is_empty() {
        return html.to_string();
    }

    let base = base_url.trim_end_matches('/');
    ANCHOR_HREF
        .replace_all(html, |caps: &Captures<'_>| {
            format!("{}{}{}", &caps[1], absolutize(&caps[2], base), &caps[3])
        })
        .into_owned()
}

/// Joins a single href onto `base` when it is relative.
fn absolutize(href: &str, base: &str) -> String {
    if href.is_empty() || href.starts_with('#') || href.starts_with('/') || has_scheme(href) {
        return href.to_string();
    }
    format!("{base}/{}", href.trim_start_matches("./"))
}

/// Returns true if the href starts with a URL scheme such as `https:`.
fn has_scheme(href: &str) -> bool {
    href.split_once(':').is_some_and(|(scheme, _)| {
        scheme.starts_with(|c: char| c.is_ascii_alphabetic())
            && scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}
