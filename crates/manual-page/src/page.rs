//! The page value object.

use std::time::SystemTime;

use crate::{
    decorate::Decorator,
    html::make_anchors_absolute,
    name::{encode_name, normalize_path},
    submenu::Submenu,
};

/// A single manual page.
///
/// `name` is always the URL encoding of `title`, and `path` is always stored in its
/// canonical `/segment/segment/` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// URL-encoded title, unique within a path.
    name: String,
    /// Human-readable title.
    title: String,
    /// Raw markdown source.
    content: String,
    /// Canonical hierarchical location.
    path: String,
    /// Modification time of the backing file when the page was loaded.
    date_modified: Option<SystemTime>,
    /// Display URL assigned by the caller.
    url: Option<String>,
}

impl Page {
    /// Creates an empty page with the given title at the root path.
    pub fn new(title: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            name: encode_name(&title),
            title,
            content: String::new(),
            path: "/".to_string(),
            date_modified: None,
            url: None,
        }
    }

    /// Sets the content, builder style.
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.set_content(content);
        self
    }

    /// Sets the path, builder style.
    #[must_use]
    pub fn with_path(mut self, path: &str) -> Self {
        self.set_path(path);
        self
    }

    /// Sets the modification time, builder style.
    #[must_use]
    pub fn with_date_modified(mut self, date_modified: SystemTime) -> Self {
        self.date_modified = Some(date_modified);
        self
    }

    /// The URL-encoded name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Sets the title and re-derives the name from it.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.name = encode_name(&self.title);
    }

    /// The raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Replaces the raw content.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// The canonical path, with leading and trailing separators.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The path without leading and trailing separators; empty for the root.
    pub fn trimmed_path(&self) -> &str {
        self.path.trim_matches('/')
    }

    /// Sets the path, normalizing it to `/segment/segment/`.
    pub fn set_path(&mut self, path: &str) {
        self.path = normalize_path(path);
    }

    /// Modification time of the backing file, if the page was loaded from disk.
    pub fn date_modified(&self) -> Option<SystemTime> {
        self.date_modified
    }

    /// The path concatenated with the name.
    pub fn route(&self) -> String {
        format!("{}{}", self.path, self.name)
    }

    /// The display URL, if one was assigned.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Assigns the display URL.
    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = Some(url.into());
    }

    /// Renders the content to HTML.
    ///
    /// Returns `None` when the content is empty or only whitespace. Anchors in the
    /// rendered body are made absolute against `base_url`. With `generate_submenu`,
    /// headings get named anchors and the body is prefixed with the table of
    /// contents inside `<div class="manual-structure">`.
    pub fn parsed_content<D>(
        &self,
        decorator: &D,
        base_url: &str,
        generate_submenu: bool,
    ) -> Option<String>
    where
        D: Decorator + ?Sized,
    {
        if self.content.trim().is_empty() {
            return None;
        }

        let submenu = generate_submenu.then(|| Submenu::generate(&self.content));

        let html = decorator.decorate(&self.content);
        let html = make_anchors_absolute(&html, base_url);

        match submenu {
            Some(submenu) if !submenu.is_empty() => Some(format!(
                "<div class=\"manual-structure\">{}</div>{}",
                submenu.html(),
                submenu.apply(&html)
            )),
            _ => Some(html),
        }
    }
}
