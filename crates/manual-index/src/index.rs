//! The in-memory page index.

use std::collections::{BTreeMap, BTreeSet};

use manual_page::Page;

/// State of one indexed page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexEntry {
    /// The page exists on disk but has not been loaded.
    NotLoaded,
    /// The page was loaded through [`crate::Manual::get_page`].
    Loaded(Page),
}

impl IndexEntry {
    /// Returns the loaded page, if any.
    pub fn page(&self) -> Option<&Page> {
        match self {
            Self::NotLoaded => None,
            Self::Loaded(page) => Some(page),
        }
    }

    /// Returns true once the page has been loaded.
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }
}

/// Index of pages by canonical path, then by page name.
///
/// Entries record existence only; which root a page comes from is decided when
/// it is loaded. Loaded entries are memoized and never invalidated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Index {
    /// Path to name to entry.
    paths: BTreeMap<String, BTreeMap<String, IndexEntry>>,
}

impl Index {
    /// Returns true if the index has an entry for `name` at `path`.
    pub fn contains(&self, path: &str, name: &str) -> bool {
        self.get(path, name).is_some()
    }

    /// Returns the entry for `name` at `path`.
    pub fn get(&self, path: &str, name: &str) -> Option<&IndexEntry> {
        self.paths.get(path).and_then(|pages| pages.get(name))
    }

    /// Returns the pages indexed at `path`.
    pub fn pages(&self, path: &str) -> Option<&BTreeMap<String, IndexEntry>> {
        self.paths.get(path)
    }

    /// Iterates over the indexed paths in order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.paths.keys().map(String::as_str)
    }

    /// Iterates over every `(path, name, entry)` in path then name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &IndexEntry)> {
        self.paths.iter().flat_map(|(path, pages)| {
            pages
                .iter()
                .map(move |(name, entry)| (path.as_str(), name.as_str(), entry))
        })
    }

    /// Every distinct page name across all paths, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.paths
            .values()
            .flat_map(BTreeMap::keys)
            .map(String::as_str)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Number of indexed pages.
    pub fn len(&self) -> usize {
        self.paths.values().map(BTreeMap::len).sum()
    }

    /// Returns true if no pages are indexed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Records that a page exists, keeping an already loaded entry.
    pub(crate) fn insert(&mut self, path: String, name: String) {
        self.paths
            .entry(path)
            .or_default()
            .entry(name)
            .or_insert(IndexEntry::NotLoaded);
    }

    /// Stores a loaded page.
    pub(crate) fn store(&mut self, path: &str, name: &str, page: Page) {
        self.paths
            .entry(path.to_string())
            .or_default()
            .insert(name.to_string(), IndexEntry::Loaded(page));
    }
}
