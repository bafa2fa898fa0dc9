//! The manual: page index, lazy loading, persistence and search.

use std::{
    fs,
    path::{Path, PathBuf},
};

use manual_config::Config;
use manual_page::{Page, decode_name, normalize_path};
use tracing::debug;

use crate::{
    PAGE_EXTENSION, REFERENCE_EXTENSION,
    browser::{FileBrowser, IncludeDirectories},
    discovery::index_directory,
    error::ManualError,
    index::{Index, IndexEntry},
    reference::{Reference, parse_reference_into},
    result::{MAX_RATIO, SearchResult},
};

/// A manual backed by a writable directory and optional read-only overlay roots.
///
/// Pages are indexed on construction. Content is read lazily by [`Manual::get_page`]
/// and memoized in the index; nothing observes later changes on disk until
/// [`Manual::reindex`] or another `get_page` call.
pub struct Manual {
    /// Writable root that saved pages go to and that wins on lookup.
    directory: PathBuf,
    /// Read-only overlay roots.
    browser: Option<Box<dyn FileBrowser>>,
    /// Sub-path scoping the manual inside the overlay roots, without slashes.
    path: Option<String>,
    /// Pages by path and name.
    index: Index,
}

impl Manual {
    /// Creates a manual and indexes its pages.
    ///
    /// `path` scopes the manual inside each overlay root: with `path = "manual"`, the
    /// overlay page `/a/` `Name` lives at `<root>/manual/a/Name.md`. The writable
    /// `directory` is never scoped: its pages live at `<directory>/a/Name.md`.
    pub fn new(
        directory: impl Into<PathBuf>,
        browser: Option<Box<dyn FileBrowser>>,
        path: Option<&str>,
    ) -> Self {
        let path = path
            .map(|p| p.trim_matches('/').to_string())
            .filter(|p| !p.is_empty());

        let mut manual = Self {
            directory: directory.into(),
            browser,
            path,
            index: Index::default(),
        };
        manual.reindex();
        manual
    }

    /// Creates a manual from a resolved configuration.
    ///
    /// Include roots become an [`IncludeDirectories`] overlay. Fails when no
    /// writable directory is configured.
    pub fn from_config(config: &Config) -> Result<Self, ManualError> {
        let directory = config.directory.clone().ok_or(ManualError::NoDirectory)?;

        let browser: Option<Box<dyn FileBrowser>> = if config.include.is_empty() {
            None
        } else {
            Some(Box::new(IncludeDirectories::new(config.include.iter())))
        };

        Ok(Self::new(directory, browser, config.path.as_deref()))
    }

    /// The writable directory.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// The page index.
    pub fn index(&self) -> &Index {
        &self.index
    }

    /// Rebuilds the index from disk, dropping memoized pages.
    ///
    /// Overlay roots are walked lowest priority first and the writable directory
    /// last. The index records existence only, so the walk order has no effect on
    /// which file a page is later loaded from.
    pub fn reindex(&mut self) {
        let mut index = Index::default();

        let overlay_roots = self
            .browser
            .as_deref()
            .map(FileBrowser::include_directories)
            .unwrap_or_default();

        for root in overlay_roots.iter().rev() {
            let directory = match &self.path {
                Some(path) => root.join(path),
                None => root.clone(),
            };
            let found = index_directory(&directory, &mut index);
            debug!(root = %directory.display(), found, "indexed overlay root");
        }

        let found = index_directory(&self.directory, &mut index);
        debug!(root = %self.directory.display(), found, "indexed writable directory");

        self.index = index;
    }

    /// Returns true if the index has a page `name` at `path`.
    ///
    /// This does not touch the disk: pages saved since the last index build are
    /// not reported until they are loaded or the manual is reindexed.
    pub fn has_page(&self, name: &str, path: &str) -> bool {
        self.index.contains(&normalize_path(path), name)
    }

    /// Loads the page `name` at `path`.
    ///
    /// The writable directory is checked first, then the overlay roots in priority
    /// order. Returns `Ok(None)` if `name` is empty or no file exists. A loaded page
    /// is stored in the index.
    pub fn get_page(&mut self, name: &str, path: &str) -> Result<Option<Page>, ManualError> {
        if name.is_empty() {
            return Ok(None);
        }

        let path = normalize_path(path);
        let Some(file) = self.locate_page(name, &path) else {
            debug!(name, path = %path, "page not found");
            return Ok(None);
        };

        let content = read_lossy(&file)?;

        let mut page = Page::new(decode_name(name))
            .with_content(content)
            .with_path(&path);
        if let Ok(modified) = fs::metadata(&file).and_then(|meta| meta.modified()) {
            page = page.with_date_modified(modified);
        }

        debug!(name, path = %path, file = %file.display(), "loaded page");
        self.index.store(&path, name, page.clone());

        Ok(Some(page))
    }

    /// Writes a page to the writable directory, creating directories as needed.
    ///
    /// The index is left unchanged.
    pub fn save_page(&self, page: &Page) -> Result<(), ManualError> {
        let file = self
            .directory
            .join(page_file(page.trimmed_path(), page.name()));

        if let Some(parent) = file.parent() {
            fs::create_dir_all(parent).map_err(|source| ManualError::CreateDirectory {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        fs::write(&file, page.content()).map_err(|source| ManualError::WriteFile {
            path: file.clone(),
            source,
        })?;

        debug!(file = %file.display(), "saved page");
        Ok(())
    }

    /// Searches the content of every indexed page for `query`.
    ///
    /// A page containing the whole query scores 100. Otherwise, for a query of `n`
    /// space-separated tokens with `n > 1`, each token found in the content adds
    /// `round(100 / (n + 1))`. Matching is case sensitive; single-token queries only
    /// match as a whole. Pages are returned least relevant first.
    ///
    /// Every indexed page that is not yet loaded is loaded.
    pub fn search_pages(&mut self, query: &str) -> Result<Vec<Page>, ManualError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let (tokens, credit) = query_tokens(query);

        let candidates: Vec<(String, String)> = self
            .index
            .iter()
            .map(|(path, name, _)| (path.to_string(), name.to_string()))
            .collect();

        let mut result = SearchResult::new();
        for (path, name) in candidates {
            let loaded = self.index.get(&path, &name).and_then(IndexEntry::page).cloned();
            let page = match loaded {
                Some(page) => Some(page),
                None => self.get_page(&name, &path)?,
            };
            let Some(page) = page else {
                continue;
            };

            let ratio = if page.content().contains(query) {
                MAX_RATIO
            } else {
                tokens
                    .iter()
                    .filter(|token| page.content().contains(**token))
                    .map(|_| credit)
                    .sum()
            };

            if ratio > 0 {
                result.add_page(page, ratio);
            }
        }

        debug!(query, matches = result.len(), "searched pages");
        Ok(result.into_pages())
    }

    /// Reads the reference glossary `name` from every overlay root.
    ///
    /// Files are merged in root priority order with later files replacing terms of
    /// earlier ones. Without overlay roots the reference is empty.
    pub fn reference(&self, name: &str) -> Result<Reference, ManualError> {
        let mut reference = Reference::new();
        let Some(browser) = self.browser.as_deref() else {
            return Ok(reference);
        };

        let relative = self.scoped(&format!("{name}.{REFERENCE_EXTENSION}"));
        for file in browser.files(&relative) {
            let content = read_lossy(&file)?;
            parse_reference_into(&content, &mut reference);
        }

        Ok(reference)
    }

    /// Finds the file backing a page: writable directory first, then the overlay.
    fn locate_page(&self, name: &str, path: &str) -> Option<PathBuf> {
        let relative = page_file(path.trim_matches('/'), name);

        let file = self.directory.join(&relative);
        if file.is_file() {
            return Some(file);
        }

        let file = self.browser.as_deref()?.file(&self.scoped(&relative));
        if let Some(file) = &file {
            debug!(name, path, file = %file.display(), "page found in overlay");
        }
        file
    }

    /// Prefixes a relative file path with the configured sub-path.
    fn scoped(&self, relative: &str) -> String {
        match &self.path {
            Some(path) => format!("{path}/{relative}"),
            None => relative.to_string(),
        }
    }
}

/// Reads a file as text, replacing invalid UTF-8 sequences.
fn read_lossy(file: &Path) -> Result<String, ManualError> {
    let bytes = fs::read(file).map_err(|source| ManualError::ReadFile {
        path: file.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8(bytes)
        .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned()))
}

/// Splits a trimmed query into credited tokens and the credit each one earns.
///
/// Runs of spaces count as one separator. A single-token query yields no tokens.
fn query_tokens(query: &str) -> (Vec<&str>, u32) {
    let mut tokens: Vec<&str> = query.split(' ').filter(|t| !t.is_empty()).collect();
    let credit = token_credit(tokens.len());
    if tokens.len() == 1 {
        tokens.clear();
    }
    (tokens, credit)
}

/// Relative file path of a page, from its trimmed path and name.
fn page_file(trimmed_path: &str, name: &str) -> String {
    if trimmed_path.is_empty() {
        format!("{name}.{PAGE_EXTENSION}")
    } else {
        format!("{trimmed_path}/{name}.{PAGE_EXTENSION}")
    }
}

/// Score each matching token adds for a query of `tokens` tokens.
///
/// Equals `round(100 / (tokens + 1))`, rounding halves up. A single token gets the
/// whole score, though single-token queries never award token credit.
fn token_credit(tokens: usize) -> u32 {
    let divisor = if tokens <= 1 { 1 } else { tokens + 1 };
    let credit = (200 + divisor) / (2 * divisor);
    u32::try_from(credit).unwrap_or(MAX_RATIO)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_credit() {
        assert_eq!(token_credit(1), 100);
        assert_eq!(token_credit(2), 33);
        assert_eq!(token_credit(3), 25);
        assert_eq!(token_credit(4), 20);
        assert_eq!(token_credit(5), 17);
        assert_eq!(token_credit(7), 13);
    }

    #[test]
    fn test_query_tokens_collapse_repeated_spaces() {
        assert_eq!(query_tokens("alpha  beta"), (vec!["alpha", "beta"], 33));
        assert_eq!(query_tokens("alpha beta"), (vec!["alpha", "beta"], 33));
        assert_eq!(query_tokens("a b  c"), (vec!["a", "b", "c"], 25));
    }

    #[test]
    fn test_query_tokens_single_token() {
        assert_eq!(query_tokens("alpha"), (Vec::<&str>::new(), 100));
    }

    #[test]
    fn test_read_lossy_replaces_invalid_utf8() {
        let temp = tempfile::TempDir::new().unwrap();
        let file = temp.path().join("Latin.md");
        fs::write(&file, b"caf\xe9 notes").unwrap();

        assert_eq!(read_lossy(&file).unwrap(), "caf\u{fffd} notes");
    }

    #[test]
    fn test_page_file() {
        assert_eq!(page_file("", "Home"), "Home.md");
        assert_eq!(page_file("admin/users", "Roles"), "admin/users/Roles.md");
    }

    #[test]
    fn test_scoped() {
        let manual = Manual::new("/nonexistent", None, Some("/manual/"));
        assert_eq!(manual.scoped("a/b.md"), "manual/a/b.md");

        let manual = Manual::new("/nonexistent", None, Some("/"));
        assert_eq!(manual.scoped("b.md"), "b.md");
    }
}
