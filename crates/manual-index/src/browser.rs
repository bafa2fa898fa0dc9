//! Overlay lookup across read-only include directories.

use std::path::PathBuf;

/// Looks up files across an ordered list of read-only root directories.
///
/// Roots are ordered highest priority first: the first root containing a file
/// overrides the same relative path in every later root.
pub trait FileBrowser {
    /// The include roots, highest priority first.
    fn include_directories(&self) -> &[PathBuf];

    /// Returns the first existing file at `relative` across the roots.
    fn file(&self, relative: &str) -> Option<PathBuf> {
        self.include_directories()
            .iter()
            .map(|root| root.join(relative))
            .find(|path| path.is_file())
    }

    /// Returns every existing file at `relative`, in root priority order.
    fn files(&self, relative: &str) -> Vec<PathBuf> {
        self.include_directories()
            .iter()
            .map(|root| root.join(relative))
            .filter(|path| path.is_file())
            .collect()
    }
}

/// A [`FileBrowser`] over a fixed list of directories.
#[derive(Debug, Clone, Default)]
pub struct IncludeDirectories {
    /// Roots, highest priority first.
    roots: Vec<PathBuf>,
}

impl IncludeDirectories {
    /// Creates a browser over `roots`, highest priority first.
    pub fn new<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            roots: roots.into_iter().map(Into::into).collect(),
        }
    }
}

impl FileBrowser for IncludeDirectories {
    fn include_directories(&self) -> &[PathBuf] {
        &self.roots
    }
}
