//! Page discovery for indexing.
//!
//! Walks a root directory recursively and registers every page file under the
//! canonical path of its parent directory.

use std::path::Path;

use tracing::warn;
use walkdir::WalkDir;

use crate::{PAGE_EXTENSION, index::Index};

/// Indexes every page file below `directory` and returns how many were found.
///
/// A page at `<directory>/a/b/Name.md` is registered as `("/a/b/", "Name")`.
/// A missing `directory`, or one that is not a directory, contributes nothing.
pub fn index_directory(directory: &Path, index: &mut Index) -> usize {
    if !directory.is_dir() {
        return 0;
    }

    let mut found = 0;
    for entry in WalkDir::new(directory)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                warn!(directory = %directory.display(), error = %err, "skipping unreadable entry");
                continue;
            }
        };

        if !entry.file_type().is_file() || !is_page_file(entry.path()) {
            continue;
        }

        let Ok(rel_path) = entry.path().strip_prefix(directory) else {
            continue;
        };
        let (Some(path), Some(name)) = (page_path(rel_path), page_name(rel_path)) else {
            continue;
        };

        index.insert(path, name);
        found += 1;
    }

    found
}

/// Checks if a file has the page extension.
fn is_page_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == PAGE_EXTENSION)
}

/// Canonical page path of a file's parent directory, relative to the root.
fn page_path(rel_path: &Path) -> Option<String> {
    let segments = rel_path
        .parent()
        .into_iter()
        .flat_map(Path::components)
        .map(|component| component.as_os_str().to_str())
        .collect::<Option<Vec<_>>>()?;

    if segments.is_empty() {
        Some("/".to_string())
    } else {
        Some(format!("/{}/", segments.join("/")))
    }
}

/// Page name: the file name without the page extension.
fn page_name(rel_path: &Path) -> Option<String> {
    rel_path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .map(str::to_string)
}
