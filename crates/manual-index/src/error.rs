//! Error types for the manual-index crate.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur when reading or writing manual pages.
///
/// Missing pages and references are not errors; they are reported as `None` or
/// an empty result.
#[derive(Debug, Error)]
pub enum ManualError {
    /// Failed to read an existing page or reference file.
    #[error("failed to read {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to create the directory for a page.
    #[error("failed to create directory {path}: {source}")]
    CreateDirectory {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to write a page.
    #[error("failed to write {path}: {source}")]
    WriteFile {
        /// Path to the file that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The configuration has no writable directory.
    #[error("no manual directory configured")]
    NoDirectory,
}
