//! Page index, storage and search for the manual.
//!
//! This crate provides the repository side of the manual:
//! - Indexing pages across a writable directory and read-only overlay roots
//! - Lazy loading of page content, memoized in the index
//! - Saving edited pages to the writable directory
//! - Token-based relevance search over every indexed page
//! - Reference glossaries merged across overlay roots
//!
//! # Example
//!
//! ```no_run
//! use manual_index::{IncludeDirectories, Manual};
//!
//! let overlay = IncludeDirectories::new(["vendor/app", "vendor/base"]);
//! let mut manual = Manual::new("data/manual", Some(Box::new(overlay)), Some("manual"));
//!
//! if let Some(page) = manual.get_page("Getting+Started", "/").unwrap() {
//!     println!("{}", page.content());
//! }
//!
//! // Best match last.
//! for page in manual.search_pages("install guide").unwrap() {
//!     println!("{}", page.route());
//! }
//! ```

#![warn(missing_docs)]

mod browser;
mod discovery;
mod error;
mod index;
mod manual;
mod reference;
mod result;

pub use browser::{FileBrowser, IncludeDirectories};
pub use error::ManualError;
pub use index::{Index, IndexEntry};
pub use manual::Manual;
pub use reference::Reference;
pub use result::{MAX_RATIO, SearchResult};

/// File extension of page files.
pub const PAGE_EXTENSION: &str = "md";

/// File extension of reference glossary files.
pub const REFERENCE_EXTENSION: &str = "ref";
