//! manual: a manual of markdown pages.
//!
//! Pages live in a writable directory, optionally overlaid on read-only include
//! directories shipped with an application. The `manual` binary indexes them, renders
//! pages with a table of contents and links between pages, searches their content and
//! saves edits back to the writable directory.

#![warn(missing_docs)]

pub mod cli;
