//! Configuration file parsing.
//!
//! Parses a `.manual.toml` file into an intermediate `RawConfig` that keeps every
//! field optional until defaults and path resolution are applied.

use std::{fs, path::Path};

use serde::Deserialize;
use serde_with::{OneOrMany, serde_as};

use crate::ConfigError;

/// Raw configuration as parsed directly from a TOML file.
///
/// This mirrors the TOML schema exactly.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// Page storage section.
    pub manual: Option<RawManual>,
    /// Rendering section.
    pub render: Option<RawRender>,
}

/// Raw `[manual]` section.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawManual {
    /// Writable directory that saved pages go to.
    pub directory: Option<String>,
    /// Relative sub-path scoping the manual inside the include roots.
    pub path: Option<String>,
    /// Read-only include roots, highest priority first.
    /// Accepts either a single string or an array of strings.
    #[serde_as(as = "Option<OneOrMany<_>>")]
    pub include: Option<Vec<String>>,
}

/// Raw `[render]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawRender {
    /// Base URL used to absolutize anchors in rendered pages.
    pub base_url: Option<String>,
    /// URL template for page links, with a `%page%` placeholder.
    pub page_url: Option<String>,
    /// Whether to prefix rendered pages with a table of contents.
    pub submenu: Option<bool>,
    /// Whether to link occurrences of page titles in rendered pages.
    pub link_titles: Option<bool>,
}

/// Parses a configuration file from disk.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}
