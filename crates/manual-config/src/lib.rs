//! Configuration system for the manual.
//!
//! The manual reads a TOML file named `.manual.toml`. The file closest to the current
//! working directory wins; `~/.manual.toml` is used when no local file exists.

#![warn(missing_docs)]

mod discovery;
mod error;
mod parse;
mod resolve;
#[cfg(test)]
mod test_support;
mod validate;

use std::path::{Path, PathBuf};

pub use discovery::{CONFIG_FILENAME, discover_config_file, global_config_path};
pub use error::ConfigError;
pub use manual_page::PAGE_PLACEHOLDER;
pub use parse::{RawConfig, RawManual, RawRender, parse_config_file, parse_config_str};
pub use resolve::resolve_path;
pub use validate::ConfigWarning;
use validate::validate_config;

/// Fully resolved manual configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Writable directory that saved pages are written to.
    pub directory: Option<PathBuf>,
    /// Relative sub-path scoping the manual inside every root.
    pub path: Option<String>,
    /// Read-only include roots, highest priority first.
    pub include: Vec<PathBuf>,
    /// Rendering settings.
    pub render: RenderSettings,
    /// The file this configuration was loaded from, if any.
    pub config_file: Option<PathBuf>,
}

impl Config {
    /// Loads the configuration relevant to `cwd`.
    ///
    /// Returns `Ok(Config::default())` if no configuration file is found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        match discover_config_file(cwd) {
            Some(path) => Self::load_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Loads configuration from a specific file.
    ///
    /// Relative paths inside the file are resolved against the file's directory.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = parse_config_file(path)?;
        let config_dir = path.parent().unwrap_or_else(|| Path::new("."));
        let mut config = Self::from_raw(raw, config_dir)?;
        config.config_file = Some(path.to_path_buf());
        Ok(config)
    }

    /// Builds a configuration from a parsed file, applying defaults.
    pub fn from_raw(raw: RawConfig, config_dir: &Path) -> Result<Self, ConfigError> {
        let manual = raw.manual.unwrap_or_default();

        let directory = manual
            .directory
            .as_deref()
            .map(|dir| resolve_path(dir, config_dir))
            .transpose()?;

        let include = manual
            .include
            .unwrap_or_default()
            .iter()
            .map(|dir| resolve_path(dir, config_dir))
            .collect::<Result<Vec<_>, _>>()?;

        let path = manual
            .path
            .map(|path| path.trim_matches('/').to_string())
            .filter(|path| !path.is_empty());

        Ok(Self {
            directory,
            path,
            include,
            render: RenderSettings::from_raw(raw.render.unwrap_or_default()),
            config_file: None,
        })
    }

    /// Validates the configuration and returns any warnings.
    ///
    /// This checks for:
    /// - A missing writable directory
    /// - Include roots that don't exist or aren't directories
    /// - A page URL template without the `%page%` placeholder
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }
}

/// Settings that control how pages are rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSettings {
    /// Base URL for anchors in rendered content.
    pub base_url: String,
    /// URL template for links to pages, with a `%page%` placeholder.
    pub page_url: String,
    /// Prefix rendered pages with a table of contents.
    pub submenu: bool,
    /// Link occurrences of page titles in rendered pages.
    pub link_titles: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            page_url: PAGE_PLACEHOLDER.to_string(),
            submenu: true,
            link_titles: true,
        }
    }
}

impl RenderSettings {
    /// Applies raw values over the defaults.
    fn from_raw(raw: RawRender) -> Self {
        let defaults = Self::default();
        Self {
            base_url: raw.base_url.unwrap_or(defaults.base_url),
            page_url: raw.page_url.unwrap_or(defaults.page_url),
            submenu: raw.submenu.unwrap_or(defaults.submenu),
            link_titles: raw.link_titles.unwrap_or(defaults.link_titles),
        }
    }
}
