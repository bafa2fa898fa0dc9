//! Configuration validation.
//!
//! Validates a loaded configuration and reports warnings for potential issues.

use std::fmt;

use crate::{Config, PAGE_PLACEHOLDER};

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// No writable directory is configured.
    NoDirectory,
    /// An include root does not exist.
    IncludeMissing {
        /// Path that doesn't exist.
        path: String,
    },
    /// An include root exists but is not a directory.
    IncludeNotDirectory {
        /// Path that is not a directory.
        path: String,
    },
    /// The page URL template has no `%page%` placeholder.
    PageUrlWithoutPlaceholder {
        /// The configured template.
        template: String,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoDirectory => write!(f, "no writable manual directory is configured"),
            Self::IncludeMissing { path } => write!(f, "include path does not exist: {path}"),
            Self::IncludeNotDirectory { path } => {
                write!(f, "include path is not a directory: {path}")
            }
            Self::PageUrlWithoutPlaceholder { template } => {
                write!(f, "page_url '{template}' has no {PAGE_PLACEHOLDER} placeholder")
            }
        }
    }
}

/// Validates the configuration and returns any warnings.
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    if config.directory.is_none() {
        warnings.push(ConfigWarning::NoDirectory);
    }

    for include in &config.include {
        let path = include.display().to_string();
        if !include.exists() {
            warnings.push(ConfigWarning::IncludeMissing { path });
        } else if !include.is_dir() {
            warnings.push(ConfigWarning::IncludeNotDirectory { path });
        }
    }

    if !config.render.page_url.contains(PAGE_PLACEHOLDER) {
        warnings.push(ConfigWarning::PageUrlWithoutPlaceholder {
            template: config.render.page_url.clone(),
        });
    }

    warnings
}
