//! Configuration file discovery.
//!
//! Finds the `.manual.toml` closest to a starting directory, falling back to the
//! global `~/.manual.toml`.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

/// The configuration filename.
pub const CONFIG_FILENAME: &str = ".manual.toml";

/// Discovers the configuration file relevant to the given directory.
///
/// Walks up from `cwd` to the filesystem root and returns the first `.manual.toml`
/// found. When there is none, returns `~/.manual.toml` if it exists.
pub fn discover_config_file(cwd: &Path) -> Option<PathBuf> {
    let mut current = Some(cwd);
    while let Some(dir) = current {
        let config_path = dir.join(CONFIG_FILENAME);
        if config_path.is_file() {
            return Some(config_path);
        }
        current = dir.parent();
    }

    global_config_path().filter(|path| path.is_file())
}

/// Returns the path to the global configuration file (`~/.manual.toml`).
///
/// Returns `None` if the home directory cannot be determined.
pub fn global_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(CONFIG_FILENAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestDir;

    #[test]
    fn test_discover_in_cwd() {
        let test_dir = TestDir::new();
        let config = test_dir.create_config("");

        assert_eq!(discover_config_file(test_dir.path()), Some(config));
    }

    #[test]
    fn test_discover_in_parent() {
        let test_dir = TestDir::new();
        let config = test_dir.create_config("");
        let nested = test_dir.create_dir("a/b/c");

        assert_eq!(discover_config_file(&nested), Some(config));
    }

    #[test]
    fn test_closest_config_wins() {
        let test_dir = TestDir::new();
        test_dir.create_config("");
        let inner = test_dir.create_config("project");
        let nested = test_dir.create_dir("project/src");

        assert_eq!(discover_config_file(&nested), Some(inner));
    }

    #[test]
    fn test_global_config_path_uses_filename() {
        if let Some(path) = global_config_path() {
            assert!(path.ends_with(CONFIG_FILENAME));
        }
    }
}
