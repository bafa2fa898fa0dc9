//! Shared context for running CLI commands.

use std::{
    env,
    path::{Path, PathBuf},
    process::ExitCode,
};

use manual_config::{CONFIG_FILENAME, Config};
use manual_index::Manual;

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration (may be default if no config file was found).
    pub config: Config,
    /// Manual opened for this invocation.
    manual: Option<Manual>,
}

impl CommandContext {
    /// Loads the current directory and configuration.
    ///
    /// `config_file` replaces discovery when given.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        let config = match config_file {
            Some(path) => Config::load_file(&cwd.join(path)),
            None => Config::load(&cwd),
        }
        .map_err(|e| {
            eprintln!("error: failed to load configuration: {e}");
            ExitCode::FAILURE
        })?;

        Ok(Self {
            cwd,
            config,
            manual: None,
        })
    }

    /// Returns the manual, indexing it on first use.
    pub fn manual(&mut self) -> Result<&mut Manual, ExitCode> {
        if self.manual.is_none() {
            let manual = Manual::from_config(&self.config).map_err(|e| {
                eprintln!("error: {e}");
                eprintln!("Set [manual] directory in {CONFIG_FILENAME}.");
                ExitCode::FAILURE
            })?;
            self.manual = Some(manual);
        }

        self.manual.as_mut().ok_or(ExitCode::FAILURE)
    }
}

/// Returns the current working directory or exits with a consistent error.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::FAILURE
    })
}
