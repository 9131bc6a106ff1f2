//! Shared context for running CLI commands.

use std::{
    env,
    path::{Path, PathBuf},
    process::ExitCode,
};

use shdict_config::Config;
use shdict_index::{TantivyProvider, index_exists};
use shdict_lookup::Dictionary;

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration (may be default if no config files found).
    pub config: Config,
}

impl CommandContext {
    /// Loads the current directory and configuration.
    pub fn load() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        let config = load_config_or_failure(&cwd)?;
        Ok(Self { cwd, config })
    }

    /// Loads only the current directory, skipping configuration parsing.
    ///
    /// Used for `init`, which should work even when an existing config file is invalid.
    pub fn load_cwd_only() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        Ok(Self {
            cwd,
            config: Config::default(),
        })
    }

    /// Returns the index directory for this invocation.
    pub fn index_dir(&self) -> PathBuf {
        self.config.index_dir(&self.cwd)
    }

    /// Opens the index and wraps it in a dictionary configured from settings.
    pub fn dictionary(&self) -> Result<Dictionary<TantivyProvider>, ExitCode> {
        let index_dir = self.index_dir();
        if !index_exists(&index_dir) {
            eprintln!("error: no index found at {}", index_dir.display());
            eprintln!("Run 'shdict import <dir>' to build one.");
            return Err(ExitCode::FAILURE);
        }

        let provider = TantivyProvider::open(&index_dir).map_err(|e| {
            eprintln!("error: failed to open index: {e}");
            ExitCode::FAILURE
        })?;

        Ok(Dictionary::new(provider, self.config.sources.clone())
            .with_homophone_expansion_limit(self.config.search.homophone_expansion_limit))
    }
}

/// Returns the current working directory or exits with a consistent error.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::FAILURE
    })
}

/// Loads configuration from the provided directory or exits with an error.
fn load_config_or_failure(cwd: &Path) -> Result<Config, ExitCode> {
    Config::load(cwd).map_err(|e| {
        eprintln!("error: failed to load configuration: {e}");
        ExitCode::FAILURE
    })
}
