//! Configuration system for shdict.
//!
//! shdict uses TOML configuration files named `.shdict.toml`. Configuration is resolved by
//! walking up the directory tree from the current working directory, collecting any
//! `.shdict.toml` files found, then loading `~/.shdict.toml` as the global config with lowest
//! precedence. The resolved [`Config`] is immutable and handed to the components that need it.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod resolve;
mod templates;
#[cfg(test)]
mod test_support;
mod validate;

use std::path::{Path, PathBuf};

pub use discovery::{CONFIG_FILENAME, ConfigFile, ConfigScope, Discovery, global_config_path};
pub use error::ConfigError;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{
    RawConfig, RawIndexSettings, RawLogSettings, RawSearchSettings, parse_config_file,
    parse_config_str,
};
pub use resolve::resolve_index_path;
use serde::{Deserialize, Serialize};
use shdict_model::SourceTable;
pub use templates::{global_template, local_template};
pub use validate::ConfigWarning;
use validate::validate_config;

/// Index directory used when no config sets `[index] path`, relative to the config root.
pub const DEFAULT_INDEX_DIR: &str = ".shdict/index";

/// Default number of hits fetched per character during homophone expansion.
pub const DEFAULT_HOMOPHONE_EXPANSION_LIMIT: usize = 100;

/// Default log filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Returns the built-in source table.
pub fn default_sources() -> SourceTable {
    SourceTable::new([
        ("c", "Crawford"),
        ("r", "Republican-era dictionary"),
        ("qianplus", "Qian Nairong (expanded)"),
    ])
}

/// Top-level merged configuration for shdict.
///
/// This represents the fully resolved configuration after merging all discovered
/// `.shdict.toml` files according to precedence rules.
#[derive(Debug, Clone)]
pub struct Config {
    /// Index location.
    pub index: IndexSettings,
    /// Search-related settings.
    pub search: SearchSettings,
    /// Logging settings.
    pub log: LogSettings,
    /// Source code to display name table.
    pub sources: SourceTable,
    /// Project directory the default index lives under, when a local config marks one.
    pub project_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            index: IndexSettings::default(),
            search: SearchSettings::default(),
            log: LogSettings::default(),
            sources: default_sources(),
            project_dir: None,
        }
    }
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.shdict.toml` files.
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        Self::load_discovered(&Discovery::find(cwd))
    }

    /// Loads the files of a discovery and anchors the default index at its project directory.
    pub fn load_discovered(discovery: &Discovery) -> Result<Self, ConfigError> {
        let mut config = Self::load_from_files(&discovery.paths())?;
        config.project_dir = discovery.project_dir().map(Path::to_path_buf);
        Ok(config)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    /// No project directory is set; the default index falls back to the working directory.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        if files.is_empty() {
            return Ok(Self::default());
        }

        let parsed: Vec<ParsedConfig> = files
            .iter()
            .map(|path| {
                let config = parse_config_file(path)?;
                Ok(ParsedConfig {
                    path: path.clone(),
                    config,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        merge_configs(&parsed)
    }

    /// Returns the index directory.
    ///
    /// An explicit `[index] path` wins. Otherwise the index lives in
    /// [`DEFAULT_INDEX_DIR`] under the project directory, or under `cwd` without one.
    pub fn index_dir(&self, cwd: &Path) -> PathBuf {
        if let Some(ref path) = self.index.path {
            return path.clone();
        }
        self.project_dir
            .as_deref()
            .unwrap_or(cwd)
            .join(DEFAULT_INDEX_DIR)
    }

    /// Validates the configuration and returns any warnings.
    pub fn validate(&self, cwd: &Path) -> Vec<ConfigWarning> {
        validate_config(self, cwd)
    }

    /// Serializes the effective settings to TOML format.
    ///
    /// The output has the same shape as a `.shdict.toml` file.
    pub fn settings_to_toml(&self) -> Result<String, ConfigError> {
        let serializable = SerializableSettings {
            index: SerializableIndexSettings {
                path: self
                    .index
                    .path
                    .as_ref()
                    .map(|p| p.display().to_string()),
            },
            search: &self.search,
            log: &self.log,
            sources: &self.sources,
        };
        toml::to_string_pretty(&serializable).map_err(ConfigError::Serialize)
    }
}

/// Index location settings.
#[derive(Debug, Clone, Default)]
pub struct IndexSettings {
    /// Resolved absolute index path, if one was configured.
    pub path: Option<PathBuf>,
}

/// Search-related settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Hits fetched per character when expanding a homophone query.
    pub homophone_expansion_limit: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            homophone_expansion_limit: DEFAULT_HOMOPHONE_EXPANSION_LIMIT,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LogSettings {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

/// Internal struct for TOML serialization of settings.
#[derive(Serialize)]
struct SerializableSettings<'a> {
    /// Index location.
    index: SerializableIndexSettings,
    /// Search settings.
    search: &'a SearchSettings,
    /// Logging settings.
    log: &'a LogSettings,
    /// Source table.
    sources: &'a SourceTable,
}

/// Index settings as written to TOML.
#[derive(Serialize)]
struct SerializableIndexSettings {
    /// Index path, omitted when defaulted.
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
}
