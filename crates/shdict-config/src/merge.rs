//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`,
//! applying precedence rules and resolving paths.

use std::path::{Path, PathBuf};

use shdict_model::SourceTable;

use crate::{
    Config, ConfigError, IndexSettings, LogSettings, SearchSettings, default_sources,
    parse::RawConfig,
    resolve::resolve_index_path,
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

impl ParsedConfig {
    /// Directory containing the config file.
    fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first (closest to CWD),
/// lowest precedence last (global config).
///
/// Merge rules:
/// - Scalar settings: first defined value wins (highest precedence)
/// - Index path: first definition wins, resolved against its own file's directory
/// - Sources: merged per code over the built-in table, first definition for each code wins
pub fn merge_configs(configs: &[ParsedConfig]) -> Result<Config, ConfigError> {
    if configs.is_empty() {
        return Ok(Config::default());
    }

    let index = merge_index_settings(configs)?;
    let search = merge_search_settings(configs);
    let log = merge_log_settings(configs);
    let sources = merge_sources(configs);

    Ok(Config {
        index,
        search,
        log,
        sources,
        project_dir: None,
    })
}

/// Takes the highest-precedence index path and resolves it.
fn merge_index_settings(configs: &[ParsedConfig]) -> Result<IndexSettings, ConfigError> {
    for parsed in configs {
        if let Some(ref index) = parsed.config.index
            && let Some(ref path) = index.path
        {
            return Ok(IndexSettings {
                path: Some(resolve_index_path(path, parsed.dir())?),
            });
        }
    }
    Ok(IndexSettings::default())
}

/// Merges search settings.
fn merge_search_settings(configs: &[ParsedConfig]) -> SearchSettings {
    let mut result = SearchSettings::default();

    // Lowest precedence first so higher precedence overwrites
    for parsed in configs.iter().rev() {
        if let Some(ref search) = parsed.config.search
            && let Some(v) = search.homophone_expansion_limit
        {
            result.homophone_expansion_limit = v;
        }
    }

    result
}

/// Merges logging settings.
fn merge_log_settings(configs: &[ParsedConfig]) -> LogSettings {
    let mut result = LogSettings::default();

    for parsed in configs.iter().rev() {
        if let Some(ref log) = parsed.config.log
            && let Some(ref v) = log.filter
        {
            result.filter.clone_from(v);
        }
    }

    result
}

/// Merges source tables on top of the built-in one.
fn merge_sources(configs: &[ParsedConfig]) -> SourceTable {
    let mut result = default_sources();

    for parsed in configs.iter().rev() {
        if let Some(ref sources) = parsed.config.sources {
            for (code, name) in sources {
                result.insert(code.as_str(), name.as_str());
            }
        }
    }

    result
}
