//! Configuration file parsing.
//!
//! Parses individual `.shdict.toml` files into intermediate `RawConfig` structures
//! that preserve the optional nature of all fields before merging.

use std::{collections::BTreeMap, fs, path::Path};

use serde::Deserialize;
#[cfg(test)]
use toml::de::Error as TomlError;

use crate::ConfigError;

/// Raw configuration as parsed directly from a TOML file.
///
/// All fields are optional to support partial configs that will be merged.
/// This mirrors the TOML schema exactly.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// When true, stop discovery here - ignore parent and global configs.
    pub root: Option<bool>,
    /// Index location section.
    pub index: Option<RawIndexSettings>,
    /// Search settings section.
    pub search: Option<RawSearchSettings>,
    /// Logging section.
    pub log: Option<RawLogSettings>,
    /// Source code -> display name.
    pub sources: Option<BTreeMap<String, String>>,
}

/// Raw index settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawIndexSettings {
    /// Index directory, relative to the declaring file.
    pub path: Option<String>,
}

/// Raw search settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSearchSettings {
    /// Hits fetched per character when expanding a homophone query.
    pub homophone_expansion_limit: Option<usize>,
}

/// Raw logging settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawLogSettings {
    /// Filter directive used when `RUST_LOG` is unset.
    pub filter: Option<String>,
}

/// Parses a configuration file from disk.
///
/// Returns a `RawConfig` with all fields as optionals, ready for merging.
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
    let config: RawConfig = toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })?;

    if let Some(0) = config
        .search
        .as_ref()
        .and_then(|s| s.homophone_expansion_limit)
    {
        return Err(ConfigError::InvalidValue {
            path: path.to_path_buf(),
            key: "search.homophone_expansion_limit".into(),
            message: "must be at least 1".into(),
        });
    }

    Ok(config)
}

/// Parses configuration from a TOML string without path context (tests only).
#[cfg(test)]
pub fn parse_config(contents: &str) -> Result<RawConfig, TomlError> {
    toml::from_str(contents)
}

/// Checks if a config file has `root = true` set.
///
/// Returns false if the file cannot be read or parsed.
pub fn is_root_config(path: &Path) -> bool {
    let Ok(contents) = fs::read_to_string(path) else {
        return false;
    };
    let Ok(config) = toml::from_str::<RawConfig>(&contents) else {
        return false;
    };
    config.root == Some(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_config() {
        let config = parse_config_str("", Path::new("test.toml")).unwrap();
        assert!(config.root.is_none());
        assert!(config.index.is_none());
        assert!(config.search.is_none());
        assert!(config.log.is_none());
        assert!(config.sources.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
root = true

[index]
path = "data/index"

[search]
homophone_expansion_limit = 40

[log]
filter = "shdict_lookup=debug"

[sources]
c = "Crawford"
qianplus = "Qian"
"#;
        let config = parse_config_str(toml, Path::new("test.toml")).unwrap();
        assert_eq!(config.root, Some(true));
        assert_eq!(config.index.unwrap().path.as_deref(), Some("data/index"));
        assert_eq!(config.search.unwrap().homophone_expansion_limit, Some(40));
        assert_eq!(
            config.log.unwrap().filter.as_deref(),
            Some("shdict_lookup=debug")
        );
        let sources = config.sources.unwrap();
        assert_eq!(sources.get("c").map(String::as_str), Some("Crawford"));
        assert_eq!(sources.len(), 2);
    }

    #[test]
    fn test_parse_partial_section() {
        let config = parse_config_str("[search]\n", Path::new("test.toml")).unwrap();
        assert!(config.search.unwrap().homophone_expansion_limit.is_none());
    }

    #[test]
    fn test_parse_invalid_toml_reports_path() {
        let err = parse_config_str("[search\n", Path::new("bad.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ParseToml { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn test_parse_wrong_type() {
        let err = parse_config_str(
            "[search]\nhomophone_expansion_limit = \"many\"\n",
            Path::new("test.toml"),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::ParseToml { .. }));
    }

    #[test]
    fn test_zero_expansion_limit_rejected() {
        let err = parse_config_str(
            "[search]\nhomophone_expansion_limit = 0\n",
            Path::new("test.toml"),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "search.homophone_expansion_limit"));
    }

    #[test]
    fn test_parse_config_without_path() {
        assert!(parse_config("root = true").is_ok());
        assert!(parse_config("root = 3").is_err());
    }
}
