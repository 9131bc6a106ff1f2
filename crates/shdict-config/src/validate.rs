//! Configuration validation.
//!
//! Validates a loaded configuration and reports warnings for potential issues.

use std::{fmt, path::Path};

use crate::Config;

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// The index directory does not exist yet.
    IndexMissing {
        /// Resolved index path.
        path: String,
    },
    /// The index path exists but is not a directory.
    IndexNotDirectory {
        /// Resolved index path.
        path: String,
    },
    /// The source table is empty, so no attribution can be shown.
    NoSourcesDefined,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexMissing { path } => {
                write!(f, "index does not exist: {path} (run `shdict import`)")
            }
            Self::IndexNotDirectory { path } => {
                write!(f, "index path is not a directory: {path}")
            }
            Self::NoSourcesDefined => write!(f, "no sources are defined in configuration"),
        }
    }
}

/// Validates the configuration for a working directory and returns any warnings.
pub fn validate_config(config: &Config, cwd: &Path) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    let index_dir = config.index_dir(cwd);
    let path = index_dir.display().to_string();
    if !index_dir.exists() {
        warnings.push(ConfigWarning::IndexMissing { path });
    } else if !index_dir.is_dir() {
        warnings.push(ConfigWarning::IndexNotDirectory { path });
    }

    if config.sources.is_empty() {
        warnings.push(ConfigWarning::NoSourcesDefined);
    }

    warnings
}

#[cfg(test)]
mod tests {
    use std::fs;

    use shdict_model::SourceTable;

    use super::*;
    use crate::{IndexSettings, test_support::TestDir};

    #[test]
    fn test_missing_index_warns() {
        let test_dir = TestDir::new();
        let warnings = validate_config(&Config::default(), test_dir.path());
        assert_eq!(warnings.len(), 1);
        assert!(matches!(warnings[0], ConfigWarning::IndexMissing { .. }));
    }

    #[test]
    fn test_existing_index_is_clean() {
        let test_dir = TestDir::new();
        let index = test_dir.create_dir("idx");
        let config = Config {
            index: IndexSettings { path: Some(index) },
            ..Config::default()
        };
        assert!(validate_config(&config, test_dir.path()).is_empty());
    }

    #[test]
    fn test_index_file_is_not_directory() {
        let test_dir = TestDir::new();
        let file = test_dir.path().join("idx");
        fs::write(&file, "x").unwrap();
        let config = Config {
            index: IndexSettings { path: Some(file) },
            sources: SourceTable::default(),
            ..Config::default()
        };

        let warnings = validate_config(&config, test_dir.path());

        assert!(matches!(warnings[0], ConfigWarning::IndexNotDirectory { .. }));
        assert_eq!(warnings[1], ConfigWarning::NoSourcesDefined);
    }
}
