//! Finding the `.shdict.toml` files that apply to a working directory.
//!
//! Every ancestor of the working directory may hold a config file. A file with
//! `root = true` marks the project: the walk ends there, the home file is not
//! consulted, and the default index lives beside it. Without a project root the
//! nearest local file anchors the index, and `~/.shdict.toml` is read last.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use directories::BaseDirs;

use crate::parse::is_root_config;

/// The configuration filename.
pub const CONFIG_FILENAME: &str = ".shdict.toml";

/// How a discovered file relates to the working directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigScope {
    /// A file in the working directory or one of its ancestors.
    Local,
    /// A local file with `root = true`; the outermost file that applies.
    Root,
    /// `~/.shdict.toml`.
    Global,
}

impl fmt::Display for ConfigScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Local => "local",
            Self::Root => "root",
            Self::Global => "global",
        })
    }
}

/// One config file that applies to the working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    /// Path of the file.
    pub path: PathBuf,
    /// Where it was found.
    pub scope: ConfigScope,
}

impl ConfigFile {
    /// Directory holding the file.
    pub fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }
}

/// The config files that apply to a working directory, highest precedence first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Discovery {
    /// Files, nearest first; a global file is always last.
    pub files: Vec<ConfigFile>,
}

impl Discovery {
    /// Walks up from `cwd` collecting config files.
    pub fn find(cwd: &Path) -> Self {
        let mut files = Vec::new();

        for dir in cwd.ancestors() {
            let path = dir.join(CONFIG_FILENAME);
            if !path.is_file() {
                continue;
            }
            if is_root_config(&path) {
                files.push(ConfigFile {
                    path,
                    scope: ConfigScope::Root,
                });
                return Self { files };
            }
            files.push(ConfigFile {
                path,
                scope: ConfigScope::Local,
            });
        }

        if let Some(global) = global_config_path().filter(|p| p.is_file()) {
            // The walk reaches the home file itself when cwd is under $HOME.
            files.retain(|f| f.path != global);
            files.push(ConfigFile {
                path: global,
                scope: ConfigScope::Global,
            });
        }

        Self { files }
    }

    /// Paths of the discovered files, highest precedence first.
    pub fn paths(&self) -> Vec<PathBuf> {
        self.files.iter().map(|f| f.path.clone()).collect()
    }

    /// Returns true if no config file applies.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Directory the default index lives under.
    ///
    /// That is the project root when one is marked, else the directory of the
    /// nearest local file. `None` when only the global file or nothing applies.
    pub fn project_dir(&self) -> Option<&Path> {
        let root = self.files.iter().find(|f| f.scope == ConfigScope::Root);
        root.or_else(|| self.files.iter().find(|f| f.scope == ConfigScope::Local))
            .map(ConfigFile::dir)
    }
}

/// Returns the path to the global configuration file (`~/.shdict.toml`).
///
/// Returns `None` if the home directory cannot be determined.
pub fn global_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(CONFIG_FILENAME))
}
