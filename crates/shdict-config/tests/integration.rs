//! Integration tests for shdict-config.
//!
//! Tests the full configuration loading pipeline: discovery -> parse -> resolve -> merge.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use std::{
    fs,
    path::{Path, PathBuf},
};

use shdict_config::{
    Config, ConfigError, ConfigScope, ConfigWarning, Discovery, global_template, local_template,
};

/// Test helper to create a temporary directory structure for tests.
struct TestEnv {
    root: tempfile::TempDir,
}

impl TestEnv {
    fn new() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
        }
    }

    fn path(&self) -> &Path {
        self.root.path()
    }

    /// Creates a directory and returns its path.
    fn create_dir(&self, rel_path: &str) -> PathBuf {
        let path = self.root.path().join(rel_path);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Creates a file with content and returns its path.
    fn create_file(&self, rel_path: &str, content: &str) -> PathBuf {
        let path = self.root.path().join(rel_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }
}

#[test]
fn test_load_root_config_isolates_from_global() {
    let env = TestEnv::new();
    env.create_file(".shdict.toml", "root = true\n");

    let config = Config::load(env.path()).unwrap();

    assert_eq!(config.search.homophone_expansion_limit, 100);
    assert_eq!(config.log.filter, "warn");
    assert_eq!(config.sources.name("c"), "Crawford");
    assert_eq!(config.project_dir.as_deref(), Some(env.path()));
    assert_eq!(config.index_dir(env.path()), env.path().join(".shdict/index"));
}

#[test]
fn test_load_nested_configs_merging() {
    let env = TestEnv::new();
    let subdir = env.create_dir("project/subdir");

    env.create_file(
        ".shdict.toml",
        r#"
root = true

[index]
path = "shared-index"

[search]
homophone_expansion_limit = 50

[log]
filter = "info"
"#,
    );
    env.create_file(
        "project/.shdict.toml",
        r#"
[search]
homophone_expansion_limit = 10

[sources]
wu = "Wu Association"
"#,
    );

    let config = Config::load(&subdir).unwrap();

    assert_eq!(config.search.homophone_expansion_limit, 10);
    assert_eq!(config.log.filter, "info");
    assert_eq!(config.sources.name("wu"), "Wu Association");
    assert_eq!(config.sources.name("r"), "Republican-era dictionary");
    assert_eq!(config.index_dir(&subdir), env.path().join("shared-index"));
    assert_eq!(config.project_dir.as_deref(), Some(env.path()));
}

#[test]
fn test_default_index_lives_at_project_root() {
    let env = TestEnv::new();
    env.create_file("project/.shdict.toml", "root = true\n");
    env.create_file("project/notes/.shdict.toml", "[log]\nfilter = \"debug\"\n");
    let cwd = env.create_dir("project/notes/deep");

    let discovery = Discovery::find(&cwd);
    let config = Config::load_discovered(&discovery).unwrap();

    let scopes: Vec<ConfigScope> = discovery.files.iter().map(|f| f.scope).collect();
    assert_eq!(scopes, vec![ConfigScope::Local, ConfigScope::Root]);
    assert_eq!(config.log.filter, "debug");
    assert_eq!(config.index_dir(&cwd), env.path().join("project/.shdict/index"));
}

#[test]
fn test_local_config_without_root_anchors_index() {
    let env = TestEnv::new();
    env.create_file("project/.shdict.toml", "[search]\nhomophone_expansion_limit = 3\n");
    let cwd = env.create_dir("project/src");

    let config = Config::load(&cwd).unwrap();

    assert_eq!(config.search.homophone_expansion_limit, 3);
    assert_eq!(config.index_dir(&cwd), env.path().join("project/.shdict/index"));
}

#[test]
fn test_load_invalid_toml_names_file() {
    let env = TestEnv::new();
    let path = env.create_file(".shdict.toml", "root = true\n[search\n");

    let err = Config::load(env.path()).unwrap_err();

    match err {
        ConfigError::ParseToml { path: p, .. } => assert_eq!(p, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_load_from_files_empty_is_default() {
    let config = Config::load_from_files(&[]).unwrap();
    assert!(config.project_dir.is_none());
    assert_eq!(config.sources.len(), 3);
}

#[test]
fn test_validate_reports_missing_index() {
    let env = TestEnv::new();
    env.create_file(".shdict.toml", "root = true\n");

    let config = Config::load(env.path()).unwrap();
    let warnings = config.validate(env.path());

    assert!(matches!(warnings.as_slice(), [ConfigWarning::IndexMissing { .. }]));

    env.create_dir(".shdict/index");
    assert!(config.validate(env.path()).is_empty());
}

#[test]
fn test_templates_are_loadable_configs() {
    let env = TestEnv::new();
    env.create_file("project/.shdict.toml", &local_template());
    let cwd = env.create_dir("project/sub");

    let config = Config::load(&cwd).unwrap();

    assert_eq!(config.project_dir.as_deref(), Some(env.path().join("project").as_path()));
    assert_eq!(config.search.homophone_expansion_limit, 100);
    assert!(global_template().lines().all(|l| l.is_empty() || l.starts_with('#')));
}
