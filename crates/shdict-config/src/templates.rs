//! Starter files written by `shdict init`.
//!
//! Both list every setting at its built-in default, commented out, so a fresh
//! file changes nothing until a line is uncommented. The project file is also
//! active in one respect: it sets `root = true`, which makes its directory the
//! home of the default index.

use crate::{
    DEFAULT_HOMOPHONE_EXPANSION_LIMIT, DEFAULT_INDEX_DIR, DEFAULT_LOG_FILTER, default_sources,
};

/// Opening lines of a project config.
const LOCAL_HEADER: &str = "\
# shdict project configuration
#
# Lookups in this directory and below read this file. Closer .shdict.toml
# files override it; ~/.shdict.toml is ignored.

root = true
";

/// Opening lines of the global config.
const GLOBAL_HEADER: &str = "\
# shdict global configuration (~/.shdict.toml)
#
# Lowest precedence. Project .shdict.toml files override anything set here.
";

/// Returns the contents of a new project config.
pub fn local_template() -> String {
    format!("{LOCAL_HEADER}\n{}", commented_defaults())
}

/// Returns the contents of a new global config.
pub fn global_template() -> String {
    format!("{GLOBAL_HEADER}\n{}", commented_defaults())
}

/// Every setting at its default, as comments.
fn commented_defaults() -> String {
    let mut lines = vec![
        "# [index]".to_string(),
        "# Index directory, relative to this file.".to_string(),
        format!("# path = {}", toml_string(DEFAULT_INDEX_DIR)),
        String::new(),
        "# [search]".to_string(),
        "# Hits fetched per character when expanding a homophone query.".to_string(),
        format!("# homophone_expansion_limit = {DEFAULT_HOMOPHONE_EXPANSION_LIMIT}"),
        String::new(),
        "# [log]".to_string(),
        "# Log filter used when RUST_LOG is not set.".to_string(),
        format!("# filter = {}", toml_string(DEFAULT_LOG_FILTER)),
        String::new(),
        "# [sources]".to_string(),
        "# Display names by source code; entries here add to or rename these.".to_string(),
    ];
    lines.extend(
        default_sources()
            .iter()
            .map(|(code, name)| format!("# {code} = {}", toml_string(name))),
    );

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Quotes a value as a TOML basic string.
fn toml_string(value: &str) -> String {
    toml::Value::String(value.to_string()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_config;

    /// Uncomments the setting and section lines, leaving prose comments alone.
    fn uncomment(template: &str) -> String {
        template
            .lines()
            .map(|l| match l.strip_prefix("# ") {
                Some(rest) if rest.starts_with('[') || rest.contains(" = ") => rest,
                _ => l,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn local_template_marks_project_root_only() {
        let config = parse_config(&local_template()).unwrap();
        assert_eq!(config.root, Some(true));
        assert!(config.index.is_none());
        assert!(config.search.is_none());
        assert!(config.sources.is_none());
    }

    #[test]
    fn global_template_is_inert() {
        let config = parse_config(&global_template()).unwrap();
        assert!(config.root.is_none());
        assert!(config.log.is_none());
        assert!(global_template().lines().all(|l| l.is_empty() || l.starts_with('#')));
    }

    #[test]
    fn uncommented_settings_are_the_defaults() {
        let config = parse_config(&uncomment(&global_template())).unwrap();

        assert_eq!(
            config.index.and_then(|i| i.path).as_deref(),
            Some(DEFAULT_INDEX_DIR)
        );
        assert_eq!(
            config.search.and_then(|s| s.homophone_expansion_limit),
            Some(DEFAULT_HOMOPHONE_EXPANSION_LIMIT)
        );
        assert_eq!(
            config.log.and_then(|l| l.filter).as_deref(),
            Some(DEFAULT_LOG_FILTER)
        );
        let sources = config.sources.unwrap();
        for (code, name) in default_sources().iter() {
            assert_eq!(sources.get(code).map(String::as_str), Some(name), "{code}");
        }
    }

    #[test]
    fn names_are_quoted() {
        assert_eq!(toml_string("Qian Nairong (expanded)"), "\"Qian Nairong (expanded)\"");
    }
}
