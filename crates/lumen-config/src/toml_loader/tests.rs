//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use crate::schema::{LogLevel, LumenConfig, ReportFormat};
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let path = Path::new("/tmp/nonexistent_lumen_config.toml");
    let err = load_from_path(path).unwrap_err();
    assert!(matches!(err, lumen_common::ConfigError::FileNotFound(ref p) if p == path));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[theme]
name = "default-dark"

[logging]
level = "debug"
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.theme.name, "default-dark");
    assert_eq!(config.logging.level, LogLevel::Debug);
    // Defaults preserved
    assert_eq!(config.report.format, ReportFormat::Text);
    assert!(config.pairs.is_empty());
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, lumen_common::ConfigError::ParseError(_)));
}

#[test]
fn load_config_with_duplicate_pairs_still_loads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[[pairs]]
name = "Card"
foreground = "card-foreground"
background = "card"

[[pairs]]
name = "Card"
foreground = "foreground"
background = "card"
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.pairs.len(), 2);
}

#[test]
fn template_parses_to_defaults() {
    let config: LumenConfig = toml::from_str(&template::default_config_toml()).unwrap();
    assert_eq!(config.theme.name, LumenConfig::default().theme.name);
    assert!(config.pairs.is_empty());
}

#[test]
fn create_default_config_writes_template() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("lumen").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.theme.name, "default-light");
}

#[test]
fn default_config_path_ends_with_lumen_config() {
    if let Ok(path) = default_config_path() {
        assert!(path.ends_with("lumen/config.toml"));
    }
}
