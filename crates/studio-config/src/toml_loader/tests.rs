//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use std::path::Path;
use studio_common::{ConfigError, RuntimeMode};

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_studio_config.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[runtime]
mode = "development"

[dev_server]
port = 4000
interval_ms = 250
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.runtime.mode, RuntimeMode::Development);
    assert_eq!(config.dev_server.port, 4000);
    assert_eq!(config.dev_server.interval_ms, 250);
    // Defaults preserved
    assert_eq!(config.dev_server.max_attempts, 60);
    assert_eq!(config.window.title, "Video Studio");
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn out_of_range_values_are_loaded_as_is() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[dev_server]\nmax_attempts = 0\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.dev_server.max_attempts, 0);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("studio").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.runtime.mode, RuntimeMode::Production);
    assert_eq!(config.content.packaged_dir, "build");
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;
    use crate::schema::StudioConfig;

    let config: StudioConfig = toml::from_str(default_config_toml()).unwrap();
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn default_config_path_is_reasonable() {
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("studio"));
        assert!(path_str.ends_with("config.toml"));
    }
}
