//! Studio shell configuration.
//!
//! TOML-based configuration with environment overrides and validation.
//! All config sections use defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! let config = studio_config::load_config(None).expect("failed to load config");
//! println!("{}", config.runtime.mode);
//! ```

pub mod env;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use env::{apply_env_overrides, MODE_ENV, PORT_ENV};
pub use schema::{StudioConfig, CONFIG_SCHEMA_VERSION};

use std::path::Path;
use studio_common::ConfigError;

/// Load the config, apply environment overrides, and validate the result.
///
/// With `path` the file must exist; without it the platform default path is
/// used and a commented default file is created on first run.
pub fn load_config(path: Option<&Path>) -> Result<StudioConfig, ConfigError> {
    let mut config = match path {
        Some(p) => toml_loader::load_from_path(p)?,
        None => toml_loader::load_default()?,
    };

    env::apply_env_overrides(&mut config);
    validation::validate(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn load_config_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[dev_server]\ninterval_ms = 0\n").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn load_config_missing_explicit_path() {
        let err = load_config(Some(Path::new("/tmp/studio-does-not-exist.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }
}
