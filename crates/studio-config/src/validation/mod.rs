//! Full configuration validation.
//!
//! Each section gets its own check; every violation is collected into a
//! single `ConfigError`.

mod helpers;


use crate::schema::StudioConfig;
use studio_common::ConfigError;

use helpers::{validate_non_empty, validate_range, validate_range_u64};

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &StudioConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_window(&mut errors, config);
    validate_dev_server(&mut errors, config);
    validate_content(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_window(errors: &mut Vec<String>, config: &StudioConfig) {
    let window = &config.window;
    validate_range(errors, "window.min_width", window.min_width, 200, 10_000);
    validate_range(errors, "window.min_height", window.min_height, 200, 10_000);

    if window.width < window.min_width {
        errors.push(format!(
            "window.width = {} is smaller than window.min_width = {}",
            window.width, window.min_width
        ));
    }
    if window.height < window.min_height {
        errors.push(format!(
            "window.height = {} is smaller than window.min_height = {}",
            window.height, window.min_height
        ));
    }
}

fn validate_dev_server(errors: &mut Vec<String>, config: &StudioConfig) {
    let dev = &config.dev_server;
    if dev.port == 0 {
        errors.push("dev_server.port must not be 0".into());
    }
    validate_non_empty(errors, "dev_server.host", &dev.host);
    validate_range(errors, "dev_server.max_attempts", dev.max_attempts, 1, 10_000);
    validate_range_u64(errors, "dev_server.interval_ms", dev.interval_ms, 10, 60_000);
}

fn validate_content(errors: &mut Vec<String>, config: &StudioConfig) {
    validate_non_empty(errors, "content.entry", &config.content.entry);
    validate_non_empty(errors, "content.packaged_dir", &config.content.packaged_dir);
}
