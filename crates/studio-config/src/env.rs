//! Environment overrides applied on top of the file config.

use studio_common::RuntimeMode;
use tracing::{debug, warn};

use crate::schema::StudioConfig;

/// Selects development or production mode.
pub const MODE_ENV: &str = "STUDIO_ENV";

/// Port of the local development server.
pub const PORT_ENV: &str = "PORT";

/// Apply overrides from the process environment.
pub fn apply_env_overrides(config: &mut StudioConfig) {
    apply_overrides_from(config, |key| std::env::var(key).ok());
}

/// Apply overrides using `lookup` to read variables.
pub fn apply_overrides_from<F>(config: &mut StudioConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(raw) = lookup(MODE_ENV) {
        match RuntimeMode::from_env_value(&raw) {
            Some(mode) => {
                debug!(%mode, "runtime mode from {MODE_ENV}");
                config.runtime.mode = mode;
            }
            None => warn!(value = %raw, "ignoring unrecognized {MODE_ENV}"),
        }
    }

    if let Some(raw) = lookup(PORT_ENV) {
        match raw.trim().parse::<u16>() {
            Ok(port) if port != 0 => {
                debug!(port, "dev server port from {PORT_ENV}");
                config.dev_server.port = port;
            }
            _ => warn!(value = %raw, "ignoring invalid {PORT_ENV}"),
        }
    }
}
