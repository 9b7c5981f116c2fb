//! Application identity and runtime mode.

use serde::{Deserialize, Serialize};
use studio_common::RuntimeMode;

/// Application identity reported to content and shown in the About dialog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub name: String,
    /// Opened by Help > Learn More.
    pub homepage: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: "Video Studio".into(),
            homepage: "https://github.com/your-repo/video-starter-kit".into(),
        }
    }
}

/// Runtime mode. Normally selected by the `STUDIO_ENV` environment flag.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RuntimeConfig {
    pub mode: RuntimeMode,
}
