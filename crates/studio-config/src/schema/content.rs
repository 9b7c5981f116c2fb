//! Packaged content location.

use serde::{Deserialize, Serialize};

/// Where packaged (production) content lives.
///
/// Relative paths are resolved against the executable's directory first,
/// then the working directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    pub packaged_dir: String,
    /// Entry document inside `packaged_dir`.
    pub entry: String,
    /// Optional PNG used as the window icon.
    pub icon: Option<String>,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            packaged_dir: "build".into(),
            entry: "index.html".into(),
            icon: None,
        }
    }
}
