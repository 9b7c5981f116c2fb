//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Initial and minimum window geometry plus the static title.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub min_width: u32,
    pub min_height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Video Studio".into(),
            width: 1400,
            height: 900,
            min_width: 1200,
            min_height: 800,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
