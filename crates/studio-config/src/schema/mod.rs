//! Configuration schema types for the studio shell.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod app;
mod content;
mod dev_server;
mod system;
mod window;

pub use app::*;
pub use content::*;
pub use dev_server::*;
pub use system::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for the studio shell.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct StudioConfig {
    pub app: AppConfig,
    pub runtime: RuntimeConfig,
    pub window: WindowConfig,
    pub dev_server: DevServerConfig,
    pub content: ContentConfig,
    pub lifecycle: LifecycleConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
