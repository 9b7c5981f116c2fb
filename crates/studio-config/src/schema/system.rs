//! Process lifecycle and logging settings.

use serde::{Deserialize, Serialize};

/// What happens when the last window closes.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LifecycleConfig {
    /// Keep the process running with zero windows. Unset means the
    /// platform convention (true on macOS, false elsewhere).
    pub keep_alive_without_windows: Option<bool>,
}

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Filter directive for the shell's own targets.
    pub fn directive(self) -> &'static str {
        match self {
            Self::Trace => "studio=trace",
            Self::Debug => "studio=debug",
            Self::Info => "studio=info",
            Self::Warn => "studio=warn",
            Self::Error => "studio=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
