use std::path::PathBuf;

use studio_common::PlatformError;

pub(super) const APP_NAME: &str = "studio";

/// Returns the platform-specific configuration directory.
///
/// - macOS: `~/Library/Application Support/studio`
/// - Linux: `$XDG_CONFIG_HOME/studio` (defaults to `~/.config/studio`)
/// - Windows: `%APPDATA%\studio`
pub fn config_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::config_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine config directory".into()))?
        .join(APP_NAME))
}

/// Returns the platform-specific data directory.
///
/// - macOS: `~/Library/Application Support/studio`
/// - Linux: `$XDG_DATA_HOME/studio` (defaults to `~/.local/share/studio`)
/// - Windows: `%APPDATA%\studio`
pub fn data_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::data_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine data directory".into()))?
        .join(APP_NAME))
}

/// Returns the path to the log directory, `data_dir()/logs`.
pub fn log_dir() -> Result<PathBuf, PlatformError> {
    Ok(data_dir()?.join("logs"))
}

/// Returns the path to the crash report directory, `log_dir()/crash-reports`.
pub fn crash_report_dir() -> Result<PathBuf, PlatformError> {
    Ok(log_dir()?.join("crash-reports"))
}
