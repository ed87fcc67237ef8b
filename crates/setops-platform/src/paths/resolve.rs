use std::path::PathBuf;

use setops_common::PlatformError;

pub(super) const APP_NAME: &str = "setops";

/// Returns the platform-specific configuration directory.
///
/// - macOS: `~/Library/Application Support/setops`
/// - Linux: `$XDG_CONFIG_HOME/setops` (defaults to `~/.config/setops`)
/// - Windows: `%APPDATA%\setops`
pub fn config_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::config_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine config directory".into()))?
        .join(APP_NAME))
}

/// Returns the platform-specific data directory.
///
/// - macOS: `~/Library/Application Support/setops`
/// - Linux: `$XDG_DATA_HOME/setops` (defaults to `~/.local/share/setops`)
/// - Windows: `%APPDATA%\setops`
pub fn data_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::data_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine data directory".into()))?
        .join(APP_NAME))
}

/// Returns `data_dir()/logs`.
pub fn log_dir() -> Result<PathBuf, PlatformError> {
    Ok(data_dir()?.join("logs"))
}

/// Returns `log_dir()/crash-reports`.
pub fn crash_report_dir() -> Result<PathBuf, PlatformError> {
    Ok(log_dir()?.join("crash-reports"))
}
