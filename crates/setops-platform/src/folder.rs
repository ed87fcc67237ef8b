use std::path::Path;

use setops_common::PlatformError;
use tracing::{debug, info};

/// Capability to reveal a path in the system file manager.
pub trait FolderOpener {
    /// Launch the file manager on `path`. The caller has already checked
    /// that the path exists.
    fn launch(&self, path: &Path) -> Result<(), PlatformError>;
}

/// Opens `path` in the file manager if it exists.
///
/// Returns `Ok(false)` without touching the opener when the path is empty
/// or does not exist. Launch failures are returned as errors.
pub fn open_folder(opener: &dyn FolderOpener, path: &str) -> Result<bool, PlatformError> {
    if path.is_empty() {
        return Ok(false);
    }
    let path = Path::new(path);
    if !path.exists() {
        debug!(path = %path.display(), "open_folder: path does not exist");
        return Ok(false);
    }
    opener.launch(path)?;
    Ok(true)
}

/// The desktop's default handler for directories.
///
/// Resolution is left to the `open` crate, which tries the platform's
/// launchers in turn (`explorer`, `open`, `xdg-open`, `gio`, ...).
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemFileManager;

impl FolderOpener for SystemFileManager {
    fn launch(&self, path: &Path) -> Result<(), PlatformError> {
        open::that_detached(path).map_err(|e| launch_error(path, e))?;
        info!(path = %path.display(), "file manager launched");
        Ok(())
    }
}

fn launch_error(path: &Path, err: std::io::Error) -> PlatformError {
    PlatformError::ShellError(format!(
        "failed to open {} in the file manager: {err}",
        path.display()
    ))
}
