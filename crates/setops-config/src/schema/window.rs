//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Main window geometry and lifecycle settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Initial inner width in logical pixels (valid range: 320-7680).
    pub width: u32,
    /// Initial inner height in logical pixels (valid range: 240-4320).
    pub height: u32,
    pub min_width: u32,
    pub min_height: u32,
    /// Exit once the last window closes. On by default on every platform,
    /// macOS included: the event loop never reports a dock reopen, so a
    /// resident process would have no way back to a window.
    pub quit_on_last_close: bool,
    /// Enable webview devtools (always on in debug builds).
    pub devtools: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "SetOps".into(),
            width: 1200,
            height: 800,
            min_width: 640,
            min_height: 480,
            quit_on_last_close: true,
            devtools: cfg!(debug_assertions),
        }
    }
}

impl WindowConfig {
    /// True when closing the last window would leave a process running
    /// with nothing on screen and nothing able to bring a window back.
    pub fn stays_resident_without_window(&self) -> bool {
        !self.quit_on_last_close
    }
}

// =============================================================================
// Tests
// =============================================================================
