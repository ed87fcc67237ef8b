//! Internal types and constants for the app state module.

use setops_webview::WebViewHandle;
use winit::window::Window;

/// User events sent to the winit event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// A webview queued something for the event loop to drain.
    WebViewActivity,
}

/// How often GTK gets a turn when nothing else wakes the loop.
#[cfg(target_os = "linux")]
pub(super) const GTK_PUMP_INTERVAL: std::time::Duration = std::time::Duration::from_millis(16);

/// One open top-level window and the webview filling it.
///
/// Fields drop in declaration order, so the webview is torn down before
/// its parent window.
pub(super) struct ShellWindow {
    pub(super) webview: WebViewHandle,
    pub(super) window: Window,
}
