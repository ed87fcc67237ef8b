//! SetOpsApp struct definition and constructor.

use std::path::PathBuf;

use setops_config::ShellConfig;
use setops_webview::{ContentProvider, WebViewManager};

use super::types::ShellWindow;
use super::webview_bridge::HostServices;
use super::windows::WindowRegistry;

/// Top-level application state.
pub struct SetOpsApp {
    pub(super) config: ShellConfig,

    // Windowing
    pub(super) windows: WindowRegistry<ShellWindow>,

    // WebViews and the native services they may reach
    pub(super) webviews: WebViewManager,
    pub(super) host: HostServices,

    pub(super) should_exit: bool,
}

impl SetOpsApp {
    pub fn new(config: ShellConfig, dist_dir: PathBuf) -> Self {
        Self::with_host(config, dist_dir, HostServices::native())
    }

    pub(super) fn with_host(config: ShellConfig, dist_dir: PathBuf, host: HostServices) -> Self {
        if !dist_dir.is_dir() {
            tracing::warn!(
                path = %dist_dir.display(),
                "Asset directory not found, the window will show a blank page"
            );
        }

        if config.window.stays_resident_without_window() {
            tracing::warn!(
                "quit_on_last_close is off: closing the window leaves the process running with no way to reopen it"
            );
        }

        let mut webviews = WebViewManager::new();
        webviews.set_content_provider(ContentProvider::new(&dist_dir));
        tracing::info!(dist_dir = %dist_dir.display(), "WebView manager initialized");

        Self {
            config,
            windows: WindowRegistry::new(),
            webviews,
            host,
            should_exit: false,
        }
    }
}
