//! WebView upkeep: sync bounds and poll events.

use setops_webview::{fill_bounds, WebViewEvent};

use crate::app_state::core::SetOpsApp;

impl SetOpsApp {
    /// Keep a window's webview filling its client area.
    pub(in crate::app_state) fn sync_webview_bounds(&mut self, view_id: u64, width: u32, height: u32) {
        let Some(entry) = self.windows.get(view_id) else {
            return;
        };
        if let Err(e) = entry.webview.set_bounds(fill_bounds(width, height)) {
            tracing::warn!(view_id, error = %e, "Failed to update webview bounds");
        }
    }

    /// Process pending webview events (bridge messages, page loads, etc.).
    pub(in crate::app_state) fn poll_webview_events(&mut self) {
        for event in self.webviews.drain_events() {
            match event {
                WebViewEvent::IpcMessage { view_id, body } => {
                    self.handle_ipc_message(view_id, &body);
                }
                WebViewEvent::PageLoad {
                    view_id,
                    state,
                    url,
                } => {
                    tracing::debug!(view_id, ?state, url = %url, "WebView page load event");
                }
                WebViewEvent::TitleChanged { view_id, title } => {
                    tracing::debug!(view_id, title = %title, "WebView title changed");
                    if let Some(entry) = self.windows.get(view_id) {
                        entry
                            .window
                            .set_title(window_title(&title, &self.config.window.title));
                    }
                }
                WebViewEvent::NavigationBlocked { view_id, url } => {
                    tracing::debug!(view_id, url = %url, "WebView navigation blocked");
                }
                WebViewEvent::Closed { view_id } => {
                    tracing::debug!(view_id, "WebView closed event");
                }
            }
        }
    }
}

/// The window shows the document title, or the configured title while the
/// document has none.
fn window_title<'a>(document_title: &'a str, fallback: &'a str) -> &'a str {
    let trimmed = document_title.trim();
    if trimmed.is_empty() {
        fallback
    } else {
        trimmed
    }
}
