use tracing::warn;
use wry::WebView;

use crate::ipc::{js_settle, BridgeResponse};

/// Handle to a managed WebView instance.
pub struct WebViewHandle {
    pub(super) webview: WebView,
    /// Id of the window that owns this view.
    pub(super) view_id: u64,
}

impl WebViewHandle {
    /// Deliver a reply to the pending bridge promise it answers.
    pub fn send_response(&self, response: &BridgeResponse) -> Result<(), wry::Error> {
        let script = js_settle(response);
        self.webview.evaluate_script(&script).inspect_err(|e| {
            warn!(view_id = self.view_id, id = response.id, error = %e, "failed to deliver bridge reply");
        })
    }

    /// Set the WebView bounds (position + size) within the parent window.
    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), wry::Error> {
        self.webview.set_bounds(bounds)
    }

    pub fn focus(&self) -> Result<(), wry::Error> {
        self.webview.focus()
    }
}
