//! WebView lifecycle management.
//!
//! `WebViewManager` creates `wry::WebView` instances, one per top-level
//! window, and collects the events they emit into a shared sink that the
//! event loop drains.

use std::sync::Arc;

use crate::content::ContentProvider;
use crate::events::WebViewEvent;

mod handle;
pub mod handlers;
mod lifecycle;
mod sink;
mod types;

pub use handle::WebViewHandle;
pub use sink::{EventSink, Notifier};
pub use types::WebViewConfig;

/// Creates WebViews and owns the event sink they report into.
pub struct WebViewManager {
    /// Event sink. Handlers push here; the event loop drains it.
    pub(crate) events: EventSink,
    /// Serves the `app://` custom protocol when set.
    content_provider: Option<Arc<ContentProvider>>,
}

impl WebViewManager {
    pub fn new() -> Self {
        Self {
            events: EventSink::default(),
            content_provider: None,
        }
    }

    /// Wake the event loop whenever a webview reports something.
    ///
    /// Only views created after this call carry the notifier.
    pub fn set_notifier(&mut self, notifier: Notifier) {
        self.events.set_notifier(notifier);
    }

    /// Drain all pending events.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        self.events.drain()
    }

    /// Record that the view for `view_id` has been torn down.
    pub fn notify_closed(&self, view_id: u64) {
        self.events.push(WebViewEvent::Closed { view_id });
    }
}

impl Default for WebViewManager {
    fn default() -> Self {
        Self::new()
    }
}
