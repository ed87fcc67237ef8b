//! WebView event types.

use serde::{Deserialize, Serialize};

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    /// Navigation has started.
    Started,
    /// Page has fully loaded.
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Events emitted by a WebView instance, keyed by the id of the view
/// (the owning window's id).
#[derive(Debug, Clone)]
pub enum WebViewEvent {
    PageLoad {
        view_id: u64,
        state: PageLoadState,
        url: String,
    },
    TitleChanged {
        view_id: u64,
        title: String,
    },
    /// A bridge message was posted from JavaScript.
    IpcMessage {
        view_id: u64,
        body: String,
    },
    /// A navigation was refused by the allow-list.
    NavigationBlocked {
        view_id: u64,
        url: String,
    },
    Closed {
        view_id: u64,
    },
}
