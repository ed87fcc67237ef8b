use tracing::{debug, warn};
use wry::WebViewBuilder;

use crate::events::{PageLoadState, WebViewEvent};

use super::sink::EventSink;
use super::WebViewManager;

/// URL prefixes the display context may navigate to.
///
/// - `app://` serves the bundled asset directory
/// - `http://app.localhost` is how WebView2 on Windows exposes `app://`
/// - `about:blank` is the empty page
pub const ALLOWED_NAV_PREFIXES: &[&str] = &["app://", "http://app.localhost", "about:blank"];

/// Check whether a URL is allowed by the navigation allowlist.
pub fn is_navigation_allowed(url: &str) -> bool {
    ALLOWED_NAV_PREFIXES
        .iter()
        .any(|prefix| url.starts_with(prefix))
}

impl WebViewManager {
    pub(super) fn attach_ipc_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
        view_id: u64,
    ) -> WebViewBuilder<'a> {
        builder.with_ipc_handler(move |request| {
            let body = request.body().to_string();
            debug!(view_id, body_len = body.len(), "bridge message from JS");
            events.push(WebViewEvent::IpcMessage { view_id, body });
        })
    }

    pub(super) fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
        view_id: u64,
    ) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(view_id, ?state, url = %url, "page load");
            events.push(WebViewEvent::PageLoad {
                view_id,
                state,
                url,
            });
        })
    }

    pub(super) fn attach_title_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
        view_id: u64,
    ) -> WebViewBuilder<'a> {
        builder.with_document_title_changed_handler(move |title| {
            debug!(view_id, title = %title, "title changed");
            events.push(WebViewEvent::TitleChanged { view_id, title });
        })
    }

    pub(super) fn attach_navigation_handlers<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
        view_id: u64,
    ) -> WebViewBuilder<'a> {
        let popup_events = events.clone();
        builder
            .with_navigation_handler(move |url| {
                if is_navigation_allowed(&url) {
                    return true;
                }
                warn!(view_id, url = %url, "navigation blocked: URL not in allowlist");
                events.push(WebViewEvent::NavigationBlocked { view_id, url });
                false
            })
            // The shell has exactly one window per view; pop-ups are never opened.
            .with_new_window_req_handler(move |url| {
                warn!(view_id, url = %url, "new window request blocked");
                popup_events.push(WebViewEvent::NavigationBlocked { view_id, url });
                false
            })
    }
}
