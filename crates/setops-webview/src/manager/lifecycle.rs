use std::borrow::Cow;
use std::sync::Arc;

use tracing::{debug, warn};
use wry::http::{header, HeaderValue, Response, StatusCode};
use wry::raw_window_handle;
use wry::WebViewBuilder;

use crate::content::{request_path, ContentProvider, APP_SCHEME};
use crate::ipc::BRIDGE_INIT_SCRIPT;

use super::handle::WebViewHandle;
use super::types::WebViewConfig;
use super::WebViewManager;

impl WebViewManager {
    /// Create a new WebView as a child of the given window.
    ///
    /// The WebView is positioned at `bounds` within the parent window and
    /// has the bridge script installed before any page script runs.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &self,
        view_id: u64,
        window: &W,
        bounds: wry::Rect,
        config: WebViewConfig,
    ) -> Result<WebViewHandle, wry::Error> {
        let events = &self.events;

        let mut builder = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_devtools(config.devtools)
            .with_initialization_script(BRIDGE_INIT_SCRIPT);

        builder = Self::attach_ipc_handler(builder, events.clone(), view_id);
        builder = Self::attach_page_load_handler(builder, events.clone(), view_id);
        builder = Self::attach_title_handler(builder, events.clone(), view_id);
        builder = Self::attach_navigation_handlers(builder, events.clone(), view_id);
        builder = self.attach_custom_protocol(builder);

        builder = match &config.url {
            Some(url) => builder.with_url(url),
            None => builder.with_html("<html><body></body></html>"),
        };

        let webview = builder.build_as_child(window)?;

        debug!(view_id, url = ?config.url, "WebView created");

        Ok(WebViewHandle { webview, view_id })
    }

    /// Set the content provider for serving bundled assets via `app://`.
    pub fn set_content_provider(&mut self, provider: ContentProvider) {
        self.content_provider = Some(Arc::new(provider));
    }

    fn attach_custom_protocol<'a>(&self, mut builder: WebViewBuilder<'a>) -> WebViewBuilder<'a> {
        if let Some(provider) = &self.content_provider {
            let cp = Arc::clone(provider);
            builder = builder.with_custom_protocol(APP_SCHEME.to_string(), move |_wv_id, request| {
                let uri = request.uri().to_string();
                serve(&cp, &request_path(&uri))
            });
        }
        builder
    }
}

/// Build the protocol response for one asset request.
fn serve(provider: &ContentProvider, path: &str) -> Response<Cow<'static, [u8]>> {
    match provider.resolve(path) {
        Some((mime, data)) => {
            let mut response = Response::new(Cow::Owned(data));
            response
                .headers_mut()
                .insert(header::CONTENT_TYPE, HeaderValue::from_static(mime));
            response
        }
        None => {
            warn!(path = %path, "custom protocol: asset not found");
            let mut response = Response::new(Cow::Borrowed(&b"Not Found"[..]));
            *response.status_mut() = StatusCode::NOT_FOUND;
            response
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serves_existing_asset_with_mime() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html></html>").unwrap();
        let cp = ContentProvider::new(dir.path());

        let response = serve(&cp, "index.html");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/html"
        );
        assert_eq!(response.body().as_ref(), b"<html></html>");
    }

    #[test]
    fn missing_asset_is_404() {
        let dir = tempfile::tempdir().unwrap();
        let cp = ContentProvider::new(dir.path());

        let response = serve(&cp, "missing.js");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn serves_percent_encoded_request() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("\u{6570}\u{636e}.js"), "export {}").unwrap();
        let cp = ContentProvider::new(dir.path());

        let path = request_path("app://localhost/%E6%95%B0%E6%8D%AE.js");
        let response = serve(&cp, &path);
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.body().as_ref(), b"export {}");
    }
}
