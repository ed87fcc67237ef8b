/// Configuration for creating a new WebView instance.
#[derive(Debug, Clone)]
pub struct WebViewConfig {
    /// Initial URL to load. `None` shows an empty page.
    pub url: Option<String>,
    /// Whether to enable dev tools.
    pub devtools: bool,
}

impl Default for WebViewConfig {
    fn default() -> Self {
        Self {
            url: None,
            devtools: cfg!(debug_assertions),
        }
    }
}

impl WebViewConfig {
    /// Create a config that loads a URL.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Default::default()
        }
    }
}
