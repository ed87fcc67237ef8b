//! Window and webview creation.

use setops_common::ShellError;
use setops_config::ShellConfig;
use setops_webview::{app_url, fill_bounds, WebViewConfig, WebViewManager};
use winit::dpi::LogicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use super::core::SetOpsApp;
use super::types::ShellWindow;

impl SetOpsApp {
    /// Handle ready/activate: open a window only when none is open.
    pub(super) fn activate(&mut self, event_loop: &ActiveEventLoop) {
        let created = self
            .windows
            .activate_with(|| build_window(event_loop, &self.config, &self.webviews));

        match created {
            Ok(Some(id)) => tracing::info!(window_id = id, "Window created"),
            Ok(None) => tracing::debug!(open = self.windows.len(), "Activate: window already open"),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                if self.windows.is_empty() {
                    self.should_exit = true;
                    event_loop.exit();
                }
            }
        }
    }
}

/// Create a top-level window with a webview filling it, loading the entry
/// document over `app://`.
fn build_window(
    event_loop: &ActiveEventLoop,
    config: &ShellConfig,
    webviews: &WebViewManager,
) -> Result<(u64, ShellWindow), ShellError> {
    let attrs = window_attributes(config);
    let window = event_loop
        .create_window(attrs)
        .map_err(|e| ShellError::Window(e.to_string()))?;

    let id = u64::from(window.id());
    let size = window.inner_size();

    let mut wv_config = WebViewConfig::with_url(app_url(&config.content.entry));
    wv_config.devtools = config.window.devtools;

    let webview = webviews
        .create(id, &window, fill_bounds(size.width, size.height), wv_config)
        .map_err(|e| ShellError::WebView(e.to_string()))?;

    Ok((id, ShellWindow { webview, window }))
}

fn window_attributes(config: &ShellConfig) -> WindowAttributes {
    let wc = &config.window;
    WindowAttributes::default()
        .with_title(wc.title.as_str())
        .with_inner_size(LogicalSize::new(wc.width as f64, wc.height as f64))
        .with_min_inner_size(LogicalSize::new(wc.min_width as f64, wc.min_height as f64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::Size;

    #[test]
    fn attributes_follow_config() {
        let config = ShellConfig::default();
        let attrs = window_attributes(&config);
        assert_eq!(attrs.title, "SetOps");
        match attrs.inner_size {
            Some(Size::Logical(size)) => {
                assert_eq!(size.width, 1200.0);
                assert_eq!(size.height, 800.0);
            }
            other => panic!("Expected logical inner size, got {other:?}"),
        }
        assert!(attrs.min_inner_size.is_some());
    }

    #[test]
    fn entry_url_uses_app_scheme() {
        let config = ShellConfig::default();
        assert_eq!(
            app_url(&config.content.entry),
            "app://localhost/index.html"
        );
    }
}
