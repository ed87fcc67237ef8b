//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

use super::core::SetOpsApp;
use super::types::AppEvent;

impl ApplicationHandler<AppEvent> for SetOpsApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        self.activate(event_loop);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let id = u64::from(window_id);
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!(window_id = id, "Window close requested");
                self.close_window(id);
                if self.windows.should_quit(self.config.window.quit_on_last_close) {
                    tracing::info!("Last window closed, exiting");
                    self.should_exit = true;
                    event_loop.exit();
                }
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    self.sync_webview_bounds(id, size.width, size.height);
                }
            }

            WindowEvent::Focused(true) => {
                if let Some(entry) = self.windows.get(id) {
                    if let Err(e) = entry.webview.focus() {
                        tracing::debug!(window_id = id, error = %e, "Failed to focus webview");
                    }
                }
            }

            _ => {}
        }
    }

    fn user_event(&mut self, _event_loop: &ActiveEventLoop, event: AppEvent) {
        match event {
            AppEvent::WebViewActivity => self.poll_webview_events(),
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            event_loop.exit();
            return;
        }
        self.poll_and_schedule(event_loop);
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.shutdown();
    }
}

impl SetOpsApp {
    /// Forget a window and tear down its webview.
    fn close_window(&mut self, id: u64) {
        if let Some(entry) = self.windows.remove(id) {
            drop(entry);
            self.webviews.notify_closed(id);
            tracing::info!(window_id = id, open = self.windows.len(), "Window closed");
        }
    }
}
