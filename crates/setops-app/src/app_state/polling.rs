//! Waking the event loop for webview activity.
//!
//! Webview handlers push into the manager's sink and post an
//! `AppEvent::WebViewActivity` through the loop proxy, so the loop sleeps
//! until there is something to drain. On Linux the webview lives on GTK,
//! whose callbacks only run while GTK is pumped, so the loop also wakes
//! on a short timer there.

use std::sync::{Arc, Mutex};
use std::time::Instant;

use setops_webview::Notifier;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoopProxy};

use super::core::SetOpsApp;
use super::types::AppEvent;

impl SetOpsApp {
    /// Route webview activity to `proxy` as user events.
    ///
    /// Call before the event loop starts so every webview carries it.
    pub fn wake_with(&mut self, proxy: EventLoopProxy<AppEvent>) {
        self.webviews.set_notifier(proxy_notifier(proxy));
    }

    /// Drain pending webview events and pick the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        #[cfg(target_os = "linux")]
        super::gtk_pump::pump();

        self.poll_webview_events();
        event_loop.set_control_flow(next_control_flow(Instant::now()));
    }
}

fn proxy_notifier(proxy: EventLoopProxy<AppEvent>) -> Notifier {
    let proxy = Mutex::new(proxy);
    Arc::new(move || {
        let Ok(proxy) = proxy.lock() else {
            return;
        };
        // Fails only once the loop has exited.
        if proxy.send_event(AppEvent::WebViewActivity).is_err() {
            tracing::trace!("event loop gone, webview wake-up dropped");
        }
    })
}

#[cfg(target_os = "linux")]
fn next_control_flow(now: Instant) -> ControlFlow {
    ControlFlow::WaitUntil(now + super::types::GTK_PUMP_INTERVAL)
}

#[cfg(not(target_os = "linux"))]
fn next_control_flow(_now: Instant) -> ControlFlow {
    ControlFlow::Wait
}
