//! Graceful shutdown: destroy webviews, then their windows.

use super::core::SetOpsApp;

impl SetOpsApp {
    /// Tear down every open window. Safe to call more than once.
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");

        for (id, entry) in self.windows.drain() {
            drop(entry);
            self.webviews.notify_closed(id);
        }

        // Nothing is left to receive the remaining events.
        let dropped = self.webviews.drain_events().len();
        if dropped > 0 {
            tracing::debug!(dropped, "Discarded pending webview events");
        }

        self.should_exit = true;
        tracing::info!("Graceful shutdown complete");
    }
}
