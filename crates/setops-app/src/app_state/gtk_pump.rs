//! GTK upkeep on Linux.
//!
//! wry hosts its webview in a GTK widget even when the window comes from
//! winit, so GTK must be initialised on the main thread before the first
//! view is built and given a turn on every pass of the event loop.

use setops_common::ShellError;

/// Initialise GTK on the calling thread.
pub fn init() -> Result<(), ShellError> {
    gtk::init().map_err(|e| ShellError::Window(format!("failed to initialise GTK: {e}")))
}

/// Run every GTK event that is ready without blocking.
pub(super) fn pump() {
    while gtk::events_pending() {
        gtk::main_iteration_do(false);
    }
}
