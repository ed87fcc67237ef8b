//! Bridge between webviews and the host.
//!
//! Handles bridge message dispatch, the native services behind the four
//! operations, and keeping each webview sized to its window.

mod host_ops;
mod ipc_dispatch;
mod lifecycle;

pub(super) use host_ops::HostServices;
