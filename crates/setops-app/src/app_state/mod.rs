//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Coordinates config, the window registry, webviews and the
//! bridge to native services.

mod core;
mod event_handler;
#[cfg(target_os = "linux")]
pub mod gtk_pump;
mod init;
mod polling;
mod shutdown;
mod types;
mod webview_bridge;
mod windows;

pub use core::SetOpsApp;
pub use types::AppEvent;
