//! WebView hosting for the SetOps display context.
//!
//! Wraps the `wry` crate to provide:
//! - One managed WebView per top-level window
//! - The four-operation bridge between JavaScript and the host
//! - An `app://` custom protocol serving the bundled asset directory
//! - A navigation allow-list that keeps the view on bundled content

pub mod bounds;
pub mod content;
pub mod events;
pub mod ipc;
pub mod manager;

pub use bounds::fill_bounds;
pub use content::{app_url, ContentProvider};
pub use events::{PageLoadState, WebViewEvent};
pub use ipc::{
    BridgeCall, BridgeRequest, BridgeResponse, MessageBoxOptions, MessageBoxResult, MessageType,
    SelectFilesOptions, SelectionResult,
};
pub use manager::{EventSink, Notifier, WebViewConfig, WebViewHandle, WebViewManager};
