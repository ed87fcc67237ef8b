//! Bridge protocol between the display context (JavaScript) and the host.
//!
//! Messages flow in both directions:
//! - **JS -> Rust**: a method on the frozen `window.setops` object posts
//!   `{ id, kind, payload }` through `window.ipc.postMessage`, which reaches
//!   the `ipc_handler` registered on the WebView.
//! - **Rust -> JS**: the host evaluates `window.__setopsBridge.settle(...)`
//!   with `{ id, status, value | error }`, resolving or rejecting the
//!   caller's promise.

mod call;
mod reply;
mod script;

pub use call::{BridgeCall, BridgeRequest, MessageBoxOptions, MessageType, SelectFilesOptions};
pub use reply::{js_settle, BridgeResponse, MessageBoxResult, ResponseStatus, SelectionResult};
pub use script::BRIDGE_INIT_SCRIPT;
