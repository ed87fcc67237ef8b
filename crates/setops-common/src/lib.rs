//! Types shared by every SetOps crate.

pub mod errors;

pub use errors::{BridgeError, ConfigError, PlatformError, ShellError};
