//! SetOps configuration system.
//!
//! TOML-based configuration for the desktop shell: window geometry and
//! lifecycle, the bundled asset location, and logging. Every section uses
//! serde defaults so a partial (or empty) file is valid.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use setops_config::load_config;
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("{}x{}", config.window.width, config.window.height);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{ContentConfig, LogLevel, LoggingConfig, ShellConfig, WindowConfig};

use std::path::Path;

use setops_common::ConfigError;

/// Load config from `path` when given, otherwise from the platform default
/// location (creating a documented default file on first run).
pub fn load_config(path: Option<&Path>) -> Result<ShellConfig, ConfigError> {
    match path {
        Some(p) => toml_loader::load_from_path(p),
        None => toml_loader::load_default(),
    }
}
