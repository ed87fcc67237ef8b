//! Configuration schema types for the SetOps shell.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod content;
mod system;
mod window;

pub use content::*;
pub use system::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Root configuration for the shell.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct ShellConfig {
    pub window: WindowConfig,
    pub content: ContentConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
