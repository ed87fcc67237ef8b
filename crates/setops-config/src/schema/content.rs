//! Bundled front-end asset location.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Where the display asset bundle lives and which file boots it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Asset root. Relative paths resolve against the working directory.
    pub dist_dir: String,
    /// Entry document inside `dist_dir`.
    pub entry: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            dist_dir: "dist".into(),
            entry: "index.html".into(),
        }
    }
}

impl ContentConfig {
    /// Resolve `dist_dir` against `base` unless it is already absolute.
    pub fn resolve_dist_dir(&self, base: &Path) -> PathBuf {
        let dir = Path::new(&self.dist_dir);
        if dir.is_absolute() {
            dir.to_path_buf()
        } else {
            base.join(dir)
        }
    }
}
