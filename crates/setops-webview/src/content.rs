//! Local content serving via custom protocol.
//!
//! The display bundle is loaded from `app://localhost/<path>` instead of
//! `file://` or a local HTTP server, so nothing outside the asset
//! directory is ever reachable from the view.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Custom protocol scheme for bundled content.
pub const APP_SCHEME: &str = "app";

/// Build the `app://` URL for a path inside the asset directory.
pub fn app_url(path: &str) -> String {
    format!("{APP_SCHEME}://localhost/{}", path.trim_start_matches('/'))
}

/// Strip the scheme and host from an `app://` request URI and
/// percent-decode what is left.
///
/// A path that does not decode to UTF-8 comes back empty, which no file
/// matches.
pub fn request_path(uri: &str) -> Cow<'_, str> {
    let path = uri
        .strip_prefix("app://localhost/")
        .or_else(|| uri.strip_prefix("app://localhost"))
        .or_else(|| uri.strip_prefix("http://app.localhost/"))
        .or_else(|| uri.strip_prefix("app:///"))
        .or_else(|| uri.strip_prefix("app://"))
        .unwrap_or("");
    // Query strings and fragments never name a file.
    let path = path.split(['?', '#']).next().unwrap_or("");
    urlencoding::decode(path).unwrap_or(Cow::Borrowed(""))
}

/// Serves files from a base directory via the `app://` custom protocol.
///
/// A request for `app://localhost/assets/main.js` resolves to
/// `{base_dir}/assets/main.js`.
pub struct ContentProvider {
    base_dir: PathBuf,
}

impl ContentProvider {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Resolve a request path to its MIME type and bytes.
    ///
    /// Returns `None` for missing files and for anything that escapes the
    /// base directory after symlinks and `..` are resolved.
    pub fn resolve(&self, path: &str) -> Option<(&'static str, Vec<u8>)> {
        let clean = path.trim_start_matches('/');
        let file_path = self.base_dir.join(clean);

        let canonical_base = std::fs::canonicalize(&self.base_dir).ok()?;
        let canonical_file = std::fs::canonicalize(&file_path).ok()?;
        if !canonical_file.starts_with(&canonical_base) || !canonical_file.is_file() {
            return None;
        }

        let data = std::fs::read(&canonical_file).ok()?;
        Some((mime_from_extension(&canonical_file), data))
    }
}

/// Guess MIME type from file extension.
fn mime_from_extension(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") | Some("htm") => "text/html",
        Some("css") => "text/css",
        Some("js") | Some("mjs") => "application/javascript",
        Some("json") | Some("map") => "application/json",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("wasm") => "application/wasm",
        Some("ico") => "image/x-icon",
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",
        Some("webp") => "image/webp",
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}
