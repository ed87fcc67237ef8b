use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failures reported by native OS facilities (dialogs, shell, paths).
#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("dialog error: {0}")]
    DialogError(String),

    #[error("shell error: {0}")]
    ShellError(String),

    #[error("path error: {0}")]
    PathError(String),
}

/// Reasons a raw message from the display context is refused.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("malformed bridge message: {0}")]
    Malformed(String),

    #[error("operation not on the allow-list: {0}")]
    UnknownKind(String),

    #[error("invalid payload for {kind}: {reason}")]
    InvalidPayload { kind: &'static str, reason: String },
}

/// Failures bringing up a window and its webview.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("webview error: {0}")]
    WebView(String),

    #[error("window error: {0}")]
    Window(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("window.width = 10".into());
        assert_eq!(err.to_string(), "config validation error: window.width = 10");
    }

    #[test]
    fn platform_error_display() {
        let err = PlatformError::ShellError("failed to spawn explorer".into());
        assert_eq!(err.to_string(), "shell error: failed to spawn explorer");

        let err = PlatformError::PathError("could not determine data directory".into());
        assert_eq!(err.to_string(), "path error: could not determine data directory");
    }

    #[test]
    fn bridge_error_display() {
        let err = BridgeError::UnknownKind("eval".into());
        assert_eq!(err.to_string(), "operation not on the allow-list: eval");

        let err = BridgeError::InvalidPayload {
            kind: "openFolder",
            reason: "expected a string".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid payload for openFolder: expected a string"
        );
    }

    #[test]
    fn shell_error_other_variants() {
        let err = ShellError::WebView("build failed".into());
        assert_eq!(err.to_string(), "webview error: build failed");

        let err = ShellError::Window("no display".into());
        assert_eq!(err.to_string(), "window error: no display");
    }
}
