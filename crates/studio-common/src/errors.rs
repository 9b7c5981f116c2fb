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

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("path error: {0}")]
    PathError(String),

    #[error("invalid external url: {0}")]
    InvalidUrl(String),

    #[error("failed to open external target: {0}")]
    ExternalOpen(String),

    #[error("icon error: {0}")]
    Icon(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("window error: {0}")]
    Window(String),

    #[error("webview error: {0}")]
    WebView(String),

    #[error("runtime error: {0}")]
    Runtime(String),
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

        let err = ConfigError::ValidationError("dev_server.max_attempts = 0".into());
        assert_eq!(
            err.to_string(),
            "config validation error: dev_server.max_attempts = 0"
        );
    }

    #[test]
    fn platform_error_display() {
        let err = PlatformError::InvalidUrl("javascript:alert(1)".into());
        assert_eq!(err.to_string(), "invalid external url: javascript:alert(1)");
    }

    #[test]
    fn shell_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let shell_err: ShellError = config_err.into();
        assert!(matches!(shell_err, ShellError::Config(_)));
        assert!(shell_err.to_string().contains("bad toml"));
    }

    #[test]
    fn shell_error_from_platform() {
        let platform_err = PlatformError::ExternalOpen("no handler".into());
        let shell_err: ShellError = platform_err.into();
        assert!(matches!(shell_err, ShellError::Platform(_)));
        assert!(shell_err.to_string().contains("no handler"));
    }

    #[test]
    fn shell_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let shell_err: ShellError = io_err.into();
        assert!(matches!(shell_err, ShellError::Io(_)));
        assert!(shell_err.to_string().contains("file missing"));
    }

    #[test]
    fn shell_error_other_variants() {
        let err = ShellError::Window("no display".into());
        assert_eq!(err.to_string(), "window error: no display");

        let err = ShellError::WebView("webkit missing".into());
        assert_eq!(err.to_string(), "webview error: webkit missing");

        let err = ShellError::Runtime("tokio".into());
        assert_eq!(err.to_string(), "runtime error: tokio");
    }
}
