use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Custom protocol scheme used to serve packaged content.
pub const PACKAGED_SCHEME: &str = "studio";

/// Host component of packaged content URLs (`studio://localhost/...`).
pub const PACKAGED_HOST: &str = "localhost";

/// Schemes that may be handed to the OS default handler. Everything else is refused.
pub const EXTERNAL_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// Whether the shell loads a local development server or packaged assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeMode {
    Development,
    #[default]
    Production,
}

impl RuntimeMode {
    /// Parse the value of the mode environment flag.
    ///
    /// Accepts `development`/`dev` and `production`/`prod`, case-insensitive.
    pub fn from_env_value(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Some(Self::Development),
            "production" | "prod" => Some(Self::Production),
            _ => None,
        }
    }

    pub fn is_development(self) -> bool {
        self == Self::Development
    }
}

impl fmt::Display for RuntimeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => f.write_str("development"),
            Self::Production => f.write_str("production"),
        }
    }
}

/// A local network endpoint (plain HTTP).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    pub host: String,
    pub port: u16,
}

impl Endpoint {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// `http://host:port`, with no trailing slash.
    pub fn origin(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// URL the window navigates to and the poller probes.
    pub fn url(&self) -> String {
        format!("{}/", self.origin())
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Where a window's content comes from. Fixed for the lifetime of a window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    /// Local development server; only used in development mode.
    DevServer(Endpoint),
    /// Static content bundled with the application.
    Packaged { root: PathBuf, entry: String },
}

impl ContentSource {
    /// The URL a window navigates to for this source.
    pub fn url(&self) -> String {
        match self {
            Self::DevServer(endpoint) => endpoint.url(),
            Self::Packaged { entry, .. } => format!(
                "{PACKAGED_SCHEME}://{PACKAGED_HOST}/{}",
                entry.trim_start_matches('/')
            ),
        }
    }

    pub fn is_dev_server(&self) -> bool {
        matches!(self, Self::DevServer(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runtime_mode_from_env_value() {
        assert_eq!(
            RuntimeMode::from_env_value("development"),
            Some(RuntimeMode::Development)
        );
        assert_eq!(
            RuntimeMode::from_env_value("DEV"),
            Some(RuntimeMode::Development)
        );
        assert_eq!(
            RuntimeMode::from_env_value(" production "),
            Some(RuntimeMode::Production)
        );
        assert_eq!(RuntimeMode::from_env_value("staging"), None);
        assert_eq!(RuntimeMode::from_env_value(""), None);
    }

    #[test]
    fn runtime_mode_defaults_to_production() {
        assert_eq!(RuntimeMode::default(), RuntimeMode::Production);
        assert!(!RuntimeMode::default().is_development());
    }

    #[test]
    fn runtime_mode_serialization() {
        let json = serde_json::to_string(&RuntimeMode::Development).unwrap();
        assert_eq!(json, "\"development\"");
        let mode: RuntimeMode = serde_json::from_str("\"production\"").unwrap();
        assert_eq!(mode, RuntimeMode::Production);
    }

    #[test]
    fn endpoint_urls() {
        let endpoint = Endpoint::new("localhost", 3000);
        assert_eq!(endpoint.origin(), "http://localhost:3000");
        assert_eq!(endpoint.url(), "http://localhost:3000/");
        assert_eq!(endpoint.to_string(), "localhost:3000");
    }

    #[test]
    fn dev_server_source_url() {
        let source = ContentSource::DevServer(Endpoint::new("localhost", 5173));
        assert_eq!(source.url(), "http://localhost:5173/");
        assert!(source.is_dev_server());
    }

    #[test]
    fn packaged_source_url_uses_custom_scheme() {
        let source = ContentSource::Packaged {
            root: PathBuf::from("/opt/studio/build"),
            entry: "/index.html".into(),
        };
        assert_eq!(source.url(), "studio://localhost/index.html");
        assert!(!source.is_dev_server());
    }
}
