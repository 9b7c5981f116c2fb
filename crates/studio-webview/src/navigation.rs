//! In-window navigation policy.
//!
//! The window only ever shows its own content origin. Web and mail links
//! that point anywhere else are handed to the OS; every other scheme is
//! refused outright.

use studio_common::{ContentSource, RuntimeMode, EXTERNAL_SCHEMES, PACKAGED_HOST, PACKAGED_SCHEME};
use url::Url;

/// What to do with a navigation request coming from content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDecision {
    /// Load inside the window.
    Allow,
    /// Cancel, then open with the default external handler.
    Externalize,
    /// Cancel and drop.
    Block,
}

/// A (scheme, host, port) triple. Custom schemes have opaque origins in
/// the `url` crate, so origins are compared field by field.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Origin {
    scheme: String,
    host: String,
    port: Option<u16>,
}

impl Origin {
    fn of(url: &Url) -> Option<Self> {
        Some(Self {
            scheme: url.scheme().to_string(),
            host: url.host_str()?.to_ascii_lowercase(),
            port: url.port_or_known_default(),
        })
    }

    fn new(scheme: &str, host: &str, port: Option<u16>) -> Self {
        Self {
            scheme: scheme.into(),
            host: host.to_ascii_lowercase(),
            port,
        }
    }
}

/// Navigation rules for one window, fixed when the window is created.
#[derive(Debug, Clone)]
pub struct NavigationPolicy {
    allowed: Vec<Origin>,
    /// Development only: any loopback http origin loads in-window, so
    /// dev servers that hop ports or proxy assets keep working.
    allow_loopback: bool,
}

impl NavigationPolicy {
    pub fn for_source(source: &ContentSource, mode: RuntimeMode) -> Self {
        let allowed = match source {
            ContentSource::DevServer(endpoint) => {
                vec![Origin::new("http", &endpoint.host, Some(endpoint.port))]
            }
            ContentSource::Packaged { .. } => vec![
                Origin::new(PACKAGED_SCHEME, PACKAGED_HOST, None),
                // WebView2 rewrites studio://localhost/... to http://studio.localhost/...
                Origin::new("http", &format!("{PACKAGED_SCHEME}.{PACKAGED_HOST}"), Some(80)),
                Origin::new("https", &format!("{PACKAGED_SCHEME}.{PACKAGED_HOST}"), Some(443)),
            ],
        };
        Self {
            allowed,
            allow_loopback: mode.is_development(),
        }
    }

    pub fn decide(&self, raw: &str) -> NavigationDecision {
        if raw == "about:blank" {
            return NavigationDecision::Allow;
        }
        let Ok(url) = Url::parse(raw.trim()) else {
            return NavigationDecision::Block;
        };

        if let Some(origin) = Origin::of(&url) {
            if self.allowed.contains(&origin) {
                return NavigationDecision::Allow;
            }
            if self.allow_loopback && origin.scheme == "http" && is_loopback(&origin.host) {
                return NavigationDecision::Allow;
            }
        }

        if EXTERNAL_SCHEMES.contains(&url.scheme()) {
            NavigationDecision::Externalize
        } else {
            NavigationDecision::Block
        }
    }
}

fn is_loopback(host: &str) -> bool {
    matches!(host, "localhost" | "127.0.0.1" | "[::1]")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use studio_common::Endpoint;

    fn packaged() -> NavigationPolicy {
        NavigationPolicy::for_source(
            &ContentSource::Packaged {
                root: PathBuf::from("build"),
                entry: "index.html".into(),
            },
            RuntimeMode::Production,
        )
    }

    fn dev() -> NavigationPolicy {
        NavigationPolicy::for_source(
            &ContentSource::DevServer(Endpoint::new("localhost", 3000)),
            RuntimeMode::Development,
        )
    }

    // -- Allowed --

    #[test]
    fn allows_packaged_origin() {
        let p = packaged();
        assert_eq!(
            p.decide("studio://localhost/index.html"),
            NavigationDecision::Allow
        );
        assert_eq!(
            p.decide("studio://localhost/editor/timeline"),
            NavigationDecision::Allow
        );
    }

    #[test]
    fn allows_webview2_rewritten_custom_protocol() {
        let p = packaged();
        assert_eq!(
            p.decide("http://studio.localhost/index.html"),
            NavigationDecision::Allow
        );
        assert_eq!(
            p.decide("https://studio.localhost/index.html"),
            NavigationDecision::Allow
        );
    }

    #[test]
    fn allows_about_blank() {
        assert_eq!(packaged().decide("about:blank"), NavigationDecision::Allow);
        assert_eq!(dev().decide("about:blank"), NavigationDecision::Allow);
    }

    #[test]
    fn allows_dev_server_origin() {
        assert_eq!(
            dev().decide("http://localhost:3000/projects"),
            NavigationDecision::Allow
        );
    }

    #[test]
    fn development_relaxes_to_any_loopback_port() {
        let p = dev();
        assert_eq!(p.decide("http://localhost:3001/"), NavigationDecision::Allow);
        assert_eq!(p.decide("http://127.0.0.1:9229/"), NavigationDecision::Allow);
        assert_eq!(p.decide("http://[::1]:3000/"), NavigationDecision::Allow);
    }

    // -- Externalized --

    #[test]
    fn production_externalizes_loopback_http() {
        assert_eq!(
            packaged().decide("http://localhost:3000/"),
            NavigationDecision::Externalize
        );
    }

    #[test]
    fn externalizes_foreign_web_links() {
        for p in [packaged(), dev()] {
            assert_eq!(
                p.decide("https://github.com/your-repo/video-starter-kit"),
                NavigationDecision::Externalize
            );
            assert_eq!(p.decide("http://example.com"), NavigationDecision::Externalize);
            assert_eq!(
                p.decide("mailto:support@example.com"),
                NavigationDecision::Externalize
            );
        }
    }

    #[test]
    fn externalizes_lookalike_hosts() {
        let p = packaged();
        assert_eq!(
            p.decide("https://studio.localhost.evil.com/"),
            NavigationDecision::Externalize
        );
        assert_eq!(
            dev().decide("https://localhost:3000/"),
            NavigationDecision::Externalize
        );
    }

    // -- Blocked --

    #[test]
    fn blocks_file_protocol() {
        assert_eq!(packaged().decide("file:///etc/passwd"), NavigationDecision::Block);
        assert_eq!(dev().decide("file:///etc/hosts"), NavigationDecision::Block);
    }

    #[test]
    fn blocks_script_and_data_urls() {
        let p = packaged();
        assert_eq!(p.decide("javascript:alert(1)"), NavigationDecision::Block);
        assert_eq!(
            p.decide("data:text/html,<h1>XSS</h1>"),
            NavigationDecision::Block
        );
    }

    #[test]
    fn blocks_empty_and_garbage() {
        let p = packaged();
        assert_eq!(p.decide(""), NavigationDecision::Block);
        assert_eq!(p.decide("   "), NavigationDecision::Block);
        assert_eq!(p.decide("not-a-url"), NavigationDecision::Block);
        assert_eq!(p.decide("ftp://files.example.com"), NavigationDecision::Block);
    }
}
