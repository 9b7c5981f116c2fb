use studio_common::{ContentSource, RuntimeMode};

use crate::ipc;
use crate::navigation::NavigationPolicy;

/// Configuration for creating the window's webview.
#[derive(Debug, Clone)]
pub struct WebViewConfig {
    /// Initial URL. `None` starts on `about:blank` until the shell navigates.
    pub url: Option<String>,
    /// Whether inspection tooling is available.
    pub devtools: bool,
    /// Custom user agent string.
    pub user_agent: Option<String>,
    /// Whether to enable clipboard access.
    pub clipboard: bool,
    /// Script injected before any content script runs.
    pub init_script: String,
    /// Where in-window navigation may go.
    pub policy: NavigationPolicy,
}

impl WebViewConfig {
    /// Config for a window that will show `source` under `mode`.
    pub fn for_source(source: &ContentSource, mode: RuntimeMode) -> Self {
        Self {
            url: None,
            devtools: mode.is_development(),
            user_agent: Some(format!("Studio/{}", env!("CARGO_PKG_VERSION"))),
            clipboard: true,
            init_script: ipc::init_script(ipc::platform_name(), mode.is_development()),
            policy: NavigationPolicy::for_source(source, mode),
        }
    }
}
