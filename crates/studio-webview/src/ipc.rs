//! Wire protocol between the shell and the rendered content.
//!
//! Messages flow in both directions:
//! - **JS -> Rust**: `window.studioAPI.*` posts
//!   `{"id": 7, "command": "get-app-version", "args": null}` through
//!   `window.ipc.postMessage`, which reaches the webview's IPC handler.
//! - **Rust -> JS**: the shell answers with `evaluate_script`, calling
//!   `window.__studioBridge.resolve({"id": 7, "ok": true, "value": "0.1.0"})`
//!   which settles the promise the content is awaiting.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A bridge request from the rendered content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IpcRequest {
    /// Correlates the reply with the pending promise on the JS side.
    pub id: u64,
    /// Command name from the bridge vocabulary.
    pub command: String,
    #[serde(default)]
    pub args: Value,
}

impl IpcRequest {
    /// Parse a request from the raw `postMessage` body.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

/// Error half of a failed reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpcErrorBody {
    pub code: String,
    pub message: String,
}

/// The shell's answer to one [`IpcRequest`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IpcReply {
    pub id: u64,
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<IpcErrorBody>,
}

impl IpcReply {
    pub fn success(id: u64, value: Value) -> Self {
        Self {
            id,
            ok: true,
            value: Some(value),
            error: None,
        }
    }

    pub fn failure(id: u64, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id,
            ok: false,
            value: None,
            error: Some(IpcErrorBody {
                code: code.into(),
                message: message.into(),
            }),
        }
    }
}

/// Platform identifier exposed to content as `studioAPI.platform`.
pub fn platform_name() -> &'static str {
    if cfg!(target_os = "macos") {
        "darwin"
    } else if cfg!(target_os = "windows") {
        "win32"
    } else {
        "linux"
    }
}

/// Generate a JS snippet that settles the pending promise for `reply`.
pub fn js_resolve_reply(reply: &IpcReply) -> String {
    let json = serde_json::to_string(reply).unwrap_or_else(|_| {
        format!(
            r#"{{"id":{},"ok":false,"error":{{"code":"failed","message":"unserializable reply"}}}}"#,
            reply.id
        )
    });
    format!("window.__studioBridge && window.__studioBridge.resolve({json});")
}

const INIT_SCRIPT_TEMPLATE: &str = r#"
(function() {
    if (window.studioAPI) { return; }
    var pending = {};
    // Ids are seeded per page load so replies meant for a previous page
    // never match a fresh promise.
    var origin = (window.performance && performance.timeOrigin) || Date.now();
    var nextId = Math.floor(origin % 1e9) * 1e6 + 1;

    function invoke(command, args) {
        return new Promise(function(resolve, reject) {
            var id = nextId++;
            pending[id] = { resolve: resolve, reject: reject };
            window.ipc.postMessage(JSON.stringify({
                id: id,
                command: command,
                args: args === undefined ? null : args
            }));
        });
    }

    Object.defineProperty(window, '__studioBridge', {
        value: Object.freeze({
            resolve: function(reply) {
                var entry = pending[reply.id];
                if (!entry) { return; }
                delete pending[reply.id];
                if (reply.ok) {
                    entry.resolve(reply.value === undefined ? null : reply.value);
                } else {
                    var err = new Error(reply.error ? reply.error.message : 'command failed');
                    err.code = reply.error ? reply.error.code : 'failed';
                    entry.reject(err);
                }
            }
        })
    });

    window.studioAPI = Object.freeze({
        getAppVersion: function() { return invoke('get-app-version'); },
        getAppName: function() { return invoke('get-app-name'); },
        showOpenDialog: function(options) { return invoke('show-open-dialog', options || {}); },
        showSaveDialog: function(options) { return invoke('show-save-dialog', options || {}); },
        openExternal: function(url) { return invoke('open-external', url); },
        minimizeWindow: function() { return invoke('window-minimize'); },
        maximizeWindow: function() { return invoke('window-maximize-toggle'); },
        closeWindow: function() { return invoke('window-close'); },
        invoke: invoke,
        platform: __PLATFORM__,
        isDevelopment: __IS_DEV__
    });
})();
"#;

/// Initialization script injected into every page before content scripts run.
pub fn init_script(platform: &str, is_development: bool) -> String {
    let platform = serde_json::to_string(platform).unwrap_or_else(|_| "\"unknown\"".into());
    INIT_SCRIPT_TEMPLATE
        .replace("__PLATFORM__", &platform)
        .replace("__IS_DEV__", if is_development { "true" } else { "false" })
}
