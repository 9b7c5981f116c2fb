//! WebView layer for the studio shell window.
//!
//! Wraps the `wry` crate to provide:
//! - The managed webview filling the shell window
//! - The bridge wire protocol (Rust <-> JavaScript) and its init script
//! - The `studio://` custom protocol for packaged content
//! - Navigation policy (in-window, external, blocked)
//! - Event collection (page load, title change, bridge requests)

pub mod content;
pub mod events;
pub mod ipc;
pub mod manager;
pub mod navigation;

pub use content::ContentProvider;
pub use events::{PageLoadState, WebViewEvent};
pub use ipc::{IpcReply, IpcRequest};
pub use manager::{WebViewConfig, WebViewHandle, WebViewManager};
pub use navigation::{NavigationDecision, NavigationPolicy};
