//! Command Bridge: the closed set of privileged operations exposed to content.

mod commands;
mod dispatch;
mod host;
mod types;

pub use commands::CommandName;
pub use dispatch::CommandBridge;
pub use host::{open_in_background, AppInfo, CommandHost, DialogService, ShellHost};
pub use types::{
    to_ipc_reply, BridgeError, CommandRequest, CommandResult, FileFilter, OpenDialogOptions,
    OpenDialogResult, Reply, SaveDialogOptions, SaveDialogResult,
};
