//! Validates and executes bridge commands.

use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use studio_platform::parse_external_url;
use tracing::{debug, info, warn};

use crate::window::NoActiveWindow;

use super::commands::CommandName;
use super::host::CommandHost;
use super::types::{
    BridgeError, CommandRequest, OpenDialogOptions, OpenDialogResult, Reply, SaveDialogOptions,
    SaveDialogResult,
};

/// The registry of privileged commands. Registered once at startup and
/// reachable only through the window's IPC channel.
#[derive(Debug)]
pub struct CommandBridge {
    commands: &'static [CommandName],
}

impl CommandBridge {
    pub fn register() -> Self {
        let bridge = Self {
            commands: &CommandName::ALL,
        };
        info!(commands = ?bridge.names().collect::<Vec<_>>(), "command bridge registered");
        bridge
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.iter().map(|c| c.as_str())
    }

    pub fn dispatch<H: CommandHost>(&self, host: &mut H, request: CommandRequest) -> Reply {
        let command = match request.name.parse::<CommandName>() {
            Ok(c) if self.commands.contains(&c) => c,
            Ok(_) | Err(_) => {
                warn!(id = request.id, command = %request.name, "rejected unknown command");
                return Reply::Ready(Err(BridgeError::UnknownCommand(request.name)));
            }
        };
        debug!(id = request.id, %command, "dispatching command");

        match command {
            CommandName::GetAppVersion => Reply::Ready(Ok(json!(host.app_info().version))),
            CommandName::GetAppName => Reply::Ready(Ok(json!(host.app_info().name))),
            CommandName::ShowOpenDialog => {
                let options: OpenDialogOptions = match parse_args(command, request.args) {
                    Ok(o) => o,
                    Err(e) => return Reply::Ready(Err(e)),
                };
                match host.show_open_dialog(&options) {
                    Ok(pending) => Reply::Deferred(Box::pin(async move {
                        let selection = pending.await;
                        to_value(command, OpenDialogResult::from_selection(selection))
                    })),
                    Err(NoActiveWindow) => {
                        debug!(%command, "no active window; reporting cancelled");
                        Reply::Ready(to_value(command, OpenDialogResult::from_selection(None)))
                    }
                }
            }
            CommandName::ShowSaveDialog => {
                let options: SaveDialogOptions = match parse_args(command, request.args) {
                    Ok(o) => o,
                    Err(e) => return Reply::Ready(Err(e)),
                };
                match host.show_save_dialog(&options) {
                    Ok(pending) => Reply::Deferred(Box::pin(async move {
                        let selection = pending.await;
                        to_value(command, SaveDialogResult::from_selection(selection))
                    })),
                    Err(NoActiveWindow) => {
                        debug!(%command, "no active window; reporting cancelled");
                        Reply::Ready(to_value(command, SaveDialogResult::from_selection(None)))
                    }
                }
            }
            CommandName::OpenExternal => {
                let url = match request
                    .args
                    .as_str()
                    .ok_or_else(|| "expected a URL string".to_string())
                    .and_then(|raw| parse_external_url(raw).map_err(|e| e.to_string()))
                {
                    Ok(url) => url,
                    Err(reason) => {
                        warn!(%command, %reason, "refused external URL");
                        return Reply::Ready(Err(BridgeError::InvalidArgs {
                            command: command.as_str(),
                            reason,
                        }));
                    }
                };
                let pending = host.open_external(url);
                Reply::Deferred(Box::pin(async move {
                    pending.await.map(|()| Value::Null).map_err(|e| BridgeError::Failed {
                        command: command.as_str(),
                        reason: e.to_string(),
                    })
                }))
            }
            CommandName::WindowMinimize => window_control(command, host.minimize_window()),
            CommandName::WindowMaximizeToggle => {
                window_control(command, host.toggle_maximize_window())
            }
            CommandName::WindowClose => window_control(command, host.close_window()),
        }
    }
}

/// Window controls with no window are silent no-ops.
fn window_control(command: CommandName, outcome: Result<(), NoActiveWindow>) -> Reply {
    if outcome.is_err() {
        debug!(%command, "no active window; ignoring");
    }
    Reply::Ready(Ok(Value::Null))
}

/// `null` means "no options".
fn parse_args<T: DeserializeOwned + Default>(
    command: CommandName,
    args: Value,
) -> Result<T, BridgeError> {
    if args.is_null() {
        return Ok(T::default());
    }
    serde_json::from_value(args).map_err(|e| BridgeError::InvalidArgs {
        command: command.as_str(),
        reason: e.to_string(),
    })
}

fn to_value<T: serde::Serialize>(command: CommandName, result: T) -> Result<Value, BridgeError> {
    serde_json::to_value(result).map_err(|e| BridgeError::Failed {
        command: command.as_str(),
        reason: e.to_string(),
    })
}
