use std::path::{Path, PathBuf};

use futures_util::future::BoxFuture;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use studio_webview::{IpcReply, IpcRequest};

/// One invocation from content.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandRequest {
    pub id: u64,
    pub name: String,
    pub args: Value,
}

impl From<IpcRequest> for CommandRequest {
    fn from(req: IpcRequest) -> Self {
        Self {
            id: req.id,
            name: req.command,
            args: req.args,
        }
    }
}

/// Failures reported back to content. Never fatal to the process.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BridgeError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("invalid arguments for {command}: {reason}")]
    InvalidArgs {
        command: &'static str,
        reason: String,
    },

    #[error("{command} failed: {reason}")]
    Failed {
        command: &'static str,
        reason: String,
    },
}

impl BridgeError {
    /// Stable code the content can branch on.
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownCommand(_) => "unknown_command",
            Self::InvalidArgs { .. } => "invalid_args",
            Self::Failed { .. } => "failed",
        }
    }
}

pub type CommandResult = Result<Value, BridgeError>;

/// A command's answer: available now, or after some I/O completes.
pub enum Reply {
    Ready(CommandResult),
    Deferred(BoxFuture<'static, CommandResult>),
}

impl Reply {
    pub async fn resolve(self) -> CommandResult {
        match self {
            Self::Ready(result) => result,
            Self::Deferred(future) => future.await,
        }
    }
}

/// Wire form of a finished command.
pub fn to_ipc_reply(id: u64, result: CommandResult) -> IpcReply {
    match result {
        Ok(value) => IpcReply::success(id, value),
        Err(e) => IpcReply::failure(id, e.code(), e.to_string()),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FileFilter {
    pub name: String,
    pub extensions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OpenDialogOptions {
    pub title: Option<String>,
    pub default_path: Option<String>,
    pub filters: Vec<FileFilter>,
    /// `openFile`, `openDirectory`, `multiSelections`; others are ignored.
    pub properties: Vec<String>,
}

impl OpenDialogOptions {
    pub fn wants_directory(&self) -> bool {
        self.properties.iter().any(|p| p == "openDirectory")
    }

    pub fn allows_multiple(&self) -> bool {
        self.properties.iter().any(|p| p == "multiSelections")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SaveDialogOptions {
    pub title: Option<String>,
    pub default_path: Option<String>,
    pub filters: Vec<FileFilter>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpenDialogResult {
    pub cancelled: bool,
    pub paths: Vec<String>,
}

impl OpenDialogResult {
    /// `None` or an empty selection both mean the user cancelled.
    pub fn from_selection(selection: Option<Vec<PathBuf>>) -> Self {
        let paths: Vec<String> = selection
            .unwrap_or_default()
            .iter()
            .map(|p| path_string(p))
            .collect();
        Self {
            cancelled: paths.is_empty(),
            paths,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaveDialogResult {
    pub cancelled: bool,
    pub path: Option<String>,
}

impl SaveDialogResult {
    pub fn from_selection(selection: Option<PathBuf>) -> Self {
        Self {
            cancelled: selection.is_none(),
            path: selection.as_deref().map(path_string),
        }
    }
}

fn path_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn error_codes() {
        assert_eq!(
            BridgeError::UnknownCommand("x".into()).code(),
            "unknown_command"
        );
        assert_eq!(
            BridgeError::InvalidArgs {
                command: "open-external",
                reason: "bad".into()
            }
            .code(),
            "invalid_args"
        );
        assert_eq!(
            BridgeError::Failed {
                command: "open-external",
                reason: "bad".into()
            }
            .code(),
            "failed"
        );
    }

    #[test]
    fn failure_reply_carries_code_and_message() {
        let reply = to_ipc_reply(5, Err(BridgeError::UnknownCommand("rm".into())));
        assert!(!reply.ok);
        let error = reply.error.unwrap();
        assert_eq!(error.code, "unknown_command");
        assert_eq!(error.message, "unknown command: rm");
    }

    #[test]
    fn open_options_parse_electron_style() {
        let options: OpenDialogOptions = serde_json::from_value(json!({
            "title": "Import media",
            "defaultPath": "/home/me/Videos",
            "filters": [{"name": "Video", "extensions": ["mp4", "webm"]}],
            "properties": ["openFile", "multiSelections", "showHiddenFiles"]
        }))
        .unwrap();

        assert_eq!(options.default_path.as_deref(), Some("/home/me/Videos"));
        assert_eq!(options.filters[0].extensions, vec!["mp4", "webm"]);
        assert!(options.allows_multiple());
        assert!(!options.wants_directory());
    }

    #[test]
    fn open_result_distinguishes_cancel() {
        let cancelled = OpenDialogResult::from_selection(None);
        assert_eq!(
            serde_json::to_value(&cancelled).unwrap(),
            json!({"cancelled": true, "paths": []})
        );

        let empty = OpenDialogResult::from_selection(Some(Vec::new()));
        assert!(empty.cancelled);

        let picked = OpenDialogResult::from_selection(Some(vec![PathBuf::from("/v/a.mp4")]));
        assert_eq!(
            serde_json::to_value(&picked).unwrap(),
            json!({"cancelled": false, "paths": ["/v/a.mp4"]})
        );
    }

    #[test]
    fn save_result_distinguishes_cancel() {
        assert_eq!(
            serde_json::to_value(SaveDialogResult::from_selection(None)).unwrap(),
            json!({"cancelled": true, "path": null})
        );
        assert_eq!(
            serde_json::to_value(SaveDialogResult::from_selection(Some(PathBuf::from(
                "/v/out.mp4"
            ))))
            .unwrap(),
            json!({"cancelled": false, "path": "/v/out.mp4"})
        );
    }
}
