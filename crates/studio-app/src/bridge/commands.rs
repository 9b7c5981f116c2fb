use std::fmt;
use std::str::FromStr;

use super::types::BridgeError;

/// The closed vocabulary of privileged operations content may request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandName {
    GetAppVersion,
    GetAppName,
    ShowOpenDialog,
    ShowSaveDialog,
    OpenExternal,
    WindowMinimize,
    WindowMaximizeToggle,
    WindowClose,
}

impl CommandName {
    pub const ALL: [CommandName; 8] = [
        Self::GetAppVersion,
        Self::GetAppName,
        Self::ShowOpenDialog,
        Self::ShowSaveDialog,
        Self::OpenExternal,
        Self::WindowMinimize,
        Self::WindowMaximizeToggle,
        Self::WindowClose,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::GetAppVersion => "get-app-version",
            Self::GetAppName => "get-app-name",
            Self::ShowOpenDialog => "show-open-dialog",
            Self::ShowSaveDialog => "show-save-dialog",
            Self::OpenExternal => "open-external",
            Self::WindowMinimize => "window-minimize",
            Self::WindowMaximizeToggle => "window-maximize-toggle",
            Self::WindowClose => "window-close",
        }
    }
}

impl FromStr for CommandName {
    type Err = BridgeError;

    /// Exact, case-sensitive match against the vocabulary.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| BridgeError::UnknownCommand(s.to_string()))
    }
}

impl fmt::Display for CommandName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
