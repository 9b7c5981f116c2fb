use std::fmt;

/// Lifecycle of the shell window.
///
/// `Uninitialized -> Created (hidden) -> ContentLoading -> Visible -> Closed`.
/// A window may also close from `Created` or `ContentLoading`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Uninitialized,
    Created,
    ContentLoading,
    Visible,
    Closed,
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Uninitialized => "uninitialized",
            Self::Created => "created",
            Self::ContentLoading => "content-loading",
            Self::Visible => "visible",
            Self::Closed => "closed",
        };
        f.write_str(name)
    }
}

/// Identifies one window instance. A recreated window gets a new token, so
/// results that were started for an earlier window can be told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowToken(pub(crate) u64);

/// A window-targeted operation arrived while no window is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no active window")]
pub struct NoActiveWindow;
