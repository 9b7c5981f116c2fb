//! Internal types and constants for the app state module.

use std::time::Duration;

use crate::bridge::CommandResult;
use crate::readiness::ReadinessError;
use crate::window::WindowToken;

/// Results of async work, sent back to the event loop thread.
#[derive(Debug)]
pub(super) enum ShellEvent {
    /// The readiness poll for `token`'s window finished.
    ServerWaitFinished {
        token: WindowToken,
        result: Result<u32, ReadinessError>,
    },
    /// A deferred bridge command settled. `origin` is the window that sent it.
    CommandCompleted {
        origin: Option<WindowToken>,
        id: u64,
        result: CommandResult,
    },
}

/// How often to poll for events (approx 60 Hz).
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(16);

/// Worker threads for the background runtime. The work is I/O bound.
pub(super) const RUNTIME_WORKERS: usize = 2;

/// How long shutdown waits for in-flight background work.
pub(super) const SHUTDOWN_GRACE: Duration = Duration::from_secs(2);
