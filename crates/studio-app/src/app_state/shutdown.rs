//! Graceful shutdown: close the window, drop the menu, stop background work.

use super::core::StudioApp;
use super::types::SHUTDOWN_GRACE;

// =============================================================================
// SHUTDOWN
// =============================================================================

impl StudioApp {
    /// Perform graceful shutdown of all subsystems.
    ///
    /// Order matters:
    /// 1. Close the window (hides it and drops the webview)
    /// 2. Drop the menu (it references the window on Windows)
    /// 3. Shut down the tokio runtime (cancels polls and pending commands)
    pub(super) fn shutdown(&mut self) {
        tracing::info!(window = %self.shell.windows().state(), "Initiating graceful shutdown");

        if self.shell.windows().has_window() {
            self.shell.on_close_requested();
        }
        // the process is ending; the keep-alive policy no longer applies
        let _ = self.shell.poll_lifecycle();

        self.menu = None;

        if let Some(rt) = self.tokio_runtime.take() {
            rt.shutdown_timeout(SHUTDOWN_GRACE);
        }

        self.should_exit = true;
        tracing::info!("Graceful shutdown complete");
    }
}

// =============================================================================
// TESTS
// =============================================================================
