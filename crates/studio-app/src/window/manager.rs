use studio_common::{ContentSource, Endpoint, RuntimeMode, ShellError};
use studio_webview::IpcReply;
use tracing::{debug, error, info, warn};

use crate::readiness::{ReadinessError, RetryBudget};

use super::state::{LifecycleState, NoActiveWindow, WindowToken};
use super::surface::{Surface, SurfaceFactory, SurfaceSpec};

/// What the caller must do after content loading has been started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStep {
    /// Navigation was issued immediately.
    Navigated { url: String },
    /// Run the readiness poller, then report back with
    /// [`WindowManager::finish_server_wait`].
    PollServer {
        token: WindowToken,
        endpoint: Endpoint,
        budget: RetryBudget,
    },
    /// Nothing to do: no window, or loading already started.
    Unchanged,
}

struct ManagedWindow<S> {
    surface: S,
    token: WindowToken,
    state: LifecycleState,
    source: ContentSource,
    mode: RuntimeMode,
    navigated: bool,
}

/// Owns at most one shell window.
pub struct WindowManager<S: Surface> {
    slot: Option<ManagedWindow<S>>,
    budget: RetryBudget,
    next_token: u64,
    close_pending: bool,
    ever_closed: bool,
}

impl<S: Surface> WindowManager<S> {
    pub fn new(budget: RetryBudget) -> Self {
        Self {
            slot: None,
            budget,
            next_token: 1,
            close_pending: false,
            ever_closed: false,
        }
    }

    /// Allocate the hidden window. Fails if one is already open.
    pub fn create<F>(&mut self, factory: &mut F, spec: &SurfaceSpec) -> Result<WindowToken, ShellError>
    where
        F: SurfaceFactory<Surface = S>,
    {
        if self.slot.is_some() {
            return Err(ShellError::Window("a window is already open".into()));
        }

        let surface = factory.create_surface(spec)?;
        let token = WindowToken(self.next_token);
        self.next_token += 1;

        info!(token = token.0, source = %spec.source.url(), "window created (hidden)");
        self.slot = Some(ManagedWindow {
            surface,
            token,
            state: LifecycleState::Created,
            source: spec.source.clone(),
            mode: spec.mode,
            navigated: false,
        });
        Ok(token)
    }

    /// Move `Created -> ContentLoading`. Packaged content is navigated to at
    /// once; a dev server must first be polled by the caller.
    pub fn begin_loading(&mut self) -> LoadStep {
        let Some(window) = self.slot.as_mut() else {
            return LoadStep::Unchanged;
        };
        if window.state != LifecycleState::Created {
            return LoadStep::Unchanged;
        }
        window.state = LifecycleState::ContentLoading;

        let dev_endpoint = match &window.source {
            ContentSource::DevServer(endpoint) => Some(endpoint.clone()),
            ContentSource::Packaged { .. } => None,
        };

        match dev_endpoint {
            Some(endpoint) => {
                info!(
                    %endpoint,
                    attempts = self.budget.max_attempts(),
                    ceiling = ?self.budget.ceiling(),
                    "waiting for dev server"
                );
                LoadStep::PollServer {
                    token: window.token,
                    endpoint,
                    budget: self.budget,
                }
            }
            None => {
                let url = window.source.url();
                navigate(window, &url);
                LoadStep::Navigated { url }
            }
        }
    }

    /// Navigate after the readiness poll, whatever its outcome.
    ///
    /// Returns the URL navigated to, or `None` if the window the poll was
    /// started for is gone.
    pub fn finish_server_wait(
        &mut self,
        token: WindowToken,
        result: Result<u32, ReadinessError>,
    ) -> Option<String> {
        match &result {
            Ok(attempt) => debug!(attempt, "dev server poll finished"),
            Err(e) => warn!(error = %e, "dev server did not become ready; loading anyway"),
        }

        let window = self.slot.as_mut().filter(|w| w.token == token)?;
        if window.state != LifecycleState::ContentLoading || window.navigated {
            return None;
        }
        let url = window.source.url();
        navigate(window, &url);
        Some(url)
    }

    /// One-shot "ready to paint" signal. Reveals the window the first time
    /// it arrives after navigation; later signals are ignored.
    pub fn on_content_ready(&mut self) -> bool {
        let Some(window) = self.slot.as_mut() else {
            return false;
        };
        if window.state != LifecycleState::ContentLoading || !window.navigated {
            return false;
        }

        window.surface.reveal();
        window.surface.focus();
        window.state = LifecycleState::Visible;
        if window.mode.is_development() {
            window.surface.open_devtools();
        }
        info!(token = window.token.0, "window visible");
        true
    }

    pub fn minimize(&mut self) -> Result<(), NoActiveWindow> {
        self.surface_mut()?.minimize();
        Ok(())
    }

    pub fn toggle_maximize(&mut self) -> Result<(), NoActiveWindow> {
        let surface = self.surface_mut()?;
        let maximized = surface.is_maximized();
        surface.set_maximized(!maximized);
        Ok(())
    }

    pub fn focus(&mut self) -> Result<(), NoActiveWindow> {
        self.surface_mut()?.focus();
        Ok(())
    }

    pub fn set_title(&mut self, title: &str) -> Result<(), NoActiveWindow> {
        self.surface_mut()?.set_title(title);
        Ok(())
    }

    /// Close and release the window. A second close reports `NoActiveWindow`.
    pub fn close(&mut self) -> Result<(), NoActiveWindow> {
        let mut window = self.slot.take().ok_or(NoActiveWindow)?;
        window.state = LifecycleState::Closed;
        window.surface.close();
        drop(window);

        self.close_pending = true;
        self.ever_closed = true;
        info!("window closed");
        Ok(())
    }

    /// True once after each close; drives the all-windows-closed policy.
    pub fn take_close_notification(&mut self) -> bool {
        std::mem::take(&mut self.close_pending)
    }

    /// Deliver a bridge reply to the window that sent the request. A reply
    /// for a window that has since closed (even if another took its place)
    /// reports `NoActiveWindow`.
    pub fn deliver(&mut self, origin: WindowToken, reply: &IpcReply) -> Result<(), NoActiveWindow> {
        let window = self
            .slot
            .as_mut()
            .filter(|w| w.token == origin)
            .ok_or(NoActiveWindow)?;
        if let Err(e) = window.surface.deliver(reply) {
            warn!(id = reply.id, error = %e, "failed to deliver bridge reply");
        }
        Ok(())
    }

    /// Token of the open window, if any.
    pub fn token(&self) -> Option<WindowToken> {
        self.slot.as_ref().map(|w| w.token)
    }

    pub fn has_window(&self) -> bool {
        self.slot.is_some()
    }

    pub fn state(&self) -> LifecycleState {
        match &self.slot {
            Some(window) => window.state,
            None if self.ever_closed => LifecycleState::Closed,
            None => LifecycleState::Uninitialized,
        }
    }

    pub fn surface(&self) -> Option<&S> {
        self.slot.as_ref().map(|w| &w.surface)
    }

    pub fn surface_mut(&mut self) -> Result<&mut S, NoActiveWindow> {
        self.slot
            .as_mut()
            .map(|w| &mut w.surface)
            .ok_or(NoActiveWindow)
    }
}

fn navigate<S: Surface>(window: &mut ManagedWindow<S>, url: &str) {
    window.navigated = true;
    match window.surface.navigate(url) {
        Ok(()) => info!(url = %url, "navigating"),
        Err(e) => {
            // Nothing will ever paint; show the window rather than leave it hidden.
            error!(url = %url, error = %e, "navigation failed");
            window.surface.reveal();
            window.state = LifecycleState::Visible;
        }
    }
}
