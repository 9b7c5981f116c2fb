//! Shell Controller: startup sequencing and platform lifecycle wiring.

use std::path::PathBuf;
use std::sync::Arc;

use futures_util::future::BoxFuture;
use studio_common::{ContentSource, RuntimeMode, ShellError};
use studio_config::schema::LifecycleConfig;
use studio_config::StudioConfig;
use studio_platform::{parse_external_url, ExternalOpener};
use tracing::{debug, info, warn};

use crate::bridge::{
    open_in_background, to_ipc_reply, AppInfo, CommandBridge, CommandRequest, CommandResult,
    DialogService, Reply, ShellHost,
};
use crate::readiness::{ReadinessError, RetryBudget};
use crate::window::{LoadStep, Surface, SurfaceFactory, SurfaceSpec, WindowManager, WindowToken};

/// What to do after the last window closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleDecision {
    Exit,
    KeepRunning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifecyclePolicy {
    pub keep_alive_without_windows: bool,
}

impl LifecyclePolicy {
    /// macOS apps conventionally stay running with no windows open.
    /// winit reports no dock reopen, so the window comes back through the
    /// Window > Show Main Window menu item, which calls
    /// [`ShellController::on_reactivate`].
    pub fn platform_default() -> Self {
        Self {
            keep_alive_without_windows: cfg!(target_os = "macos"),
        }
    }

    pub fn from_config(config: &LifecycleConfig) -> Self {
        match config.keep_alive_without_windows {
            Some(keep_alive_without_windows) => Self {
                keep_alive_without_windows,
            },
            None => Self::platform_default(),
        }
    }

    pub fn after_last_window_closed(&self) -> LifecycleDecision {
        if self.keep_alive_without_windows {
            LifecycleDecision::KeepRunning
        } else {
            LifecycleDecision::Exit
        }
    }
}

/// A dispatched command plus the window it came from. The reply must go
/// back to that window and no other.
pub struct Invocation {
    pub origin: Option<WindowToken>,
    pub reply: Reply,
}

/// Resolved startup settings.
#[derive(Debug, Clone)]
pub struct ShellSettings {
    pub info: AppInfo,
    pub spec: SurfaceSpec,
    pub budget: RetryBudget,
    pub lifecycle: LifecyclePolicy,
}

impl ShellSettings {
    pub fn from_config(config: &StudioConfig) -> Result<Self, ShellError> {
        let budget = RetryBudget::new(config.dev_server.max_attempts, config.dev_server.interval())
            .map_err(|e| ShellError::Runtime(e.to_string()))?;
        Ok(Self {
            info: AppInfo {
                name: config.app.name.clone(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            spec: SurfaceSpec::from_config(config, select_content_source(config)),
            budget,
            lifecycle: LifecyclePolicy::from_config(&config.lifecycle),
        })
    }
}

/// Development loads the local server; everything else loads packaged content.
pub fn select_content_source(config: &StudioConfig) -> ContentSource {
    match config.runtime.mode {
        RuntimeMode::Development => ContentSource::DevServer(config.dev_server.endpoint()),
        RuntimeMode::Production => ContentSource::Packaged {
            root: resolve_packaged_root(&config.content.packaged_dir),
            entry: config.content.entry.clone(),
        },
    }
}

/// Find the packaged content directory next to the executable (or in the
/// bundle's `Resources` on macOS), falling back to the working directory.
pub fn resolve_packaged_root(dir: &str) -> PathBuf {
    let relative = PathBuf::from(dir);
    if relative.is_absolute() {
        return relative;
    }

    let mut candidates = Vec::new();
    if let Some(exe_dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(PathBuf::from))
    {
        candidates.push(exe_dir.join(&relative));
        if cfg!(target_os = "macos") {
            candidates.push(exe_dir.join("../Resources").join(&relative));
        }
    }
    let cwd_candidate = std::env::current_dir().unwrap_or_default().join(&relative);
    candidates.push(cwd_candidate.clone());

    candidates
        .into_iter()
        .find(|c| c.is_dir())
        .unwrap_or(cwd_candidate)
}

/// Orchestrates the window manager and command bridge.
pub struct ShellController<S: Surface> {
    windows: WindowManager<S>,
    bridge: CommandBridge,
    settings: ShellSettings,
    opener: Arc<dyn ExternalOpener>,
    started: bool,
}

impl<S: Surface> ShellController<S> {
    pub fn new(settings: ShellSettings, opener: Arc<dyn ExternalOpener>) -> Self {
        Self {
            windows: WindowManager::new(settings.budget),
            bridge: CommandBridge::register(),
            settings,
            opener,
            started: false,
        }
    }

    /// Process-ready: create the first window and start loading it.
    /// An error here is fatal to the process.
    pub fn start<F>(&mut self, factory: &mut F) -> Result<LoadStep, ShellError>
    where
        F: SurfaceFactory<Surface = S>,
    {
        if self.started {
            return Ok(LoadStep::Unchanged);
        }
        self.started = true;
        info!(
            mode = %self.settings.spec.mode,
            source = %self.settings.spec.source.url(),
            "starting shell"
        );
        self.open_window(factory)
    }

    /// The application was reactivated: recreate the window if there is none.
    pub fn on_reactivate<F>(&mut self, factory: &mut F) -> Result<LoadStep, ShellError>
    where
        F: SurfaceFactory<Surface = S>,
    {
        if !self.started {
            return Ok(LoadStep::Unchanged);
        }
        if self.windows.has_window() {
            let _ = self.windows.focus();
            return Ok(LoadStep::Unchanged);
        }
        info!("reactivated with no open window; recreating");
        self.open_window(factory)
    }

    fn open_window<F>(&mut self, factory: &mut F) -> Result<LoadStep, ShellError>
    where
        F: SurfaceFactory<Surface = S>,
    {
        self.windows.create(factory, &self.settings.spec)?;
        Ok(self.windows.begin_loading())
    }

    pub fn on_server_wait_finished(
        &mut self,
        token: WindowToken,
        result: Result<u32, ReadinessError>,
    ) -> Option<String> {
        self.windows.finish_server_wait(token, result)
    }

    pub fn on_content_ready(&mut self) -> bool {
        self.windows.on_content_ready()
    }

    /// Mirror the document title; an empty title keeps the configured one.
    pub fn on_title_changed(&mut self, title: &str) {
        let title = if title.trim().is_empty() {
            self.settings.spec.title.as_str()
        } else {
            title
        };
        let _ = self.windows.set_title(title);
    }

    /// The OS (or the user) closed the window.
    pub fn on_close_requested(&mut self) {
        if self.windows.close().is_err() {
            debug!("close requested with no open window");
        }
    }

    /// Apply the all-windows-closed policy once per close.
    pub fn poll_lifecycle(&mut self) -> Option<LifecycleDecision> {
        if !self.windows.take_close_notification() || self.windows.has_window() {
            return None;
        }
        let decision = self.settings.lifecycle.after_last_window_closed();
        info!(?decision, "last window closed");
        Some(decision)
    }

    /// Run one bridge command against the current window state.
    pub fn invoke<D: DialogService<S>>(&mut self, dialogs: &D, request: CommandRequest) -> Invocation {
        let origin = self.windows.token();
        let mut host = ShellHost {
            windows: &mut self.windows,
            dialogs,
            opener: &self.opener,
            info: &self.settings.info,
        };
        let reply = self.bridge.dispatch(&mut host, request);
        Invocation { origin, reply }
    }

    /// Send a finished command's result back to the window that asked.
    pub fn deliver(&mut self, origin: Option<WindowToken>, id: u64, result: CommandResult) {
        let Some(origin) = origin else {
            debug!(id, "reply dropped: sent with no window open");
            return;
        };
        if self.windows.deliver(origin, &to_ipc_reply(id, result)).is_err() {
            debug!(id, "reply dropped: originating window closed");
        }
    }

    /// Hand a URL the window refused to the OS. `None` if the URL is not
    /// something the OS should open.
    pub fn externalize(&self, raw: &str) -> Option<BoxFuture<'static, ()>> {
        let url = match parse_external_url(raw) {
            Ok(url) => url,
            Err(e) => {
                warn!(url = %raw, error = %e, "refusing to open externally");
                return None;
            }
        };
        let pending = open_in_background(Arc::clone(&self.opener), url);
        Some(Box::pin(async move {
            if let Err(e) = pending.await {
                warn!(error = %e, "external open failed");
            }
        }))
    }

    pub fn windows(&self) -> &WindowManager<S> {
        &self.windows
    }

    pub fn windows_mut(&mut self) -> &mut WindowManager<S> {
        &mut self.windows
    }

    pub fn settings(&self) -> &ShellSettings {
        &self.settings
    }
}
