//! StudioApp struct definition and constructor.

use std::path::Path;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::time::Instant;

use muda::Menu;
use studio_common::{ContentSource, ShellError};
use studio_config::StudioConfig;
use studio_platform::SystemOpener;
use studio_webview::{ContentProvider, WebViewManager};
use tracing::{info, warn};
use winit::window::Icon;

use crate::icon::load_icon;
use crate::readiness::HttpProbe;
use crate::shell::{ShellController, ShellSettings};
use crate::window::wry_surface::WrySurface;

use super::dialogs::RfdDialogs;
use super::types::{ShellEvent, RUNTIME_WORKERS};

/// Top-level application state.
pub struct StudioApp {
    pub(super) config: StudioConfig,
    pub(super) shell: ShellController<WrySurface>,

    // Webview event sink and packaged content provider
    pub(super) webviews: WebViewManager,

    // Native services
    pub(super) dialogs: RfdDialogs,
    pub(super) icon: Option<Icon>,
    pub(super) menu: Option<Menu>,

    // Background work: readiness polls, deferred commands, external opens
    pub(super) tokio_runtime: Option<tokio::runtime::Runtime>,
    pub(super) probe: Arc<HttpProbe>,
    pub(super) events_tx: Sender<ShellEvent>,
    pub(super) events_rx: Receiver<ShellEvent>,

    pub(super) started: bool,
    pub(super) should_exit: bool,
    pub(super) exit_code: i32,
    pub(super) last_poll: Instant,
}

impl StudioApp {
    pub fn new(config: StudioConfig) -> Result<Self, ShellError> {
        let settings = ShellSettings::from_config(&config)?;

        let mut webviews = WebViewManager::new();
        if let ContentSource::Packaged { root, entry } = &settings.spec.source {
            if !root.is_dir() {
                warn!(root = %root.display(), "packaged content directory not found");
            }
            webviews.set_content_provider(
                ContentProvider::new(root.clone()).with_index(entry.clone()),
            );
        }

        let icon = config
            .content
            .icon
            .as_deref()
            .and_then(|path| match load_icon(Path::new(path)) {
                Ok(icon) => Some(icon),
                Err(e) => {
                    warn!(error = %e, "window icon not loaded");
                    None
                }
            });

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(RUNTIME_WORKERS)
            .thread_name("studio-worker")
            .enable_all()
            .build()?;

        let probe = HttpProbe::new(settings.budget.interval())
            .map_err(|e| ShellError::Runtime(format!("http client: {e}")))?;

        let (events_tx, events_rx) = mpsc::channel();

        info!(
            name = %settings.info.name,
            version = %settings.info.version,
            mode = %config.runtime.mode,
            "shell configured"
        );

        Ok(Self {
            shell: ShellController::new(settings, Arc::new(SystemOpener)),
            config,
            webviews,
            dialogs: RfdDialogs,
            icon,
            menu: None,
            tokio_runtime: Some(runtime),
            probe: Arc::new(probe),
            events_tx,
            events_rx,
            started: false,
            should_exit: false,
            exit_code: 0,
            last_poll: Instant::now(),
        })
    }

    /// Process exit code once the event loop has returned.
    pub fn exit_code(&self) -> i32 {
        self.exit_code
    }

    /// Run `future` on the background runtime. Dropped if the runtime is gone.
    pub(super) fn spawn<F>(&self, future: F)
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        match &self.tokio_runtime {
            Some(rt) => {
                rt.spawn(future);
            }
            None => warn!("background runtime stopped; task dropped"),
        }
    }
}
