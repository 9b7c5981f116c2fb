//! Menu action dispatch.

use tracing::{debug, info, warn};
use winit::event_loop::ActiveEventLoop;

use crate::menu::MenuAction;
use crate::window::wry_surface::WrySurface;

use super::core::StudioApp;

impl StudioApp {
    pub(super) fn handle_menu_action(&mut self, action: MenuAction, event_loop: &ActiveEventLoop) {
        debug!(?action, "menu action");
        match action {
            MenuAction::Quit => {
                info!("quit requested from menu");
                self.should_exit = true;
                event_loop.exit();
            }
            MenuAction::CloseWindow => self.shell.on_close_requested(),
            // winit has no dock-reopen event; this is the way back after a
            // keep-alive close.
            MenuAction::ShowWindow => self.reactivate(event_loop),
            MenuAction::Minimize => {
                let _ = self.shell.windows_mut().minimize();
            }
            MenuAction::LearnMore => {
                if let Some(pending) = self.shell.externalize(&self.config.app.homepage) {
                    self.spawn(pending);
                }
            }
            MenuAction::About => {
                let shown = self
                    .shell
                    .windows()
                    .surface()
                    .map(|surface| self.dialogs.about(surface, &self.shell.settings().info));
                if let Some(shown) = shown {
                    self.spawn(shown);
                }
            }
            MenuAction::Reload => self.with_surface("reload", |s| {
                debug!(url = %s.webview().current_url(), "reloading");
                s.webview().reload()
            }),
            MenuAction::ForceReload => {
                self.with_surface("force reload", |s| s.webview_mut().force_reload())
            }
            MenuAction::ToggleDevtools => self.with_surface("toggle devtools", |s| {
                s.webview().toggle_devtools();
                Ok(())
            }),
            MenuAction::ResetZoom => self.with_surface("reset zoom", |s| s.webview_mut().reset_zoom()),
            MenuAction::ZoomIn => self.with_surface("zoom in", |s| s.webview_mut().zoom_in()),
            MenuAction::ZoomOut => self.with_surface("zoom out", |s| s.webview_mut().zoom_out()),
            MenuAction::ToggleFullscreen => self.with_surface("toggle fullscreen", |s| {
                s.toggle_fullscreen();
                Ok(())
            }),
        }
    }

    fn with_surface<F>(&mut self, what: &str, f: F)
    where
        F: FnOnce(&mut WrySurface) -> Result<(), wry::Error>,
    {
        match self.shell.windows_mut().surface_mut() {
            Ok(surface) => {
                if let Err(e) = f(surface) {
                    warn!(action = what, error = %e, "menu action failed");
                }
            }
            Err(_) => debug!(action = what, "menu action ignored: no window"),
        }
    }
}
