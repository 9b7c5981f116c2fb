//! Window creation, load sequencing, and menu installation.

use std::sync::Arc;

use studio_common::ShellError;
use tracing::{error, info, warn};
use winit::event_loop::ActiveEventLoop;

use crate::menu;
use crate::readiness::wait_until_ready;
use crate::window::wry_surface::WinitSurfaceFactory;
use crate::window::LoadStep;

use super::core::StudioApp;
use super::types::ShellEvent;

impl StudioApp {
    /// First `resumed`: create the window and begin loading content.
    /// Failure here ends the process.
    pub(super) fn start_shell(&mut self, event_loop: &ActiveEventLoop) {
        self.started = true;
        let mut factory = WinitSurfaceFactory {
            event_loop,
            webviews: &self.webviews,
            icon: self.icon.clone(),
        };
        match self.shell.start(&mut factory) {
            Ok(step) => {
                self.install_menu();
                self.run_load_step(step);
            }
            Err(e) => self.fail(event_loop, e),
        }
    }

    /// Later `resumed`: the app was reactivated.
    pub(super) fn reactivate(&mut self, event_loop: &ActiveEventLoop) {
        let had_window = self.shell.windows().has_window();
        let mut factory = WinitSurfaceFactory {
            event_loop,
            webviews: &self.webviews,
            icon: self.icon.clone(),
        };
        match self.shell.on_reactivate(&mut factory) {
            Ok(step) => {
                if !had_window && self.shell.windows().has_window() {
                    self.attach_menu_to_window();
                }
                self.run_load_step(step);
            }
            Err(e) => self.fail(event_loop, e),
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, e: ShellError) {
        error!(error = %e, "failed to create the application window");
        self.exit_code = 1;
        self.should_exit = true;
        event_loop.exit();
    }

    /// Carry out what the window manager asked for after `begin_loading`.
    pub(super) fn run_load_step(&mut self, step: LoadStep) {
        match step {
            LoadStep::PollServer {
                token,
                endpoint,
                budget,
            } => {
                let probe = Arc::clone(&self.probe);
                let tx = self.events_tx.clone();
                self.spawn(async move {
                    let result = wait_until_ready(probe.as_ref(), &endpoint, budget).await;
                    let _ = tx.send(ShellEvent::ServerWaitFinished { token, result });
                });
            }
            LoadStep::Navigated { url } => info!(url = %url, "loading content"),
            LoadStep::Unchanged => {}
        }
    }

    fn install_menu(&mut self) {
        if self.menu.is_none() {
            match menu::build_menu(&self.shell.settings().info) {
                Ok(built) => self.menu = Some(built),
                Err(e) => {
                    warn!(error = %e, "failed to build application menu");
                    return;
                }
            }
        }
        self.attach_menu_to_window();
    }

    fn attach_menu_to_window(&self) {
        let (Some(built), Some(surface)) = (&self.menu, self.shell.windows().surface()) else {
            return;
        };
        let show_menu_bar = self.config.runtime.mode.is_development();
        menu::install(built, surface.window(), show_menu_bar);
    }
}
