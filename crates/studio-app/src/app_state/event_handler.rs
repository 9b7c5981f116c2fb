//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

use super::core::StudioApp;

impl ApplicationHandler for StudioApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            return;
        }
        if self.started {
            self.reactivate(event_loop);
        } else {
            self.start_shell(event_loop);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        let ours = self
            .shell
            .windows()
            .surface()
            .is_some_and(|surface| surface.window_id() == window_id);
        if !ours {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shell.on_close_requested();
                self.apply_lifecycle(event_loop);
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    if let Some(surface) = self.shell.windows().surface() {
                        surface.sync_bounds();
                    }
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(surface) = self.shell.windows().surface() {
                    surface.sync_bounds();
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            event_loop.exit();
            return;
        }
        self.poll_and_schedule(event_loop);
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.shutdown();
    }
}
