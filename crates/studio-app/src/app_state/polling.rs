//! Per-tick polling of webview events, background results, and the menu.

use std::time::Instant;

use studio_webview::{IpcRequest, WebViewEvent};
use tracing::{debug, info, warn};
use winit::event_loop::{ActiveEventLoop, ControlFlow};

use crate::bridge::{CommandRequest, Reply};
use crate::menu;
use crate::shell::{Invocation, LifecycleDecision};

use super::core::StudioApp;
use super::types::{ShellEvent, POLL_INTERVAL};

impl StudioApp {
    /// Run polling and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        if now.duration_since(self.last_poll) >= POLL_INTERVAL {
            self.last_poll = now;
            self.poll_webview_events();
            self.poll_shell_events();
            self.poll_menu(event_loop);
            self.apply_lifecycle(event_loop);
        }

        if self.should_exit {
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + POLL_INTERVAL));
    }

    fn poll_webview_events(&mut self) {
        for event in self.webviews.drain_events() {
            self.handle_webview_event(event);
        }
    }

    pub(super) fn handle_webview_event(&mut self, event: WebViewEvent) {
        let finished = event.is_load_finished();
        match event {
            WebViewEvent::PageLoad { state, url } => {
                debug!(?state, url = %url, "page load");
                // the webview starts on about:blank before the real navigation
                if finished
                    && url != "about:blank"
                    && self.shell.on_content_ready()
                {
                    info!(url = %url, "content ready; window shown");
                }
            }
            WebViewEvent::TitleChanged { title } => self.shell.on_title_changed(&title),
            WebViewEvent::IpcMessage { body } => self.handle_ipc(&body),
            WebViewEvent::ExternalNavigation { url } | WebViewEvent::NewWindowRequested { url } => {
                if let Some(pending) = self.shell.externalize(&url) {
                    self.spawn(pending);
                }
            }
        }
    }

    fn handle_ipc(&mut self, body: &str) {
        let request = match IpcRequest::from_json(body) {
            Ok(request) => CommandRequest::from(request),
            Err(e) => {
                warn!(error = %e, "malformed bridge message dropped");
                return;
            }
        };
        let id = request.id;
        let Invocation { origin, reply } = self.shell.invoke(&self.dialogs, request);
        match reply {
            Reply::Ready(result) => self.shell.deliver(origin, id, result),
            Reply::Deferred(pending) => {
                let tx = self.events_tx.clone();
                self.spawn(async move {
                    let result = pending.await;
                    let _ = tx.send(ShellEvent::CommandCompleted { origin, id, result });
                });
            }
        }
    }

    fn poll_shell_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_shell_event(event);
        }
    }

    pub(super) fn handle_shell_event(&mut self, event: ShellEvent) {
        match event {
            ShellEvent::ServerWaitFinished { token, result } => {
                if let Some(url) = self.shell.on_server_wait_finished(token, result) {
                    info!(url = %url, "loading development content");
                }
            }
            ShellEvent::CommandCompleted { origin, id, result } => {
                self.shell.deliver(origin, id, result)
            }
        }
    }

    fn poll_menu(&mut self, event_loop: &ActiveEventLoop) {
        while let Some(action) = menu::next_action() {
            self.handle_menu_action(action, event_loop);
        }
    }

    /// Apply the all-windows-closed policy after this tick's closes.
    pub(super) fn apply_lifecycle(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(LifecycleDecision::Exit) = self.shell.poll_lifecycle() {
            self.should_exit = true;
            event_loop.exit();
        }
    }
}
