use std::sync::{Arc, Mutex};

use tracing::{debug, warn};
use wry::WebViewBuilder;

use crate::events::{PageLoadState, WebViewEvent};
use crate::navigation::{NavigationDecision, NavigationPolicy};

use super::WebViewManager;

type EventSink = Arc<Mutex<Vec<WebViewEvent>>>;

fn push(events: &EventSink, event: WebViewEvent) {
    if let Ok(mut evts) = events.lock() {
        evts.push(event);
    }
}

/// Apply `policy` to a navigation request, recording externalized targets.
/// Returns whether the webview may proceed.
fn route_navigation(policy: &NavigationPolicy, events: &EventSink, url: String) -> bool {
    match policy.decide(&url) {
        NavigationDecision::Allow => {
            debug!(url = %url, "navigation allowed");
            true
        }
        NavigationDecision::Externalize => {
            debug!(url = %url, "navigation redirected to external handler");
            push(events, WebViewEvent::ExternalNavigation { url });
            false
        }
        NavigationDecision::Block => {
            warn!(url = %url, "navigation blocked");
            false
        }
    }
}

impl WebViewManager {
    pub(super) fn attach_ipc_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
    ) -> WebViewBuilder<'a> {
        builder.with_ipc_handler(move |request| {
            let body = request.body().to_string();

            if serde_json::from_str::<serde_json::Value>(&body).is_err() {
                warn!(body_len = body.len(), "IPC message rejected: invalid JSON");
                return;
            }

            debug!(body_len = body.len(), "IPC message from JS");
            push(&events, WebViewEvent::IpcMessage { body });
        })
    }

    pub(super) fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
    ) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(?state, url = %url, "page load");
            push(&events, WebViewEvent::PageLoad { state, url });
        })
    }

    pub(super) fn attach_title_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
    ) -> WebViewBuilder<'a> {
        builder.with_document_title_changed_handler(move |title| {
            push(&events, WebViewEvent::TitleChanged { title });
        })
    }

    pub(super) fn attach_navigation_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
        policy: NavigationPolicy,
    ) -> WebViewBuilder<'a> {
        builder.with_navigation_handler(move |url| route_navigation(&policy, &events, url))
    }

    /// New windows are never opened in-process; the request is surfaced to
    /// the shell, which hands the target to the external handler.
    pub(super) fn attach_new_window_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
    ) -> WebViewBuilder<'a> {
        builder.with_new_window_req_handler(move |url| {
            debug!(url = %url, "new window requested");
            push(&events, WebViewEvent::NewWindowRequested { url });
            false
        })
    }
}
