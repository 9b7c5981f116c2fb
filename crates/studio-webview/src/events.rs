//! WebView event types.

use serde::{Deserialize, Serialize};

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    /// Navigation has started.
    Started,
    /// Page has fully loaded.
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Events emitted by the window's webview, drained on the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebViewEvent {
    /// Page load state changed. Carries the URL.
    PageLoad { state: PageLoadState, url: String },
    /// Document title changed.
    TitleChanged { title: String },
    /// A bridge request was received from JavaScript (already JSON-validated).
    IpcMessage { body: String },
    /// In-window navigation was refused; the target should open externally.
    ExternalNavigation { url: String },
    /// Content asked for a new window (`window.open`, `target=_blank`).
    NewWindowRequested { url: String },
}

impl WebViewEvent {
    /// True for the load-finished signal that marks content as ready to paint.
    pub fn is_load_finished(&self) -> bool {
        matches!(
            self,
            Self::PageLoad {
                state: PageLoadState::Finished,
                ..
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_finished_detection() {
        let finished = WebViewEvent::PageLoad {
            state: PageLoadState::Finished,
            url: "studio://localhost/index.html".into(),
        };
        let started = WebViewEvent::PageLoad {
            state: PageLoadState::Started,
            url: "studio://localhost/index.html".into(),
        };
        assert!(finished.is_load_finished());
        assert!(!started.is_load_finished());
        assert!(!WebViewEvent::TitleChanged { title: "x".into() }.is_load_finished());
    }

    #[test]
    fn page_load_state_from_wry() {
        assert_eq!(
            PageLoadState::from(wry::PageLoadEvent::Started),
            PageLoadState::Started
        );
        assert_eq!(
            PageLoadState::from(wry::PageLoadEvent::Finished),
            PageLoadState::Finished
        );
    }
}
