use wry::WebView;

use crate::ipc::{js_resolve_reply, IpcReply};

const ZOOM_STEP: f64 = 0.1;
const ZOOM_MIN: f64 = 0.3;
const ZOOM_MAX: f64 = 3.0;

/// Handle to the window's webview. Provides methods to interact with the
/// underlying WebView (navigate, evaluate JS, resize, zoom, devtools).
pub struct WebViewHandle {
    pub(super) webview: WebView,
    /// Current URL (best-effort tracking).
    pub(super) current_url: String,
    pub(super) zoom: f64,
}

impl WebViewHandle {
    pub fn current_url(&self) -> &str {
        &self.current_url
    }

    /// Navigate to a URL.
    pub fn load_url(&mut self, url: &str) -> Result<(), wry::Error> {
        self.current_url = url.to_string();
        self.webview.load_url(url)
    }

    /// Reload the current page.
    pub fn reload(&self) -> Result<(), wry::Error> {
        self.webview.reload()
    }

    /// Reload, bypassing the cache by navigating to the URL again.
    pub fn force_reload(&mut self) -> Result<(), wry::Error> {
        let url = self.webview.url()?;
        self.load_url(&url)
    }

    /// Settle the content's pending promise for `reply`.
    pub fn deliver(&self, reply: &IpcReply) -> Result<(), wry::Error> {
        self.webview.evaluate_script(&js_resolve_reply(reply))
    }

    /// Set the WebView bounds (position + size) within the parent window.
    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), wry::Error> {
        self.webview.set_bounds(bounds)
    }

    pub fn focus(&self) -> Result<(), wry::Error> {
        self.webview.focus()
    }

    pub fn open_devtools(&self) {
        self.webview.open_devtools();
    }

    pub fn toggle_devtools(&self) {
        if self.webview.is_devtools_open() {
            self.webview.close_devtools();
        } else {
            self.webview.open_devtools();
        }
    }

    pub fn zoom_in(&mut self) -> Result<(), wry::Error> {
        self.set_zoom(self.zoom + ZOOM_STEP)
    }

    pub fn zoom_out(&mut self) -> Result<(), wry::Error> {
        self.set_zoom(self.zoom - ZOOM_STEP)
    }

    pub fn reset_zoom(&mut self) -> Result<(), wry::Error> {
        self.set_zoom(1.0)
    }

    fn set_zoom(&mut self, scale: f64) -> Result<(), wry::Error> {
        self.zoom = clamp_zoom(scale);
        self.webview.zoom(self.zoom)
    }
}

fn clamp_zoom(scale: f64) -> f64 {
    ((scale * 10.0).round() / 10.0).clamp(ZOOM_MIN, ZOOM_MAX)
}
