//! Native surface: a winit window hosting the wry webview.

use std::sync::Arc;

use studio_common::ShellError;
use studio_webview::{IpcReply, WebViewConfig, WebViewHandle, WebViewManager};
use tracing::warn;
use winit::dpi::LogicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Fullscreen, Icon, Window, WindowAttributes, WindowId};

use super::surface::{Surface, SurfaceFactory, SurfaceSpec};

pub struct WrySurface {
    window: Arc<Window>,
    webview: WebViewHandle,
}

impl WrySurface {
    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn window_id(&self) -> WindowId {
        self.window.id()
    }

    pub fn webview(&self) -> &WebViewHandle {
        &self.webview
    }

    pub fn webview_mut(&mut self) -> &mut WebViewHandle {
        &mut self.webview
    }

    /// Stretch the webview over the whole client area.
    pub fn sync_bounds(&self) {
        let size = self.window.inner_size();
        let bounds = bounds_for(size.width, size.height, self.window.scale_factor());
        if let Err(e) = self.webview.set_bounds(bounds) {
            warn!(error = %e, "failed to resize webview");
        }
    }

    pub fn toggle_fullscreen(&self) {
        let next = match self.window.fullscreen() {
            Some(_) => None,
            None => Some(Fullscreen::Borderless(None)),
        };
        self.window.set_fullscreen(next);
    }
}

impl Surface for WrySurface {
    fn navigate(&mut self, url: &str) -> Result<(), ShellError> {
        self.webview
            .load_url(url)
            .map_err(|e| ShellError::WebView(e.to_string()))
    }

    fn reveal(&mut self) {
        self.window.set_visible(true);
    }

    fn focus(&mut self) {
        self.window.focus_window();
        if let Err(e) = self.webview.focus() {
            warn!(error = %e, "failed to focus webview");
        }
    }

    fn minimize(&mut self) {
        self.window.set_minimized(true);
    }

    fn is_maximized(&self) -> bool {
        self.window.is_maximized()
    }

    fn set_maximized(&mut self, maximized: bool) {
        self.window.set_maximized(maximized);
    }

    fn open_devtools(&mut self) {
        self.webview.open_devtools();
    }

    fn set_title(&mut self, title: &str) {
        self.window.set_title(title);
    }

    fn deliver(&mut self, reply: &IpcReply) -> Result<(), ShellError> {
        self.webview
            .deliver(reply)
            .map_err(|e| ShellError::WebView(e.to_string()))
    }

    fn close(&mut self) {
        self.window.set_visible(false);
    }
}

/// Creates native surfaces; only valid inside an event loop callback.
pub struct WinitSurfaceFactory<'a> {
    pub event_loop: &'a ActiveEventLoop,
    pub webviews: &'a WebViewManager,
    pub icon: Option<Icon>,
}

impl SurfaceFactory for WinitSurfaceFactory<'_> {
    type Surface = WrySurface;

    fn create_surface(&mut self, spec: &SurfaceSpec) -> Result<WrySurface, ShellError> {
        let attrs = WindowAttributes::default()
            .with_title(spec.title.clone())
            .with_inner_size(LogicalSize::new(spec.width, spec.height))
            .with_min_inner_size(LogicalSize::new(spec.min_width, spec.min_height))
            .with_window_icon(self.icon.clone())
            .with_visible(false);

        // macOS: inset traffic lights over the content, like a hidden-inset titlebar
        #[cfg(target_os = "macos")]
        let attrs = {
            use winit::platform::macos::WindowAttributesExtMacOS;
            attrs
                .with_titlebar_transparent(true)
                .with_title_hidden(true)
                .with_fullsize_content_view(true)
        };

        let window = Arc::new(
            self.event_loop
                .create_window(attrs)
                .map_err(|e| ShellError::Window(e.to_string()))?,
        );

        let size = window.inner_size();
        let bounds = bounds_for(size.width, size.height, window.scale_factor());
        let config = WebViewConfig::for_source(&spec.source, spec.mode);
        let webview = self
            .webviews
            .create(window.as_ref(), bounds, config)
            .map_err(|e| ShellError::WebView(e.to_string()))?;

        Ok(WrySurface { window, webview })
    }
}

/// Logical rect covering a physical client area of `width` x `height`.
fn bounds_for(width: u32, height: u32, scale_factor: f64) -> wry::Rect {
    let scale = if scale_factor > 0.0 { scale_factor } else { 1.0 };
    wry::Rect {
        position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(0.0, 0.0)),
        size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(
            f64::from(width) / scale,
            f64::from(height) / scale,
        )),
    }
}
