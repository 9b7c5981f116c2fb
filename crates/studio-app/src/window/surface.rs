//! The seam between window lifecycle logic and the native window + webview.

use studio_common::{ContentSource, RuntimeMode, ShellError};
use studio_config::StudioConfig;
use studio_webview::IpcReply;

/// Everything needed to allocate the OS surface.
#[derive(Debug, Clone)]
pub struct SurfaceSpec {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub min_width: u32,
    pub min_height: u32,
    pub source: ContentSource,
    pub mode: RuntimeMode,
}

impl SurfaceSpec {
    pub fn from_config(config: &StudioConfig, source: ContentSource) -> Self {
        Self {
            title: config.window.title.clone(),
            width: config.window.width,
            height: config.window.height,
            min_width: config.window.min_width,
            min_height: config.window.min_height,
            source,
            mode: config.runtime.mode,
        }
    }
}

/// A live window with its embedded content view. Starts hidden.
pub trait Surface {
    fn navigate(&mut self, url: &str) -> Result<(), ShellError>;
    fn reveal(&mut self);
    fn focus(&mut self);
    fn minimize(&mut self);
    fn is_maximized(&self) -> bool;
    fn set_maximized(&mut self, maximized: bool);
    fn open_devtools(&mut self);
    fn set_title(&mut self, title: &str);
    fn deliver(&mut self, reply: &IpcReply) -> Result<(), ShellError>;
    /// Hide and release the native window. Dropping the surface finishes it.
    fn close(&mut self);
}

/// Allocates surfaces. The native implementation needs the active event loop.
pub trait SurfaceFactory {
    type Surface: Surface;

    fn create_surface(&mut self, spec: &SurfaceSpec) -> Result<Self::Surface, ShellError>;
}
