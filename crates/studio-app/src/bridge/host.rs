//! What the bridge needs from the rest of the shell.

use std::path::PathBuf;
use std::sync::Arc;

use futures_util::future::BoxFuture;
use studio_common::PlatformError;
use studio_platform::ExternalOpener;
use url::Url;

use crate::window::{NoActiveWindow, Surface, WindowManager};

use super::types::{OpenDialogOptions, SaveDialogOptions};

/// Name and version reported to content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppInfo {
    pub name: String,
    pub version: String,
}

/// Host-side capabilities behind the bridge commands.
pub trait CommandHost {
    fn app_info(&self) -> &AppInfo;
    fn minimize_window(&mut self) -> Result<(), NoActiveWindow>;
    fn toggle_maximize_window(&mut self) -> Result<(), NoActiveWindow>;
    fn close_window(&mut self) -> Result<(), NoActiveWindow>;
    /// Resolves to `None` when the user cancels.
    fn show_open_dialog(
        &mut self,
        options: &OpenDialogOptions,
    ) -> Result<BoxFuture<'static, Option<Vec<PathBuf>>>, NoActiveWindow>;
    fn show_save_dialog(
        &mut self,
        options: &SaveDialogOptions,
    ) -> Result<BoxFuture<'static, Option<PathBuf>>, NoActiveWindow>;
    fn open_external(&mut self, url: Url) -> BoxFuture<'static, Result<(), PlatformError>>;
}

/// Native file dialogs, parented to the shell window.
pub trait DialogService<S> {
    fn open(&self, parent: &S, options: &OpenDialogOptions)
        -> BoxFuture<'static, Option<Vec<PathBuf>>>;
    fn save(&self, parent: &S, options: &SaveDialogOptions) -> BoxFuture<'static, Option<PathBuf>>;
}

/// Run a (possibly blocking) external open off the event loop.
pub fn open_in_background(
    opener: Arc<dyn ExternalOpener>,
    url: Url,
) -> BoxFuture<'static, Result<(), PlatformError>> {
    Box::pin(async move {
        tokio::task::spawn_blocking(move || opener.open(&url))
            .await
            .unwrap_or_else(|e| Err(PlatformError::ExternalOpen(e.to_string())))
    })
}

/// The real host: the window manager plus platform services, borrowed for
/// the duration of one dispatch.
pub struct ShellHost<'a, S: Surface, D: DialogService<S>> {
    pub windows: &'a mut WindowManager<S>,
    pub dialogs: &'a D,
    pub opener: &'a Arc<dyn ExternalOpener>,
    pub info: &'a AppInfo,
}

impl<S: Surface, D: DialogService<S>> CommandHost for ShellHost<'_, S, D> {
    fn app_info(&self) -> &AppInfo {
        self.info
    }

    fn minimize_window(&mut self) -> Result<(), NoActiveWindow> {
        self.windows.minimize()
    }

    fn toggle_maximize_window(&mut self) -> Result<(), NoActiveWindow> {
        self.windows.toggle_maximize()
    }

    fn close_window(&mut self) -> Result<(), NoActiveWindow> {
        self.windows.close()
    }

    fn show_open_dialog(
        &mut self,
        options: &OpenDialogOptions,
    ) -> Result<BoxFuture<'static, Option<Vec<PathBuf>>>, NoActiveWindow> {
        let parent = self.windows.surface().ok_or(NoActiveWindow)?;
        Ok(self.dialogs.open(parent, options))
    }

    fn show_save_dialog(
        &mut self,
        options: &SaveDialogOptions,
    ) -> Result<BoxFuture<'static, Option<PathBuf>>, NoActiveWindow> {
        let parent = self.windows.surface().ok_or(NoActiveWindow)?;
        Ok(self.dialogs.save(parent, options))
    }

    fn open_external(&mut self, url: Url) -> BoxFuture<'static, Result<(), PlatformError>> {
        open_in_background(Arc::clone(self.opener), url)
    }
}
