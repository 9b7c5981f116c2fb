//! Native file and message dialogs via `rfd`.
//!
//! Dialogs are built on the event loop thread (they need the parent window)
//! and awaited on the background runtime.

use std::path::{Path, PathBuf};

use futures_util::future::BoxFuture;
use rfd::{AsyncFileDialog, AsyncMessageDialog, FileHandle, MessageButtons, MessageLevel};

use crate::bridge::{AppInfo, DialogService, FileFilter, OpenDialogOptions, SaveDialogOptions};
use crate::window::wry_surface::WrySurface;

#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct RfdDialogs;

impl RfdDialogs {
    /// Modal About box with the application name and version.
    pub(super) fn about(&self, parent: &WrySurface, info: &AppInfo) -> BoxFuture<'static, ()> {
        let shown = AsyncMessageDialog::new()
            .set_level(MessageLevel::Info)
            .set_title(format!("About {}", info.name))
            .set_description(format!("{}\nVersion {}", info.name, info.version))
            .set_buttons(MessageButtons::Ok)
            .set_parent(parent.window())
            .show();
        Box::pin(async move {
            shown.await;
        })
    }
}

impl DialogService<WrySurface> for RfdDialogs {
    fn open(
        &self,
        parent: &WrySurface,
        options: &OpenDialogOptions,
    ) -> BoxFuture<'static, Option<Vec<PathBuf>>> {
        let dialog = configure(
            AsyncFileDialog::new().set_parent(parent.window()),
            options.title.as_deref(),
            options.default_path.as_deref(),
            &options.filters,
        );

        let picked: BoxFuture<'static, Option<Vec<FileHandle>>> =
            match (options.wants_directory(), options.allows_multiple()) {
                (true, true) => Box::pin(dialog.pick_folders()),
                (true, false) => {
                    let pick = dialog.pick_folder();
                    Box::pin(async move { pick.await.map(|handle| vec![handle]) })
                }
                (false, true) => Box::pin(dialog.pick_files()),
                (false, false) => {
                    let pick = dialog.pick_file();
                    Box::pin(async move { pick.await.map(|handle| vec![handle]) })
                }
            };

        Box::pin(async move {
            picked
                .await
                .map(|handles| handles.iter().map(|h| h.path().to_path_buf()).collect())
        })
    }

    fn save(&self, parent: &WrySurface, options: &SaveDialogOptions) -> BoxFuture<'static, Option<PathBuf>> {
        let pick = configure(
            AsyncFileDialog::new().set_parent(parent.window()),
            options.title.as_deref(),
            options.default_path.as_deref(),
            &options.filters,
        )
        .save_file();
        Box::pin(async move { pick.await.map(|handle| handle.path().to_path_buf()) })
    }
}

fn configure(
    mut dialog: AsyncFileDialog,
    title: Option<&str>,
    default_path: Option<&str>,
    filters: &[FileFilter],
) -> AsyncFileDialog {
    if let Some(title) = title {
        dialog = dialog.set_title(title);
    }
    for filter in filters.iter().filter(|f| !f.extensions.is_empty()) {
        let name = if filter.name.is_empty() {
            "Files"
        } else {
            filter.name.as_str()
        };
        dialog = dialog.add_filter(name, filter.extensions.as_slice());
    }
    if let Some((dir, file_name)) = default_path.and_then(split_default_path) {
        dialog = dialog.set_directory(dir);
        if let Some(file_name) = file_name {
            dialog = dialog.set_file_name(file_name);
        }
    }
    dialog
}

/// Split a default path into the directory to start in and an optional
/// preselected file name. Existing directories are used as-is.
fn split_default_path(raw: &str) -> Option<(PathBuf, Option<String>)> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    let path = Path::new(raw);
    if path.is_dir() {
        return Some((path.to_path_buf(), None));
    }
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned());
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    Some((dir, file_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_directory_has_no_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let raw = dir.path().to_string_lossy().into_owned();
        let (start, file) = split_default_path(&raw).unwrap();
        assert_eq!(start, dir.path());
        assert!(file.is_none());
    }

    #[test]
    fn default_path_file_splits_into_parent_and_name() {
        let (start, file) = split_default_path("/tmp/exports/cut-01.mp4").unwrap();
        assert_eq!(start, PathBuf::from("/tmp/exports"));
        assert_eq!(file.as_deref(), Some("cut-01.mp4"));
    }

    #[test]
    fn bare_file_name_starts_in_current_dir() {
        let (start, file) = split_default_path("render.mp4").unwrap();
        assert_eq!(start, PathBuf::from("."));
        assert_eq!(file.as_deref(), Some("render.mp4"));
    }

    #[test]
    fn blank_default_path_is_ignored() {
        assert!(split_default_path("").is_none());
        assert!(split_default_path("   ").is_none());
    }
}
