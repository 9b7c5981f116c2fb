//! Native application menu: a static table of actions installed with `muda`.

use muda::{Menu, MenuEvent, MenuItem, PredefinedMenuItem, Submenu};
use tracing::{debug, warn};
use winit::window::Window;

use crate::bridge::AppInfo;

/// Every menu item the shell handles itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    Quit,
    Reload,
    ForceReload,
    ToggleDevtools,
    ResetZoom,
    ZoomIn,
    ZoomOut,
    ToggleFullscreen,
    Minimize,
    CloseWindow,
    ShowWindow,
    About,
    LearnMore,
}

impl MenuAction {
    pub const ALL: [MenuAction; 13] = [
        Self::Quit,
        Self::Reload,
        Self::ForceReload,
        Self::ToggleDevtools,
        Self::ResetZoom,
        Self::ZoomIn,
        Self::ZoomOut,
        Self::ToggleFullscreen,
        Self::Minimize,
        Self::CloseWindow,
        Self::ShowWindow,
        Self::About,
        Self::LearnMore,
    ];

    /// Stable `MenuId` of the item.
    pub fn id(self) -> &'static str {
        match self {
            Self::Quit => "file.quit",
            Self::Reload => "view.reload",
            Self::ForceReload => "view.force_reload",
            Self::ToggleDevtools => "view.toggle_devtools",
            Self::ResetZoom => "view.reset_zoom",
            Self::ZoomIn => "view.zoom_in",
            Self::ZoomOut => "view.zoom_out",
            Self::ToggleFullscreen => "view.toggle_fullscreen",
            Self::Minimize => "window.minimize",
            Self::CloseWindow => "window.close",
            Self::ShowWindow => "window.show",
            Self::About => "help.about",
            Self::LearnMore => "help.learn_more",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.id() == id)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Quit => "Exit",
            Self::Reload => "Reload",
            Self::ForceReload => "Force Reload",
            Self::ToggleDevtools => "Toggle Developer Tools",
            Self::ResetZoom => "Actual Size",
            Self::ZoomIn => "Zoom In",
            Self::ZoomOut => "Zoom Out",
            Self::ToggleFullscreen => "Toggle Fullscreen",
            Self::Minimize => "Minimize",
            Self::CloseWindow => "Close",
            Self::ShowWindow => "Show Main Window",
            Self::About => "About",
            Self::LearnMore => "Learn More",
        }
    }

    /// Accelerator in `muda` syntax, if the item has one.
    pub fn accelerator(self) -> Option<&'static str> {
        let mac = cfg!(target_os = "macos");
        match self {
            // the macOS application menu already binds Cmd+Q
            Self::Quit if mac => None,
            Self::Quit => Some("CmdOrCtrl+Q"),
            Self::Reload => Some("CmdOrCtrl+R"),
            Self::ForceReload => Some("Shift+CmdOrCtrl+R"),
            Self::ToggleDevtools => Some("F12"),
            Self::ResetZoom => Some("CmdOrCtrl+0"),
            Self::ZoomIn => Some("CmdOrCtrl+="),
            Self::ZoomOut => Some("CmdOrCtrl+-"),
            Self::ToggleFullscreen => Some("F11"),
            Self::Minimize => Some("CmdOrCtrl+M"),
            Self::CloseWindow => Some("CmdOrCtrl+W"),
            Self::ShowWindow | Self::About | Self::LearnMore => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Entry {
    Action(MenuAction),
    Separator,
    Undo,
    Redo,
    Cut,
    Copy,
    Paste,
}

struct Section {
    title: &'static str,
    entries: &'static [Entry],
}

const MENU_TABLE: &[Section] = &[
    Section {
        title: "File",
        entries: &[Entry::Action(MenuAction::Quit)],
    },
    Section {
        title: "Edit",
        entries: &[
            Entry::Undo,
            Entry::Redo,
            Entry::Separator,
            Entry::Cut,
            Entry::Copy,
            Entry::Paste,
        ],
    },
    Section {
        title: "View",
        entries: &[
            Entry::Action(MenuAction::Reload),
            Entry::Action(MenuAction::ForceReload),
            Entry::Action(MenuAction::ToggleDevtools),
            Entry::Separator,
            Entry::Action(MenuAction::ResetZoom),
            Entry::Action(MenuAction::ZoomIn),
            Entry::Action(MenuAction::ZoomOut),
            Entry::Separator,
            Entry::Action(MenuAction::ToggleFullscreen),
        ],
    },
    Section {
        title: "Window",
        entries: &[
            Entry::Action(MenuAction::Minimize),
            Entry::Action(MenuAction::CloseWindow),
            Entry::Separator,
            Entry::Action(MenuAction::ShowWindow),
        ],
    },
    Section {
        title: "Help",
        entries: &[
            Entry::Action(MenuAction::About),
            Entry::Action(MenuAction::LearnMore),
        ],
    },
];

/// Build the menu bar from the static table.
pub fn build_menu(info: &AppInfo) -> Result<Menu, muda::Error> {
    let menu = Menu::new();

    #[cfg(target_os = "macos")]
    menu.append(&app_submenu(info)?)?;

    for section in MENU_TABLE {
        let submenu = Submenu::new(section.title, true);
        for entry in section.entries {
            match *entry {
                Entry::Action(action) => submenu.append(&action_item(action, info))?,
                Entry::Separator => submenu.append(&PredefinedMenuItem::separator())?,
                Entry::Undo => submenu.append(&PredefinedMenuItem::undo(None))?,
                Entry::Redo => submenu.append(&PredefinedMenuItem::redo(None))?,
                Entry::Cut => submenu.append(&PredefinedMenuItem::cut(None))?,
                Entry::Copy => submenu.append(&PredefinedMenuItem::copy(None))?,
                Entry::Paste => submenu.append(&PredefinedMenuItem::paste(None))?,
            }
        }
        menu.append(&submenu)?;
    }

    Ok(menu)
}

fn action_item(action: MenuAction, info: &AppInfo) -> MenuItem {
    let label = match action {
        MenuAction::About => format!("About {}", info.name),
        other => other.label().to_string(),
    };
    let accelerator = action.accelerator().and_then(|a| match a.parse() {
        Ok(accel) => Some(accel),
        Err(e) => {
            warn!(accelerator = a, error = %e, "ignoring unparsable accelerator");
            None
        }
    });
    MenuItem::with_id(action.id(), label, true, accelerator)
}

#[cfg(target_os = "macos")]
fn app_submenu(info: &AppInfo) -> Result<Submenu, muda::Error> {
    let about = muda::AboutMetadata {
        name: Some(info.name.clone()),
        version: Some(info.version.clone()),
        ..Default::default()
    };
    Submenu::with_items(
        &info.name,
        true,
        &[
            &PredefinedMenuItem::about(None, Some(about)),
            &PredefinedMenuItem::separator(),
            &PredefinedMenuItem::services(None),
            &PredefinedMenuItem::separator(),
            &PredefinedMenuItem::hide(None),
            &PredefinedMenuItem::hide_others(None),
            &PredefinedMenuItem::show_all(None),
            &PredefinedMenuItem::separator(),
            &PredefinedMenuItem::quit(None),
        ],
    )
}

/// Attach the menu to the application (macOS) or to `window` (Windows).
/// Outside development the Windows menu bar starts hidden.
#[cfg_attr(not(target_os = "windows"), allow(unused_variables))]
pub fn install(menu: &Menu, window: &Window, show_menu_bar: bool) {
    #[cfg(target_os = "macos")]
    {
        menu.init_for_nsapp();
        debug!("application menu installed");
    }

    #[cfg(target_os = "windows")]
    {
        use winit::raw_window_handle::{HasWindowHandle, RawWindowHandle};

        let hwnd = match window.window_handle().map(|h| h.as_raw()) {
            Ok(RawWindowHandle::Win32(handle)) => handle.hwnd.get(),
            Ok(_) => {
                warn!("unexpected window handle type; menu not installed");
                return;
            }
            Err(e) => {
                warn!(error = %e, "no window handle; menu not installed");
                return;
            }
        };
        // SAFETY: hwnd belongs to a live window owned by this thread.
        unsafe {
            if let Err(e) = menu.init_for_hwnd(hwnd) {
                warn!(error = %e, "failed to install window menu");
                return;
            }
            if !show_menu_bar {
                if let Err(e) = menu.hide_for_hwnd(hwnd) {
                    debug!(error = %e, "failed to hide menu bar");
                }
            }
        }
        debug!("window menu installed");
    }

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        debug!("native menu bar not installed on this platform");
    }
}

/// Next menu event that maps to a shell action, if any is queued.
pub fn next_action() -> Option<MenuAction> {
    while let Ok(event) = MenuEvent::receiver().try_recv() {
        match MenuAction::from_id(event.id().0.as_str()) {
            Some(action) => return Some(action),
            None => debug!(id = %event.id().0, "unhandled menu event"),
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use muda::accelerator::Accelerator;
    use std::collections::HashSet;

    #[test]
    fn ids_round_trip() {
        for action in MenuAction::ALL {
            assert_eq!(MenuAction::from_id(action.id()), Some(action));
        }
        assert_eq!(MenuAction::from_id("file.new_project"), None);
    }

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<_> = MenuAction::ALL.iter().map(|a| a.id()).collect();
        assert_eq!(ids.len(), MenuAction::ALL.len());
    }

    #[test]
    fn every_accelerator_parses() {
        for action in MenuAction::ALL {
            if let Some(accel) = action.accelerator() {
                assert!(
                    accel.parse::<Accelerator>().is_ok(),
                    "{accel} should parse for {action:?}"
                );
            }
        }
    }

    #[test]
    fn accelerators_do_not_collide() {
        let accels: Vec<_> = MenuAction::ALL
            .iter()
            .filter_map(|a| a.accelerator())
            .collect();
        let unique: HashSet<_> = accels.iter().collect();
        assert_eq!(unique.len(), accels.len());
    }

    #[test]
    fn every_action_appears_in_the_table_once() {
        let mut seen = Vec::new();
        for section in MENU_TABLE {
            for entry in section.entries {
                if let Entry::Action(action) = entry {
                    seen.push(*action);
                }
            }
        }
        assert_eq!(seen.len(), MenuAction::ALL.len());
        for action in MenuAction::ALL {
            assert!(seen.contains(&action), "{action:?} missing from menu");
        }
    }

    #[test]
    fn shortcuts_follow_the_menu_table() {
        assert_eq!(MenuAction::ToggleDevtools.accelerator(), Some("F12"));
        assert_eq!(MenuAction::ToggleFullscreen.accelerator(), Some("F11"));
        assert_eq!(MenuAction::ForceReload.accelerator(), Some("Shift+CmdOrCtrl+R"));

        let edit = MENU_TABLE.iter().find(|s| s.title == "Edit").unwrap();
        assert_eq!(
            edit.entries,
            [
                Entry::Undo,
                Entry::Redo,
                Entry::Separator,
                Entry::Cut,
                Entry::Copy,
                Entry::Paste
            ]
        );
    }

    #[test]
    fn window_menu_can_bring_the_window_back() {
        let window = MENU_TABLE.iter().find(|s| s.title == "Window").unwrap();
        assert!(window
            .entries
            .contains(&Entry::Action(MenuAction::ShowWindow)));
        assert_eq!(MenuAction::ShowWindow.accelerator(), None);
    }

    #[test]
    fn table_sections_in_order() {
        let titles: Vec<_> = MENU_TABLE.iter().map(|s| s.title).collect();
        assert_eq!(titles, ["File", "Edit", "View", "Window", "Help"]);
    }
}
