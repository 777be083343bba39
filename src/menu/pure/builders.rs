// Menu builders (pure functions)

use crate::config::OverlayConfig;
use crate::menu::operations::DirItem;
use crate::menu::types::{
    Builtin, Command, Entry, Submenu, EXPLORER_LABEL, MAIN_MENU_LABEL, QUICK_MENU_LABEL,
};
use std::path::Path;

const NOT_IMPLEMENTED: &str = "Not implemented";

/// Top-level menu. The quick menu entry only exists while a core is running.
pub fn build_main_menu(session_active: bool, config: &OverlayConfig) -> Entry {
    let mut menu = Entry::menu(MAIN_MENU_LABEL, Submenu::MainMenu);

    if session_active {
        menu.push_child(Entry::leaf(
            QUICK_MENU_LABEL,
            Command::NavigateTo(Submenu::QuickMenu),
        ));
    }
    menu.push_child(Entry::leaf(
        "Load Core",
        Command::NavigateTo(Submenu::Explorer(config.cores_dir.clone())),
    ));
    menu.push_child(Entry::leaf(
        "Load Game",
        Command::NavigateTo(Submenu::Explorer(config.roms_dir.clone())),
    ));
    menu.push_child(Entry::leaf(
        "Help",
        Command::Notify("Not implemented yet".to_string()),
    ));
    menu.push_child(Entry::leaf("Quit", Command::Builtin(Builtin::Quit)));

    menu
}

/// In-session menu
pub fn build_quick_menu() -> Entry {
    let mut menu = Entry::menu(QUICK_MENU_LABEL, Submenu::QuickMenu);

    menu.push_child(Entry::leaf(
        "Resume",
        Command::Builtin(Builtin::TogglePause),
    ));
    for label in ["Save State", "Load State", "Take Screenshot"] {
        menu.push_child(Entry::leaf(
            label,
            Command::Notify(NOT_IMPLEMENTED.to_string()),
        ));
    }

    menu
}

/// Turn one directory listing into an explorer menu.
///
/// Every directory child gets its own path joined from the raw name;
/// labels are the lossy UTF-8 rendering. Files have no action yet.
pub fn explorer_from_listing(path: &Path, items: &[DirItem]) -> Entry {
    let mut menu = Entry::menu(EXPLORER_LABEL, Submenu::Explorer(path.to_path_buf()));

    for item in items {
        let command = if item.is_dir {
            Command::NavigateTo(Submenu::Explorer(path.join(&item.name)))
        } else {
            Command::None
        };
        menu.push_child(Entry::leaf(item.name.to_string_lossy(), command));
    }

    menu
}
