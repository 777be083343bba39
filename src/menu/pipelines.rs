// Lazy submenu construction, run at navigation time

use crate::config::OverlayConfig;
use crate::host::HostActions;
use crate::menu::operations::{build_explorer, DirectoryLister};
use crate::menu::pure::{build_main_menu, build_quick_menu};
use crate::menu::types::{Entry, Submenu};

/// Build the menu a `NavigateTo` command points at
pub fn build_submenu<L, H>(
    target: &Submenu,
    lister: &L,
    host: &mut H,
    config: &OverlayConfig,
) -> Entry
where
    L: DirectoryLister + ?Sized,
    H: HostActions + ?Sized,
{
    match target {
        Submenu::MainMenu => build_main_menu(host.is_session_running(), config),
        Submenu::QuickMenu => build_quick_menu(),
        Submenu::Explorer(path) => build_explorer(path, lister, host, config.notify_frames),
    }
}
