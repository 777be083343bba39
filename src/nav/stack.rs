// Navigation stack: the path of open menus, topmost visible

use crate::config::OverlayConfig;
use crate::host::HostActions;
use crate::menu::{build_main_menu, build_quick_menu, build_submenu};
use crate::menu::{Builtin, Command, DirectoryLister, Entry, Submenu};
use crate::nav::types::{NavCommand, ScrollSettings};
use crate::scroll::Tween;

/// Ordered menus from root to the visible one.
///
/// Always holds at least the root: `top` is the current menu and `below`
/// the levels underneath it.
#[derive(Debug)]
pub struct NavigationStack {
    below: Vec<Entry>,
    top: Entry,
}

impl NavigationStack {
    pub fn new(root: Entry) -> Self {
        Self {
            below: Vec::new(),
            top: reset_level(root),
        }
    }

    /// Startup stack: the main menu, with the quick menu on top while a core runs
    pub fn init(session_running: bool, config: &OverlayConfig) -> Self {
        let mut stack = Self::new(build_main_menu(session_running, config));
        if session_running {
            stack.push(build_quick_menu());
        }
        stack
    }

    pub fn push(&mut self, entry: Entry) {
        log::debug!("nav: push {}", entry.label);
        let previous = std::mem::replace(&mut self.top, reset_level(entry));
        self.below.push(previous);
    }

    /// Remove the current menu. The root is never removed.
    pub fn pop(&mut self) -> bool {
        match self.below.pop() {
            Some(previous) => {
                log::debug!("nav: pop {}", self.top.label);
                self.top = previous;
                true
            }
            None => false,
        }
    }

    pub fn back(&mut self) -> bool {
        self.pop()
    }

    pub fn current(&self) -> &Entry {
        &self.top
    }

    pub fn current_mut(&mut self) -> &mut Entry {
        &mut self.top
    }

    pub fn depth(&self) -> usize {
        self.below.len() + 1
    }

    /// Levels from root to current
    pub fn levels(&self) -> impl Iterator<Item = &Entry> {
        self.below.iter().chain(std::iter::once(&self.top))
    }

    /// Move the cursor by `delta` rows with wraparound and start a scroll tween.
    pub fn move_selection(&mut self, delta: i32, settings: &ScrollSettings) {
        let menu = &mut self.top;
        let len = menu.children.len();
        if len == 0 {
            return;
        }

        let next = (menu.selected as i64 + delta as i64).rem_euclid(len as i64) as usize;
        if next == menu.selected {
            return;
        }
        menu.selected = next;
        menu.tween = Some(Tween::new(
            menu.scroll,
            next as f32 * settings.row_height,
            settings.duration_for(delta),
            settings.easing,
        ));
    }

    /// Run the command of the entry under the cursor
    pub fn activate_selection<L, H>(&mut self, lister: &L, host: &mut H, config: &OverlayConfig)
    where
        L: DirectoryLister + ?Sized,
        H: HostActions + ?Sized,
    {
        let command = match self.top.selected_child() {
            Some(child) => child.command.clone(),
            None => return,
        };
        self.execute(&command, lister, host, config);
    }

    pub fn execute<L, H>(
        &mut self,
        command: &Command,
        lister: &L,
        host: &mut H,
        config: &OverlayConfig,
    ) where
        L: DirectoryLister + ?Sized,
        H: HostActions + ?Sized,
    {
        match command {
            Command::None => {}
            Command::Builtin(Builtin::Quit) => host.request_quit(),
            Command::Builtin(Builtin::TogglePause) => host.toggle_overlay_visible(),
            Command::Builtin(Builtin::ReturnToQuickMenu) => {
                self.return_to_quick_menu();
            }
            Command::NavigateTo(target) => {
                let menu = build_submenu(target, lister, host, config);
                self.push(menu);
            }
            Command::Notify(message) => host.notify(message, config.notify_frames),
        }
    }

    /// Unwind to the topmost quick menu. Returns false if none is open.
    pub fn return_to_quick_menu(&mut self) -> bool {
        let is_quick = |entry: &Entry| entry.origin == Some(Submenu::QuickMenu);
        if !self.levels().any(is_quick) {
            return false;
        }
        while !is_quick(&self.top) && self.pop() {}
        true
    }

    pub fn apply<L, H>(
        &mut self,
        command: NavCommand,
        lister: &L,
        host: &mut H,
        config: &OverlayConfig,
    ) where
        L: DirectoryLister + ?Sized,
        H: HostActions + ?Sized,
    {
        match command {
            NavCommand::MoveSelection(delta) => {
                self.move_selection(delta, &ScrollSettings::from(config));
            }
            NavCommand::Activate => self.activate_selection(lister, host, config),
            NavCommand::Back => {
                self.back();
            }
        }
    }
}

fn reset_level(mut entry: Entry) -> Entry {
    entry.selected = 0;
    entry.scroll = 0.0;
    entry.tween = None;
    entry
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::host::Notifier;
    use crate::menu::{DirItem, ListingError};
    use std::collections::HashMap;
    use std::path::{Path, PathBuf};

    /// Host that records every action it is asked for
    #[derive(Default)]
    pub(crate) struct RecordingHost {
        pub session_running: bool,
        pub quits: usize,
        pub toggles: usize,
        pub messages: Vec<String>,
    }

    impl Notifier for RecordingHost {
        fn notify(&mut self, message: &str, _duration_frames: u32) {
            self.messages.push(message.to_string());
        }
    }

    impl HostActions for RecordingHost {
        fn request_quit(&mut self) {
            self.quits += 1;
        }
        fn is_session_running(&self) -> bool {
            self.session_running
        }
        fn toggle_overlay_visible(&mut self) {
            self.toggles += 1;
        }
    }

    #[derive(Default)]
    pub(crate) struct MemLister {
        pub dirs: HashMap<PathBuf, Vec<DirItem>>,
    }

    impl DirectoryLister for MemLister {
        fn list_directory(&self, path: &Path) -> Result<Vec<DirItem>, ListingError> {
            self.dirs.get(path).cloned().ok_or_else(|| ListingError::Io {
                path: path.to_path_buf(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            })
        }
    }

    fn numbered_menu(count: usize) -> Entry {
        let mut menu = Entry::menu("Numbers", Submenu::MainMenu);
        for i in 0..count {
            menu.push_child(Entry::leaf(i.to_string(), Command::None));
        }
        menu
    }

    #[test]
    fn test_selection_wraps_both_ways() {
        let settings = ScrollSettings::default();
        let mut stack = NavigationStack::new(numbered_menu(3));

        stack.move_selection(-1, &settings);
        assert_eq!(stack.current().selected, 2);
        stack.move_selection(1, &settings);
        assert_eq!(stack.current().selected, 0);
        stack.move_selection(1, &settings);
        stack.move_selection(1, &settings);
        assert_eq!(stack.current().selected, 2);
    }

    #[test]
    fn test_selection_stays_in_range() {
        let settings = ScrollSettings::default();
        let mut stack = NavigationStack::new(numbered_menu(5));
        for delta in [1, 7, -3, -11, 4, 5, -1, 100, -100] {
            stack.move_selection(delta, &settings);
            assert!(stack.current().selected < 5);
        }
    }

    #[test]
    fn test_move_on_empty_menu_is_noop() {
        let settings = ScrollSettings::default();
        let mut stack = NavigationStack::new(numbered_menu(0));
        stack.move_selection(1, &settings);
        stack.move_selection(-1, &settings);
        assert_eq!(stack.current().selected, 0);
        assert!(stack.current().tween.is_none());
    }

    #[test]
    fn test_move_starts_tween_with_direction_duration() {
        let settings = ScrollSettings::default();
        let mut stack = NavigationStack::new(numbered_menu(4));

        stack.move_selection(1, &settings);
        let mut down = stack.current().tween.clone().unwrap();
        assert_eq!(down.end(), 70.0);
        assert!(down.clone().update(0.14) < 70.0);
        assert_eq!(down.update(0.15), 70.0);

        stack.current_mut().scroll = 70.0;
        stack.move_selection(-1, &settings);
        let mut up = stack.current().tween.clone().unwrap();
        assert_eq!(up.end(), 0.0);
        assert_eq!(up.update(0.10), 0.0);
    }

    #[test]
    fn test_back_never_drops_root() {
        let mut stack = NavigationStack::new(numbered_menu(2));
        assert!(!stack.back());
        assert!(!stack.pop());
        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.current().label, "Numbers");
    }

    #[test]
    fn test_push_resets_cursor() {
        let mut stack = NavigationStack::new(numbered_menu(2));
        let mut submenu = numbered_menu(3);
        submenu.label = "Sub".to_string();
        submenu.selected = 2;
        submenu.scroll = 140.0;

        stack.push(submenu);

        assert_eq!(stack.depth(), 2);
        assert_eq!(stack.current().label, "Sub");
        assert_eq!(stack.current().selected, 0);
        assert!(stack.current().tween.is_none());

        assert!(stack.back());
        assert_eq!(stack.current().label, "Numbers");
    }

    #[test]
    fn test_pop_keeps_parent_cursor() {
        let settings = ScrollSettings::default();
        let mut stack = NavigationStack::new(numbered_menu(4));
        stack.move_selection(2, &settings);
        stack.push(numbered_menu(1));
        stack.pop();
        assert_eq!(stack.current().selected, 2);
    }

    #[test]
    fn test_init_with_session_opens_quick_menu() {
        let config = OverlayConfig::default();

        let idle = NavigationStack::init(false, &config);
        assert_eq!(idle.depth(), 1);
        assert_eq!(idle.current().label, "Main Menu");

        let running = NavigationStack::init(true, &config);
        assert_eq!(running.depth(), 2);
        assert_eq!(running.current().label, "Quick Menu");
        let labels: Vec<_> = running.levels().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["Main Menu", "Quick Menu"]);
    }

    #[test]
    fn test_activate_navigates_into_explorer() {
        let config = OverlayConfig::default();
        let lister = MemLister {
            dirs: HashMap::from([
                (
                    PathBuf::from("./roms"),
                    vec![DirItem::file("a.zip"), DirItem::dir("sub")],
                ),
                (PathBuf::from("./roms/sub"), vec![DirItem::file("b.gb")]),
            ]),
        };
        let mut host = RecordingHost::default();
        let mut stack = NavigationStack::init(false, &config);
        let settings = ScrollSettings::from(&config);

        // Load Game
        stack.move_selection(1, &settings);
        stack.activate_selection(&lister, &mut host, &config);
        assert_eq!(stack.depth(), 2);
        assert_eq!(stack.current().labels(), vec!["a.zip", "sub"]);

        // a.zip has no action
        stack.activate_selection(&lister, &mut host, &config);
        assert_eq!(stack.depth(), 2);

        stack.move_selection(1, &settings);
        stack.activate_selection(&lister, &mut host, &config);
        assert_eq!(stack.depth(), 3);
        assert_eq!(
            stack.current().origin,
            Some(Submenu::Explorer(PathBuf::from("./roms/sub/")))
        );
        assert_eq!(stack.current().labels(), vec!["b.gb"]);
        assert!(host.messages.is_empty());
    }

    #[test]
    fn test_failed_listing_pushes_empty_menu() {
        let config = OverlayConfig::default();
        let mut host = RecordingHost::default();
        let mut stack = NavigationStack::init(false, &config);

        // Load Core, with no cores directory at all
        stack.activate_selection(&MemLister::default(), &mut host, &config);

        assert_eq!(stack.depth(), 2);
        assert!(stack.current().children.is_empty());
        assert_eq!(host.messages.len(), 1);

        // Still navigable
        stack.move_selection(1, &ScrollSettings::from(&config));
        stack.activate_selection(&MemLister::default(), &mut host, &config);
        assert!(stack.back());
        assert_eq!(stack.current().label, "Main Menu");
    }

    #[test]
    fn test_activate_builtins_and_notify() {
        let config = OverlayConfig::default();
        let lister = MemLister::default();
        let settings = ScrollSettings::from(&config);
        let mut host = RecordingHost {
            session_running: true,
            ..Default::default()
        };
        let mut stack = NavigationStack::init(true, &config);

        // Resume
        stack.activate_selection(&lister, &mut host, &config);
        assert_eq!(host.toggles, 1);

        // Save State
        stack.move_selection(1, &settings);
        stack.activate_selection(&lister, &mut host, &config);
        assert_eq!(host.messages, vec!["Not implemented".to_string()]);

        // Quit from the main menu
        stack.back();
        stack.move_selection(-1, &settings);
        assert_eq!(stack.current().selected_child().unwrap().label, "Quit");
        stack.activate_selection(&lister, &mut host, &config);
        assert_eq!(host.quits, 1);
    }

    #[test]
    fn test_activate_on_empty_menu_is_noop() {
        let config = OverlayConfig::default();
        let mut host = RecordingHost::default();
        let mut stack = NavigationStack::new(numbered_menu(0));
        stack.activate_selection(&MemLister::default(), &mut host, &config);
        assert_eq!(stack.depth(), 1);
        assert_eq!(host.quits + host.toggles + host.messages.len(), 0);
    }

    #[test]
    fn test_return_to_quick_menu() {
        let config = OverlayConfig::default();
        let mut host = RecordingHost::default();
        let lister = MemLister::default();

        let mut idle = NavigationStack::init(false, &config);
        idle.execute(
            &Command::Builtin(Builtin::ReturnToQuickMenu),
            &lister,
            &mut host,
            &config,
        );
        assert_eq!(idle.depth(), 1);

        let mut running = NavigationStack::init(true, &config);
        running.push(numbered_menu(2));
        running.push(numbered_menu(3));
        assert!(running.return_to_quick_menu());
        assert_eq!(running.depth(), 2);
        assert_eq!(running.current().label, "Quick Menu");
    }

    #[test]
    fn test_apply_commands() {
        let config = OverlayConfig::default();
        let mut host = RecordingHost::default();
        let lister = MemLister::default();
        let mut stack = NavigationStack::init(false, &config);

        stack.apply(NavCommand::MoveSelection(2), &lister, &mut host, &config);
        assert_eq!(stack.current().selected, 2);
        stack.apply(NavCommand::Activate, &lister, &mut host, &config);
        assert_eq!(host.messages, vec!["Not implemented yet".to_string()]);
        stack.apply(NavCommand::Back, &lister, &mut host, &config);
        assert_eq!(stack.depth(), 1);
    }
}
