//! Menu tree types

use crate::scroll::Tween;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const MAIN_MENU_LABEL: &str = "Main Menu";
pub const QUICK_MENU_LABEL: &str = "Quick Menu";
pub const EXPLORER_LABEL: &str = "Explorer";

/// Actions the host carries out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Builtin {
    Quit,
    /// Hide or show the overlay over the running core
    TogglePause,
    /// Unwind the navigation stack down to the quick menu
    ReturnToQuickMenu,
}

/// A submenu that is built only when it is navigated to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Submenu {
    MainMenu,
    QuickMenu,
    Explorer(PathBuf),
}

/// What activating an entry does
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Command {
    #[default]
    None,
    Builtin(Builtin),
    NavigateTo(Submenu),
    /// Show a transient message
    Notify(String),
}

/// One node of the menu tree
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub label: String,
    /// Display order
    pub children: Vec<Entry>,
    pub command: Command,
    /// Builder this menu came from (None for leaves)
    pub origin: Option<Submenu>,
    /// Cursor into `children`
    pub selected: usize,
    /// Animated scroll offset, rendering only
    pub scroll: f32,
    pub tween: Option<Tween>,
}

impl Entry {
    pub fn leaf(label: impl Into<String>, command: Command) -> Self {
        Self {
            label: label.into(),
            children: Vec::new(),
            command,
            origin: None,
            selected: 0,
            scroll: 0.0,
            tween: None,
        }
    }

    pub fn menu(label: impl Into<String>, origin: Submenu) -> Self {
        Self {
            origin: Some(origin),
            ..Self::leaf(label, Command::None)
        }
    }

    pub fn push_child(&mut self, child: Entry) {
        self.children.push(child);
    }

    /// The child under the cursor, if any
    pub fn selected_child(&self) -> Option<&Entry> {
        self.children.get(self.selected)
    }

    /// Advance the scroll tween by `dt` seconds and return the new offset
    pub fn advance_scroll(&mut self, dt: f32) -> f32 {
        if let Some(tween) = self.tween.as_mut() {
            self.scroll = tween.update(dt);
        }
        self.scroll
    }
}

#[cfg(test)]
impl Entry {
    pub fn labels(&self) -> Vec<&str> {
        self.children.iter().map(|c| c.label.as_str()).collect()
    }
}
