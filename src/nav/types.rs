//! Navigation commands and scroll parameters

use crate::config::OverlayConfig;
use crate::scroll::Easing;

/// A navigation request produced by the input dispatcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    /// Move the cursor by a signed number of rows, wrapping around
    MoveSelection(i32),
    /// Run the command of the entry under the cursor
    Activate,
    /// Leave the current submenu
    Back,
}

/// How a cursor move animates the scroll offset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSettings {
    pub row_height: f32,
    pub down_secs: f32,
    pub up_secs: f32,
    pub easing: Easing,
}

impl ScrollSettings {
    /// Moving up settles faster than moving down
    pub fn duration_for(&self, delta: i32) -> f32 {
        if delta < 0 {
            self.up_secs
        } else {
            self.down_secs
        }
    }
}

impl Default for ScrollSettings {
    fn default() -> Self {
        Self::from(&OverlayConfig::default())
    }
}

impl From<&OverlayConfig> for ScrollSettings {
    fn from(config: &OverlayConfig) -> Self {
        Self {
            row_height: config.row_height,
            down_secs: config.scroll_down_secs,
            up_secs: config.scroll_up_secs,
            easing: config.scroll_easing,
        }
    }
}
