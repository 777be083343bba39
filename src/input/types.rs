// Input device types

use std::ops::BitOr;

/// Level state of the buttons the menu reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PadState {
    pub up: bool,
    pub down: bool,
    pub accept: bool,
    pub cancel: bool,
    /// Show/hide the overlay over a running core
    pub toggle: bool,
}

impl PadState {
    /// Buttons held in `previous` but no longer held in `self`
    pub fn released_since(self, previous: PadState) -> PadState {
        PadState {
            up: previous.up && !self.up,
            down: previous.down && !self.down,
            accept: previous.accept && !self.accept,
            cancel: previous.cancel && !self.cancel,
            toggle: previous.toggle && !self.toggle,
        }
    }
}

/// Any device holding a button counts
impl BitOr for PadState {
    type Output = PadState;

    fn bitor(self, rhs: PadState) -> PadState {
        PadState {
            up: self.up || rhs.up,
            down: self.down || rhs.down,
            accept: self.accept || rhs.accept,
            cancel: self.cancel || rhs.cancel,
            toggle: self.toggle || rhs.toggle,
        }
    }
}

/// One frame of menu input: level state plus release edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameInput {
    pub held: PadState,
    pub released: PadState,
}

/// Result of polling an input device
pub enum PollResult {
    /// Current button state
    State(PadState),
    /// Device was disabled (with reason for logging at the app layer)
    DeviceDisabled(String),
}
