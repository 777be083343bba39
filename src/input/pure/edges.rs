// Release-edge detection across frames

use crate::input::types::{FrameInput, PadState};

/// Remembers last frame's state so releases fire once per physical press
#[derive(Debug, Default)]
pub struct ButtonTracker {
    previous: PadState,
}

impl ButtonTracker {
    pub fn update(&mut self, held: PadState) -> FrameInput {
        let released = held.released_since(self.previous);
        self.previous = held;
        FrameInput { held, released }
    }
}
