//! Keyboard fallback for pad buttons

use crate::input::PadState;
use eframe::egui::{InputState, Key};

/// Keys currently held, mapped onto the pad buttons the menu understands
pub fn keyboard_state(input: &InputState) -> PadState {
    PadState {
        up: input.key_down(Key::ArrowUp),
        down: input.key_down(Key::ArrowDown),
        accept: input.key_down(Key::Enter),
        cancel: input.key_down(Key::Escape) || input.key_down(Key::Backspace),
        toggle: input.key_down(Key::F1),
    }
}
