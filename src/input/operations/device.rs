// InputDevice struct and poll implementation (I/O: calls fetch_events)

use crate::input::pure::stick_vertical;
use crate::input::types::{PadState, PollResult};
use evdev::*;

pub struct InputDevice {
    path: String,
    dev: Device,
    enabled: bool,
    // Button levels, updated by key events
    buttons: PadState,
    // D-pad reported as a hat axis (-1 up, 1 down)
    hat_y: i32,
    // Left stick Y, persisted between polls
    stick_y: i32,
    stick_center: i32,
    stick_threshold: i32,
}

impl InputDevice {
    pub fn new(
        path: String,
        dev: Device,
        enabled: bool,
        stick_center: i32,
        stick_threshold: i32,
    ) -> Self {
        Self {
            path,
            dev,
            enabled,
            buttons: PadState::default(),
            hat_y: 0,
            stick_y: stick_center,
            stick_center,
            stick_threshold,
        }
    }

    pub fn name(&self) -> &str {
        self.dev.name().unwrap_or("")
    }
    pub fn path(&self) -> &str {
        &self.path
    }
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Level state combining buttons, hat and stick
    pub fn state(&self) -> PadState {
        let (stick_up, stick_down) =
            stick_vertical(self.stick_y, self.stick_center, self.stick_threshold);
        PadState {
            up: self.buttons.up || self.hat_y < 0 || stick_up,
            down: self.buttons.down || self.hat_y > 0 || stick_down,
            ..self.buttons
        }
    }

    pub fn poll(&mut self) -> PollResult {
        if !std::path::Path::new(&self.path).exists() {
            self.enabled = false;
            return PollResult::DeviceDisabled(format!("device node gone: {}", self.path));
        }

        const MAX_EVENTS_PER_POLL: usize = 256;

        match self.dev.fetch_events() {
            Ok(events) => {
                for (count, event) in events.enumerate() {
                    if count >= MAX_EVENTS_PER_POLL {
                        self.enabled = false;
                        return PollResult::DeviceDisabled(format!(
                            "exceeded max events for {}, disabling device",
                            self.path
                        ));
                    }

                    match event.destructure() {
                        EventSummary::Key(_, code, value) => {
                            let held = value != 0;
                            match code {
                                KeyCode::BTN_DPAD_UP => self.buttons.up = held,
                                KeyCode::BTN_DPAD_DOWN => self.buttons.down = held,
                                KeyCode::BTN_SOUTH => self.buttons.accept = held,
                                KeyCode::BTN_EAST => self.buttons.cancel = held,
                                KeyCode::BTN_START => self.buttons.toggle = held,
                                _ => {}
                            }
                        }
                        EventSummary::AbsoluteAxis(_, AbsoluteAxisCode::ABS_HAT0Y, value) => {
                            self.hat_y = value;
                        }
                        EventSummary::AbsoluteAxis(_, AbsoluteAxisCode::ABS_Y, value) => {
                            self.stick_y = value;
                        }
                        _ => {}
                    }
                }
            }
            Err(e) if e.raw_os_error() == Some(libc::ENODEV) => {
                self.enabled = false;
                return PollResult::DeviceDisabled(format!("device disconnected: {}", self.path));
            }
            // EAGAIN: nothing new since the last frame
            Err(_) => {}
        }

        PollResult::State(self.state())
    }
}
