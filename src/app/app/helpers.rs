//! Device and visibility helpers for the overlay app

use super::OverlayApp;
use crate::host::HostActions;
use crate::input::*;

impl OverlayApp {
    /// Handle udev hotplug events
    pub(crate) fn poll_device_events(&mut self) {
        let monitor = match &mut self.device_monitor {
            Some(m) => m,
            None => return,
        };

        for event in monitor.poll_events() {
            match event {
                DeviceEvent::Added(path) => {
                    log::debug!("udev: add event for {}", path);
                    // Drop any stale entry with the same path first
                    self.pads.retain(|d| d.path() != path);
                    if let Some(device) = open_device(&path, self.config.pad_filter_type) {
                        log::info!("udev: gamepad connected: {} ({})", device.name(), path);
                        self.pads.push(device);
                        self.pads.sort_by_key(|d| d.path().to_string());
                    }
                }
                DeviceEvent::Removed(path) => {
                    if let Some(idx) = self.pads.iter().position(|d| d.path() == path) {
                        let device = self.pads.remove(idx);
                        log::info!("udev: gamepad disconnected: {} ({})", device.name(), path);
                    }
                }
            }
        }
    }

    /// Drain every pad and merge the buttons of those the filter allows
    pub(crate) fn poll_pads(&mut self) -> PadState {
        let mut merged = PadState::default();
        self.pads.retain_mut(|pad| match pad.poll() {
            PollResult::State(state) => {
                if pad.enabled() {
                    merged = merged | state;
                }
                true
            }
            PollResult::DeviceDisabled(reason) => {
                log::warn!("input: dropping {}: {}", pad.name(), reason);
                false
            }
        });
        merged
    }

    /// Run one frame of input through the dispatcher and the stack.
    ///
    /// The cooldown counts down every frame; commands only reach a menu that
    /// was visible when the frame started, and the toggle is handled last.
    pub(crate) fn handle_frame(&mut self, input: &FrameInput) {
        let commands = self.dispatcher.update(input);
        if self.host.overlay_visible() {
            for command in commands {
                self.stack
                    .apply(command, &self.lister, &mut self.host, &self.config);
            }
        }

        if input.released.toggle {
            self.toggle_overlay();
        }
    }

    /// Show or hide the overlay; reopening lands on the quick menu
    pub(crate) fn toggle_overlay(&mut self) {
        if !self.host.is_session_running() {
            return;
        }
        self.host.toggle_overlay_visible();
        if self.host.overlay_visible() && self.stack.return_to_quick_menu() {
            log::debug!("overlay: reopened at {}", self.stack.current().label);
        }
    }
}
