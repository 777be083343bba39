// Input device scanning operations (I/O: evdev enumeration, device opening)

use crate::config::PadFilterType;
use crate::input::operations::device::InputDevice;
use crate::input::pure::{calculate_stick_calibration, is_device_enabled, is_gamepad};
use evdev::*;
use std::time::Duration;

// (center, threshold) for pads that do not report ABS_Y limits
const DEFAULT_STICK: (i32, i32) = (0, 8000);

/// Scan all gamepads; pads the filter rejects are returned with `enabled() == false`
pub fn scan_input_devices(filter: PadFilterType) -> Vec<InputDevice> {
    let mut pads: Vec<InputDevice> = evdev::enumerate()
        .filter_map(|(path, dev)| wrap_gamepad(&path.display().to_string(), dev, filter))
        .collect();
    pads.sort_by_key(|pad| pad.path().to_string());
    log::info!("evdev: {} gamepad(s) found", pads.len());
    pads
}

/// Open a single device node announced by hotplug.
///
/// udev announces nodes before their permissions settle, so opening retries with backoff.
pub fn open_device(path: &str, filter: PadFilterType) -> Option<InputDevice> {
    const MAX_ATTEMPTS: u32 = 8;
    let mut delay_ms = 50u64;

    for attempt in 1..=MAX_ATTEMPTS {
        match Device::open(path) {
            Ok(dev) => return wrap_gamepad(path, dev, filter),
            Err(e) if attempt == MAX_ATTEMPTS => {
                if e.kind() == std::io::ErrorKind::PermissionDenied {
                    log::warn!(
                        "evdev: permission denied for {} - ensure your user is in the 'input' group",
                        path
                    );
                } else {
                    log::warn!("evdev: failed to open {} after {} attempts: {}", path, attempt, e);
                }
            }
            Err(_) => {
                std::thread::sleep(Duration::from_millis(delay_ms));
                delay_ms = (delay_ms * 2).min(500);
            }
        }
    }
    None
}

fn wrap_gamepad(path: &str, dev: Device, filter: PadFilterType) -> Option<InputDevice> {
    if !is_gamepad(dev.supported_keys()) {
        return None;
    }

    if dev.set_nonblocking(true).is_err() {
        log::warn!("evdev: failed to set non-blocking mode for {}", path);
        return None;
    }

    let enabled = is_device_enabled(filter, dev.input_id().vendor());
    let (stick_center, stick_threshold) = match dev.get_abs_state() {
        Ok(abs_info) => abs_info
            .get(AbsoluteAxisCode::ABS_Y.0 as usize)
            .map(|y| calculate_stick_calibration(y.minimum, y.maximum))
            .unwrap_or(DEFAULT_STICK),
        Err(_) => DEFAULT_STICK,
    };

    log::info!(
        "evdev: {} ({}) enabled={} stick center={} threshold={}",
        path,
        dev.name().unwrap_or("unknown"),
        enabled,
        stick_center,
        stick_threshold
    );

    Some(InputDevice::new(
        path.to_string(),
        dev,
        enabled,
        stick_center,
        stick_threshold,
    ))
}
