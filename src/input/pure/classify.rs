// Device classification and stick thresholds (pure functions)

use evdev::{AttributeSetRef, KeyCode};

use crate::config::PadFilterType;

const STEAM_INPUT_VENDOR: u16 = 0x28de;

/// A device counts as a gamepad when it reports the south face button
pub fn is_gamepad(supported_keys: Option<&AttributeSetRef<KeyCode>>) -> bool {
    supported_keys.is_some_and(|keys| keys.contains(KeyCode::BTN_SOUTH))
}

/// Whether a pad from `vendor_id` may drive the menu under `filter`
pub fn is_device_enabled(filter: PadFilterType, vendor_id: u16) -> bool {
    match filter {
        PadFilterType::All => true,
        PadFilterType::NoSteamInput => vendor_id != STEAM_INPUT_VENDOR,
        PadFilterType::OnlySteamInput => vendor_id == STEAM_INPUT_VENDOR,
    }
}

/// Stick center and threshold from the axis range; threshold is 25% of the range
pub fn calculate_stick_calibration(min: i32, max: i32) -> (i32, i32) {
    let center = (min + max) / 2;
    let threshold = (max - min) / 4;
    (center, threshold)
}

/// (up, down) for a vertical stick position; evdev Y grows downwards
pub fn stick_vertical(value: i32, center: i32, threshold: i32) -> (bool, bool) {
    if threshold <= 0 {
        return (false, false);
    }
    (value < center - threshold, value > center + threshold)
}
