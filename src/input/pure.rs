pub mod classify;
pub mod edges;

// Re-exports
pub use classify::{
    calculate_stick_calibration, is_device_enabled, is_gamepad, stick_vertical,
};
pub use edges::ButtonTracker;
