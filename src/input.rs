pub mod operations;
pub mod pipelines;
pub mod pure;
pub mod types;

// Re-exports
pub use operations::{open_device, scan_input_devices, DeviceEvent, DeviceMonitor, InputDevice};
pub use pipelines::InputDispatcher;
pub use pure::ButtonTracker;
pub use types::{FrameInput, PadState, PollResult};
