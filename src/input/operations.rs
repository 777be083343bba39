// Input device operations - atomic I/O functions

pub mod device;
pub mod monitor;
pub mod scan;

pub use device::InputDevice;
pub use monitor::{DeviceEvent, DeviceMonitor};
pub use scan::{open_device, scan_input_devices};
