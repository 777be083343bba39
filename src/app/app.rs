// Overlay application state

use crate::config::OverlayConfig;
use crate::host::SessionHost;
use crate::input::*;
use crate::menu::FsLister;
use crate::nav::NavigationStack;

mod eframe_impl;
mod helpers;

pub struct OverlayApp {
    pub config: OverlayConfig,
    pub stack: NavigationStack,
    pub host: SessionHost,
    pub lister: FsLister,

    pub dispatcher: InputDispatcher,
    pub tracker: ButtonTracker,
    pub pads: Vec<InputDevice>,
    pub device_monitor: Option<DeviceMonitor>,
}

impl OverlayApp {
    pub fn new(config: OverlayConfig, session_running: bool) -> Self {
        let pads = scan_input_devices(config.pad_filter_type);

        let device_monitor = match DeviceMonitor::new() {
            Ok(m) => {
                log::info!("udev: device hotplug monitor initialized");
                Some(m)
            }
            Err(e) => {
                log::warn!("udev: failed to initialize device monitor: {}", e);
                None
            }
        };

        let stack = NavigationStack::init(session_running, &config);
        log::info!(
            "overlay: opened {} ({} levels)",
            stack.current().label,
            stack.depth()
        );

        Self {
            dispatcher: InputDispatcher::new(config.input_cooldown_frames),
            tracker: ButtonTracker::default(),
            stack,
            host: SessionHost::new(session_running),
            lister: FsLister,
            pads,
            device_monitor,
            config,
        }
    }
}
