// Gamepad hotplug monitoring via udev

use std::os::unix::io::AsRawFd;

#[derive(Debug, Clone, PartialEq)]
pub enum DeviceEvent {
    Added(String),
    Removed(String),
}

/// Watches the input subsystem for event nodes coming and going
pub struct DeviceMonitor {
    socket: udev::MonitorSocket,
}

impl DeviceMonitor {
    pub fn new() -> Result<Self, std::io::Error> {
        let socket = udev::MonitorBuilder::new()?
            .match_subsystem("input")?
            .listen()?;

        // The socket is polled once per frame and must never block the UI thread
        unsafe {
            let fd = socket.as_raw_fd();
            let flags = libc::fcntl(fd, libc::F_GETFL);
            if flags < 0 || libc::fcntl(fd, libc::F_SETFL, flags | libc::O_NONBLOCK) < 0 {
                return Err(std::io::Error::last_os_error());
            }
        }

        Ok(Self { socket })
    }

    /// Events since the last poll, event nodes only
    pub fn poll_events(&mut self) -> Vec<DeviceEvent> {
        self.socket
            .iter()
            .filter_map(|event| {
                let path = event.devnode()?.to_string_lossy().to_string();
                if !path.starts_with("/dev/input/event") {
                    return None;
                }
                match event.event_type() {
                    udev::EventType::Add => Some(DeviceEvent::Added(path)),
                    udev::EventType::Remove => Some(DeviceEvent::Removed(path)),
                    _ => None,
                }
            })
            .collect()
    }
}
