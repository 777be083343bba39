//! Actions the overlay asks of its host, and the transient notification sink

use std::collections::VecDeque;

/// Fire-and-forget sink for short on-screen messages
pub trait Notifier {
    fn notify(&mut self, message: &str, duration_frames: u32);
}

/// Host-side actions a menu command can trigger
pub trait HostActions: Notifier {
    fn request_quit(&mut self);
    fn is_session_running(&self) -> bool;
    fn toggle_overlay_visible(&mut self);
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub message: String,
    pub frames_left: u32,
}

/// Messages waiting to be shown, oldest first
#[derive(Debug, Default)]
pub struct NotificationQueue {
    items: VecDeque<Notification>,
}

impl NotificationQueue {
    /// Age every message by one frame and drop the expired ones
    pub fn tick(&mut self) {
        for item in self.items.iter_mut() {
            item.frames_left = item.frames_left.saturating_sub(1);
        }
        self.items.retain(|item| item.frames_left > 0);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Notifier for NotificationQueue {
    fn notify(&mut self, message: &str, duration_frames: u32) {
        if duration_frames == 0 {
            return;
        }
        self.items.push_back(Notification {
            message: message.to_string(),
            frames_left: duration_frames,
        });
    }
}

/// Host state owned by the overlay application
#[derive(Debug)]
pub struct SessionHost {
    session_running: bool,
    overlay_visible: bool,
    quit_requested: bool,
    pub notifications: NotificationQueue,
}

impl SessionHost {
    pub fn new(session_running: bool) -> Self {
        Self {
            session_running,
            overlay_visible: true,
            quit_requested: false,
            notifications: NotificationQueue::default(),
        }
    }

    pub fn overlay_visible(&self) -> bool {
        self.overlay_visible
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }
}

impl Notifier for SessionHost {
    fn notify(&mut self, message: &str, duration_frames: u32) {
        log::info!("notify: {}", message);
        self.notifications.notify(message, duration_frames);
    }
}

impl HostActions for SessionHost {
    fn request_quit(&mut self) {
        log::info!("host: quit requested");
        self.quit_requested = true;
    }

    fn is_session_running(&self) -> bool {
        self.session_running
    }

    fn toggle_overlay_visible(&mut self) {
        // Without a running core there is nothing to go back to
        if !self.session_running {
            self.overlay_visible = true;
            return;
        }
        self.overlay_visible = !self.overlay_visible;
        log::debug!("host: overlay visible = {}", self.overlay_visible);
    }
}
