// Display detection, used to size the overlay UI

#[derive(Clone, Debug)]
pub struct Monitor {
    name: String,
    width: u32,
    height: u32,
}

impl Monitor {
    /// Display name as reported by SDL (e.g., "HDMI-A-1 24\"")
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

/// Query connected displays through SDL2's video subsystem.
///
/// XWayland virtual displays are skipped.
pub fn get_monitors_sdl() -> Result<Vec<Monitor>, String> {
    let video = sdl2::init()?.video()?;
    let count = video.num_video_displays()?;

    let mut monitors = Vec::new();
    for i in 0..count {
        if let (Ok(name), Ok(bounds)) = (video.display_name(i), video.display_bounds(i)) {
            if is_virtual_display(&name) {
                continue;
            }
            monitors.push(Monitor {
                name,
                width: bounds.width(),
                height: bounds.height(),
            });
        }
    }
    Ok(monitors)
}

fn is_virtual_display(name: &str) -> bool {
    name.split_whitespace()
        .next()
        .is_some_and(|connector| connector.starts_with("XWAYLAND"))
}

/// UI zoom so the menu fills a fullscreen display the way it fills a 560px window
pub fn zoom_for(monitor: Option<&Monitor>, fullscreen: bool) -> f32 {
    match (monitor, fullscreen) {
        (Some(m), true) => m.height() as f32 / 560.0,
        _ => 1.0,
    }
}
