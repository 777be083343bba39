use crate::scroll::Easing;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Debug, Default)]
pub enum PadFilterType {
    #[default]
    All,
    NoSteamInput,
    OnlySteamInput,
}

/// How much time the scroll tween advances per rendered frame
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Debug, Default)]
pub enum FrameTiming {
    /// Always 1/60 of a second, whatever the real frame time was
    #[default]
    Fixed,
    /// The frame delta measured by the windowing host
    Measured,
}

impl FrameTiming {
    pub const FIXED_STEP: f32 = 1.0 / 60.0;

    pub fn step(self, measured_dt: f32) -> f32 {
        match self {
            FrameTiming::Fixed => Self::FIXED_STEP,
            FrameTiming::Measured => measured_dt,
        }
    }
}

/// Main overlay configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct OverlayConfig {
    /// Root of the "Load Core" explorer
    pub cores_dir: PathBuf,
    /// Root of the "Load Game" explorer
    pub roms_dir: PathBuf,
    pub pad_filter_type: PadFilterType,
    /// Frames a held direction is ignored after it moved the cursor
    pub input_cooldown_frames: u32,
    pub row_height: f32,
    pub header_offset: f32,
    /// Tween duration when the cursor moves down (seconds)
    pub scroll_down_secs: f32,
    /// Tween duration when the cursor moves up (seconds)
    pub scroll_up_secs: f32,
    /// Curve of the scroll tween
    pub scroll_easing: Easing,
    /// Lifetime of transient notifications, in frames
    pub notify_frames: u32,
    pub frame_timing: FrameTiming,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        OverlayConfig {
            cores_dir: PathBuf::from("./cores"),
            roms_dir: PathBuf::from("./roms"),
            pad_filter_type: PadFilterType::All,
            input_cooldown_frames: 10,
            row_height: 70.0,
            header_offset: 20.0,
            scroll_down_secs: 0.15,
            scroll_up_secs: 0.10,
            scroll_easing: Easing::OutSine,
            notify_frames: 120,
            frame_timing: FrameTiming::Fixed,
        }
    }
}
