//! Eased tweens driving the animated scroll offset of a menu

use serde::{Deserialize, Serialize};
use std::f32::consts::FRAC_PI_2;

/// Easing curve applied to normalized tween progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Easing {
    Linear,
    /// Decelerating sine curve
    #[default]
    OutSine,
    OutCubic,
}

impl Easing {
    /// Map progress `t` in `[0, 1]` onto the curve
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::OutSine => (t * FRAC_PI_2).sin(),
            Easing::OutCubic => 1.0 - (1.0 - t).powi(3),
        }
    }
}

/// An in-flight animation from `begin` to `end` over `duration` seconds
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    begin: f32,
    end: f32,
    duration: f32,
    elapsed: f32,
    easing: Easing,
}

impl Tween {
    pub fn new(begin: f32, end: f32, duration: f32, easing: Easing) -> Self {
        Self {
            begin,
            end,
            duration: duration.max(0.0),
            elapsed: 0.0,
            easing,
        }
    }

    /// Advance by `dt` seconds and return the eased value.
    ///
    /// Once the elapsed time reaches the duration this returns exactly `end`
    /// and keeps returning it on every later call.
    pub fn update(&mut self, dt: f32) -> f32 {
        self.elapsed += dt.max(0.0);
        self.value()
    }

    pub fn value(&self) -> f32 {
        if self.is_finished() {
            return self.end;
        }
        let progress = self.easing.apply(self.elapsed / self.duration);
        self.begin + (self.end - self.begin) * progress
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

#[cfg(test)]
impl Tween {
    pub fn end(&self) -> f32 {
        self.end
    }
}
