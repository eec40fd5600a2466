//! Falling water drop animation.
//!
//! Each drop is a tiny state machine driven purely by the time passed in:
//! it waits at its spawn point for `delay` seconds, falls at a constant speed
//! while wobbling sideways and shrinking, and re-arms itself once it drops
//! below the floor threshold. The only mutable state is the start timestamp.

use crate::constants::*;
use crate::transform::Transform;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Motion tuning shared by every drop in a scene.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DropConfig {
    pub fall_speed: f32,
    pub floor_threshold: f32,
    pub wobble_freq: f32,
    pub wobble_amplitude: f32,
    pub shrink_rate: f32,
    pub min_scale: f32,
}

impl Default for DropConfig {
    fn default() -> Self {
        Self {
            fall_speed: DROP_FALL_SPEED,
            floor_threshold: DROP_FLOOR_THRESHOLD,
            wobble_freq: DROP_WOBBLE_FREQUENCY,
            wobble_amplitude: DROP_WOBBLE_AMPLITUDE,
            shrink_rate: DROP_SHRINK_RATE,
            min_scale: DROP_MIN_SCALE,
        }
    }
}

impl DropConfig {
    #[inline]
    pub fn scale_at(&self, adjusted: f32) -> f32 {
        (1.0 - adjusted * self.shrink_rate).max(self.min_scale)
    }

    /// Seconds of fall after which a drop spawned at `spawn_y` resets.
    pub fn fall_duration(&self, spawn_y: f32) -> f32 {
        (spawn_y - self.floor_threshold) / self.fall_speed
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropPhase {
    Waiting,
    Falling,
    /// The drop crossed the floor this tick and was re-armed.
    Reset,
}

#[derive(Clone, Debug)]
pub struct DropInstance {
    spawn: Vec3,
    delay: f32,
    start_time: f64,
}

impl DropInstance {
    pub fn new(spawn: Vec3, delay: f32, start_time: f64) -> Self {
        Self {
            spawn,
            delay,
            start_time,
        }
    }

    #[inline]
    pub fn spawn(&self) -> Vec3 {
        self.spawn
    }

    #[inline]
    pub fn delay(&self) -> f32 {
        self.delay
    }

    #[inline]
    pub fn start_time(&self) -> f64 {
        self.start_time
    }

    /// Seconds of fall at `now`; zero or negative while waiting.
    #[inline]
    pub fn adjusted_time(&self, now: f64) -> f64 {
        now - self.start_time - self.delay as f64
    }

    /// Re-arm the drop so its wait starts over at `now`. Never moves the
    /// start time backwards.
    pub fn restart(&mut self, now: f64) {
        self.start_time = self.start_time.max(now);
    }

    /// Put the transform back at the spawn pose.
    pub fn hold(&self, transform: &mut Transform) {
        transform.position = self.spawn;
        transform.set_uniform_scale(1.0);
    }

    pub fn update(&mut self, now: f64, config: &DropConfig, transform: &mut Transform) -> DropPhase {
        let adjusted = self.adjusted_time(now);
        if adjusted <= 0.0 {
            self.hold(transform);
            return DropPhase::Waiting;
        }

        let adjusted = adjusted as f32;
        let new_y = self.spawn.y - config.fall_speed * adjusted;
        if new_y < config.floor_threshold {
            self.restart(now);
            self.hold(transform);
            return DropPhase::Reset;
        }

        transform.position.y = new_y;
        transform.position.x =
            self.spawn.x + (adjusted * config.wobble_freq).sin() * config.wobble_amplitude;
        transform.position.z = self.spawn.z;
        transform.set_uniform_scale(config.scale_at(adjusted));
        DropPhase::Falling
    }
}
