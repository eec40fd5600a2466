use crate::constants::{CUBE_SPIN_PER_TICK, CUBE_WOBBLE_AMPLITUDE, CUBE_WOBBLE_FREQUENCY};
use crate::transform::Transform;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

/// Wobble on X and constant spin on Y for a rigid body.
///
/// `rotation.x` is recomputed from absolute time each call and stays within
/// `[-amplitude, amplitude]`. `rotation.y` accumulates `rate` per call and is
/// kept in `[0, 2π)` so long sessions do not lose float precision.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RotationOscillator {
    pub amplitude: f32,
    pub frequency: f32,
    pub rate: f32,
}

impl Default for RotationOscillator {
    fn default() -> Self {
        Self {
            amplitude: CUBE_WOBBLE_AMPLITUDE,
            frequency: CUBE_WOBBLE_FREQUENCY,
            rate: CUBE_SPIN_PER_TICK,
        }
    }
}

impl RotationOscillator {
    pub fn update(&self, elapsed_sec: f64, transform: &mut Transform) {
        let wobble = (elapsed_sec * self.frequency as f64).sin() as f32;
        transform.rotation.x = wobble * self.amplitude;
        transform.rotation.y = (transform.rotation.y + self.rate).rem_euclid(TAU);
    }
}
