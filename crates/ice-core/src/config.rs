//! Scene configuration and load-time validation.
//!
//! Every field has a default, so a JSON document only needs the keys it
//! wants to override. Out-of-range values are rejected here rather than
//! producing a drop that falls upward or a camera that flips over the pole.

use crate::constants::*;
use crate::materials::CubeStyle;
use crate::orbit::OrbitConfig;
use crate::oscillator::RotationOscillator;
use crate::water_drop::DropConfig;
use glam::Vec3;
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid scene config json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} must be finite")]
    NotFinite { field: &'static str },
    #[error("{field} must be positive (got {value})")]
    NotPositive { field: &'static str, value: f32 },
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f32 },
    #[error("minScale must be in (0, 1] (got {0})")]
    MinScaleOutOfRange(f32),
    #[error("drop {index} spawns at y={spawn_y}, not above floorThreshold {floor}")]
    SpawnBelowFloor {
        index: usize,
        spawn_y: f32,
        floor: f32,
    },
    #[error("orbit distance range is empty ({min}..{max})")]
    EmptyZoomRange { min: f32, max: f32 },
    #[error("maxPolarAngle must be in (0, pi] (got {0})")]
    PolarOutOfRange(f32),
    #[error("{count} drops requested, at most {max} are supported")]
    TooManyDrops { count: usize, max: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropSpawn {
    pub position: [f32; 3],
    #[serde(default)]
    pub delay: f32,
}

impl DropSpawn {
    #[inline]
    pub fn spawn(&self) -> Vec3 {
        Vec3::from(self.position)
    }
}

/// Seeded layout used instead of the explicit `drops` list when present.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RandomDrops {
    pub count: usize,
    #[serde(default)]
    pub seed: u64,
}

impl RandomDrops {
    pub fn generate(&self) -> Vec<DropSpawn> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        (0..self.count)
            .map(|i| {
                let mut position = [0.0f32; 3];
                for (axis, p) in position.iter_mut().enumerate() {
                    *p = rng.gen_range(RANDOM_DROP_MIN[axis]..=RANDOM_DROP_MAX[axis]);
                }
                DropSpawn {
                    position,
                    delay: i as f32 * RANDOM_DROP_DELAY_STEP,
                }
            })
            .collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CameraConfig {
    pub position: [f32; 3],
    pub fov_degrees: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: CAMERA_POSITION,
            fov_degrees: CAMERA_FOV_DEGREES,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SceneConfig {
    pub drop: DropConfig,
    pub oscillator: RotationOscillator,
    pub drops: Vec<DropSpawn>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub random_drops: Option<RandomDrops>,
    pub cube_style: CubeStyle,
    pub camera: CameraConfig,
    pub orbit: OrbitConfig,
    pub title: String,
    pub subtitle: String,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            drop: DropConfig::default(),
            oscillator: RotationOscillator::default(),
            drops: DEFAULT_DROPS
                .iter()
                .map(|&(position, delay)| DropSpawn { position, delay })
                .collect(),
            random_drops: None,
            cube_style: CubeStyle::default(),
            camera: CameraConfig::default(),
            orbit: OrbitConfig::default(),
            title: DEFAULT_TITLE.to_string(),
            subtitle: DEFAULT_SUBTITLE.to_string(),
        }
    }
}

impl SceneConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SceneConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The drop layout in effect: the random layout if configured, otherwise
    /// the explicit list.
    pub fn drop_spawns(&self) -> Vec<DropSpawn> {
        match &self.random_drops {
            Some(random) => random.generate(),
            None => self.drops.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let d = &self.drop;
        finite("drop.floorThreshold", d.floor_threshold)?;
        finite("drop.wobbleFreq", d.wobble_freq)?;
        positive("drop.fallSpeed", d.fall_speed)?;
        non_negative("drop.wobbleAmplitude", d.wobble_amplitude)?;
        non_negative("drop.shrinkRate", d.shrink_rate)?;
        finite("drop.minScale", d.min_scale)?;
        if d.min_scale <= 0.0 || d.min_scale > 1.0 {
            return Err(ConfigError::MinScaleOutOfRange(d.min_scale));
        }

        let count = match &self.random_drops {
            Some(random) => random.count,
            None => self.drops.len(),
        };
        if count > MAX_DROPS {
            return Err(ConfigError::TooManyDrops {
                count,
                max: MAX_DROPS,
            });
        }
        for (index, spawn) in self.drop_spawns().iter().enumerate() {
            for p in spawn.position {
                finite("drops.position", p)?;
            }
            non_negative("drops.delay", spawn.delay)?;
            if spawn.position[1] <= d.floor_threshold {
                return Err(ConfigError::SpawnBelowFloor {
                    index,
                    spawn_y: spawn.position[1],
                    floor: d.floor_threshold,
                });
            }
        }

        let o = &self.oscillator;
        non_negative("oscillator.amplitude", o.amplitude)?;
        finite("oscillator.frequency", o.frequency)?;
        non_negative("oscillator.rate", o.rate)?;

        for p in self.camera.position {
            finite("camera.position", p)?;
        }
        positive("camera.fovDegrees", self.camera.fov_degrees)?;

        let orbit = &self.orbit;
        non_negative("orbit.autoRotateSpeed", orbit.auto_rotate_speed)?;
        positive("orbit.rotateSpeed", orbit.rotate_speed)?;
        positive("orbit.zoomSpeed", orbit.zoom_speed)?;
        positive("orbit.minDistance", orbit.min_distance)?;
        finite("orbit.maxDistance", orbit.max_distance)?;
        if orbit.max_distance < orbit.min_distance {
            return Err(ConfigError::EmptyZoomRange {
                min: orbit.min_distance,
                max: orbit.max_distance,
            });
        }
        finite("orbit.maxPolarAngle", orbit.max_polar_angle)?;
        if orbit.max_polar_angle <= 0.0 || orbit.max_polar_angle > PI {
            return Err(ConfigError::PolarOutOfRange(orbit.max_polar_angle));
        }
        Ok(())
    }
}

fn finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotFinite { field })
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}
