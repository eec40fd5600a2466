//! Orbit camera controls around a fixed target.
//!
//! Spherical coordinates follow the usual Y-up convention: `polar` is the
//! angle from +Y, `azimuth` rotates about Y starting at +Z.

use crate::constants::*;
use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};
use std::f32::consts::{PI, TAU};

const POLAR_EPSILON: f32 = 1e-4;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrbitConfig {
    pub auto_rotate: bool,
    pub auto_rotate_speed: f32,
    pub enable_zoom: bool,
    pub max_polar_angle: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            auto_rotate: true,
            auto_rotate_speed: ORBIT_AUTO_ROTATE_SPEED,
            enable_zoom: true,
            max_polar_angle: ORBIT_MAX_POLAR_ANGLE,
            min_distance: ORBIT_MIN_DISTANCE,
            max_distance: ORBIT_MAX_DISTANCE,
            rotate_speed: ORBIT_ROTATE_SPEED,
            zoom_speed: ORBIT_ZOOM_SPEED,
        }
    }
}

#[derive(Clone, Debug)]
pub struct OrbitControls {
    pub config: OrbitConfig,
    pub target: Vec3,
    radius: f32,
    polar: f32,
    azimuth: f32,
}

impl OrbitControls {
    /// Start from an eye position looking at `target`.
    pub fn new(eye: Vec3, target: Vec3, config: OrbitConfig) -> Self {
        let offset = eye - target;
        let radius = offset.length().max(POLAR_EPSILON);
        let polar = (offset.y / radius).clamp(-1.0, 1.0).acos();
        let azimuth = offset.x.atan2(offset.z);
        let mut controls = Self {
            config,
            target,
            radius,
            polar,
            azimuth,
        };
        controls.clamp();
        controls
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn polar(&self) -> f32 {
        self.polar
    }

    #[inline]
    pub fn azimuth(&self) -> f32 {
        self.azimuth
    }

    pub fn eye(&self) -> Vec3 {
        let (sin_p, cos_p) = self.polar.sin_cos();
        let (sin_a, cos_a) = self.azimuth.sin_cos();
        self.target + self.radius * Vec3::new(sin_p * sin_a, cos_p, sin_p * cos_a)
    }

    pub fn rotate(&mut self, d_azimuth: f32, d_polar: f32) {
        self.azimuth = (self.azimuth + d_azimuth).rem_euclid(TAU);
        self.polar += d_polar;
        self.clamp();
    }

    /// Rotate from a pointer drag of `dx`, `dy` pixels on a viewport
    /// `viewport_height` pixels tall.
    pub fn drag(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        let h = viewport_height.max(1.0);
        let k = TAU * self.config.rotate_speed / h;
        self.rotate(-dx * k, -dy * k);
    }

    /// Positive `steps` zoom in, negative zoom out.
    pub fn zoom(&mut self, steps: f32) {
        if !self.config.enable_zoom || steps == 0.0 {
            return;
        }
        let scale = 0.95_f32.powf(self.config.zoom_speed * steps.abs());
        if steps > 0.0 {
            self.radius *= scale;
        } else {
            self.radius /= scale;
        }
        self.clamp();
    }

    /// Advance auto-rotation by `dt_sec`.
    pub fn update(&mut self, dt_sec: f32) {
        if self.config.auto_rotate {
            let angle = TAU / 60.0 * self.config.auto_rotate_speed * dt_sec.max(0.0);
            self.rotate(angle, 0.0);
        } else {
            self.clamp();
        }
    }

    fn clamp(&mut self) {
        let max_polar = self.config.max_polar_angle.clamp(POLAR_EPSILON, PI - POLAR_EPSILON);
        self.polar = self.polar.clamp(POLAR_EPSILON, max_polar);
        let min_d = self.config.min_distance.max(POLAR_EPSILON);
        let max_d = self.config.max_distance.max(min_d);
        self.radius = self.radius.clamp(min_d, max_d);
    }
}

/// Right-handed camera with a perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::from(CAMERA_POSITION),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: CAMERA_FOV_DEGREES.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

impl Camera {
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
