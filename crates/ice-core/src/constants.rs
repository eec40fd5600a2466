// Shared scene tuning constants used by the core and the web frontend.

// Ice cube
pub const CUBE_SIZE: f32 = 2.0;
pub const CUBE_GLOW_SIZE: f32 = 1.8; // inner glow box, child of the cube

// Cube rotation oscillator
pub const CUBE_WOBBLE_AMPLITUDE: f32 = 0.1; // radians of X wobble
pub const CUBE_WOBBLE_FREQUENCY: f32 = 1.0; // multiplier on elapsed seconds
pub const CUBE_SPIN_PER_TICK: f32 = 0.01; // radians added to Y every frame

// Water drops
pub const DROP_RADIUS: f32 = 0.05;
pub const DROP_WIDTH_SEGMENTS: u32 = 8;
pub const DROP_HEIGHT_SEGMENTS: u32 = 6;

pub const DROP_FALL_SPEED: f32 = 3.0; // units per second
pub const DROP_FLOOR_THRESHOLD: f32 = -5.0; // reset once the drop would pass this
pub const DROP_WOBBLE_FREQUENCY: f32 = 10.0;
pub const DROP_WOBBLE_AMPLITUDE: f32 = 0.05;
pub const DROP_SHRINK_RATE: f32 = 0.3; // scale lost per second of fall
pub const DROP_MIN_SCALE: f32 = 0.1;

// Default drop layout: spawn position and delay (seconds)
pub const DEFAULT_DROPS: [([f32; 3], f32); 5] = [
    ([-0.8, 1.5, 0.5], 0.0),
    ([0.3, 1.7, -0.4], 0.5),
    ([-0.2, 1.6, 0.8], 1.0),
    ([0.7, 1.8, 0.2], 1.5),
    ([-0.5, 1.4, -0.7], 2.0),
];

// Random drop layout bounds
pub const RANDOM_DROP_MIN: [f32; 3] = [-0.8, 1.4, -0.8];
pub const RANDOM_DROP_MAX: [f32; 3] = [0.8, 1.8, 0.8];
pub const RANDOM_DROP_DELAY_STEP: f32 = 0.5;
pub const MAX_DROPS: usize = 250; // per layout; the render list must fit the instance buffer

// Camera
pub const CAMERA_POSITION: [f32; 3] = [0.0, 0.0, 6.0];
pub const CAMERA_FOV_DEGREES: f32 = 50.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Orbit controls
pub const ORBIT_AUTO_ROTATE_SPEED: f32 = 0.5; // one turn per 60s / speed
pub const ORBIT_MAX_POLAR_ANGLE: f32 = std::f32::consts::PI / 2.2;
pub const ORBIT_MIN_DISTANCE: f32 = 2.5;
pub const ORBIT_MAX_DISTANCE: f32 = 20.0;
pub const ORBIT_ROTATE_SPEED: f32 = 1.0;
pub const ORBIT_ZOOM_SPEED: f32 = 1.0;

// Contact shadow under the cube
pub const SHADOW_PLANE_Y: f32 = -2.0;
pub const SHADOW_OPACITY: f32 = 0.4;
pub const SHADOW_SCALE: f32 = 10.0;
pub const SHADOW_BLUR: f32 = 2.5;
pub const SHADOW_FAR: f32 = 2.0;

// Overlay copy
pub const DEFAULT_TITLE: &str = "3D Ice Cube";
pub const DEFAULT_SUBTITLE: &str = "Watch the water drops fall";
