pub mod clock;
pub mod config;
pub mod constants;
pub mod geometry;
pub mod materials;
pub mod orbit;
pub mod oscillator;
pub mod scene;
pub mod transform;
pub mod water_drop;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use clock::*;
pub use config::*;
pub use constants::*;
pub use geometry::*;
pub use materials::*;
pub use orbit::*;
pub use oscillator::*;
pub use scene::*;
pub use transform::*;
pub use water_drop::*;
