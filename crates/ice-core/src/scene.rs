//! The scene driver: owns the cube and the drops and advances them once per
//! frame with an explicit timestamp.

use crate::config::{ConfigError, SceneConfig};
use crate::materials::{
    BasicMaterial, ContactShadow, CubeStyle, PhysicalMaterial, CONTACT_SHADOW, ICE_GLOW, WATER,
};
use crate::oscillator::RotationOscillator;
use crate::transform::Transform;
use crate::water_drop::{DropConfig, DropInstance, DropPhase};
use glam::{Mat4, Vec3};

#[derive(Clone, Debug)]
pub struct WaterDrop {
    pub instance: DropInstance,
    pub transform: Transform,
    pub phase: DropPhase,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    pub falling: usize,
    pub resets: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MeshKind {
    Cube,
    Glow,
    Drop,
    ShadowPlane,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MaterialKind {
    Physical(PhysicalMaterial),
    Basic(BasicMaterial),
    Shadow(ContactShadow),
}

#[derive(Clone, Copy, Debug)]
pub struct RenderItem {
    pub mesh: MeshKind,
    pub material: MaterialKind,
    pub model: Mat4,
    /// Distance from the eye, used for back-to-front ordering.
    pub depth: f32,
}

pub struct Scene {
    cube: Transform,
    cube_style: CubeStyle,
    oscillator: RotationOscillator,
    drop_config: DropConfig,
    drops: Vec<WaterDrop>,
}

impl Scene {
    /// Validate `config` and build the scene with every drop armed at `now`.
    pub fn new(config: &SceneConfig, now: f64) -> Result<Self, ConfigError> {
        config.validate()?;
        let drops = config
            .drop_spawns()
            .iter()
            .map(|s| {
                let instance = DropInstance::new(s.spawn(), s.delay, now);
                WaterDrop {
                    transform: Transform::at(instance.spawn()),
                    instance,
                    phase: DropPhase::Waiting,
                }
            })
            .collect::<Vec<_>>();
        let longest_cycle = drops
            .iter()
            .map(|d| d.instance.delay() + config.drop.fall_duration(d.instance.spawn().y))
            .fold(0.0f32, f32::max);
        log::debug!(
            "[scene] built with {} drops, longest cycle {:.2}s",
            drops.len(),
            longest_cycle
        );
        Ok(Self {
            cube: Transform::default(),
            cube_style: config.cube_style,
            oscillator: config.oscillator,
            drop_config: config.drop,
            drops,
        })
    }

    #[inline]
    pub fn cube(&self) -> &Transform {
        &self.cube
    }

    #[inline]
    pub fn cube_style(&self) -> CubeStyle {
        self.cube_style
    }

    #[inline]
    pub fn drops(&self) -> &[WaterDrop] {
        &self.drops
    }

    pub fn tick(&mut self, now: f64) -> TickReport {
        self.oscillator.update(now, &mut self.cube);
        let mut report = TickReport::default();
        for (i, drop) in self.drops.iter_mut().enumerate() {
            drop.phase = drop
                .instance
                .update(now, &self.drop_config, &mut drop.transform);
            match drop.phase {
                DropPhase::Falling => report.falling += 1,
                DropPhase::Reset => {
                    report.resets += 1;
                    log::debug!("[drop] {} reset at t={:.2}", i, now);
                }
                DropPhase::Waiting => {}
            }
        }
        report
    }

    /// Re-arm every drop at `now`; each waits out its delay again.
    pub fn restart(&mut self, now: f64) {
        for drop in &mut self.drops {
            drop.instance.restart(now);
            drop.instance.hold(&mut drop.transform);
            drop.phase = DropPhase::Waiting;
        }
    }

    /// Draw items ordered for alpha blending: the ground shadow first, then
    /// everything else from far to near.
    pub fn render_list(&self, eye: Vec3) -> Vec<RenderItem> {
        let mut items = Vec::with_capacity(self.drops.len() + 3);
        let cube_model = self.cube.model_matrix();
        let cube_depth = eye.distance(self.cube.position);

        items.push(RenderItem {
            mesh: MeshKind::Cube,
            material: MaterialKind::Physical(self.cube_style.material()),
            model: cube_model,
            depth: cube_depth,
        });
        if self.cube_style.has_glow() {
            // Inside the cube, so it must land before it in the sort.
            items.push(RenderItem {
                mesh: MeshKind::Glow,
                material: MaterialKind::Basic(ICE_GLOW),
                model: cube_model,
                depth: cube_depth + 1e-3,
            });
        }
        for drop in &self.drops {
            items.push(RenderItem {
                mesh: MeshKind::Drop,
                material: MaterialKind::Physical(WATER),
                model: drop.transform.model_matrix(),
                depth: eye.distance(drop.transform.position),
            });
        }
        items.sort_by(|a, b| b.depth.total_cmp(&a.depth));

        let shadow = CONTACT_SHADOW;
        let shadow_pos = Vec3::new(0.0, shadow.y, 0.0);
        items.insert(
            0,
            RenderItem {
                mesh: MeshKind::ShadowPlane,
                material: MaterialKind::Shadow(shadow),
                model: Mat4::from_translation(shadow_pos) * Mat4::from_scale(Vec3::splat(shadow.scale)),
                depth: eye.distance(shadow_pos),
            },
        );
        items
    }
}
