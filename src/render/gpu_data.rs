use ice_core::materials::{ContactShadow, Lighting, SKY_BOTTOM, SKY_TOP};
use ice_core::{Camera, MaterialKind, RenderItem};

// Shading paths selected in the fragment shader
pub const KIND_PHYSICAL: f32 = 0.0;
pub const KIND_BASIC: f32 = 1.0;
pub const KIND_SHADOW: f32 = 2.0;

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Globals {
    pub view_proj: [[f32; 4]; 4],
    pub eye_time: [f32; 4],
    pub sun: [f32; 4],
    pub fill: [f32; 4],
    pub fill_color: [f32; 4],
    pub sky_top: [f32; 4],
    pub sky_bottom: [f32; 4],
}

impl Globals {
    pub fn new(camera: &Camera, lighting: &Lighting, time_sec: f32) -> Self {
        let eye = camera.eye;
        let sun = lighting.sun.position;
        let fill = lighting.fill.position;
        Self {
            view_proj: camera.view_proj().to_cols_array_2d(),
            eye_time: [eye.x, eye.y, eye.z, time_sec],
            sun: [sun.x, sun.y, sun.z, lighting.sun.intensity],
            fill: [fill.x, fill.y, fill.z, lighting.fill.intensity],
            fill_color: with_w(srgb_to_linear(lighting.fill.color), lighting.ambient),
            sky_top: with_w(srgb_to_linear(SKY_TOP), 1.0),
            sky_bottom: with_w(srgb_to_linear(SKY_BOTTOM), 1.0),
        }
    }
}

/// Per-draw data, consumed as instance-rate vertex attributes.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
    /// roughness, transmission, ior, kind
    pub material: [f32; 4],
    /// metalness, reflectivity, thickness, blur
    pub extra: [f32; 4],
}

impl InstanceRaw {
    pub const ATTRIBS: [wgpu::VertexAttribute; 7] = wgpu::vertex_attr_array![
        2 => Float32x4,
        3 => Float32x4,
        4 => Float32x4,
        5 => Float32x4,
        6 => Float32x4,
        7 => Float32x4,
        8 => Float32x4,
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<InstanceRaw>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBS,
        }
    }
}

pub const VERTEX_ATTRIBS: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

pub fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<ice_core::Vertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &VERTEX_ATTRIBS,
    }
}

/// Pack a render item; `caster_bottom` is the lowest point of the object
/// casting the contact shadow.
pub fn pack_instance(item: &RenderItem, caster_bottom: f32) -> InstanceRaw {
    let model = item.model.to_cols_array_2d();
    match item.material {
        MaterialKind::Physical(m) => InstanceRaw {
            model,
            color: with_w(srgb_to_linear(m.color), m.opacity),
            material: [m.roughness, m.transmission, m.ior, KIND_PHYSICAL],
            extra: [m.metalness, m.reflectivity, m.thickness, 0.0],
        },
        MaterialKind::Basic(m) => InstanceRaw {
            model,
            color: with_w(srgb_to_linear(m.color), m.opacity),
            material: [0.0, 0.0, 1.0, KIND_BASIC],
            extra: [0.0; 4],
        },
        MaterialKind::Shadow(s) => InstanceRaw {
            model,
            color: [0.0, 0.0, 0.0, shadow_strength(&s, caster_bottom)],
            material: [0.0, 0.0, 1.0, KIND_SHADOW],
            extra: [0.0, 0.0, 0.0, s.blur],
        },
    }
}

/// Shadow opacity fades out as the caster rises towards `far`.
#[inline]
pub fn shadow_strength(shadow: &ContactShadow, caster_bottom: f32) -> f32 {
    let height = (caster_bottom - shadow.y).max(0.0);
    shadow.opacity * (1.0 - height / shadow.far.max(1e-3)).clamp(0.0, 1.0)
}

#[inline]
pub fn srgb_to_linear(c: [f32; 3]) -> [f32; 3] {
    c.map(|v| v.clamp(0.0, 1.0).powf(2.2))
}

#[inline]
fn with_w(c: [f32; 3], w: f32) -> [f32; 4] {
    [c[0], c[1], c[2], w]
}
