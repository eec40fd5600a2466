// Host-side tests for GPU data packing.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod gpu_data {
    include!("../src/render/gpu_data.rs");
}

use glam::Vec3;
use gpu_data::*;
use ice_core::materials::{CONTACT_SHADOW, ICE, ICE_GLOW, LIGHTING};
use ice_core::{Camera, Scene, SceneConfig};

#[test]
fn structs_match_shader_layout() {
    assert_eq!(std::mem::size_of::<Globals>(), 160);
    assert_eq!(std::mem::size_of::<InstanceRaw>(), 112);
    assert_eq!(std::mem::size_of::<Globals>() % 16, 0);
}

#[test]
fn packs_each_material_kind() {
    let scene = Scene::new(&SceneConfig::default(), 0.0).unwrap();
    let items = scene.render_list(Vec3::new(0.0, 1.0, 6.0));
    for item in &items {
        let raw = pack_instance(item, -1.0);
        assert_eq!(raw.model, item.model.to_cols_array_2d());
        let kind = raw.material[3];
        assert!(kind == KIND_PHYSICAL || kind == KIND_BASIC || kind == KIND_SHADOW);
        assert!(raw.color[3] >= 0.0 && raw.color[3] <= 1.0);
    }
    let cube = items
        .iter()
        .find(|i| i.mesh == ice_core::MeshKind::Cube)
        .unwrap();
    let raw = pack_instance(cube, -1.0);
    assert_eq!(raw.material, [ICE.roughness, ICE.transmission, ICE.ior, KIND_PHYSICAL]);
    assert_eq!(raw.color[3], ICE.opacity);

    let glow = items
        .iter()
        .find(|i| i.mesh == ice_core::MeshKind::Glow)
        .unwrap();
    assert_eq!(pack_instance(glow, -1.0).color[3], ICE_GLOW.opacity);
}

#[test]
fn shadow_fades_with_caster_height() {
    let s = CONTACT_SHADOW;
    assert!((shadow_strength(&s, s.y) - s.opacity).abs() < 1e-6);
    assert!((shadow_strength(&s, -1.0) - s.opacity * 0.5).abs() < 1e-6);
    assert_eq!(shadow_strength(&s, s.y + s.far + 1.0), 0.0);
}

#[test]
fn srgb_conversion_keeps_endpoints() {
    assert_eq!(srgb_to_linear([0.0, 1.0, 0.5])[0], 0.0);
    assert_eq!(srgb_to_linear([0.0, 1.0, 0.5])[1], 1.0);
    assert!(srgb_to_linear([0.0, 1.0, 0.5])[2] < 0.5);
}

#[test]
fn globals_carry_camera_and_lights() {
    let camera = Camera::default();
    let g = Globals::new(&camera, &LIGHTING, 2.5);
    assert_eq!(g.eye_time, [0.0, 0.0, 6.0, 2.5]);
    assert_eq!(g.sun[3], LIGHTING.sun.intensity);
    assert_eq!(g.fill_color[3], LIGHTING.ambient);
    assert_eq!(g.view_proj, camera.view_proj().to_cols_array_2d());
}
