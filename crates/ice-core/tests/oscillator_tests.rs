// Host-side tests for the cube rotation oscillator.

use ice_core::*;
use std::f32::consts::TAU;

#[test]
fn wobble_is_bounded_by_amplitude() {
    let osc = RotationOscillator::default();
    let mut t = Transform::default();
    for step in 0..10_000 {
        let now = step as f64 * 0.037 - 50.0;
        osc.update(now, &mut t);
        assert!(t.rotation.x.abs() <= osc.amplitude + 1e-6, "t={now}");
    }
}

#[test]
fn wobble_overwrites_rather_than_accumulates() {
    let osc = RotationOscillator::default();
    let mut t = Transform::default();
    osc.update(1.3, &mut t);
    let first = t.rotation.x;
    osc.update(1.3, &mut t);
    assert_eq!(t.rotation.x, first);
    assert!((first - 1.3f32.sin() * 0.1).abs() < 1e-6);
}

#[test]
fn spin_accumulates_rate_per_update() {
    let osc = RotationOscillator::default();
    let mut t = Transform::default();
    for i in 1..=100 {
        osc.update(i as f64 / 60.0, &mut t);
    }
    assert!((t.rotation.y - 1.0).abs() < 1e-4, "y={}", t.rotation.y);
}

#[test]
fn spin_is_monotonic_modulo_wraparound() {
    let osc = RotationOscillator {
        rate: 0.3,
        ..RotationOscillator::default()
    };
    let mut t = Transform::default();
    let mut prev = t.rotation.y;
    let mut wraps = 0;
    for i in 0..1_000 {
        osc.update(i as f64, &mut t);
        assert!(t.rotation.y >= 0.0 && t.rotation.y < TAU);
        if t.rotation.y < prev {
            wraps += 1;
            assert!((t.rotation.y + TAU - prev - 0.3).abs() < 1e-3);
        }
        prev = t.rotation.y;
    }
    assert!(wraps >= 40);
}

#[test]
fn long_runtime_keeps_spin_precise() {
    let osc = RotationOscillator::default();
    let mut t = Transform::default();
    t.rotation.y = TAU - 0.005;
    osc.update(1.0e6, &mut t);
    assert!((t.rotation.y - 0.005).abs() < 1e-4);
    assert!(t.rotation.x.abs() <= osc.amplitude);
}

#[test]
fn oscillator_only_touches_rotation() {
    let osc = RotationOscillator::default();
    let mut t = Transform::at(glam::Vec3::new(1.0, 2.0, 3.0));
    osc.update(4.2, &mut t);
    assert_eq!(t.position, glam::Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(t.scale, glam::Vec3::ONE);
    assert_eq!(t.rotation.z, 0.0);
}
