// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn no_orbit_delta_without_press() {
    let mut p = PointerState::default();
    assert_eq!(p.move_to(Vec2::new(10.0, 10.0)), None);
    assert_eq!(p.move_to(Vec2::new(50.0, 10.0)), None);
}

#[test]
fn small_jitter_is_not_a_drag() {
    let mut p = PointerState::default();
    p.press(Vec2::new(100.0, 100.0));
    assert_eq!(p.move_to(Vec2::new(101.0, 100.0)), None);
    assert!(!p.dragging);
}

#[test]
fn drag_reports_movement_since_press_then_deltas() {
    let mut p = PointerState::default();
    p.press(Vec2::new(100.0, 100.0));
    assert_eq!(p.move_to(Vec2::new(101.0, 100.0)), None);
    // crossing the threshold reports the full offset from the press point
    assert_eq!(p.move_to(Vec2::new(105.0, 98.0)), Some(Vec2::new(5.0, -2.0)));
    assert!(p.dragging);
    assert_eq!(p.move_to(Vec2::new(110.0, 98.0)), Some(Vec2::new(5.0, 0.0)));
}

#[test]
fn release_ends_drag() {
    let mut p = PointerState::default();
    p.press(Vec2::ZERO);
    p.move_to(Vec2::new(20.0, 0.0));
    p.release();
    assert!(!p.down && !p.dragging);
    assert_eq!(p.move_to(Vec2::new(40.0, 0.0)), None);
}

#[test]
fn wheel_up_zooms_in() {
    assert!(wheel_steps(-100.0, 0) > 0.0);
    assert!(wheel_steps(100.0, 0) < 0.0);
    assert!((wheel_steps(-100.0, 0) - 1.0).abs() < 1e-6);
    assert!((wheel_steps(-3.0, 1) - 1.0).abs() < 1e-6);
}

#[test]
fn wheel_steps_are_clamped() {
    assert_eq!(wheel_steps(-10_000.0, 0), constants::WHEEL_MAX_STEPS_PER_EVENT);
    assert_eq!(wheel_steps(1.0, 2), -constants::WHEEL_MAX_STEPS_PER_EVENT);
    assert_eq!(wheel_steps(f32::NAN, 0), 0.0);
    assert_eq!(wheel_steps(0.0, 0), 0.0);
}
