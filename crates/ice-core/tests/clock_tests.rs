// Host-side tests for the scene clock.

use ice_core::SceneClock;

#[test]
fn advances_by_frame_deltas() {
    let mut clock = SceneClock::new();
    for _ in 0..60 {
        clock.advance(1.0 / 60.0);
    }
    assert!((clock.now() - 1.0).abs() < 1e-9);
}

#[test]
fn pause_freezes_time() {
    let mut clock = SceneClock::new();
    clock.advance(0.1);
    assert!(clock.toggle_pause());
    assert_eq!(clock.advance(0.1), 0.0);
    assert_eq!(clock.now(), 0.1);
    clock.set_paused(false);
    clock.advance(0.1);
    assert!((clock.now() - 0.2).abs() < 1e-12);
}

#[test]
fn large_and_bad_deltas_are_clamped() {
    let mut clock = SceneClock::with_max_step(0.25);
    assert_eq!(clock.advance(10.0), 0.25);
    assert_eq!(clock.advance(-1.0), 0.0);
    assert_eq!(clock.advance(f64::NAN), 0.0);
    assert_eq!(clock.now(), 0.25);
}

#[test]
fn clamp_step_ignores_pause() {
    let mut clock = SceneClock::with_max_step(0.1);
    clock.set_paused(true);
    assert_eq!(clock.clamp_step(0.05), 0.05);
    assert_eq!(clock.clamp_step(5.0), 0.1);
    assert_eq!(clock.clamp_step(f64::INFINITY), 0.0);
    assert_eq!(clock.advance(0.05), 0.0);
    clock.set_paused(false);
    assert_eq!(clock.advance(5.0), clock.clamp_step(5.0));
}
