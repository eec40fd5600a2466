// Host-side tests for scene configuration parsing and validation.

use ice_core::*;

#[test]
fn defaults_are_valid_and_match_constants() {
    let cfg = SceneConfig::default();
    cfg.validate().expect("defaults validate");
    assert_eq!(cfg.drops.len(), DEFAULT_DROPS.len());
    assert_eq!(cfg.drop.fall_speed, DROP_FALL_SPEED);
    assert_eq!(cfg.drop.floor_threshold, DROP_FLOOR_THRESHOLD);
    assert_eq!(cfg.oscillator.rate, CUBE_SPIN_PER_TICK);
    assert_eq!(cfg.cube_style, CubeStyle::Refractive);
    assert_eq!(cfg.title, DEFAULT_TITLE);
}

#[test]
fn partial_json_fills_in_defaults() {
    let cfg = SceneConfig::from_json(
        r#"{ "drop": { "fallSpeed": 2.5, "floorThreshold": -3.0 }, "cubeStyle": "simple" }"#,
    )
    .expect("valid config");
    assert_eq!(cfg.drop.fall_speed, 2.5);
    assert_eq!(cfg.drop.floor_threshold, -3.0);
    assert_eq!(cfg.drop.min_scale, DROP_MIN_SCALE);
    assert_eq!(cfg.cube_style, CubeStyle::Simple);
    assert_eq!(cfg.drops.len(), 5);
}

#[test]
fn json_round_trips_defaults() {
    let cfg = SceneConfig::default();
    let json = cfg.to_json().expect("serialize");
    assert_eq!(SceneConfig::from_json(&json).expect("parse"), cfg);
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = SceneConfig::from_json("{ drop: ").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn rejects_non_positive_fall_speed() {
    let err = SceneConfig::from_json(r#"{ "drop": { "fallSpeed": -1.0 } }"#).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::NotPositive {
            field: "drop.fallSpeed",
            ..
        }
    ));
}

#[test]
fn rejects_floor_above_spawn() {
    let err = SceneConfig::from_json(r#"{ "drop": { "floorThreshold": 1.6 } }"#).unwrap_err();
    match err {
        ConfigError::SpawnBelowFloor { index, .. } => assert_eq!(index, 0),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn rejects_bad_min_scale_and_delay() {
    let mut cfg = SceneConfig::default();
    cfg.drop.min_scale = 0.0;
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::MinScaleOutOfRange(_))
    ));

    let mut cfg = SceneConfig::default();
    cfg.drops[2].delay = -0.5;
    assert!(matches!(cfg.validate(), Err(ConfigError::Negative { .. })));

    let mut cfg = SceneConfig::default();
    cfg.drop.wobble_freq = f32::NAN;
    assert!(matches!(cfg.validate(), Err(ConfigError::NotFinite { .. })));
}

#[test]
fn rejects_bad_orbit_settings() {
    let mut cfg = SceneConfig::default();
    cfg.orbit.min_distance = 10.0;
    cfg.orbit.max_distance = 5.0;
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::EmptyZoomRange { .. })
    ));

    let mut cfg = SceneConfig::default();
    cfg.orbit.max_polar_angle = 4.0;
    assert!(matches!(cfg.validate(), Err(ConfigError::PolarOutOfRange(_))));
}

#[test]
fn random_layout_is_seeded_and_bounded() {
    let random = RandomDrops { count: 12, seed: 7 };
    let a = random.generate();
    let b = random.generate();
    assert_eq!(a, b);
    assert_eq!(a.len(), 12);
    for (i, s) in a.iter().enumerate() {
        for axis in 0..3 {
            assert!(s.position[axis] >= RANDOM_DROP_MIN[axis]);
            assert!(s.position[axis] <= RANDOM_DROP_MAX[axis]);
        }
        assert!((s.delay - i as f32 * RANDOM_DROP_DELAY_STEP).abs() < 1e-6);
    }
    let other = RandomDrops { count: 12, seed: 8 }.generate();
    assert_ne!(a, other);
}

#[test]
fn random_layout_replaces_explicit_drops() {
    let cfg = SceneConfig::from_json(r#"{ "randomDrops": { "count": 3, "seed": 1 } }"#)
        .expect("valid config");
    assert_eq!(cfg.drop_spawns().len(), 3);
}

#[test]
fn rejects_oversized_drop_layouts() {
    let err = SceneConfig::from_json(r#"{ "randomDrops": { "count": 3000000, "seed": 1 } }"#)
        .unwrap_err();
    assert!(matches!(
        err,
        ConfigError::TooManyDrops {
            count: 3_000_000,
            max: MAX_DROPS
        }
    ));

    let mut cfg = SceneConfig::default();
    cfg.drops = vec![cfg.drops[0]; MAX_DROPS + 1];
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::TooManyDrops { .. })
    ));

    cfg.drops.truncate(MAX_DROPS);
    cfg.validate().expect("layout at the cap is accepted");
    let at_cap = RandomDrops {
        count: MAX_DROPS,
        seed: 3,
    };
    cfg.random_drops = Some(at_cap);
    cfg.validate().expect("random layout at the cap is accepted");
}
