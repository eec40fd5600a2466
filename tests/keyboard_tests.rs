// Host-side tests for keyboard mapping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod input {
    include!("../src/input.rs");
}

use input::{action_for_key, KeyAction};

#[test]
fn mapped_keys_in_both_cases() {
    assert_eq!(action_for_key(" "), Some(KeyAction::TogglePause));
    for key in ["r", "R"] {
        assert_eq!(action_for_key(key), Some(KeyAction::RestartDrops));
    }
    for key in ["a", "A"] {
        assert_eq!(action_for_key(key), Some(KeyAction::ToggleAutoRotate));
    }
    for key in ["h", "H"] {
        assert_eq!(action_for_key(key), Some(KeyAction::ToggleOverlay));
    }
}

#[test]
fn unmapped_keys_are_ignored() {
    for key in ["", "x", "Enter", "Escape", "ArrowUp", "Space", "1"] {
        assert_eq!(action_for_key(key), None, "key {key:?}");
    }
}
