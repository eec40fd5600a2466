use crate::constants::{
    DRAG_THRESHOLD_PX, WHEEL_LINES_PER_STEP, WHEEL_MAX_STEPS_PER_EVENT, WHEEL_PIXELS_PER_STEP,
};
use glam::Vec2;

#[derive(Default, Clone, Copy, Debug)]
pub struct PointerState {
    pub pos: Vec2,
    pub down: bool,
    pub dragging: bool,
    press_pos: Vec2,
}

impl PointerState {
    pub fn press(&mut self, pos: Vec2) {
        self.pos = pos;
        self.press_pos = pos;
        self.down = true;
        self.dragging = false;
    }

    /// Move to `pos`; returns the delta to apply to the orbit while dragging.
    pub fn move_to(&mut self, pos: Vec2) -> Option<Vec2> {
        let delta = pos - self.pos;
        self.pos = pos;
        if !self.down {
            return None;
        }
        if !self.dragging && (pos - self.press_pos).length() >= DRAG_THRESHOLD_PX {
            self.dragging = true;
            // include the movement made before the threshold was crossed
            return Some(pos - self.press_pos);
        }
        self.dragging.then_some(delta)
    }

    pub fn release(&mut self) {
        self.down = false;
        self.dragging = false;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    TogglePause,
    RestartDrops,
    ToggleAutoRotate,
    ToggleOverlay,
}

#[inline]
pub fn action_for_key(key: &str) -> Option<KeyAction> {
    match key {
        " " => Some(KeyAction::TogglePause),
        "r" | "R" => Some(KeyAction::RestartDrops),
        "a" | "A" => Some(KeyAction::ToggleAutoRotate),
        "h" | "H" => Some(KeyAction::ToggleOverlay),
        _ => None,
    }
}

/// Convert a wheel event into zoom steps; positive zooms in.
///
/// `delta_mode` follows `WheelEvent.deltaMode`: 0 pixels, 1 lines, 2 pages.
#[inline]
pub fn wheel_steps(delta_y: f32, delta_mode: u32) -> f32 {
    if !delta_y.is_finite() {
        return 0.0;
    }
    let steps = match delta_mode {
        0 => delta_y / WHEEL_PIXELS_PER_STEP,
        1 => delta_y / WHEEL_LINES_PER_STEP,
        _ => delta_y.signum() * WHEEL_MAX_STEPS_PER_EVENT,
    };
    (-steps).clamp(-WHEEL_MAX_STEPS_PER_EVENT, WHEEL_MAX_STEPS_PER_EVENT)
}
