// Frontend tuning constants: DOM hooks, frame timing and input mapping.

// Element ids expected in the host page
pub const CANVAS_ID: &str = "app-canvas";
pub const OVERLAY_ID: &str = "scene-overlay";
pub const TITLE_ID: &str = "scene-title";
pub const SUBTITLE_ID: &str = "scene-subtitle";
pub const HINT_ID: &str = "hint-overlay";
pub const CONFIG_SCRIPT_ID: &str = "scene-config";

// Frame timing
pub const MAX_FRAME_DT_SEC: f64 = 0.1; // longer gaps (hidden tab) are clamped

// Wheel input: browsers report ~100 units per notch in pixel mode
pub const WHEEL_PIXELS_PER_STEP: f32 = 100.0;
pub const WHEEL_LINES_PER_STEP: f32 = 3.0;
pub const WHEEL_MAX_STEPS_PER_EVENT: f32 = 4.0;

// Ignore tiny pointer jitter when deciding a drag started
pub const DRAG_THRESHOLD_PX: f32 = 2.0;

// Renderer
pub const MAX_INSTANCES: usize = 256;
pub const SHADOW_CASTER_BOTTOM: f32 = -1.0; // underside of the cube
