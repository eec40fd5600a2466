/// Scene time in seconds, advanced by explicit frame deltas.
///
/// The simulators never read a clock themselves; the frontend measures
/// wall-clock deltas and feeds them here. Pausing freezes scene time so the
/// drops carry on from the same point when resumed.
#[derive(Clone, Debug)]
pub struct SceneClock {
    now: f64,
    paused: bool,
    max_step: f64,
}

impl SceneClock {
    pub const DEFAULT_MAX_STEP_SEC: f64 = 0.25;

    pub fn new() -> Self {
        Self::with_max_step(Self::DEFAULT_MAX_STEP_SEC)
    }

    /// `max_step` caps a single advance, e.g. after the tab was hidden.
    pub fn with_max_step(max_step: f64) -> Self {
        Self {
            now: 0.0,
            paused: false,
            max_step: max_step.max(0.0),
        }
    }

    #[inline]
    pub fn now(&self) -> f64 {
        self.now
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    /// A frame delta limited to `[0, max_step]`; non-finite deltas are zero.
    /// Ignores pause, so camera motion can keep using it.
    #[inline]
    pub fn clamp_step(&self, dt_sec: f64) -> f64 {
        if dt_sec.is_finite() {
            dt_sec.clamp(0.0, self.max_step)
        } else {
            0.0
        }
    }

    /// Advance by `dt_sec` and return the step actually applied.
    pub fn advance(&mut self, dt_sec: f64) -> f64 {
        if self.paused {
            return 0.0;
        }
        let step = self.clamp_step(dt_sec);
        self.now += step;
        step
    }
}

impl Default for SceneClock {
    fn default() -> Self {
        Self::new()
    }
}
