/// Phase increment applied once per rendered frame by default.
pub const DEFAULT_PHASE_STEP: f64 = 0.15;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Per-frame stepping configuration for an [`AnimationClock`].
pub struct ClockSettings {
    /// Phase increment per [`AnimationClock::tick`].
    pub step: f64,
}

impl Default for ClockSettings {
    fn default() -> Self {
        Self {
            step: DEFAULT_PHASE_STEP,
        }
    }
}

/// Monotonically advancing animation phase.
///
/// The phase is never wrapped; every consumer is periodic in it.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnimationClock {
    phase: f64,
    settings: ClockSettings,
}

impl AnimationClock {
    /// Clock at phase 0 with the default step.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clock at phase 0 with a custom step.
    pub fn with_settings(settings: ClockSettings) -> Self {
        Self {
            phase: 0.0,
            settings,
        }
    }

    /// Clock starting at `phase` with the default step.
    pub fn with_phase(phase: f64) -> Self {
        Self {
            phase,
            ..Self::default()
        }
    }

    /// Current phase.
    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Stepping configuration.
    pub fn settings(&self) -> ClockSettings {
        self.settings
    }

    /// Advance by an explicit step. Call once per frame, before composing.
    pub fn advance(&mut self, step: f64) {
        self.phase += step;
    }

    /// Advance by the configured per-frame step.
    pub fn tick(&mut self) {
        self.advance(self.settings.step);
    }

    /// Phase reached after `frames` ticks from zero with the given settings.
    pub fn phase_at_frame(settings: ClockSettings, frames: u64) -> f64 {
        let mut clock = Self::with_settings(settings);
        for _ in 0..frames {
            clock.tick();
        }
        clock.phase()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/clock.rs"]
mod tests;
