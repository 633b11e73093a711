//! Timed transitions for the preview and the window shell
//!
//! Both the cross-fade between placeholder and thumbnail and the window's
//! fade-in are driven by a [`Transition`]: a start instant plus an
//! [`AnimationSpec`]. The UI samples it on every tick.

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Easing curve applied to linear progress
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    /// Symmetric ease-in-out (smoothstep)
    Smooth,
    /// Cubic ease-out, fast start and gentle landing
    EaseOut,
}

impl Easing {
    /// Map linear progress `t` in [0, 1] onto the curve
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Smooth => t * t * (3.0 - 2.0 * t),
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
        }
    }
}

/// Duration and curve of one animation
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationSpec {
    pub duration_ms: u64,
    pub easing: Easing,
}

impl AnimationSpec {
    /// Default animation for state changes (0.2s, smooth)
    pub const SMOOTH: AnimationSpec = AnimationSpec {
        duration_ms: 200,
        easing: Easing::Smooth,
    };

    /// Quick animation for small cosmetic changes (0.1s, ease-out)
    pub const FAST: AnimationSpec = AnimationSpec {
        duration_ms: 100,
        easing: Easing::EaseOut,
    };

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

/// A running animation
#[derive(Debug, Clone, Copy)]
pub struct Transition {
    started: Instant,
    spec: AnimationSpec,
}

impl Transition {
    /// Start a transition now
    pub fn start(spec: AnimationSpec) -> Self {
        Self::starting_at(spec, Instant::now())
    }

    pub fn starting_at(spec: AnimationSpec, started: Instant) -> Self {
        Self { started, spec }
    }

    /// Eased progress at `now`, 0.0 at the start and 1.0 once finished
    pub fn progress_at(&self, now: Instant) -> f32 {
        let duration = self.spec.duration();
        if duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        let linear = elapsed.as_secs_f32() / duration.as_secs_f32();
        self.spec.easing.apply(linear)
    }

    pub fn is_finished_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.spec.duration()
    }
}
