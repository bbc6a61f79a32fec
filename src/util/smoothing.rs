//! Exponential smoothing factors for per-tick easing.
//!
//! Every eased quantity in the rig moves toward its target by
//! `value += (target - value) * factor`. The factor is either the raw
//! configured constant (applied once per tick, so convergence speed depends
//! on frame rate) or a delta-time scaled equivalent:
//!
//!   `factor = 1 - exp(-dt / tau)`
//!
//! where `tau` is picked so one frame at the reference rate yields exactly
//! the configured constant.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How easing constants are turned into per-tick factors.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum SmoothingMode {
    /// Constant factor per tick, independent of elapsed time.
    #[default]
    PerTick,
    /// Factor scaled by the tick's delta time.
    TimeScaled,
}

/// Converts easing constants into the factor for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Smoothing {
    /// Selected mode.
    pub mode: SmoothingMode,
    /// Frame rate at which `TimeScaled` matches `PerTick`.
    pub reference_fps: f32,
}

impl Default for Smoothing {
    fn default() -> Self {
        Self {
            mode: SmoothingMode::PerTick,
            reference_fps: 60.0,
        }
    }
}

impl Smoothing {
    /// Create a smoothing policy.
    #[must_use]
    pub fn new(mode: SmoothingMode, reference_fps: f32) -> Self {
        Self {
            mode,
            reference_fps,
        }
    }

    /// Factor in `[0, 1]` for an easing constant `base` over `dt` seconds.
    #[must_use]
    pub fn factor(&self, base: f32, dt: f32) -> f32 {
        let base = base.clamp(0.0, 1.0);
        match self.mode {
            SmoothingMode::PerTick => base,
            SmoothingMode::TimeScaled => {
                if base >= 1.0 {
                    return 1.0;
                }
                if base <= 0.0 || dt <= 0.0 {
                    return 0.0;
                }
                let fps = self.reference_fps;
                if !fps.is_finite() || fps <= 0.0 {
                    return base;
                }
                let tau = -1.0 / (fps * (1.0 - base).ln());
                1.0 - (-dt / tau).exp()
            }
        }
    }
}
