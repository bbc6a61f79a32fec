use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::smoothing::{Smoothing, SmoothingMode};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Rig", inline)]
#[serde(default)]
/// Look-at target easing and the smoothing policy shared by all eased values.
pub struct RigOptions {
    /// Fraction of the remaining distance the eased target covers per tick.
    #[schemars(title = "Target Easing", range(min = 0.0, max = 1.0), extend("step" = 0.0001))]
    pub target_easing: f32,
    /// Whether easing is applied per tick or scaled by delta time.
    #[schemars(title = "Smoothing Mode")]
    pub smoothing: SmoothingMode,
    /// Frame rate at which time-scaled easing matches per-tick easing.
    #[schemars(skip)]
    pub reference_fps: f32,
}

impl Default for RigOptions {
    fn default() -> Self {
        Self {
            target_easing: 0.15,
            smoothing: SmoothingMode::PerTick,
            reference_fps: 60.0,
        }
    }
}

impl RigOptions {
    /// Smoothing policy described by these options.
    #[must_use]
    pub fn smoothing(&self) -> Smoothing {
        Smoothing::new(self.smoothing, self.reference_fps)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Zoom", inline)]
#[serde(default)]
/// Scroll/pinch zoom parameters.
pub struct ZoomOptions {
    /// Per-tick easing of the zoom value toward its target.
    #[schemars(title = "Zoom Easing", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub easing: f32,
    /// Camera distance at zoom value 0.
    #[schemars(title = "Min Distance", range(min = 1.0, max = 60.0), extend("step" = 0.5))]
    pub min_distance: f32,
    /// Extra distance at zoom value 1.
    #[schemars(title = "Amplitude", range(min = 0.0, max = 60.0), extend("step" = 0.5))]
    pub amplitude: f32,
    /// Zoom value at startup, in [0, 1].
    #[schemars(skip)]
    pub initial_value: f32,
    /// Zoom value change per wheel delta unit.
    #[schemars(title = "Wheel Sensitivity", range(min = 0.0001, max = 0.01), extend("step" = 0.0001))]
    pub wheel_sensitivity: f32,
}

impl Default for ZoomOptions {
    fn default() -> Self {
        Self {
            easing: 0.1,
            min_distance: 14.0,
            amplitude: 15.0,
            initial_value: 0.5,
            wheel_sensitivity: 0.001,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Pan", inline)]
#[serde(default)]
/// Drag panning parameters.
pub struct PanOptions {
    /// Whether drag panning starts enabled.
    #[schemars(title = "Enabled")]
    pub enabled: bool,
    /// Per-tick easing of the pan offset toward its target.
    #[schemars(title = "Pan Easing", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub easing: f32,
    /// Side length of the square the drag ray is cast against.
    #[schemars(skip)]
    pub plane_size: f32,
}

impl Default for PanOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            easing: 0.1,
            plane_size: 500.0,
        }
    }
}
