use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Orbit", inline)]
#[serde(default)]
/// Manual orbit control parameters.
pub struct OrbitOptions {
    /// Radians of rotation per pixel of drag.
    #[schemars(title = "Rotate Speed", range(min = 0.001, max = 0.05), extend("step" = 0.001))]
    pub rotate_speed: f32,
    /// Pan distance per pixel of drag, relative to orbit distance.
    #[schemars(title = "Pan Speed", range(min = 0.0001, max = 0.01), extend("step" = 0.0001))]
    pub pan_speed: f32,
    /// Exponent applied to the per-step dolly scale of 0.95.
    #[schemars(title = "Zoom Speed", range(min = 0.1, max = 3.0), extend("step" = 0.1))]
    pub zoom_speed: f32,
    /// Closest allowed orbit distance.
    #[schemars(skip)]
    pub min_distance: f32,
    /// Farthest allowed orbit distance.
    #[schemars(skip)]
    pub max_distance: f32,
}

impl Default for OrbitOptions {
    fn default() -> Self {
        Self {
            rotate_speed: 0.005,
            pan_speed: 0.002,
            zoom_speed: 0.5,
            min_distance: 1.0,
            max_distance: 200.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Follow", inline)]
#[serde(default)]
/// Third-person vehicle follow parameters.
pub struct FollowOptions {
    /// Eye offset in the vehicle's frame (x forward, z up).
    #[schemars(skip)]
    pub offset: [f32; 3],
    /// Look-at offset in the vehicle's frame.
    #[schemars(skip)]
    pub look_at_offset: [f32; 3],
    /// Ease the eye toward the follow position instead of writing it
    /// directly.
    #[schemars(title = "Smooth Follow")]
    pub smoothing: bool,
    /// Per-tick easing used when `smoothing` is on.
    #[schemars(title = "Follow Smoothness", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub smooth_factor: f32,
}

impl Default for FollowOptions {
    fn default() -> Self {
        Self {
            offset: [-8.0, 0.0, 3.0],
            look_at_offset: [0.0, 0.0, 2.0],
            smoothing: false,
            smooth_factor: 0.1,
        }
    }
}
