use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Shake", inline)]
#[serde(default)]
/// Camera shake fired by events such as a rocket launch.
pub struct ShakeOptions {
    /// Width of the random step added per jolt.
    #[schemars(title = "Strength", range(min = 0.0, max = 2.0), extend("step" = 0.01))]
    pub strength: f32,
    /// Number of ticks that add a random step.
    #[schemars(title = "Jolts", range(min = 0, max = 120))]
    pub jolts: u32,
    /// Seconds taken to ease back to rest after the last jolt.
    #[schemars(title = "Settle Duration", range(min = 0.0, max = 5.0), extend("step" = 0.1))]
    pub settle_duration: f32,
}

impl Default for ShakeOptions {
    fn default() -> Self {
        Self {
            strength: 0.15,
            jolts: 20,
            settle_duration: 0.5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
/// Rectangle on the ground that switches the camera angle while the vehicle
/// is inside it.
pub struct ZoneOptions {
    /// Centre (x, y) in world units.
    pub center: [f32; 2],
    /// Half width and half depth.
    pub half_extents: [f32; 2],
    /// Angle preset selected on entry.
    pub angle: String,
}

impl Default for ZoneOptions {
    fn default() -> Self {
        Self {
            center: [0.0, 0.0],
            half_extents: [10.0, 10.0],
            angle: "projects".to_owned(),
        }
    }
}
