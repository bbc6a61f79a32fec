use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::easing::EasingFunction;

/// Name of the preset selected at startup and when leaving an angle zone.
pub const DEFAULT_ANGLE: &str = "default";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Angles", inline)]
#[serde(default)]
/// Named view directions and how the rig moves between them.
pub struct AngleOptions {
    /// Preset name → direction from target to eye (any length).
    #[schemars(skip)]
    pub presets: BTreeMap<String, [f32; 3]>,
    /// Preset applied at startup.
    #[schemars(skip)]
    pub initial: String,
    /// Seconds a preset transition takes.
    #[schemars(title = "Transition Duration", range(min = 0.0, max = 10.0), extend("step" = 0.1))]
    pub transition_duration: f32,
    /// Curve applied to transition progress.
    #[schemars(title = "Transition Easing")]
    pub easing: EasingFunction,
}

impl Default for AngleOptions {
    fn default() -> Self {
        let presets = BTreeMap::from([
            (DEFAULT_ANGLE.to_owned(), [1.135, -1.45, 1.15]),
            ("projects".to_owned(), [0.38, -1.4, 1.63]),
        ]);
        Self {
            presets,
            initial: DEFAULT_ANGLE.to_owned(),
            transition_duration: 2.0,
            easing: EasingFunction::QuadraticInOut,
        }
    }
}
