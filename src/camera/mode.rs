//! Camera modes and the rule for toggling between them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which writer owns the base camera pose.
///
/// Exactly one mode is active at a time; the rig's `set_mode` is the only
/// place that changes it and runs the entry/exit side effects.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum CameraMode {
    /// Angle, zoom and pan blended by the rig.
    #[default]
    RigControlled,
    /// A user-driven orbit controller.
    ManualOrbit,
    /// Rigid third-person tracking of the vehicle.
    FollowingVehicle,
}

impl CameraMode {
    /// Mode reached by toggling `mode` from `self`: toggling the active mode
    /// returns to the rig, toggling another one switches to it.
    #[must_use]
    pub fn toggled(self, mode: CameraMode) -> CameraMode {
        if self == mode {
            CameraMode::RigControlled
        } else {
            mode
        }
    }
}

impl fmt::Display for CameraMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::RigControlled => "rig",
            Self::ManualOrbit => "orbit",
            Self::FollowingVehicle => "follow",
        };
        f.write_str(name)
    }
}
