//! Third-person vehicle follow.

use glam::{Quat, Vec3};

use crate::camera::core::CameraPose;
use crate::options::FollowOptions;
use crate::vehicle::VehiclePose;

/// Places the camera behind a vehicle from its pose.
#[derive(Debug, Clone, PartialEq)]
pub struct FollowController {
    offset: Vec3,
    look_at_offset: Vec3,
    smoothing: bool,
    smooth_factor: f32,
}

impl FollowController {
    /// Create a controller from options.
    #[must_use]
    pub fn new(options: &FollowOptions) -> Self {
        Self {
            offset: Vec3::from_array(options.offset),
            look_at_offset: Vec3::from_array(options.look_at_offset),
            smoothing: options.smoothing,
            smooth_factor: options.smooth_factor.clamp(0.0, 1.0),
        }
    }

    /// Eye and look-at point for a vehicle at `vehicle`.
    ///
    /// Both offsets are expressed in the vehicle frame and rotated by its
    /// heading around +Z.
    #[must_use]
    pub fn solve(&self, vehicle: &VehiclePose) -> CameraPose {
        let rotation = Quat::from_rotation_z(vehicle.heading);
        CameraPose::new(
            vehicle.position + rotation * self.offset,
            vehicle.position + rotation * self.look_at_offset,
        )
    }

    /// Pose to show this tick given the previous one.
    ///
    /// Without smoothing the eye is written directly, giving rigid lag-free
    /// tracking. With smoothing it moves toward the solved eye by `factor`,
    /// which the caller derives from [`smooth_factor`](Self::smooth_factor).
    /// The look-at point always snaps.
    #[must_use]
    pub fn follow(
        &self,
        previous: CameraPose,
        vehicle: &VehiclePose,
        factor: f32,
    ) -> CameraPose {
        let solved = self.solve(vehicle);
        if !self.smoothing {
            return solved;
        }
        CameraPose::new(
            previous.eye.lerp(solved.eye, factor.clamp(0.0, 1.0)),
            solved.target,
        )
    }

    /// Configured per-tick eye easing constant.
    #[must_use]
    pub fn smooth_factor(&self) -> f32 {
        self.smooth_factor
    }

    /// Whether the eye is eased rather than written directly.
    #[must_use]
    pub fn is_smoothing(&self) -> bool {
        self.smoothing
    }

    /// Switch eye easing on or off.
    pub fn set_smoothing(&mut self, smoothing: bool) {
        self.smoothing = smoothing;
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;

    #[test]
    fn offsets_follow_heading() {
        let follow = FollowController::new(&FollowOptions::default());
        let vehicle = VehiclePose::new(Vec3::new(5.0, 5.0, 0.0), FRAC_PI_2);
        let pose = follow.solve(&vehicle);

        // Facing +Y, "behind" is -Y
        assert!(pose.eye.abs_diff_eq(Vec3::new(5.0, -3.0, 3.0), 1e-5));
        assert!(pose.target.abs_diff_eq(Vec3::new(5.0, 5.0, 2.0), 1e-5));
    }

    #[test]
    fn direct_write_ignores_previous_pose() {
        let follow = FollowController::new(&FollowOptions::default());
        let vehicle = VehiclePose::new(Vec3::new(1.0, 0.0, 0.0), 0.0);
        let far = CameraPose::new(Vec3::splat(100.0), Vec3::ZERO);
        assert_eq!(follow.follow(far, &vehicle, 0.5), follow.solve(&vehicle));
    }

    #[test]
    fn smoothing_eases_the_eye_only() {
        let mut follow = FollowController::new(&FollowOptions::default());
        follow.set_smoothing(true);
        let vehicle = VehiclePose::new(Vec3::ZERO, 0.0);
        let previous = CameraPose::new(Vec3::new(0.0, 0.0, 13.0), Vec3::ZERO);

        let factor = follow.smooth_factor();
        let pose = follow.follow(previous, &vehicle, factor);
        let solved = follow.solve(&vehicle);
        assert!(pose.eye.abs_diff_eq(previous.eye.lerp(solved.eye, 0.1), 1e-5));
        assert_eq!(pose.target, solved.target);
    }

    #[test]
    fn zero_factor_holds_the_eye() {
        let mut follow = FollowController::new(&FollowOptions::default());
        follow.set_smoothing(true);
        let vehicle = VehiclePose::new(Vec3::new(4.0, 0.0, 0.0), 0.0);
        let previous = CameraPose::new(Vec3::new(0.0, 0.0, 13.0), Vec3::ZERO);

        let pose = follow.follow(previous, &vehicle, 0.0);
        assert_eq!(pose.eye, previous.eye);
        assert_eq!(pose.target, follow.solve(&vehicle).target);
    }
}
