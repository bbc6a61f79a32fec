//! Manual orbit control.
//!
//! While the rig is in [`CameraMode::ManualOrbit`](super::mode::CameraMode),
//! an [`OrbitControl`] implementation is the only writer of the base pose.
//! [`FreeOrbit`] is the built-in one: spherical coordinates around +Z with a
//! clamped polar angle.

use std::f32::consts::PI;

use glam::{Vec2, Vec3};

use crate::camera::core::CameraPose;
use crate::error::RigError;
use crate::options::OrbitOptions;

/// Keeps the eye off the poles so the +Z up vector never degenerates.
const POLAR_MARGIN: f32 = 0.01;
/// Dolly scale per wheel step before `zoom_speed` is applied.
const DOLLY_SCALE: f32 = 0.95;

/// One user gesture aimed at the orbit controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OrbitGesture {
    /// Drag delta in pixels that rotates around the focus point.
    Rotate(Vec2),
    /// Drag delta in pixels that slides the focus point.
    Pan(Vec2),
    /// Wheel delta (positive = zoom out).
    Zoom(f32),
}

/// A controller that owns the camera pose while manual orbit is active.
pub trait OrbitControl {
    /// Take over from `pose` so the first update does not jump.
    fn attach(&mut self, pose: CameraPose);

    /// Queue a gesture; it is applied on the next update.
    fn handle_gesture(&mut self, gesture: OrbitGesture);

    /// Apply queued gestures and return the pose for this tick.
    fn update(&mut self, dt: f32) -> Result<CameraPose, RigError>;
}

/// Free orbit around a focus point with rotate, pan and dolly.
#[derive(Debug, Clone, PartialEq)]
pub struct FreeOrbit {
    focus_point: Vec3,
    distance: f32,
    /// Angle around +Z measured from +X.
    azimuth: f32,
    /// Angle from +Z.
    polar: f32,
    attached: bool,

    pending_rotate: Vec2,
    pending_pan: Vec2,
    pending_zoom: f32,

    rotate_speed: f32,
    pan_speed: f32,
    zoom_speed: f32,
    min_distance: f32,
    max_distance: f32,
}

impl FreeOrbit {
    /// Create a detached controller.
    #[must_use]
    pub fn new(options: &OrbitOptions) -> Self {
        Self {
            focus_point: Vec3::ZERO,
            distance: options.min_distance.max(1.0),
            azimuth: 0.0,
            polar: PI / 4.0,
            attached: false,
            pending_rotate: Vec2::ZERO,
            pending_pan: Vec2::ZERO,
            pending_zoom: 0.0,
            rotate_speed: options.rotate_speed,
            pan_speed: options.pan_speed,
            zoom_speed: options.zoom_speed,
            min_distance: options.min_distance,
            max_distance: options.max_distance,
        }
    }

    /// Point the orbit circles around.
    #[must_use]
    pub fn focus_point(&self) -> Vec3 {
        self.focus_point
    }

    /// Current eye distance from the focus point.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    fn offset(&self) -> Vec3 {
        let (sin_polar, cos_polar) = self.polar.sin_cos();
        let (sin_az, cos_az) = self.azimuth.sin_cos();
        Vec3::new(sin_polar * cos_az, sin_polar * sin_az, cos_polar)
            * self.distance
    }

    fn rotate(&mut self, delta: Vec2) {
        self.azimuth -= delta.x * self.rotate_speed;
        self.polar = (self.polar - delta.y * self.rotate_speed)
            .clamp(POLAR_MARGIN, PI - POLAR_MARGIN);
    }

    fn pan(&mut self, delta: Vec2) {
        // Screen axes projected onto the view: right is horizontal, up is
        // perpendicular to both right and the view direction
        let forward = -self.offset().normalize_or_zero();
        let right = forward.cross(Vec3::Z).normalize_or_zero();
        let up = right.cross(forward);

        let scale = self.pan_speed * self.distance;
        self.focus_point += right * (-delta.x * scale) + up * (delta.y * scale);
    }

    fn zoom(&mut self, delta_y: f32) {
        let steps = delta_y.signum() * self.zoom_speed;
        self.distance = (self.distance * DOLLY_SCALE.powf(-steps))
            .clamp(self.min_distance, self.max_distance);
    }
}

impl OrbitControl for FreeOrbit {
    fn attach(&mut self, pose: CameraPose) {
        let offset = pose.eye - pose.target;
        let length = offset.length();

        self.focus_point = pose.target;
        self.distance = length.clamp(self.min_distance, self.max_distance);
        if length > f32::EPSILON {
            self.azimuth = offset.y.atan2(offset.x);
            self.polar = (offset.z / length)
                .clamp(-1.0, 1.0)
                .acos()
                .clamp(POLAR_MARGIN, PI - POLAR_MARGIN);
        }
        self.pending_rotate = Vec2::ZERO;
        self.pending_pan = Vec2::ZERO;
        self.pending_zoom = 0.0;
        self.attached = true;
    }

    fn handle_gesture(&mut self, gesture: OrbitGesture) {
        match gesture {
            OrbitGesture::Rotate(delta) => self.pending_rotate += delta,
            OrbitGesture::Pan(delta) => self.pending_pan += delta,
            OrbitGesture::Zoom(delta_y) => self.pending_zoom += delta_y,
        }
    }

    fn update(&mut self, _dt: f32) -> Result<CameraPose, RigError> {
        if !self.attached {
            return Err(RigError::Orbit("update before attach".to_owned()));
        }

        let rotate = std::mem::take(&mut self.pending_rotate);
        let pan = std::mem::take(&mut self.pending_pan);
        let zoom = std::mem::take(&mut self.pending_zoom);
        if !(rotate.is_finite() && pan.is_finite() && zoom.is_finite()) {
            return Err(RigError::NonFinite("orbit gesture"));
        }

        if rotate != Vec2::ZERO {
            self.rotate(rotate);
        }
        if pan != Vec2::ZERO {
            self.pan(pan);
        }
        if zoom != 0.0 {
            self.zoom(zoom);
        }

        Ok(CameraPose::new(
            self.focus_point + self.offset(),
            self.focus_point,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attached() -> FreeOrbit {
        let mut orbit = FreeOrbit::new(&OrbitOptions::default());
        orbit.attach(CameraPose::new(Vec3::new(10.0, 0.0, 10.0), Vec3::ZERO));
        orbit
    }

    #[test]
    fn attach_reproduces_pose() {
        let mut orbit = attached();
        let pose = orbit.update(0.016).unwrap();
        assert!(pose.eye.abs_diff_eq(Vec3::new(10.0, 0.0, 10.0), 1e-4));
        assert_eq!(pose.target, Vec3::ZERO);
    }

    #[test]
    fn update_before_attach_fails() {
        let mut orbit = FreeOrbit::new(&OrbitOptions::default());
        assert!(matches!(orbit.update(0.016), Err(RigError::Orbit(_))));
    }

    #[test]
    fn rotate_keeps_distance() {
        let mut orbit = attached();
        let before = orbit.distance();
        orbit.handle_gesture(OrbitGesture::Rotate(Vec2::new(120.0, -40.0)));
        let pose = orbit.update(0.016).unwrap();
        assert!((pose.eye.distance(pose.target) - before).abs() < 1e-3);
        assert!(!pose.eye.abs_diff_eq(Vec3::new(10.0, 0.0, 10.0), 1e-2));
    }

    #[test]
    fn polar_angle_is_clamped() {
        let mut orbit = attached();
        orbit.handle_gesture(OrbitGesture::Rotate(Vec2::new(0.0, 1e5)));
        let pose = orbit.update(0.016).unwrap();
        let direction = (pose.eye - pose.target).normalize();
        assert!(direction.z < 1.0);
        assert!(pose.is_valid());
    }

    #[test]
    fn zoom_out_moves_eye_away_within_limits() {
        let mut orbit = attached();
        let before = orbit.distance();
        orbit.handle_gesture(OrbitGesture::Zoom(100.0));
        let _ = orbit.update(0.016).unwrap();
        assert!(orbit.distance() > before);

        for _ in 0..500 {
            orbit.handle_gesture(OrbitGesture::Zoom(-100.0));
            let _ = orbit.update(0.016).unwrap();
        }
        assert_eq!(orbit.distance(), OrbitOptions::default().min_distance);
    }

    #[test]
    fn pan_moves_focus_sideways() {
        let mut orbit = attached();
        orbit.handle_gesture(OrbitGesture::Pan(Vec2::new(50.0, 0.0)));
        let pose = orbit.update(0.016).unwrap();
        assert_ne!(pose.target, Vec3::ZERO);
        // Horizontal drag slides along the ground only
        assert!(pose.target.z.abs() < 1e-5);
    }

    #[test]
    fn non_finite_gesture_is_rejected() {
        let mut orbit = attached();
        orbit.handle_gesture(OrbitGesture::Zoom(f32::NAN));
        assert!(orbit.update(0.016).is_err());
        // The bad gesture is consumed
        assert!(orbit.update(0.016).is_ok());
    }
}
