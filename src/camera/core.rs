use glam::{Mat4, Vec2, Vec3};
use serde::Serialize;

use crate::camera::ray::Ray;

/// Camera position and look-at point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CameraPose {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
}

impl CameraPose {
    /// Create a pose from eye and target.
    #[must_use]
    pub fn new(eye: Vec3, target: Vec3) -> Self {
        Self { eye, target }
    }

    /// Whether both points are finite and distinct.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.eye.is_finite()
            && self.target.is_finite()
            && self.eye.distance_squared(self.target) > f32::EPSILON
    }

    /// The same pose moved by `offset` (orientation unchanged).
    #[must_use]
    pub fn translated(&self, offset: Vec3) -> Self {
        Self {
            eye: self.eye + offset,
            target: self.target + offset,
        }
    }
}

/// Perspective camera defined by eye position, target, and projection
/// parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the view-projection matrix and camera metadata.
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Viewport aspect ratio.
    pub aspect: f32,
    /// Camera forward direction for lighting.
    pub forward: [f32; 3],
    /// Vertical field of view in degrees.
    pub fovy: f32,
}

impl Camera {
    /// Current eye/target pair.
    #[must_use]
    pub fn pose(&self) -> CameraPose {
        CameraPose::new(self.eye, self.target)
    }

    /// Copy of this camera placed at `pose`.
    #[must_use]
    pub fn with_pose(&self, pose: CameraPose) -> Self {
        Self {
            eye: pose.eye,
            target: pose.target,
            ..*self
        }
    }

    /// Build the view matrix.
    #[must_use]
    pub fn build_view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Build the projection matrix.
    #[must_use]
    pub fn build_projection(&self) -> Mat4 {
        // perspective_rh already uses [0,1] depth range (wgpu/Vulkan
        // convention)
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        self.build_projection() * self.build_view()
    }

    /// Ray from the eye through a point in normalized device coordinates.
    ///
    /// Returns `None` when the camera matrices are degenerate (eye on the
    /// target, view direction parallel to `up`).
    #[must_use]
    pub fn ray_through(&self, ndc: Vec2) -> Option<Ray> {
        let inverse = self.build_matrix().inverse();
        if !inverse.is_finite() {
            return None;
        }
        let point = inverse.project_point3(ndc.extend(0.5));
        Ray::between(self.eye, point)
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a new camera uniform with identity view-projection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            aspect: 1.6,
            forward: [0.0, 0.0, -1.0],
            fovy: 40.0,
        }
    }

    /// Update uniform fields from the given camera's current state.
    pub fn update_view_proj(&mut self, camera: &Camera) {
        self.view_proj = camera.build_matrix().to_cols_array_2d();
        self.position = camera.eye.to_array();
        self.aspect = camera.aspect;
        let forward = (camera.target - camera.eye).normalize_or_zero();
        self.forward = forward.to_array();
        self.fovy = camera.fovy;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_camera() -> Camera {
        Camera {
            eye: Vec3::new(0.0, -10.0, 10.0),
            target: Vec3::ZERO,
            up: Vec3::Z,
            aspect: 1.0,
            fovy: 40.0,
            znear: 1.0,
            zfar: 80.0,
        }
    }

    #[test]
    fn centre_ray_points_at_target() {
        let camera = test_camera();
        let ray = camera.ray_through(Vec2::ZERO).unwrap();
        let expected = (camera.target - camera.eye).normalize();
        assert!(ray.direction.abs_diff_eq(expected, 1e-4));
        assert!(ray.origin.abs_diff_eq(camera.eye, 1e-6));
    }

    #[test]
    fn degenerate_camera_has_no_ray() {
        let camera = Camera {
            eye: Vec3::new(0.0, 0.0, 10.0),
            ..test_camera()
        };
        // Looking straight down an up-vector of +Z
        assert!(camera.ray_through(Vec2::ZERO).is_none());
    }

    #[test]
    fn uniform_tracks_camera() {
        let camera = test_camera();
        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&camera);
        assert_eq!(uniform.position, [0.0, -10.0, 10.0]);
        assert_eq!(uniform.fovy, 40.0);
        assert_eq!(bytemuck::bytes_of(&uniform).len(), 96);
    }

    #[test]
    fn translated_pose_keeps_direction() {
        let pose = CameraPose::new(Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO);
        let moved = pose.translated(Vec3::new(1.0, 1.0, 0.0));
        assert_eq!(moved.eye - moved.target, pose.eye - pose.target);
        assert!(moved.is_valid());
        assert!(!CameraPose::new(Vec3::ONE, Vec3::ONE).is_valid());
    }
}
