//! Rays and the invisible ground plane used for drag hit-testing.

use glam::{Vec2, Vec3};

/// Half-line from `origin` along unit `direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Start point.
    pub origin: Vec3,
    /// Unit direction.
    pub direction: Vec3,
}

impl Ray {
    /// Ray from `origin` through `point`; `None` if they coincide.
    #[must_use]
    pub fn between(origin: Vec3, point: Vec3) -> Option<Self> {
        let direction = (point - origin).try_normalize()?;
        origin.is_finite().then_some(Self { origin, direction })
    }

    /// Point at parameter `t` along the ray.
    #[inline]
    #[must_use]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// A plane in 3D space: `normal · p + distance = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Unit normal pointing into the positive half-space.
    pub normal: Vec3,
    /// Signed distance from origin (`n · p + d = 0`).
    pub distance: f32,
}

impl Plane {
    /// Create a plane from coefficients and normalize it
    #[must_use]
    pub fn from_coefficients(a: f32, b: f32, c: f32, d: f32) -> Self {
        let len = (a * a + b * b + c * c).sqrt();
        if len > 0.0 {
            Self {
                normal: Vec3::new(a / len, b / len, c / len),
                distance: d / len,
            }
        } else {
            Self {
                normal: Vec3::ZERO,
                distance: 0.0,
            }
        }
    }

    /// Signed distance from point to plane (positive = in front, negative =
    /// behind)
    #[inline]
    #[must_use]
    pub fn distance_to_point(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.distance
    }

    /// Ray parameter where the ray crosses the plane from the front side.
    ///
    /// Rays parallel to the plane, rays approaching the back face, and
    /// crossings behind the ray origin do not count.
    #[must_use]
    pub fn intersect_front(&self, ray: &Ray) -> Option<f32> {
        let denom = self.normal.dot(ray.direction);
        if denom > -1e-6 {
            return None;
        }
        let t = -self.distance_to_point(ray.origin) / denom;
        (t >= 0.0 && t.is_finite()).then_some(t)
    }
}

/// Bounded square in the rig's z=0 plane, facing +Z.
///
/// Stands in for the large invisible mesh the drag ray is cast against; only
/// its front face is hit, so the camera must look at it from above.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitPlane {
    plane: Plane,
    half_size: f32,
}

impl HitPlane {
    /// Square of side `size` centred on the origin.
    #[must_use]
    pub fn new(size: f32) -> Self {
        Self {
            plane: Plane::from_coefficients(0.0, 0.0, 1.0, 0.0),
            half_size: size.abs() * 0.5,
        }
    }

    /// Side length.
    #[must_use]
    pub fn size(&self) -> f32 {
        self.half_size * 2.0
    }

    /// World-space hit point of `ray`, if it lands on the square.
    #[must_use]
    pub fn cast(&self, ray: &Ray) -> Option<Vec3> {
        let t = self.plane.intersect_front(ray)?;
        let point = ray.at(t);
        let inside = point.x.abs() <= self.half_size
            && point.y.abs() <= self.half_size;
        inside.then_some(point)
    }

    /// Planar (x, y) of the hit point.
    #[must_use]
    pub fn cast_xy(&self, ray: &Ray) -> Option<Vec2> {
        self.cast(ray).map(|p| p.truncate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn down_ray(x: f32, y: f32) -> Ray {
        Ray::between(Vec3::new(x, y, 10.0), Vec3::new(x, y, 0.0)).unwrap()
    }

    #[test]
    fn straight_down_hits_below() {
        let plane = HitPlane::new(500.0);
        let hit = plane.cast(&down_ray(3.0, -4.0)).unwrap();
        assert!(hit.abs_diff_eq(Vec3::new(3.0, -4.0, 0.0), 1e-5));
    }

    #[test]
    fn misses_outside_bounds() {
        let plane = HitPlane::new(500.0);
        assert!(plane.cast(&down_ray(251.0, 0.0)).is_none());
        assert!(plane.cast(&down_ray(249.0, -249.0)).is_some());
    }

    #[test]
    fn misses_parallel_and_back_face() {
        let plane = HitPlane::new(500.0);
        let parallel =
            Ray::between(Vec3::new(0.0, 0.0, 1.0), Vec3::new(5.0, 0.0, 1.0))
                .unwrap();
        assert!(plane.cast(&parallel).is_none());

        let from_below =
            Ray::between(Vec3::new(0.0, 0.0, -5.0), Vec3::ZERO).unwrap();
        assert!(plane.cast(&from_below).is_none());

        let pointing_away =
            Ray::between(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, 9.0))
                .unwrap();
        assert!(plane.cast(&pointing_away).is_none());
    }

    #[test]
    fn coincident_points_make_no_ray() {
        assert!(Ray::between(Vec3::ONE, Vec3::ONE).is_none());
    }

    #[test]
    fn plane_normalizes_coefficients() {
        let plane = Plane::from_coefficients(0.0, 0.0, 2.0, 4.0);
        assert_eq!(plane.normal, Vec3::Z);
        assert_eq!(plane.distance, 2.0);
        assert_eq!(plane.distance_to_point(Vec3::new(0.0, 0.0, 1.0)), 3.0);
    }
}
