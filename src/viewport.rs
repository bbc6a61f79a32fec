//! Viewport dimensions and screen → normalized device coordinate mapping.

use glam::Vec2;

/// Current drawable size in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl Viewport {
    /// Create a viewport of the given size.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Width / height, or 1.0 while the viewport is degenerate.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        if self.is_degenerate() {
            1.0
        } else {
            self.width / self.height
        }
    }

    /// Whether either dimension is zero, negative, or non-finite.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0)
    }

    /// Map a screen position (origin top-left, y down) to NDC
    /// (origin centre, y up, both axes in [-1, 1]).
    #[must_use]
    pub fn to_ndc(&self, screen: Vec2) -> Option<Vec2> {
        if self.is_degenerate() || !screen.is_finite() {
            return None;
        }
        Some(Vec2::new(
            (screen.x / self.width) * 2.0 - 1.0,
            -(screen.y / self.height) * 2.0 + 1.0,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ndc_corners() {
        let vp = Viewport::new(800.0, 600.0);
        assert_eq!(vp.to_ndc(Vec2::new(0.0, 0.0)), Some(Vec2::new(-1.0, 1.0)));
        assert_eq!(
            vp.to_ndc(Vec2::new(800.0, 600.0)),
            Some(Vec2::new(1.0, -1.0))
        );
        assert_eq!(vp.to_ndc(Vec2::new(400.0, 300.0)), Some(Vec2::ZERO));
    }

    #[test]
    fn degenerate_viewport() {
        let vp = Viewport::new(0.0, 600.0);
        assert!(vp.is_degenerate());
        assert_eq!(vp.aspect(), 1.0);
        assert_eq!(vp.to_ndc(Vec2::new(1.0, 1.0)), None);
    }
}
