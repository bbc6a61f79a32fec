//! Grab-and-drag panning resolved against an invisible ground plane.
//!
//! Pointer events only record intent: `down` casts once to anchor the drag,
//! `move` stores the pointer and marks the pan dirty, and the ray for the
//! new pointer position is cast at most once per tick.

use glam::Vec2;

use crate::camera::core::Camera;
use crate::camera::ray::HitPlane;
use crate::options::PanOptions;
use crate::viewport::Viewport;

/// Cursor affordance the host should display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorHint {
    /// Panning is off.
    #[default]
    Default,
    /// Panning is available.
    Grab,
    /// A drag is in progress.
    Grabbing,
}

/// Drag state and the eased 2D offset it produces.
#[derive(Debug, Clone, PartialEq)]
pub struct PanController {
    enabled: bool,
    active: bool,
    start: Vec2,
    mouse: Vec2,
    value: Vec2,
    target_value: Vec2,
    needs_update: bool,
    easing: f32,
    hit_plane: HitPlane,
}

impl PanController {
    /// Create an idle controller.
    #[must_use]
    pub fn new(options: &PanOptions) -> Self {
        Self {
            enabled: options.enabled,
            active: false,
            start: Vec2::ZERO,
            mouse: Vec2::ZERO,
            value: Vec2::ZERO,
            target_value: Vec2::ZERO,
            needs_update: false,
            easing: options.easing,
            hit_plane: HitPlane::new(options.plane_size),
        }
    }

    /// Allow dragging.
    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Ignore further drags. A drag already in progress keeps its state.
    pub fn disable(&mut self) {
        self.enabled = false;
    }

    /// Whether dragging is allowed.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Cursor the host should show.
    #[must_use]
    pub fn cursor(&self) -> CursorHint {
        if self.active {
            CursorHint::Grabbing
        } else if self.enabled {
            CursorHint::Grab
        } else {
            CursorHint::Default
        }
    }

    /// Begin a drag at screen position `screen`.
    pub fn down(&mut self, screen: Vec2, viewport: &Viewport, camera: &Camera) {
        if !self.enabled {
            return;
        }
        self.active = true;

        let Some(ndc) = viewport.to_ndc(screen) else {
            return;
        };
        self.mouse = ndc;
        if let Some(hit) = self.cast(camera) {
            self.start = hit;
        }
    }

    /// Record a new pointer position; the cast happens on the next tick.
    pub fn move_to(&mut self, screen: Vec2, viewport: &Viewport) {
        if !self.enabled || !self.active {
            return;
        }
        if let Some(ndc) = viewport.to_ndc(screen) {
            self.mouse = ndc;
            self.needs_update = true;
        }
    }

    /// End the drag.
    pub fn up(&mut self) {
        self.active = false;
    }

    /// Zero the desired offset; the value eases back to rest.
    pub fn reset(&mut self) {
        self.target_value = Vec2::ZERO;
    }

    /// Consume a pending pointer move and ease the offset.
    pub fn tick(&mut self, camera: &Camera, factor: f32) {
        if self.active && self.needs_update {
            if let Some(hit) = self.cast(camera) {
                self.target_value = drag_offset(self.start, hit);
            }
            self.needs_update = false;
        }

        self.value += (self.target_value - self.value) * factor;
    }

    /// Current (eased) offset.
    #[must_use]
    pub fn value(&self) -> Vec2 {
        self.value
    }

    /// Desired offset.
    #[must_use]
    pub fn target_value(&self) -> Vec2 {
        self.target_value
    }

    /// Ground point under the pointer when the drag began.
    #[must_use]
    pub fn start(&self) -> Vec2 {
        self.start
    }

    /// Per-tick easing constant.
    #[must_use]
    pub fn easing(&self) -> f32 {
        self.easing
    }

    fn cast(&self, camera: &Camera) -> Option<Vec2> {
        let ray = camera.ray_through(self.mouse)?;
        self.hit_plane.cast_xy(&ray)
    }
}

/// Offset that keeps the grabbed ground point under the pointer.
///
/// Moving the pointer one way moves the world offset the other way.
#[must_use]
pub fn drag_offset(start: Vec2, hit: Vec2) -> Vec2 {
    -(hit - start)
}
