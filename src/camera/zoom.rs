//! Scroll-wheel and pinch zoom mapped to a bounded camera distance.

use crate::error::RigError;
use crate::options::ZoomOptions;

/// Pinch gesture baseline recorded when the second finger lands.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PinchStart {
    distance: f32,
    value: f32,
}

/// Smoothed zoom value in [0, 1] and the camera distance derived from it.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoomController {
    value: f32,
    target_value: f32,
    min_distance: f32,
    amplitude: f32,
    distance: f32,
    easing: f32,
    wheel_sensitivity: f32,
    pinch: Option<PinchStart>,
}

impl ZoomController {
    /// Create a controller resting at the configured initial value.
    #[must_use]
    pub fn new(options: &ZoomOptions) -> Self {
        let value = options.initial_value.clamp(0.0, 1.0);
        Self {
            value,
            target_value: value,
            min_distance: options.min_distance,
            amplitude: options.amplitude,
            distance: options.min_distance + options.amplitude * value,
            easing: options.easing,
            wheel_sensitivity: options.wheel_sensitivity,
            pinch: None,
        }
    }

    /// Apply a wheel delta (positive = zoom out).
    pub fn wheel(&mut self, delta_y: f32) -> Result<(), RigError> {
        if !delta_y.is_finite() {
            return Err(RigError::NonFinite("zoom wheel delta"));
        }
        let value = self.target_value + delta_y * self.wheel_sensitivity;
        self.target_value = value.clamp(0.0, 1.0);
        Ok(())
    }

    /// Record the baseline of a two-finger pinch.
    ///
    /// A zero spread cannot anchor a ratio, so such gestures are ignored
    /// until the next start.
    pub fn begin_pinch(&mut self, spread: f32) {
        self.pinch = (spread.is_finite() && spread > f32::EPSILON).then_some(
            PinchStart {
                distance: spread,
                value: self.target_value,
            },
        );
    }

    /// Update the target from the current finger spread.
    pub fn pinch(&mut self, spread: f32) -> Result<(), RigError> {
        let Some(start) = self.pinch else {
            return Ok(());
        };
        if !spread.is_finite() {
            return Err(RigError::NonFinite("pinch spread"));
        }
        let ratio = spread / start.distance;
        self.target_value = (start.value - (ratio - 1.0)).clamp(0.0, 1.0);
        Ok(())
    }

    /// Forget the pinch baseline.
    pub fn end_pinch(&mut self) {
        self.pinch = None;
    }

    /// Ease the value toward the target and recompute the distance.
    pub fn tick(&mut self, factor: f32) {
        self.value += (self.target_value - self.value) * factor;
        self.distance = self.min_distance + self.amplitude * self.value;
    }

    /// Set the desired zoom value directly (clamped).
    pub fn set_target(&mut self, value: f32) {
        if value.is_finite() {
            self.target_value = value.clamp(0.0, 1.0);
        }
    }

    /// Current (eased) zoom value.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Desired zoom value.
    #[must_use]
    pub fn target_value(&self) -> f32 {
        self.target_value
    }

    /// Camera distance from the look-at target.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Per-tick easing constant.
    #[must_use]
    pub fn easing(&self) -> f32 {
        self.easing
    }

    /// Closest and farthest reachable distances.
    #[must_use]
    pub fn distance_range(&self) -> (f32, f32) {
        (self.min_distance, self.min_distance + self.amplitude)
    }
}
