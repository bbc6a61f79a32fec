//! Named view directions with timed, eased transitions between them.

use glam::Vec3;
use rustc_hash::FxHashMap;

use crate::options::{AngleOptions, DEFAULT_ANGLE};
use crate::util::easing::EasingFunction;

/// Direction used when the table has no usable default preset.
const FALLBACK_DIRECTION: Vec3 = Vec3::new(1.135, -1.45, 1.15);

#[derive(Debug, Clone, Copy)]
struct AngleTransition {
    from: Vec3,
    to: Vec3,
    elapsed: f32,
}

/// Preset table plus the current (possibly mid-transition) angle vector.
#[derive(Debug, Clone)]
pub struct AnglePresets {
    presets: FxHashMap<String, Vec3>,
    value: Vec3,
    transition: Option<AngleTransition>,
    duration: f32,
    easing: EasingFunction,
}

impl AnglePresets {
    /// Build the table from options, starting at the initial preset.
    #[must_use]
    pub fn new(options: &AngleOptions) -> Self {
        let presets: FxHashMap<String, Vec3> = options
            .presets
            .iter()
            .map(|(name, v)| (name.clone(), Vec3::from_array(*v)))
            .collect();
        let value = presets
            .get(&options.initial)
            .or_else(|| presets.get(DEFAULT_ANGLE))
            .copied()
            .unwrap_or(FALLBACK_DIRECTION);

        Self {
            presets,
            value,
            transition: None,
            duration: options.transition_duration.max(0.0),
            easing: options.easing,
        }
    }

    /// Start moving toward preset `name`. Unknown names are ignored.
    ///
    /// A call during a transition re-targets it from the current value.
    pub fn set(&mut self, name: &str) {
        let Some(&to) = self.presets.get(name) else {
            log::trace!("ignoring unknown camera angle '{name}'");
            return;
        };
        self.transition = Some(AngleTransition {
            from: self.value,
            to,
            elapsed: 0.0,
        });
    }

    /// Add or replace a preset.
    pub fn insert(&mut self, name: impl Into<String>, direction: Vec3) {
        let _ = self.presets.insert(name.into(), direction);
    }

    /// Whether `name` is a known preset.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.presets.contains_key(name)
    }

    /// Preset vector by name.
    #[must_use]
    pub fn preset(&self, name: &str) -> Option<Vec3> {
        self.presets.get(name).copied()
    }

    /// Advance the running transition by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        let Some(transition) = self.transition.as_mut() else {
            return;
        };
        transition.elapsed += dt.max(0.0);
        let progress = if self.duration > 0.0 {
            transition.elapsed / self.duration
        } else {
            1.0
        };
        let eased = self.easing.evaluate(progress);
        self.value = transition.from.lerp(transition.to, eased);
        if progress >= 1.0 {
            self.value = transition.to;
            self.transition = None;
        }
    }

    /// Current angle vector (not normalized).
    #[must_use]
    pub fn value(&self) -> Vec3 {
        self.value
    }

    /// Unit direction from target to eye.
    #[must_use]
    pub fn direction(&self) -> Vec3 {
        self.value
            .try_normalize()
            .unwrap_or_else(|| FALLBACK_DIRECTION.normalize())
    }

    /// Whether a transition is running.
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }
}
